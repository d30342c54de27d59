//! Classical substitution ciphers over a 64-symbol ASCII alphabet.
//!
//! Implements two pedagogical ciphers, both operating on the closed run of
//! printable ASCII codes from `' '` (32) to `'_'` (95):
//!
//! - **Caesar**: every character is shifted by one fixed integer key.
//! - **Bellaso**: a polyalphabetic precursor to Vigenère; the shift at each
//!   position is taken from the corresponding character of a repeating
//!   keyword.
//!
//! All operations are pure, stateless functions: no I/O, no shared state,
//! safe to call from any number of threads. Neither cipher is
//! cryptographically secure; both are trivially breakable and exist for
//! study.
//!
//! # Examples
//!
//! Caesar round-trip:
//!
//! ```
//! use shiftcipher::{decrypt_caesar, encrypt_caesar};
//!
//! let cipher = encrypt_caesar("HELLO WORLD", 3).unwrap();
//! assert_eq!(cipher, "KHOOR#ZRUOG");
//! assert_eq!(decrypt_caesar(&cipher, 3), "HELLO WORLD");
//! ```
//!
//! Bellaso round-trip with a repeating keyword:
//!
//! ```
//! use shiftcipher::{decrypt_bellaso, encrypt_bellaso};
//!
//! let cipher = encrypt_bellaso("ATTACK AT DAWN", "LEMON").unwrap();
//! assert_eq!(decrypt_bellaso(&cipher, "LEMON").unwrap(), "ATTACK AT DAWN");
//! ```
//!
//! Caesar encryption rejects input outside the alphabet:
//!
//! ```
//! use shiftcipher::{encrypt_caesar, CipherError};
//!
//! assert_eq!(encrypt_caesar("lowercase", 3), Err(CipherError::OutOfAlphabet));
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod error;

mod bellaso;
mod caesar;

pub use alphabet::{is_in_alphabet, LOWER_BOUND, RANGE, UPPER_BOUND};
pub use bellaso::{decrypt_bellaso, encrypt_bellaso};
pub use caesar::{decrypt_caesar, encrypt_caesar};
pub use error::CipherError;
