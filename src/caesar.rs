//! Caesar cipher: fixed-offset substitution over the 64-symbol alphabet.
//!
//! Every character is shifted by the same integer key, wrapping around at the
//! alphabet boundary. Encryption validates that its input lies entirely
//! within the alphabet; decryption trusts its input, mirroring the
//! asymmetric validation of the Bellaso pair in [`crate::bellaso`].

use log::debug;

use crate::alphabet::{code_to_char, is_in_alphabet, wrap_down, wrap_up, RANGE};
use crate::error::CipherError;

/// Encrypts `plain_text` by shifting each character `key` places up the
/// alphabet, wrapping past `'_'` back to `' '`.
///
/// The key is reduced modulo the alphabet size first, so any `i32` key
/// produces a defined result and `key = 0` (or any multiple of 64) is the
/// identity.
///
/// # Errors
/// Returns [`CipherError::OutOfAlphabet`] if any character of `plain_text`
/// falls outside `' '..='_'`.
///
/// # Examples
///
/// ```
/// use shiftcipher::encrypt_caesar;
///
/// assert_eq!(encrypt_caesar("HELLO WORLD", 3).unwrap(), "KHOOR#ZRUOG");
/// assert_eq!(encrypt_caesar("_", 1).unwrap(), " ");
/// ```
pub fn encrypt_caesar(plain_text: &str, key: i32) -> Result<String, CipherError> {
    if !is_in_alphabet(plain_text) {
        debug!("caesar encryption rejected input outside ' '..='_'");
        return Err(CipherError::OutOfAlphabet);
    }
    let key = i64::from(key).rem_euclid(RANGE);
    let mut cipher_text = String::with_capacity(plain_text.len());
    for ch in plain_text.chars() {
        cipher_text.push(code_to_char(wrap_down(ch as i64 + key)));
    }
    Ok(cipher_text)
}

/// Decrypts `cipher_text` by shifting each character `key` places down the
/// alphabet, wrapping past `' '` back to `'_'`.
///
/// Inverse of [`encrypt_caesar`] for the same key. Performs no bounds
/// validation on its input.
///
/// # Examples
///
/// ```
/// use shiftcipher::decrypt_caesar;
///
/// assert_eq!(decrypt_caesar("KHOOR#ZRUOG", 3), "HELLO WORLD");
/// ```
pub fn decrypt_caesar(cipher_text: &str, key: i32) -> String {
    let key = i64::from(key).rem_euclid(RANGE);
    let mut plain_text = String::with_capacity(cipher_text.len());
    for ch in cipher_text.chars() {
        plain_text.push(code_to_char(wrap_up(ch as i64 - key)));
    }
    plain_text
}
