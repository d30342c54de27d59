//! Bellaso cipher: repeating-key polyalphabetic substitution.
//!
//! A precursor to the Vigenère cipher. The shift applied at position `i` is
//! the character code of `bellaso_key[i mod key_len]`, so the key is cycled
//! as a repeating stream aligned against the text. Neither direction
//! validates alphabet membership of the text; out-of-alphabet input is
//! folded into the `' '..='_'` span by the same wrap-around arithmetic.

use log::debug;

use crate::alphabet::{code_to_char, wrap_down, wrap_up};
use crate::error::CipherError;

/// Encrypts `plain_text` by shifting each character up by the code of the
/// corresponding character of the repeating key stream.
///
/// # Errors
/// Returns [`CipherError::EmptyKey`] if `bellaso_key` is empty.
///
/// # Examples
///
/// ```
/// use shiftcipher::encrypt_bellaso;
///
/// // key chars K,E,Y,K,E are applied to positions 0..=4
/// assert_eq!(encrypt_bellaso("ABCDE", "KEY").unwrap(), "LG\\OJ");
/// ```
pub fn encrypt_bellaso(plain_text: &str, bellaso_key: &str) -> Result<String, CipherError> {
    let mut cipher_text = String::with_capacity(plain_text.len());
    for (ch, key_ch) in plain_text.chars().zip(key_stream(bellaso_key)?) {
        cipher_text.push(code_to_char(wrap_down(ch as i64 + key_ch as i64)));
    }
    Ok(cipher_text)
}

/// Decrypts `cipher_text` by shifting each character down by the code of the
/// corresponding character of the repeating key stream.
///
/// Inverse of [`encrypt_bellaso`] for the same key and in-alphabet
/// plaintext. Ciphertext whose plaintext lay outside the alphabet decrypts
/// to the in-alphabet character congruent to it modulo 64, since encryption
/// already folded it into the alphabet span.
///
/// # Errors
/// Returns [`CipherError::EmptyKey`] if `bellaso_key` is empty.
pub fn decrypt_bellaso(cipher_text: &str, bellaso_key: &str) -> Result<String, CipherError> {
    let mut plain_text = String::with_capacity(cipher_text.len());
    for (ch, key_ch) in cipher_text.chars().zip(key_stream(bellaso_key)?) {
        plain_text.push(code_to_char(wrap_up(ch as i64 - key_ch as i64)));
    }
    Ok(plain_text)
}

/// Expands the key into an endless repeating character stream, equivalent to
/// indexing it by `i mod key_len`.
fn key_stream(bellaso_key: &str) -> Result<impl Iterator<Item = char> + '_, CipherError> {
    if bellaso_key.is_empty() {
        debug!("bellaso operation rejected empty key");
        return Err(CipherError::EmptyKey);
    }
    Ok(bellaso_key.chars().cycle())
}
