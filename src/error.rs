//! Error types for the shiftcipher library.

use thiserror::Error;

/// Errors produced by the cipher operations.
///
/// Both variants are local input rejections; no operation has any other
/// failure mode, and none retries or recovers.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherError {
    /// Caesar encryption input contains a character outside `' '..='_'`.
    #[error("input contains characters outside the ' '..='_' alphabet")]
    OutOfAlphabet,
    /// Bellaso key is empty; a repeating key stream cannot be built from it.
    #[error("Bellaso key must contain at least one character")]
    EmptyKey,
}
