//! The 64-symbol cipher alphabet and its wrap-around arithmetic.
//!
//! Both ciphers operate over the closed, contiguous run of printable ASCII
//! codes from `' '` (32) to `'_'` (95). All shift arithmetic is performed
//! modulo the alphabet size by repeated wrap-around: values pushed above the
//! upper bound are folded down, values pushed below the lower bound are
//! folded up.

/// Lowest character in the alphabet (space, code 32).
pub const LOWER_BOUND: char = ' ';

/// Highest character in the alphabet (underscore, code 95).
pub const UPPER_BOUND: char = '_';

/// Number of characters in the alphabet: 64.
pub const RANGE: i64 = (UPPER_BOUND as i64) - (LOWER_BOUND as i64) + 1;

/// Returns `true` iff every character of `text` lies within
/// [`LOWER_BOUND`]`..=`[`UPPER_BOUND`]. The empty string is in bounds.
///
/// # Examples
///
/// ```
/// use shiftcipher::is_in_alphabet;
///
/// assert!(is_in_alphabet("HELLO WORLD_123"));
/// assert!(!is_in_alphabet("hello")); // lowercase is above '_'
/// ```
pub fn is_in_alphabet(text: &str) -> bool {
    text.chars().all(|ch| (LOWER_BOUND..=UPPER_BOUND).contains(&ch))
}

/// Folds `code` downward by [`RANGE`] until it no longer exceeds the
/// upper bound. Used by both encryption directions.
pub(crate) fn wrap_down(mut code: i64) -> i64 {
    while code > UPPER_BOUND as i64 {
        code -= RANGE;
    }
    code
}

/// Folds `code` upward by [`RANGE`] until it no longer falls below the
/// lower bound. Used by both decryption directions.
pub(crate) fn wrap_up(mut code: i64) -> i64 {
    while code < LOWER_BOUND as i64 {
        code += RANGE;
    }
    code
}

/// Converts a wrapped code back to a `char`.
///
/// Wrapped codes derived from alphabet input always land on a valid scalar
/// value; decrypting arbitrary text can in principle produce a code with no
/// scalar value (the surrogate gap), which maps to U+FFFD.
pub(crate) fn code_to_char(code: i64) -> char {
    char::from_u32(code as u32).unwrap_or(char::REPLACEMENT_CHARACTER)
}
