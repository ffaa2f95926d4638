//! Conversions between bytes and strings.
//!
//! Borrowing conversions avoid an allocation where the input already has the
//! right shape. Nothing here reinterprets memory: a `&str` view of bytes is
//! only handed out after UTF-8 validation, and owned bytes are always a copy.

use std::borrow::Cow;
use std::str::Utf8Error;

/// Borrows `b` as a string slice, failing if it is not valid UTF-8.
pub fn bytes_to_str(b: &[u8]) -> Result<&str, Utf8Error> {
    std::str::from_utf8(b)
}

/// Borrows `b` as text when it is valid UTF-8, otherwise copies it with
/// invalid sequences replaced by U+FFFD.
pub fn bytes_to_string_lossy(b: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(b)
}

/// Copies the bytes of `s` into a new vector.
pub fn string_to_bytes(s: &str) -> Vec<u8> {
    s.as_bytes().to_vec()
}

/// Copies the bytes of `s` into a vector with room for at least `capacity`
/// bytes, so callers can keep appending without reallocating.
pub fn string_to_bytes_with_capacity(s: &str, capacity: usize) -> Vec<u8> {
    let mut b = Vec::with_capacity(capacity.max(s.len()));
    b.extend_from_slice(s.as_bytes());
    b
}
