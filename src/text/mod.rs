//! Whitespace normalization for text input
//!
//! This module handles the two trimming operations used before hashing or
//! display: stripping outer whitespace, and stripping all whitespace.
//!
//! Whitespace is Unicode whitespace as classified by `char::is_whitespace`,
//! which covers space, tab, newline, carriage return, form feed, vertical
//! tab, and the Unicode space separators.

/// Remove leading and trailing whitespace
///
/// Interior whitespace is preserved exactly. Accepts any string, including
/// the empty string, and never fails.
pub fn trim(input: &str) -> String {
    input.trim().to_string()
}

/// Remove all whitespace anywhere in the string
///
/// Trims outer whitespace first, then strips every remaining whitespace
/// character. Non-whitespace characters keep their relative order.
pub fn trim_all(input: &str) -> String {
    trim(input).chars().filter(|c| !c.is_whitespace()).collect()
}
