#![forbid(unsafe_code)]

//! Standard `#RRGGBB` hex color tokens.

use tint_style::Rgb;

/// Length of a full hex token including the leading `#`.
pub const HEX_TOKEN_LEN: usize = 7;

/// Decode a 7-character window of the form `#` + six hex digits.
///
/// Anything else (wrong length, missing `#`, non-hex digit) yields `None`.
#[must_use]
pub fn parse_hex_window(window: &str) -> Option<Rgb> {
    let bytes = window.as_bytes();
    if bytes.len() != HEX_TOKEN_LEN || bytes[0] != b'#' {
        return None;
    }
    Rgb::from_hex_digits(&bytes[1..])
}

/// Whether `s` is exactly a `#RRGGBB` color.
#[must_use]
pub fn is_valid_hex_color(s: &str) -> bool {
    parse_hex_window(s).is_some()
}

/// Hex token starting at byte `i`, if all six digits are present.
#[inline]
#[must_use]
pub fn hex_token_at(bytes: &[u8], i: usize) -> Option<Rgb> {
    if bytes.get(i) != Some(&b'#') {
        return None;
    }
    let digits = bytes.get(i + 1..i + HEX_TOKEN_LEN)?;
    Rgb::from_hex_digits(digits)
}
