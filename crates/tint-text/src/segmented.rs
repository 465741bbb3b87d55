#![forbid(unsafe_code)]

//! Segmented hex colors: `&X&R&R&G&G&B&B` → `#RRGGBB`.
//!
//! The marker `X` and the digits are case-insensitive; digits keep their
//! input case in the rewritten token. Scanning is left to right and
//! non-overlapping, and the output contains no further segmented tokens, so
//! normalizing twice is the same as normalizing once.
//!
//! # Example
//! ```
//! use tint_text::segmented::normalize_segmented;
//!
//! assert_eq!(normalize_segmented("&X&8&3&d&a&e&d hi"), "#83daed hi");
//! assert_eq!(normalize_segmented("no markers"), "no markers");
//! ```

use std::borrow::Cow;

use tint_style::hex_nibble;

/// Byte length of a segmented token.
pub const SEGMENTED_TOKEN_LEN: usize = 14;

/// The six digits of a segmented token starting at byte `i`.
fn segmented_digits_at(bytes: &[u8], i: usize) -> Option<[u8; 6]> {
    let window = bytes.get(i..i + SEGMENTED_TOKEN_LEN)?;
    if window[0] != b'&' || !window[1].eq_ignore_ascii_case(&b'x') {
        return None;
    }
    let mut digits = [0u8; 6];
    for (slot, pair) in digits.iter_mut().zip(window[2..].chunks_exact(2)) {
        if pair[0] != b'&' || hex_nibble(pair[1]).is_none() {
            return None;
        }
        *slot = pair[1];
    }
    Some(digits)
}

/// Rewrite every segmented token in `input` into `#RRGGBB` form.
///
/// Returns the input borrowed when nothing matched.
#[must_use]
pub fn normalize_segmented(input: &str) -> Cow<'_, str> {
    let bytes = input.as_bytes();
    let mut out: Option<String> = None;
    let mut copied = 0;
    let mut pos = 0;
    let mut tokens = 0usize;

    while let Some(offset) = memchr::memchr(b'&', &bytes[pos..]) {
        let i = pos + offset;
        match segmented_digits_at(bytes, i) {
            Some(digits) => {
                let buf = out.get_or_insert_with(|| String::with_capacity(input.len()));
                // Token bytes are ASCII, so both cuts fall on char boundaries.
                buf.push_str(&input[copied..i]);
                buf.push('#');
                buf.extend(digits.iter().map(|&d| d as char));
                pos = i + SEGMENTED_TOKEN_LEN;
                copied = pos;
                tokens += 1;
            }
            None => pos = i + 1,
        }
    }

    match out {
        Some(mut buf) => {
            buf.push_str(&input[copied..]);
            tracing::debug!(
                tokens,
                before = input.len(),
                after = buf.len(),
                "normalized segmented hex colors"
            );
            Cow::Owned(buf)
        }
        None => Cow::Borrowed(input),
    }
}

/// Number of segmented tokens the normalizer would rewrite.
#[must_use]
pub fn count_segmented(input: &str) -> usize {
    let bytes = input.as_bytes();
    let mut count = 0;
    let mut pos = 0;
    while let Some(offset) = memchr::memchr(b'&', &bytes[pos..]) {
        let i = pos + offset;
        if segmented_digits_at(bytes, i).is_some() {
            count += 1;
            pos = i + SEGMENTED_TOKEN_LEN;
        } else {
            pos = i + 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_token() {
        assert_eq!(normalize_segmented("&X&8&3&d&a&e&d"), "#83daed");
    }

    #[test]
    fn marker_is_case_insensitive_and_digits_keep_case() {
        assert_eq!(normalize_segmented("&x&A&b&C&d&E&f"), "#AbCdEf");
    }

    #[test]
    fn surrounding_text_is_kept() {
        assert_eq!(
            normalize_segmented("hi &X&f&f&0&0&0&0red &lbold"),
            "hi #ff0000red &lbold"
        );
    }

    #[test]
    fn adjacent_tokens() {
        assert_eq!(
            normalize_segmented("&X&1&1&1&1&1&1&X&2&2&2&2&2&2"),
            "#111111#222222"
        );
        assert_eq!(count_segmented("&X&1&1&1&1&1&1&X&2&2&2&2&2&2"), 2);
    }

    #[test]
    fn borrowed_when_unchanged() {
        assert!(matches!(normalize_segmented("plain &l text"), Cow::Borrowed(_)));
        assert!(matches!(normalize_segmented(""), Cow::Borrowed(_)));
    }

    #[test]
    fn truncated_or_malformed_tokens_are_literal() {
        for s in [
            "&X&8&3&d&a&e",
            "&X&8&3&d&a&e&",
            "&X&8&3&d&a&e&g",
            "&Y&8&3&d&a&e&d",
            "&X8&3&d&a&e&d&",
            "&X&8&3&d&a&e d",
        ] {
            assert_eq!(normalize_segmented(s), s, "{s:?}");
            assert_eq!(count_segmented(s), 0);
        }
    }

    #[test]
    fn leading_ampersand_before_token() {
        assert_eq!(normalize_segmented("&&X&1&2&3&4&5&6"), "&#123456");
    }

    #[test]
    fn multibyte_text_around_token() {
        assert_eq!(
            normalize_segmented("é&X&0&0&0&0&f&f→"),
            "é#0000ff→"
        );
    }

    #[test]
    fn idempotent() {
        let once = normalize_segmented("a&X&1&2&3&4&5&6b&X&a&b&c&d&e&f").into_owned();
        assert_eq!(normalize_segmented(&once), once);
    }
}
