#![forbid(unsafe_code)]

//! Chat color markup parsing.
//!
//! Turns chat input into [`StyledText`]: an ordered list of runs, each with
//! an optional color, a set of decorations and a reset marker.
//!
//! # Syntax
//!
//! ## Hex colors
//! - `#RRGGBB` - sets the color and keeps active decorations
//! - `&X&R&R&G&G&B&B` - segmented form, rewritten to `#RRGGBB` before parsing
//!
//! ## Legacy codes
//! - `&0`–`&9`, `&a`–`&f` - named color, clears decorations
//! - `&k` `&l` `&m` `&n` `&o` - obfuscated, bold, strikethrough, underline, italic
//! - `&r` - reset color and decorations
//!
//! Codes are case-insensitive. Malformed markup is never an error: a `#`
//! without six hex digits after it, or an `&` followed by an unknown
//! character, is kept as literal text.
//!
//! # Example
//! ```
//! use tint_text::markup::parse_markup;
//! use tint_style::{Decoration, Rgb};
//!
//! let text = parse_markup("&lHello &rWorld #83daedcyan");
//! assert_eq!(text.to_plain_text(), "Hello World cyan");
//! assert!(text.runs()[0].decorations.contains(Decoration::Bold));
//! assert_eq!(text.runs()[2].color, Some(Rgb::from_u24(0x83daed)));
//! ```

use tint_style::{Decorations, LegacyKind, Rgb, legacy};

use crate::hex::{HEX_TOKEN_LEN, hex_token_at};
use crate::run::{StyledRun, StyledText};
use crate::segmented::normalize_segmented;

/// Which hex color forms the parser recognizes.
///
/// Legacy `&<code>` tokens are always recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarkupOptions {
    /// Recognize `#RRGGBB`.
    pub standard_hex: bool,
    /// Rewrite `&X&R&R&G&G&B&B` before parsing.
    pub segmented_hex: bool,
}

impl Default for MarkupOptions {
    fn default() -> Self {
        Self {
            standard_hex: true,
            segmented_hex: true,
        }
    }
}

impl MarkupOptions {
    /// Only legacy codes.
    #[must_use]
    pub const fn legacy_only() -> Self {
        Self {
            standard_hex: false,
            segmented_hex: false,
        }
    }

    #[must_use]
    pub const fn with_standard_hex(mut self, enabled: bool) -> Self {
        self.standard_hex = enabled;
        self
    }

    #[must_use]
    pub const fn with_segmented_hex(mut self, enabled: bool) -> Self {
        self.segmented_hex = enabled;
        self
    }
}

/// Parse markup with both hex forms enabled.
#[must_use]
pub fn parse_markup(input: &str) -> StyledText {
    MarkupParser::default().parse(input)
}

/// Style state while scanning one input.
#[derive(Debug, Clone, Default)]
struct ActiveStyle {
    color: Option<Rgb>,
    decorations: Decorations,
    reset: bool,
}

impl ActiveStyle {
    /// Apply a legacy code. Returns `true` if this is a style boundary.
    fn apply_legacy(&mut self, kind: LegacyKind) -> bool {
        match kind {
            LegacyKind::Color(named) => {
                self.decorations.clear();
                self.color = Some(named.rgb());
                self.reset = false;
                true
            }
            LegacyKind::Reset => {
                self.decorations.clear();
                self.color = None;
                self.reset = true;
                true
            }
            LegacyKind::Decoration(decoration) => {
                let changed = self.decorations.insert(decoration);
                if changed {
                    self.reset = false;
                }
                changed
            }
        }
    }

    fn apply_hex(&mut self, color: Rgb) {
        self.color = Some(color);
        self.reset = false;
    }

    fn start_run(&self) -> StyledRun {
        StyledRun {
            text: String::new(),
            color: self.color,
            decorations: self.decorations.clone(),
            reset: self.reset,
        }
    }
}

/// Accumulates literal text into runs.
struct RunBuilder {
    out: StyledText,
    current: StyledRun,
    boundary: bool,
}

impl RunBuilder {
    fn new() -> Self {
        Self {
            out: StyledText::new(),
            current: StyledRun::default(),
            boundary: false,
        }
    }

    fn push_literal(&mut self, text: &str, style: &ActiveStyle) {
        if text.is_empty() {
            return;
        }
        if self.boundary {
            let next = style.start_run();
            let done = std::mem::replace(&mut self.current, next);
            if !done.text.is_empty() {
                self.out.push(done);
            }
            self.boundary = false;
        }
        self.current.text.push_str(text);
    }

    fn finish(mut self) -> StyledText {
        if !self.current.text.is_empty() {
            self.out.push(self.current);
        }
        self.out
    }
}

/// Single-pass markup parser.
///
/// Holds only its options; every call to [`parse`](Self::parse) starts from
/// an unstyled state, so one parser can be shared across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkupParser {
    options: MarkupOptions,
}

impl MarkupParser {
    #[must_use]
    pub const fn new(options: MarkupOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> MarkupOptions {
        self.options
    }

    /// Parse `input` into styled runs.
    #[must_use]
    pub fn parse(&self, input: &str) -> StyledText {
        if self.options.segmented_hex {
            let normalized = normalize_segmented(input);
            self.scan(&normalized)
        } else {
            self.scan(input)
        }
    }

    fn scan(&self, input: &str) -> StyledText {
        let bytes = input.as_bytes();
        let mut style = ActiveStyle::default();
        let mut runs = RunBuilder::new();
        let mut pos = 0;

        while pos < bytes.len() {
            let Some(offset) = memchr::memchr2(b'#', b'&', &bytes[pos..]) else {
                runs.push_literal(&input[pos..], &style);
                break;
            };
            let i = pos + offset;
            runs.push_literal(&input[pos..i], &style);

            if bytes[i] == b'#' {
                match hex_token_at(bytes, i).filter(|_| self.options.standard_hex) {
                    Some(color) => {
                        style.apply_hex(color);
                        runs.boundary = true;
                        pos = i + HEX_TOKEN_LEN;
                    }
                    None => {
                        runs.push_literal("#", &style);
                        pos = i + 1;
                    }
                }
                continue;
            }

            match bytes.get(i + 1).copied().and_then(legacy::lookup_byte) {
                Some(kind) => {
                    if style.apply_legacy(kind) {
                        runs.boundary = true;
                    }
                    pos = i + 2;
                }
                None => {
                    runs.push_literal("&", &style);
                    pos = i + 1;
                }
            }
        }

        runs.finish()
    }
}
