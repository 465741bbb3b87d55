#![forbid(unsafe_code)]

//! Legacy single-character formatting codes (`&<code>`).
//!
//! | Code      | Effect                      |
//! |-----------|-----------------------------|
//! | `0`–`9`, `a`–`f` | Named color (clears decorations) |
//! | `k`       | Obfuscated                  |
//! | `l`       | Bold                        |
//! | `m`       | Strikethrough               |
//! | `n`       | Underline                   |
//! | `o`       | Italic                      |
//! | `r`       | Reset color and decorations |
//!
//! Lookup is case-insensitive. Any other character is not a code.

use crate::color::NamedColor;
use crate::decoration::Decoration;

/// What a legacy code does to the active style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegacyKind {
    /// Switch to a named color.
    Color(NamedColor),
    /// Add a decoration.
    Decoration(Decoration),
    /// Clear color and decorations.
    Reset,
}

/// One entry of the legacy code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LegacyCode {
    /// Lowercase trigger character.
    pub trigger: char,
    /// Effect of the code.
    pub kind: LegacyKind,
}

impl LegacyCode {
    const fn color(trigger: char, color: NamedColor) -> Self {
        Self {
            trigger,
            kind: LegacyKind::Color(color),
        }
    }

    const fn decoration(trigger: char, decoration: Decoration) -> Self {
        Self {
            trigger,
            kind: LegacyKind::Decoration(decoration),
        }
    }
}

/// The fixed table, in code order.
pub const LEGACY_CODES: [LegacyCode; 22] = [
    LegacyCode::color('0', NamedColor::Black),
    LegacyCode::color('1', NamedColor::DarkBlue),
    LegacyCode::color('2', NamedColor::DarkGreen),
    LegacyCode::color('3', NamedColor::DarkAqua),
    LegacyCode::color('4', NamedColor::DarkRed),
    LegacyCode::color('5', NamedColor::DarkPurple),
    LegacyCode::color('6', NamedColor::Gold),
    LegacyCode::color('7', NamedColor::Gray),
    LegacyCode::color('8', NamedColor::DarkGray),
    LegacyCode::color('9', NamedColor::Blue),
    LegacyCode::color('a', NamedColor::Green),
    LegacyCode::color('b', NamedColor::Aqua),
    LegacyCode::color('c', NamedColor::Red),
    LegacyCode::color('d', NamedColor::LightPurple),
    LegacyCode::color('e', NamedColor::Yellow),
    LegacyCode::color('f', NamedColor::White),
    LegacyCode::decoration('k', Decoration::Obfuscated),
    LegacyCode::decoration('l', Decoration::Bold),
    LegacyCode::decoration('m', Decoration::Strikethrough),
    LegacyCode::decoration('n', Decoration::Underline),
    LegacyCode::decoration('o', Decoration::Italic),
    LegacyCode {
        trigger: 'r',
        kind: LegacyKind::Reset,
    },
];

/// Look up the code for an ASCII byte.
#[inline]
#[must_use]
pub fn lookup_byte(b: u8) -> Option<LegacyKind> {
    let lower = char::from(b.to_ascii_lowercase());
    LEGACY_CODES
        .iter()
        .find(|code| code.trigger == lower)
        .map(|code| code.kind)
}

/// Look up the code for a character.
#[must_use]
pub fn lookup(c: char) -> Option<LegacyKind> {
    if c.is_ascii() {
        lookup_byte(c as u8)
    } else {
        None
    }
}

/// The trigger character that re-creates `kind`.
#[must_use]
pub fn trigger_for(kind: LegacyKind) -> char {
    match kind {
        LegacyKind::Color(color) => color.code(),
        LegacyKind::Decoration(decoration) => decoration.code(),
        LegacyKind::Reset => 'r',
    }
}
