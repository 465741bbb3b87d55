#![forbid(unsafe_code)]

//! RGB color values, hex parsing, and the sixteen named chat colors.

use std::fmt;

/// Fallback used when a hex string cannot be decoded.
pub const FALLBACK_COLOR: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

/// Errors produced by hex color conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The string is not `#rrggbb` or `rrggbb`.
    InvalidColorFormat {
        /// The rejected input.
        value: String,
    },
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColorFormat { value } => {
                write!(f, "invalid hex color '{value}'")
            }
        }
    }
}

impl std::error::Error for ColorError {}

/// 24-bit RGB color (opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red channel (0–255).
    pub r: u8,
    /// Green channel (0–255).
    pub g: u8,
    /// Blue channel (0–255).
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from the low 24 bits of `value` (`0xRRGGBB`).
    #[must_use]
    pub const fn from_u24(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// Pack into `0xRRGGBB`.
    #[must_use]
    pub const fn as_u24(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Decode six ASCII hex digits. Returns `None` unless all six are hex.
    #[must_use]
    pub fn from_hex_digits(digits: &[u8]) -> Option<Self> {
        if digits.len() != 6 {
            return None;
        }
        let mut value: u32 = 0;
        for &d in digits {
            value = (value << 4) | u32::from(hex_nibble(d)?);
        }
        Some(Self::from_u24(value))
    }

    /// Parse `#rrggbb` or `rrggbb` (case-insensitive).
    ///
    /// Surrounding whitespace is ignored.
    pub fn from_hex_str(s: &str) -> Result<Self, ColorError> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        Self::from_hex_digits(digits.as_bytes()).ok_or_else(|| ColorError::InvalidColorFormat {
            value: s.to_string(),
        })
    }

    /// Canonical lowercase `#rrggbb` form.
    #[must_use]
    pub fn to_hex_string(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<u32> for Rgb {
    fn from(value: u32) -> Self {
        Self::from_u24(value)
    }
}

impl From<Rgb> for u32 {
    fn from(color: Rgb) -> Self {
        color.as_u24()
    }
}

/// Convert a hex string to a color, falling back to white.
///
/// The failure is logged at warn level; callers that need to react to bad
/// input should use [`Rgb::from_hex_str`] instead.
#[must_use]
pub fn hex_to_color(s: &str) -> Rgb {
    match Rgb::from_hex_str(s) {
        Ok(color) => color,
        Err(err) => {
            tracing::warn!(value = s, error = %err, "invalid hex color, using fallback");
            FALLBACK_COLOR
        }
    }
}

/// Value of one ASCII hex digit, case-insensitive.
#[inline]
#[must_use]
pub const fn hex_nibble(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// The sixteen named chat colors addressable by legacy codes `0`–`f`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum NamedColor {
    /// `&0`
    Black = 0,
    /// `&1`
    DarkBlue = 1,
    /// `&2`
    DarkGreen = 2,
    /// `&3`
    DarkAqua = 3,
    /// `&4`
    DarkRed = 4,
    /// `&5`
    DarkPurple = 5,
    /// `&6`
    Gold = 6,
    /// `&7`
    Gray = 7,
    /// `&8`
    DarkGray = 8,
    /// `&9`
    Blue = 9,
    /// `&a`
    Green = 10,
    /// `&b`
    Aqua = 11,
    /// `&c`
    Red = 12,
    /// `&d`
    LightPurple = 13,
    /// `&e`
    Yellow = 14,
    /// `&f`
    White = 15,
}

const NAMED_PALETTE: [Rgb; 16] = [
    Rgb::from_u24(0x000000), // Black
    Rgb::from_u24(0x0000AA), // Dark Blue
    Rgb::from_u24(0x00AA00), // Dark Green
    Rgb::from_u24(0x00AAAA), // Dark Aqua
    Rgb::from_u24(0xAA0000), // Dark Red
    Rgb::from_u24(0xAA00AA), // Dark Purple
    Rgb::from_u24(0xFFAA00), // Gold
    Rgb::from_u24(0xAAAAAA), // Gray
    Rgb::from_u24(0x555555), // Dark Gray
    Rgb::from_u24(0x5555FF), // Blue
    Rgb::from_u24(0x55FF55), // Green
    Rgb::from_u24(0x55FFFF), // Aqua
    Rgb::from_u24(0xFF5555), // Red
    Rgb::from_u24(0xFF55FF), // Light Purple
    Rgb::from_u24(0xFFFF55), // Yellow
    Rgb::from_u24(0xFFFFFF), // White
];

const NAMED_NAMES: [&str; 16] = [
    "black",
    "dark_blue",
    "dark_green",
    "dark_aqua",
    "dark_red",
    "dark_purple",
    "gold",
    "gray",
    "dark_gray",
    "blue",
    "green",
    "aqua",
    "red",
    "light_purple",
    "yellow",
    "white",
];

impl NamedColor {
    /// All named colors in code order.
    pub const ALL: [Self; 16] = [
        Self::Black,
        Self::DarkBlue,
        Self::DarkGreen,
        Self::DarkAqua,
        Self::DarkRed,
        Self::DarkPurple,
        Self::Gold,
        Self::Gray,
        Self::DarkGray,
        Self::Blue,
        Self::Green,
        Self::Aqua,
        Self::Red,
        Self::LightPurple,
        Self::Yellow,
        Self::White,
    ];

    /// Palette index (0–15).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Look up by palette index.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 16 {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// RGB value of this color.
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        NAMED_PALETTE[self as usize]
    }

    /// Snake-case name (`dark_aqua`, `light_purple`, ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        NAMED_NAMES[self as usize]
    }

    /// Lowercase legacy trigger character (`0`–`9`, `a`–`f`).
    #[must_use]
    pub const fn code(self) -> char {
        let idx = self as u8;
        if idx < 10 {
            (b'0' + idx) as char
        } else {
            (b'a' + idx - 10) as char
        }
    }
}
