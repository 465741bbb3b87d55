#![forbid(unsafe_code)]

//! tint public facade crate.
//!
//! Re-exports the common types from the internal crates and offers a small
//! prelude.
//!
//! ```
//! use tint::prelude::*;
//!
//! let text = parse_markup("&6gold &lbold #83daedcyan");
//! assert_eq!(text.to_plain_text(), "gold bold cyan");
//! assert_eq!(text.runs()[2].color, Some(Rgb::from_u24(0x83daed)));
//! ```

use std::fmt;

// --- Re-exports -----------------------------------------------------------

pub use tint_style::{ColorError, Decoration, Decorations, NamedColor, Rgb, hex_to_color};

pub use tint_text::{
    MarkupOptions, MarkupParser, StyledRun, StyledText, is_valid_hex_color, normalize_segmented,
    parse_markup,
};

pub use tint_core::{
    ChatSession, ConfigError, DestinationPolicy, JsonStore, PreviewResult, PreviewWorker,
    ProcessingGate, RevisionToken, Settings, ToggleHandle,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for tint.
#[derive(Debug)]
pub enum Error {
    /// I/O failure (thread spawn, stdin/stdout).
    Io(std::io::Error),
    /// Configuration document could not be read or written.
    Config(ConfigError),
    /// Malformed color string.
    Color(ColorError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Config(err) => write!(f, "{err}"),
            Self::Color(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Config(err) => Some(err),
            Self::Color(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<ColorError> for Error {
    fn from(err: ColorError) -> Self {
        Self::Color(err)
    }
}

/// Standard result type for tint APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        ChatSession, Decoration, DestinationPolicy, Error, MarkupOptions, MarkupParser, Result,
        Rgb, Settings, StyledRun, StyledText, parse_markup,
    };

    pub use crate::{core, style, text};
}

pub use tint_core as core;
pub use tint_style as style;
pub use tint_text as text;

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_color(s: &str) -> Result<Rgb> {
        Ok(Rgb::from_hex_str(s)?)
    }

    #[test]
    fn color_error_converts() {
        let err = parse_color("#nope").unwrap_err();
        assert!(matches!(err, Error::Color(_)));
        assert!(err.to_string().contains("#nope"));
    }

    #[test]
    fn io_error_converts() {
        let err: Error = std::io::Error::other("closed").into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "closed");
    }

    #[test]
    fn config_error_has_source() {
        use std::error::Error as _;
        let err: Error = ConfigError::Serialization("bad".into()).into();
        assert!(err.source().is_some());
    }
}
