#![forbid(unsafe_code)]

//! Style primitives for tint.
//!
//! - [`Rgb`] - 24-bit color with hex parsing
//! - [`NamedColor`] - the sixteen legacy chat colors
//! - [`Decoration`] / [`Decorations`] - text decorations and their ordered set
//! - [`legacy`] - the `&<code>` lookup table
//!
//! # Example
//! ```
//! use tint_style::{Rgb, legacy, LegacyKind, Decoration};
//!
//! assert_eq!(Rgb::from_hex_str("#83daed").unwrap().as_u24(), 0x83daed);
//! assert_eq!(legacy::lookup('L'), Some(LegacyKind::Decoration(Decoration::Bold)));
//! ```

pub mod color;
pub mod decoration;
pub mod legacy;

pub use color::{ColorError, FALLBACK_COLOR, NamedColor, Rgb, hex_nibble, hex_to_color};
pub use decoration::{Decoration, DecorationFlags, Decorations};
pub use legacy::{LEGACY_CODES, LegacyCode, LegacyKind};
