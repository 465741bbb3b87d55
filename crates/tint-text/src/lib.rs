#![forbid(unsafe_code)]

//! Chat markup parsing for tint.
//!
//! # Pipeline
//! raw text → [`segmented::normalize_segmented`] → [`markup::MarkupParser`]
//! → [`StyledText`]
//!
//! # Example
//! ```
//! use tint_text::{MarkupOptions, MarkupParser};
//!
//! let parser = MarkupParser::new(MarkupOptions::default());
//! let text = parser.parse("&X&e&1&8&6&c&9pink &lbold");
//! assert_eq!(text.len(), 2);
//! assert_eq!(text.to_plain_text(), "pink bold");
//! ```

pub mod hex;
pub mod markup;
pub mod run;
pub mod segmented;

pub use hex::{hex_token_at, is_valid_hex_color, parse_hex_window};
pub use markup::{MarkupOptions, MarkupParser, parse_markup};
pub use run::{StyledRun, StyledText};
pub use segmented::{count_segmented, normalize_segmented};
