#![forbid(unsafe_code)]

//! User settings document.

use serde::{Deserialize, Serialize};
use tint_style::{Rgb, hex_to_color};
use tint_text::MarkupOptions;

/// Default preview line shown to the user.
pub const DEFAULT_PREVIEW_TEXT: &str =
    "Hello, World! This is a color preview. &X&R&R&G&G&B&B #RRGGBB";

/// Default favorite colors.
pub const DEFAULT_FAVORITE_COLORS: [&str; 6] = [
    "#83daed", "#e186c9", "#ffffff", "#ff0000", "#00ff00", "#0000ff",
];

/// Feature flags and preferences. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Master switch for processing.
    pub enabled: bool,
    /// Recognize `#RRGGBB`.
    pub enable_hex_color: bool,
    /// Recognize `&X&R&R&G&G&B&B`.
    pub enable_segmented_hex_color: bool,
    /// Show the live preview.
    pub show_preview: bool,
    /// Text rendered by the preview.
    pub preview_text: String,
    /// Saved colors as `#rrggbb` strings.
    pub favorite_colors: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled: true,
            enable_hex_color: true,
            enable_segmented_hex_color: true,
            show_preview: true,
            preview_text: DEFAULT_PREVIEW_TEXT.to_string(),
            favorite_colors: DEFAULT_FAVORITE_COLORS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }
}

impl Settings {
    /// Parser options for the two hex flags.
    #[must_use]
    pub fn markup_options(&self) -> MarkupOptions {
        MarkupOptions {
            standard_hex: self.enable_hex_color,
            segmented_hex: self.enable_segmented_hex_color,
        }
    }

    /// Favorite colors decoded; malformed entries become white.
    #[must_use]
    pub fn favorite_rgb(&self) -> Vec<Rgb> {
        self.favorite_colors.iter().map(|s| hex_to_color(s)).collect()
    }

    /// Add a favorite in canonical form, ignoring duplicates.
    pub fn add_favorite(&mut self, color: Rgb) -> bool {
        let hex = color.to_hex_string();
        if self
            .favorite_colors
            .iter()
            .any(|c| c.eq_ignore_ascii_case(&hex))
        {
            return false;
        }
        self.favorite_colors.push(hex);
        true
    }

    /// Remove a favorite. Returns `true` if one was removed.
    pub fn remove_favorite(&mut self, color: Rgb) -> bool {
        let hex = color.to_hex_string();
        let before = self.favorite_colors.len();
        self.favorite_colors.retain(|c| !c.eq_ignore_ascii_case(&hex));
        self.favorite_colors.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert!(s.enabled && s.enable_hex_color && s.enable_segmented_hex_color && s.show_preview);
        assert_eq!(s.favorite_colors.len(), 6);
        assert_eq!(s.favorite_colors[0], "#83daed");
        assert_eq!(s.markup_options(), MarkupOptions::default());
    }

    #[test]
    fn markup_options_follow_flags() {
        let s = Settings {
            enable_hex_color: false,
            ..Settings::default()
        };
        let opts = s.markup_options();
        assert!(!opts.standard_hex);
        assert!(opts.segmented_hex);
    }

    #[test]
    fn partial_document_fills_defaults() {
        let s: Settings = serde_json::from_str(r#"{ "enabled": false }"#).unwrap();
        assert!(!s.enabled);
        assert_eq!(s.preview_text, DEFAULT_PREVIEW_TEXT);
    }

    #[test]
    fn favorites_decode_with_fallback() {
        let s = Settings {
            favorite_colors: vec!["#010203".into(), "oops".into()],
            ..Settings::default()
        };
        assert_eq!(s.favorite_rgb(), vec![Rgb::new(1, 2, 3), Rgb::new(255, 255, 255)]);
    }

    #[test]
    fn add_and_remove_favorites() {
        let mut s = Settings::default();
        assert!(!s.add_favorite(Rgb::from_u24(0x83DAED)));
        assert!(s.add_favorite(Rgb::from_u24(0x123456)));
        assert_eq!(s.favorite_colors.last().map(String::as_str), Some("#123456"));
        assert!(s.remove_favorite(Rgb::from_u24(0x123456)));
        assert!(!s.remove_favorite(Rgb::from_u24(0x123456)));
    }
}
