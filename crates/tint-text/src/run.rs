#![forbid(unsafe_code)]

//! Styled runs produced by the markup parser.

use tint_style::{Decoration, Decorations, Rgb};

/// A maximal piece of text sharing one color and decoration state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyledRun {
    /// The run's text. Never empty in parser output.
    pub text: String,
    /// Explicit color, or `None` to inherit.
    pub color: Option<Rgb>,
    /// Active decorations in the order they were switched on.
    pub decorations: Decorations,
    /// The run starts from a freshly reset style.
    pub reset: bool,
}

impl StyledRun {
    /// Unstyled run.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Set the color.
    #[must_use]
    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }

    /// Add a decoration.
    #[must_use]
    pub fn with_decoration(mut self, decoration: Decoration) -> Self {
        self.decorations.insert(decoration);
        self
    }

    /// Mark the run as starting after a reset.
    #[must_use]
    pub fn with_reset(mut self) -> Self {
        self.reset = true;
        self
    }

    /// Whether the run carries a color or any decoration.
    #[inline]
    #[must_use]
    pub fn is_styled(&self) -> bool {
        self.color.is_some() || !self.decorations.is_empty()
    }

    fn write_markup(&self, out: &mut String, after_styled: bool) {
        if after_styled || self.reset {
            out.push_str("&r");
        }
        if let Some(color) = self.color {
            out.push_str(&color.to_hex_string());
        }
        for decoration in self.decorations.iter() {
            out.push('&');
            out.push(decoration.code());
        }
        out.push_str(&self.text);
    }
}

/// Ordered runs from one parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StyledText {
    runs: Vec<StyledRun>,
}

impl StyledText {
    /// No runs.
    #[must_use]
    pub const fn new() -> Self {
        Self { runs: Vec::new() }
    }

    #[inline]
    #[must_use]
    pub fn runs(&self) -> &[StyledRun] {
        &self.runs
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StyledRun> {
        self.runs.iter()
    }

    #[must_use]
    pub fn into_runs(self) -> Vec<StyledRun> {
        self.runs
    }

    pub(crate) fn push(&mut self, run: StyledRun) {
        debug_assert!(!run.text.is_empty());
        self.runs.push(run);
    }

    /// Concatenated run text with all markup removed.
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        let len = self.runs.iter().map(|r| r.text.len()).sum();
        let mut out = String::with_capacity(len);
        for run in &self.runs {
            out.push_str(&run.text);
        }
        out
    }

    /// Canonical markup that parses back to the same runs.
    ///
    /// A run that follows a styled run (or that itself starts after a
    /// reset) is prefixed with `&r`, then its color as lowercase `#rrggbb`,
    /// then one `&<code>` per decoration. Run text is written verbatim, so
    /// the round trip holds only for text free of `#` and `&`.
    #[must_use]
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        let mut prev_styled = false;
        for run in &self.runs {
            run.write_markup(&mut out, prev_styled);
            prev_styled = run.is_styled();
        }
        out
    }
}

impl From<Vec<StyledRun>> for StyledText {
    fn from(runs: Vec<StyledRun>) -> Self {
        Self {
            runs: runs.into_iter().filter(|r| !r.text.is_empty()).collect(),
        }
    }
}

impl IntoIterator for StyledText {
    type Item = StyledRun;
    type IntoIter = std::vec::IntoIter<StyledRun>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.into_iter()
    }
}

impl<'a> IntoIterator for &'a StyledText {
    type Item = &'a StyledRun;
    type IntoIter = std::slice::Iter<'a, StyledRun>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_concatenates() {
        let text = StyledText::from(vec![
            StyledRun::plain("Hello "),
            StyledRun::plain("World").with_decoration(Decoration::Bold),
        ]);
        assert_eq!(text.to_plain_text(), "Hello World");
        assert_eq!(text.len(), 2);
    }

    #[test]
    fn from_vec_drops_empty_runs() {
        let text = StyledText::from(vec![StyledRun::plain(""), StyledRun::plain("x")]);
        assert_eq!(text.len(), 1);
    }

    #[test]
    fn markup_for_unstyled_runs_is_plain() {
        let text = StyledText::from(vec![StyledRun::plain("abc")]);
        assert_eq!(text.to_markup(), "abc");
    }

    #[test]
    fn markup_resets_after_styled_run() {
        let text = StyledText::from(vec![
            StyledRun::plain("A")
                .with_color(Rgb::from_u24(0xFF0000))
                .with_decoration(Decoration::Underline)
                .with_decoration(Decoration::Bold),
            StyledRun::plain("B").with_reset(),
            StyledRun::plain("C").with_decoration(Decoration::Italic),
        ]);
        assert_eq!(text.to_markup(), "#ff0000&n&lA&rB&oC");
    }

    #[test]
    fn markup_keeps_leading_reset() {
        let text = StyledText::from(vec![StyledRun::plain("x").with_reset()]);
        assert_eq!(text.to_markup(), "&rx");
    }

    #[test]
    fn is_styled() {
        assert!(!StyledRun::plain("a").is_styled());
        assert!(!StyledRun::plain("a").with_reset().is_styled());
        assert!(StyledRun::plain("a").with_color(Rgb::new(1, 2, 3)).is_styled());
    }
}
