#![forbid(unsafe_code)]

//! Text decorations and the ordered decoration set carried by styled runs.

use smallvec::SmallVec;

/// A single text decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Decoration {
    /// `&l`
    Bold,
    /// `&o`
    Italic,
    /// `&n`
    Underline,
    /// `&m`
    Strikethrough,
    /// `&k`
    Obfuscated,
}

impl Decoration {
    /// All decorations.
    pub const ALL: [Self; 5] = [
        Self::Bold,
        Self::Italic,
        Self::Underline,
        Self::Strikethrough,
        Self::Obfuscated,
    ];

    /// The flag bit for this decoration.
    #[must_use]
    pub const fn flag(self) -> DecorationFlags {
        match self {
            Self::Bold => DecorationFlags::BOLD,
            Self::Italic => DecorationFlags::ITALIC,
            Self::Underline => DecorationFlags::UNDERLINE,
            Self::Strikethrough => DecorationFlags::STRIKETHROUGH,
            Self::Obfuscated => DecorationFlags::OBFUSCATED,
        }
    }

    /// Lowercase legacy trigger character.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Bold => 'l',
            Self::Italic => 'o',
            Self::Underline => 'n',
            Self::Strikethrough => 'm',
            Self::Obfuscated => 'k',
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::Strikethrough => "strikethrough",
            Self::Obfuscated => "obfuscated",
        }
    }
}

bitflags::bitflags! {
    /// Decoration membership as bit flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DecorationFlags: u8 {
        /// Bold text.
        const BOLD          = 0b0000_0001;
        /// Italic text.
        const ITALIC        = 0b0000_0010;
        /// Underlined text.
        const UNDERLINE     = 0b0000_0100;
        /// Strikethrough text.
        const STRIKETHROUGH = 0b0000_1000;
        /// Obfuscated (scrambled) text.
        const OBFUSCATED    = 0b0001_0000;
    }
}

/// Insertion-ordered set of decorations.
///
/// Order is kept so re-serialized markup is deterministic; membership checks
/// go through the cached [`DecorationFlags`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<Decoration>", into = "Vec<Decoration>"))]
pub struct Decorations {
    order: SmallVec<[Decoration; 5]>,
    flags: DecorationFlags,
}

impl Decorations {
    /// Empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a decoration. Returns `true` if the set changed.
    pub fn insert(&mut self, decoration: Decoration) -> bool {
        let flag = decoration.flag();
        if self.flags.contains(flag) {
            return false;
        }
        self.flags.insert(flag);
        self.order.push(decoration);
        true
    }

    /// Remove every decoration.
    pub fn clear(&mut self) {
        self.order.clear();
        self.flags = DecorationFlags::empty();
    }

    /// Membership test.
    #[inline]
    #[must_use]
    pub fn contains(&self, decoration: Decoration) -> bool {
        self.flags.contains(decoration.flag())
    }

    /// Bit-flag view of the set.
    #[inline]
    #[must_use]
    pub fn flags(&self) -> DecorationFlags {
        self.flags
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Decoration> + '_ {
        self.order.iter().copied()
    }

    /// Decorations in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[Decoration] {
        &self.order
    }
}

impl FromIterator<Decoration> for Decorations {
    fn from_iter<I: IntoIterator<Item = Decoration>>(iter: I) -> Self {
        let mut set = Self::new();
        for d in iter {
            set.insert(d);
        }
        set
    }
}

impl From<Vec<Decoration>> for Decorations {
    fn from(list: Vec<Decoration>) -> Self {
        list.into_iter().collect()
    }
}

impl From<Decorations> for Vec<Decoration> {
    fn from(set: Decorations) -> Self {
        set.order.into_vec()
    }
}
