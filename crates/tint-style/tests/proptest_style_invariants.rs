//! Property-based invariant tests for colors, decorations and legacy codes.
//!
//! 1. `to_hex_string` parses back to the same color.
//! 2. Hex parsing ignores digit case.
//! 3. Invalid hex strings fall back to white.
//! 4. Legacy lookup is case-insensitive for every ASCII byte.
//! 5. Decorations keep first-insertion order and agree with their flags.

use proptest::prelude::*;
use tint_style::legacy::{lookup, lookup_byte, trigger_for};
use tint_style::{Decoration, DecorationFlags, Decorations, FALLBACK_COLOR, Rgb, hex_to_color};

// ── Helpers ─────────────────────────────────────────────────────────────

fn rgb_strategy() -> impl Strategy<Value = Rgb> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb::new(r, g, b))
}

fn decoration_strategy() -> impl Strategy<Value = Decoration> {
    (0..Decoration::ALL.len()).prop_map(|i| Decoration::ALL[i])
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Canonical hex form parses back
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn hex_string_parses_back(color in rgb_strategy()) {
        let hex = color.to_hex_string();
        prop_assert_eq!(hex.len(), 7);
        prop_assert_eq!(Rgb::from_hex_str(&hex).ok(), Some(color));
        prop_assert_eq!(hex_to_color(&hex), color);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Digit case does not matter
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn hex_parse_ignores_case(color in rgb_strategy()) {
        let upper = color.to_hex_string().to_ascii_uppercase();
        prop_assert_eq!(Rgb::from_hex_str(&upper).ok(), Some(color));
        prop_assert_eq!(Rgb::from_hex_str(&upper[1..]).ok(), Some(color));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Invalid input falls back
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn invalid_hex_falls_back_to_white(s in "#[g-z]{6}|[0-9a-f]{0,5}|[0-9a-f]{7,10}") {
        prop_assert!(Rgb::from_hex_str(&s).is_err());
        prop_assert_eq!(hex_to_color(&s), FALLBACK_COLOR);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Legacy lookup ignores case
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn legacy_lookup_ignores_case(b in 0u8..=0x7f) {
        let lower = lookup_byte(b.to_ascii_lowercase());
        prop_assert_eq!(lookup_byte(b), lower);
        prop_assert_eq!(lookup_byte(b.to_ascii_uppercase()), lower);
        prop_assert_eq!(lookup(char::from(b)), lower);
        if let Some(kind) = lower {
            prop_assert_eq!(trigger_for(kind), char::from(b.to_ascii_lowercase()));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Decoration order and flags agree
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn decorations_keep_first_insertion_order(
        inserts in prop::collection::vec(decoration_strategy(), 0..16)
    ) {
        let mut set = Decorations::new();
        let mut expected: Vec<Decoration> = Vec::new();
        for d in &inserts {
            let changed = set.insert(*d);
            prop_assert_eq!(changed, !expected.contains(d));
            if changed {
                expected.push(*d);
            }
        }
        prop_assert_eq!(set.as_slice(), expected.as_slice());

        let flags = expected
            .iter()
            .fold(DecorationFlags::empty(), |acc, d| acc | d.flag());
        prop_assert_eq!(set.flags(), flags);
    }
}
