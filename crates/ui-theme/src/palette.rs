//! Color token table for Spectra UI
//!
//! The palette carries the brand color scales and semantic colors as a
//! string-keyed lookup table. The table is built explicitly with
//! [`ColorTokens::standard`] and owned by whoever creates it (usually a
//! [`Theme`](crate::theme::Theme)); nothing in this module is global.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The standard palette: (token name, hex value) pairs.
///
/// Scales run light (1) to dark (12).
pub const STANDARD_COLORS: &[(&str, &str)] = &[
    // Gray shades (for text hierarchy)
    ("gray1", "#fcfcfc"),
    ("gray2", "#f9f9f9"),
    ("gray3", "#f0f0f0"),
    ("gray4", "#e8e8e8"),
    ("gray5", "#e0e0e0"),
    ("gray6", "#d6d6d6"),
    ("gray7", "#c7c7c7"),
    ("gray8", "#b3b3b3"),
    ("gray9", "#a3a3a3"),
    ("gray10", "#737373"),
    ("gray11", "#404040"),
    ("gray12", "#171717"),
    // Purple shades
    ("purple1", "#faf5ff"),
    ("purple2", "#f3e8ff"),
    ("purple3", "#e9d5ff"),
    ("purple4", "#d8b4fe"),
    ("purple5", "#c084fc"),
    ("purple6", "#a855f7"),
    ("purple7", "#9333ea"),
    ("purple8", "#7e22ce"),
    ("purple9", "#6b21a8"),
    ("purple10", "#581c87"),
    ("purple11", "#4c1d95"),
    ("purple12", "#2e1065"),
    // Pink shades
    ("pink1", "#fdf2f8"),
    ("pink2", "#fce7f3"),
    ("pink3", "#fbcfe8"),
    ("pink4", "#f9a8d4"),
    ("pink5", "#f472b6"),
    ("pink6", "#ec4899"),
    ("pink7", "#db2777"),
    ("pink8", "#be185d"),
    ("pink9", "#9f1239"),
    ("pink10", "#831843"),
    ("pink11", "#701a43"),
    ("pink12", "#500724"),
    // Fuschia shades
    ("fuschia1", "#fdf4ff"),
    ("fuschia2", "#fae8ff"),
    ("fuschia3", "#f5d0fe"),
    ("fuschia4", "#f0abfc"),
    ("fuschia5", "#e879f9"),
    ("fuschia6", "#d946ef"),
    ("fuschia7", "#c026d3"),
    ("fuschia8", "#a21caf"),
    ("fuschia9", "#86198f"),
    ("fuschia10", "#701a75"),
    ("fuschia11", "#581c5f"),
    ("fuschia12", "#3b0764"),
    // Red shades (alias scale used by the gradient defaults)
    ("red1", "#fef2f2"),
    ("red2", "#fee2e2"),
    ("red3", "#fecaca"),
    ("red4", "#fca5a5"),
    ("red5", "#f87171"),
    ("red6", "#ef4444"),
    ("red7", "#dc2626"),
    ("red8", "#b91c1c"),
    ("red9", "#991b1b"),
    ("red10", "#7f1d1d"),
    ("red11", "#681818"),
    ("red12", "#450a0a"),
    // Semantic colors
    ("success", "#10b981"),
    ("warning", "#f59e0b"),
    ("danger", "#ef4444"),
    ("info", "#3b82f6"),
];

/// An owned color token table.
///
/// Built once (via [`ColorTokens::standard`] or [`ColorTokens::empty`] plus
/// [`insert`](ColorTokens::insert)) and passed by reference to consumers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColorTokens {
    entries: HashMap<String, String>,
}

impl ColorTokens {
    /// Create an empty token table.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create the standard Spectra UI palette.
    pub fn standard() -> Self {
        let mut tokens = Self::empty();
        for (name, value) in STANDARD_COLORS {
            tokens.insert(*name, *value);
        }
        tokens
    }

    /// Insert or replace a token.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Look up a token by name (without the `$` prefix).
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Number of registered tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no tokens.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_palette_scales() {
        let tokens = ColorTokens::standard();
        assert_eq!(tokens.get("gray1"), Some("#fcfcfc"));
        assert_eq!(tokens.get("gray12"), Some("#171717"));
        assert_eq!(tokens.get("purple11"), Some("#4c1d95"));
        assert_eq!(tokens.get("pink7"), Some("#db2777"));
        assert_eq!(tokens.get("fuschia12"), Some("#3b0764"));
        assert_eq!(tokens.get("success"), Some("#10b981"));
    }

    #[test]
    fn test_unknown_token_is_none() {
        let tokens = ColorTokens::standard();
        assert_eq!(tokens.get("chartreuse5"), None);
        // Prefixed names are not registered; lookup is by bare name.
        assert_eq!(tokens.get("$purple9"), None);
    }

    #[test]
    fn test_insert_overrides() {
        let mut tokens = ColorTokens::standard();
        tokens.insert("purple9", "#123456");
        assert_eq!(tokens.get("purple9"), Some("#123456"));
    }

    #[test]
    fn test_empty_table() {
        let tokens = ColorTokens::empty();
        assert!(tokens.is_empty());
        assert_eq!(tokens.get("gray1"), None);
    }
}
