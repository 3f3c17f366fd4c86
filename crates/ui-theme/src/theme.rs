//! Theme definitions and the token-resolver boundary
//!
//! A [`Theme`] bundles the semantic colors the components reference
//! (`background`, `color`, `borderColor`, hover/press variants) with an
//! owned [`ColorTokens`] palette. The [`TokenResolver`] trait is the
//! injection point consumed by the gradient and component crates: anything
//! that can answer `lookup(name) -> Option<&str>` can drive color
//! resolution.

use crate::palette::ColorTokens;
use serde::{Deserialize, Serialize};

/// A color represented as a renderable string (e.g., "#FFFFFF" or "transparent")
pub type Color = String;

/// Resolves a symbolic token name to a concrete color value.
///
/// This is the inbound capability the rendering pipeline depends on. The
/// name is passed without the `$` prefix.
pub trait TokenResolver {
    /// Look up a token by bare name, returning the resolved color if known.
    fn lookup(&self, name: &str) -> Option<&str>;
}

impl TokenResolver for ColorTokens {
    fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name)
    }
}

/// Theme name enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeName::Light => write!(f, "Light"),
            ThemeName::Dark => write!(f, "Dark"),
        }
    }
}

impl std::str::FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeName::Light),
            "dark" => Ok(ThemeName::Dark),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

/// Semantic colors that adapt to the active theme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticColors {
    /// Default surface background
    pub background: Color,
    /// Background on hover
    pub background_hover: Color,
    /// Background while pressed
    pub background_press: Color,
    /// Default text color
    pub color: Color,
    /// Default border color
    pub border_color: Color,
}

/// Complete theme definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name
    pub name: ThemeName,
    /// Semantic theme colors
    pub colors: SemanticColors,
    /// Color token table
    pub tokens: ColorTokens,
}

impl Theme {
    /// Check if this is a dark theme
    pub fn is_dark(&self) -> bool {
        matches!(self.name, ThemeName::Dark)
    }
}

impl TokenResolver for Theme {
    /// Semantic names win over palette entries so `$color`, `$background`,
    /// and `$borderColor` adapt to the active theme.
    fn lookup(&self, name: &str) -> Option<&str> {
        match name {
            "background" => Some(&self.colors.background),
            "backgroundHover" => Some(&self.colors.background_hover),
            "backgroundPress" => Some(&self.colors.background_press),
            "color" => Some(&self.colors.color),
            "borderColor" => Some(&self.colors.border_color),
            _ => self.tokens.get(name),
        }
    }
}

/// Build the light theme
pub fn light_theme() -> Theme {
    Theme {
        name: ThemeName::Light,
        colors: SemanticColors {
            background: "#ffffff".to_string(),
            background_hover: "#f9f9f9".to_string(),
            background_press: "#f0f0f0".to_string(),
            color: "#171717".to_string(),
            border_color: "#d6d6d6".to_string(),
        },
        tokens: ColorTokens::standard(),
    }
}

/// Build the dark theme
pub fn dark_theme() -> Theme {
    Theme {
        name: ThemeName::Dark,
        colors: SemanticColors {
            background: "#171717".to_string(),
            background_hover: "#262626".to_string(),
            background_press: "#404040".to_string(),
            color: "#fcfcfc".to_string(),
            border_color: "#404040".to_string(),
        },
        tokens: ColorTokens::standard(),
    }
}

/// Get a theme by name
pub fn get_theme(name: ThemeName) -> Theme {
    match name {
        ThemeName::Light => light_theme(),
        ThemeName::Dark => dark_theme(),
    }
}
