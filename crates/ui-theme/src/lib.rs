//! Design tokens and theming for Spectra UI
//!
//! This crate provides the token table, theme definitions, and typography
//! scale consumed by the component crates.
//!
//! # Design System
//!
//! The color palette carries five 12-step scales (gray, purple, pink,
//! fuschia, red) plus semantic colors (success, warning, danger, info). Symbolic
//! color references (`$purple9`) are resolved against a [`ColorTokens`]
//! table through the [`TokenResolver`] trait.
//!
//! Token tables are built once and passed by reference; there is no global
//! or lazily-initialized state in this crate.
//!
//! # Example
//!
//! ```rust
//! use ui_theme::{get_theme, ThemeName, TokenResolver};
//!
//! let theme = get_theme(ThemeName::Dark);
//! assert!(theme.is_dark());
//! assert_eq!(theme.lookup("purple9"), Some("#6b21a8"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod palette;
pub mod theme;
pub mod tokens;
pub mod typography;

// Re-export commonly used types
pub use palette::ColorTokens;
pub use theme::{dark_theme, get_theme, light_theme, Color, Theme, ThemeName, TokenResolver};
pub use tokens::{duration, radius, spacing};
pub use typography::{font_size, FontWeight, TextStyle};
