//! Typography scale for Spectra UI
//!
//! Font sizes follow the text component scale (tiny through xlarge) plus a
//! heading scale (h6 through h1). Line heights are multipliers applied to
//! the font size.

use serde::{Deserialize, Serialize};

/// Font size scale in pixels
pub mod font_size {
    /// Tiny text (11px)
    pub const TINY: f32 = 11.0;
    /// Caption text (12px)
    pub const CAPTION: f32 = 12.0;
    /// Small text (14px)
    pub const SMALL: f32 = 14.0;
    /// Body text (16px)
    pub const BODY: f32 = 16.0;
    /// Large text (18px)
    pub const LARGE: f32 = 18.0;
    /// Extra large text (20px)
    pub const XLARGE: f32 = 20.0;

    /// Heading sizes, largest first
    pub mod heading {
        /// h1 (46px)
        pub const H1: f32 = 46.0;
        /// h2 (30px)
        pub const H2: f32 = 30.0;
        /// h3 (23px)
        pub const H3: f32 = 23.0;
        /// h4 (20px)
        pub const H4: f32 = 20.0;
        /// h5 (18px)
        pub const H5: f32 = 18.0;
        /// h6 (16px)
        pub const H6: f32 = 16.0;
    }
}

/// Font weight values (CSS numeric weights)
pub mod font_weight {
    /// Regular weight
    pub const REGULAR: u16 = 400;
    /// Medium weight
    pub const MEDIUM: u16 = 500;
    /// Semibold weight
    pub const SEMIBOLD: u16 = 600;
    /// Bold weight
    pub const BOLD: u16 = 700;
}

/// Font weight type alias (400-800)
pub type FontWeight = u16;

/// A typography style definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub font_size: f32,
    /// Font weight (400, 500, 600, 700)
    pub font_weight: FontWeight,
    /// Line height multiplier
    pub line_height: f32,
    /// Letter spacing in pixels
    pub letter_spacing: f32,
    /// Font family override (None = system default)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

impl TextStyle {
    /// Create a new text style with body line height
    pub fn new(font_size: f32, font_weight: FontWeight) -> Self {
        Self {
            font_size,
            font_weight,
            line_height: 1.5,
            letter_spacing: 0.0,
            font_family: None,
        }
    }

    /// Set line height multiplier
    pub fn with_line_height(mut self, lh: f32) -> Self {
        self.line_height = lh;
        self
    }

    /// Set letter spacing
    pub fn with_letter_spacing(mut self, ls: f32) -> Self {
        self.letter_spacing = ls;
        self
    }

    /// Set font family
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Calculate the actual line height in pixels
    pub fn line_height_px(&self) -> f32 {
        self.font_size * self.line_height
    }
}
