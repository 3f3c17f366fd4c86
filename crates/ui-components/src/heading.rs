//! Heading component - semantic headings h1 through h6

use crate::common::{is_default_style, ComponentId, StyleProps};
use serde::{Deserialize, Serialize};
use ui_theme::typography::{font_size::heading, font_weight};
use ui_theme::{Color, TextStyle};

/// Semantic heading level.
///
/// Determines both the rendered tag and the default typography. Levels
/// establish document structure; pick by hierarchy, not visual size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevel {
    /// Page title, largest
    H1,
    /// Major section heading (default)
    #[default]
    H2,
    /// Subsection heading
    H3,
    /// Minor heading
    H4,
    /// Small heading
    H5,
    /// Smallest heading
    H6,
}

impl HeadingLevel {
    /// The typography style for this level.
    ///
    /// h1/h2 are bold, the rest semibold; letter spacing tightens as the
    /// size grows; headings use a compact 1.2 line height.
    pub fn text_style(&self) -> TextStyle {
        let (size, weight, letter_spacing) = match self {
            HeadingLevel::H1 => (heading::H1, font_weight::BOLD, -0.5),
            HeadingLevel::H2 => (heading::H2, font_weight::BOLD, -0.4),
            HeadingLevel::H3 => (heading::H3, font_weight::SEMIBOLD, -0.3),
            HeadingLevel::H4 => (heading::H4, font_weight::SEMIBOLD, -0.2),
            HeadingLevel::H5 => (heading::H5, font_weight::SEMIBOLD, -0.1),
            HeadingLevel::H6 => (heading::H6, font_weight::SEMIBOLD, 0.0),
        };
        TextStyle::new(size, weight)
            .with_line_height(1.2)
            .with_letter_spacing(letter_spacing)
    }
}

/// Heading component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Heading {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Heading content
    pub content: String,
    /// Semantic level
    #[serde(default)]
    pub level: HeadingLevel,
    /// Text color override (defaults to the theme text color)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Style props
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: StyleProps,
}

impl Heading {
    /// Create a new heading at the default level (h2)
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: None,
            content: content.into(),
            level: HeadingLevel::default(),
            color: None,
            style: StyleProps::default(),
        }
    }

    /// Create a heading at a specific level
    pub fn level(content: impl Into<String>, level: HeadingLevel) -> Self {
        Self {
            level,
            ..Self::new(content)
        }
    }

    /// Set text color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set custom style
    pub fn with_style(mut self, style: StyleProps) -> Self {
        self.style = style;
        self
    }

    /// The typography style for this heading
    pub fn text_style(&self) -> TextStyle {
        self.level.text_style()
    }
}
