//! Text component - body text with the size scale

use crate::common::{is_default_style, ComponentId, StyleProps};
use serde::{Deserialize, Serialize};
use ui_theme::typography::{font_size, font_weight};
use ui_theme::{Color, TextStyle};

/// Text size scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    /// Extra large text (20px)
    XLarge,
    /// Large text (18px)
    Large,
    /// Body text (16px, default)
    #[default]
    Body,
    /// Small text (14px)
    Small,
    /// Caption text (12px)
    Caption,
    /// Tiny text (11px)
    Tiny,
}

impl TextSize {
    /// Font size in pixels
    pub fn font_size(&self) -> f32 {
        match self {
            TextSize::XLarge => font_size::XLARGE,
            TextSize::Large => font_size::LARGE,
            TextSize::Body => font_size::BODY,
            TextSize::Small => font_size::SMALL,
            TextSize::Caption => font_size::CAPTION,
            TextSize::Tiny => font_size::TINY,
        }
    }
}

/// Text component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Text {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Text content
    pub content: String,
    /// Size on the text scale
    #[serde(default)]
    pub size: TextSize,
    /// Text color override (defaults to the theme text color)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Whether text is selectable
    #[serde(default)]
    pub selectable: bool,
    /// Maximum number of lines (0 = unlimited)
    #[serde(default)]
    pub lines: u32,
    /// Style props
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: StyleProps,
}

impl Text {
    /// Create body text
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: None,
            content: content.into(),
            size: TextSize::Body,
            color: None,
            selectable: false,
            lines: 0,
            style: StyleProps::default(),
        }
    }

    /// Create caption text
    pub fn caption(content: impl Into<String>) -> Self {
        Self {
            size: TextSize::Caption,
            ..Self::new(content)
        }
    }

    /// Set size
    pub fn with_size(mut self, size: TextSize) -> Self {
        self.size = size;
        self
    }

    /// Set text color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set maximum lines
    pub fn with_lines(mut self, lines: u32) -> Self {
        self.lines = lines;
        self
    }

    /// Make text selectable
    pub fn selectable(mut self) -> Self {
        self.selectable = true;
        self
    }

    /// The typography style: regular weight, readable 1.5 line height.
    pub fn text_style(&self) -> TextStyle {
        TextStyle::new(self.size.font_size(), font_weight::REGULAR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_scale() {
        assert_eq!(TextSize::XLarge.font_size(), 20.0);
        assert_eq!(TextSize::Large.font_size(), 18.0);
        assert_eq!(TextSize::Body.font_size(), 16.0);
        assert_eq!(TextSize::Small.font_size(), 14.0);
        assert_eq!(TextSize::Caption.font_size(), 12.0);
        assert_eq!(TextSize::Tiny.font_size(), 11.0);
    }

    #[test]
    fn test_body_defaults() {
        let style = Text::new("hello").text_style();
        assert_eq!(style.font_size, 16.0);
        assert_eq!(style.font_weight, 400);
        assert_eq!(style.line_height, 1.5);
    }

    #[test]
    fn test_caption_constructor() {
        assert_eq!(Text::caption("fine print").size, TextSize::Caption);
    }

    #[test]
    fn test_serialization_round_trip() {
        let text = Text::new("hello")
            .with_size(TextSize::Small)
            .with_color("$gray11")
            .with_lines(2);
        let json = serde_json::to_string(&text).unwrap();
        assert!(json.contains("\"size\":\"small\""));
        let back: Text = serde_json::from_str(&json).unwrap();
        assert_eq!(back, text);
    }
}
