//! Container component - the universal layout primitive

use crate::common::{
    is_default_a11y, is_default_style, AccessibilityProps, Alignment, ComponentId, FlexDirection,
    JustifyContent, Spacing, StyleProps,
};
use serde::{Deserialize, Serialize};

/// Layout container with flex properties.
///
/// The fundamental building block for layouts: any wrapper, row, column,
/// or section. It carries no default styling of its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Flex direction
    #[serde(default)]
    pub direction: FlexDirection,
    /// Justify content (main axis alignment)
    #[serde(default)]
    pub justify: JustifyContent,
    /// Align items (cross axis alignment)
    #[serde(default)]
    pub align: Alignment,
    /// Gap between children
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f32>,
    /// Whether to wrap children
    #[serde(default)]
    pub wrap: bool,
    /// Style props
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: StyleProps,
    /// Accessibility props
    #[serde(default, skip_serializing_if = "is_default_a11y")]
    pub accessibility: AccessibilityProps,
}

impl Container {
    /// Create a new container
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a row container
    pub fn row() -> Self {
        Self {
            direction: FlexDirection::Row,
            ..Default::default()
        }
    }

    /// Create a column container
    pub fn column() -> Self {
        Self {
            direction: FlexDirection::Column,
            ..Default::default()
        }
    }

    /// Set flex direction
    pub fn with_direction(mut self, direction: FlexDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Set justify content
    pub fn with_justify(mut self, justify: JustifyContent) -> Self {
        self.justify = justify;
        self
    }

    /// Set align items
    pub fn with_align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Set gap
    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = Some(gap);
        self
    }

    /// Enable wrapping
    pub fn wrap(mut self) -> Self {
        self.wrap = true;
        self
    }

    /// Set style
    pub fn with_style(mut self, style: StyleProps) -> Self {
        self.style = style;
        self
    }

    /// Set padding
    pub fn with_padding(mut self, padding: Spacing) -> Self {
        self.style.padding = Some(padding);
        self
    }

    /// Set background color
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.style.background_color = Some(color.into());
        self
    }

    /// Set accessibility props
    pub fn with_accessibility(mut self, a11y: AccessibilityProps) -> Self {
        self.accessibility = a11y;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_and_column_constructors() {
        assert_eq!(Container::row().direction, FlexDirection::Row);
        assert_eq!(Container::column().direction, FlexDirection::Column);
    }

    #[test]
    fn test_builder_chain() {
        let c = Container::column()
            .with_gap(8.0)
            .with_justify(JustifyContent::SpaceBetween)
            .with_padding(Spacing::uniform(16.0))
            .with_background("$background");
        assert_eq!(c.gap, Some(8.0));
        assert_eq!(c.justify, JustifyContent::SpaceBetween);
        assert_eq!(c.style.padding, Some(Spacing::Uniform(16.0)));
        assert_eq!(c.style.background_color.as_deref(), Some("$background"));
    }

    #[test]
    fn test_default_container_serializes_compactly() {
        let json = serde_json::to_string(&Container::new()).unwrap();
        // No style or accessibility keys when unset.
        assert!(!json.contains("style"));
        assert!(!json.contains("accessibility"));
        assert!(json.contains("\"direction\":\"row\""));
    }
}
