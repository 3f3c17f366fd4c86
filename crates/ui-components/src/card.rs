//! Card component - grouped-content surface

use crate::common::{is_default_style, ComponentId, StyleProps};
use serde::{Deserialize, Serialize};
use ui_theme::{radius, spacing, Color, Theme, TokenResolver};

/// Card variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardVariant {
    /// Flat card with a border only
    #[default]
    Default,
    /// Card with a drop shadow
    Elevated,
}

/// A drop shadow definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    /// Shadow color
    pub color: Color,
    /// Horizontal offset
    pub offset_x: f32,
    /// Vertical offset
    pub offset_y: f32,
    /// Shadow opacity
    pub opacity: f32,
    /// Blur radius
    pub radius: f32,
    /// Android elevation value
    pub elevation: f32,
}

/// Card component properties
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Card variant
    #[serde(default)]
    pub variant: CardVariant,
    /// Style props
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: StyleProps,
}

impl Card {
    /// Create a flat card
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an elevated card
    pub fn elevated() -> Self {
        Self {
            variant: CardVariant::Elevated,
            ..Default::default()
        }
    }

    /// Set the variant
    pub fn with_variant(mut self, variant: CardVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set custom style
    pub fn with_style(mut self, style: StyleProps) -> Self {
        self.style = style;
        self
    }

    /// Get the computed styles for this card based on theme
    pub fn computed_styles(&self, theme: &Theme) -> CardStyles {
        let border_color = theme.lookup("gray6").unwrap_or("#d6d6d6").to_string();

        let shadow = match self.variant {
            CardVariant::Default => None,
            CardVariant::Elevated => Some(Shadow {
                color: "rgba(0, 0, 0, 0.15)".to_string(),
                offset_x: 0.0,
                offset_y: 2.0,
                opacity: 0.25,
                radius: 12.0,
                elevation: 15.0,
            }),
        };

        CardStyles {
            background: theme.colors.background.clone(),
            border_color,
            border_width: 2.0,
            border_radius: radius::LG,
            padding: spacing::SPACE_LG,
            gap: spacing::SPACE_SM,
            shadow,
        }
    }
}

/// Computed card styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardStyles {
    /// Background color
    pub background: Color,
    /// Border color
    pub border_color: Color,
    /// Border width
    pub border_width: f32,
    /// Border radius
    pub border_radius: f32,
    /// Inner padding
    pub padding: f32,
    /// Gap between children
    pub gap: f32,
    /// Drop shadow (elevated variant only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
}
