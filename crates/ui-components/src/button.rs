//! Button component

use crate::common::{is_default_style, ComponentId, EventHandler, StyleProps};
use serde::{Deserialize, Serialize};
use ui_theme::{radius, Color, Theme, TokenResolver};

/// Button style variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Solid brand-colored button
    #[default]
    Primary,
    /// Transparent button with the theme border
    Secondary,
    /// Transparent button with a brand-colored border
    Outline,
}

/// Button sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    /// Small button (32px)
    Small,
    /// Medium button (40px)
    #[default]
    Medium,
    /// Large button (48px)
    Large,
}

impl ButtonSize {
    /// Fixed button height in pixels
    pub fn height(&self) -> f32 {
        match self {
            ButtonSize::Small => 32.0,
            ButtonSize::Medium => 40.0,
            ButtonSize::Large => 48.0,
        }
    }

    /// Border radius scaled with the size
    pub fn border_radius(&self) -> f32 {
        match self {
            ButtonSize::Small => radius::MD,
            ButtonSize::Medium => radius::LG,
            ButtonSize::Large => radius::XL,
        }
    }
}

/// Button component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Button text
    pub label: String,
    /// Button style variant
    #[serde(default)]
    pub variant: ButtonVariant,
    /// Button size
    #[serde(default)]
    pub size: ButtonSize,
    /// Whether the button is disabled
    #[serde(default)]
    pub disabled: bool,
    /// On press event handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_press: Option<EventHandler>,
    /// Additional style props
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: StyleProps,
}

impl Button {
    /// Create a new button with the given label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: None,
            label: label.into(),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            disabled: false,
            on_press: None,
            style: StyleProps::default(),
        }
    }

    /// Set the button ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the button variant
    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the button size
    pub fn with_size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set on press handler
    pub fn on_press(mut self, handler: impl Into<String>) -> Self {
        self.on_press = Some(handler.into());
        self
    }

    /// Set custom style
    pub fn with_style(mut self, style: StyleProps) -> Self {
        self.style = style;
        self
    }

    /// Get the computed styles for this button based on theme
    pub fn computed_styles(&self, theme: &Theme) -> ButtonStyles {
        let resolve = |name: &str, fallback: &str| -> Color {
            theme.lookup(name).unwrap_or(fallback).to_string()
        };

        let (background, background_hover, background_press, text_color, border_color) =
            match self.variant {
                ButtonVariant::Primary => (
                    resolve("purple9", "#6b21a8"),
                    resolve("purple8", "#7e22ce"),
                    resolve("purple10", "#581c87"),
                    "#ffffff".to_string(),
                    None,
                ),
                ButtonVariant::Secondary => (
                    "transparent".to_string(),
                    theme.colors.background_hover.clone(),
                    theme.colors.background_press.clone(),
                    theme.colors.color.clone(),
                    Some(theme.colors.border_color.clone()),
                ),
                ButtonVariant::Outline => (
                    "transparent".to_string(),
                    resolve("purple1", "#faf5ff"),
                    resolve("purple2", "#f3e8ff"),
                    resolve("purple9", "#6b21a8"),
                    Some(resolve("purple9", "#6b21a8")),
                ),
            };

        let height = self.size.height();

        ButtonStyles {
            background,
            background_hover,
            background_press,
            text_color,
            border_width: if border_color.is_some() { 1.0 } else { 0.0 },
            border_color,
            height,
            padding_horizontal: height * 0.5,
            gap: height * 0.1,
            border_radius: self.size.border_radius(),
            opacity: if self.disabled { 0.5 } else { 1.0 },
        }
    }
}

/// Computed button styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonStyles {
    /// Background color
    pub background: Color,
    /// Background color on hover
    pub background_hover: Color,
    /// Background color while pressed
    pub background_press: Color,
    /// Text color
    pub text_color: Color,
    /// Border color (outline and secondary variants)
    pub border_color: Option<Color>,
    /// Border width
    pub border_width: f32,
    /// Fixed height
    pub height: f32,
    /// Horizontal padding
    pub padding_horizontal: f32,
    /// Gap between icon and text
    pub gap: f32,
    /// Border radius
    pub border_radius: f32,
    /// Opacity
    pub opacity: f32,
}
