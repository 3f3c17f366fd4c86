//! Input component - single-line text entry

use crate::common::{is_default_style, ComponentId, EventHandler, StyleProps};
use serde::{Deserialize, Serialize};
use ui_theme::{radius, Color, Theme, TokenResolver};

/// Interaction state driving the border color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputState {
    /// Not hovered or focused
    #[default]
    Idle,
    /// Pointer over the field
    Hovered,
    /// Field has keyboard focus (wins over hover)
    Focused,
}

/// Input component properties
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Placeholder text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Current value
    #[serde(default)]
    pub value: String,
    /// Whether the value is masked (password entry)
    #[serde(default)]
    pub secure: bool,
    /// Whether the input is disabled
    #[serde(default)]
    pub disabled: bool,
    /// Current interaction state
    #[serde(default)]
    pub state: InputState,
    /// On change handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_change: Option<EventHandler>,
    /// Style props
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: StyleProps,
}

impl Input {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a password input
    pub fn password() -> Self {
        Self {
            secure: true,
            ..Self::new()
        }
    }

    /// Set placeholder text
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the current value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set disabled
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Set the interaction state
    pub fn with_state(mut self, state: InputState) -> Self {
        self.state = state;
        self
    }

    /// Set on change handler
    pub fn on_change(mut self, handler: impl Into<String>) -> Self {
        self.on_change = Some(handler.into());
        self
    }

    /// Get the computed styles for this input based on theme.
    ///
    /// Focus turns the border brand-colored; hover darkens it one step.
    pub fn computed_styles(&self, theme: &Theme) -> InputStyles {
        let border_color = match self.state {
            InputState::Focused => theme.lookup("purple9").unwrap_or("#6b21a8"),
            InputState::Hovered => theme.lookup("gray7").unwrap_or("#c7c7c7"),
            InputState::Idle => theme.lookup("gray6").unwrap_or("#d6d6d6"),
        }
        .to_string();

        InputStyles {
            background: theme.colors.background.clone(),
            text_color: theme.colors.color.clone(),
            border_color,
            border_width: 2.0,
            border_radius: radius::LG,
            padding_horizontal: 12.0,
            opacity: if self.disabled { 0.5 } else { 1.0 },
        }
    }
}

/// Computed input styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputStyles {
    /// Background color
    pub background: Color,
    /// Text color
    pub text_color: Color,
    /// Border color for the current state
    pub border_color: Color,
    /// Border width
    pub border_width: f32,
    /// Border radius
    pub border_radius: f32,
    /// Horizontal padding
    pub padding_horizontal: f32,
    /// Opacity
    pub opacity: f32,
}
