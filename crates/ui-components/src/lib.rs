//! Component library for Spectra UI
//!
//! Components are serializable prop structs rendered by a host (webview or
//! native view tree). Each component provides:
//!
//! - Type-safe props with builder patterns
//! - Theme-aware style resolution through [`ui_theme`]
//! - Accessibility attributes
//! - Event handling hooks (string handler identifiers)
//!
//! # Available Components
//!
//! - [`Container`] - Layout container with flex properties
//! - [`Button`] - Interactive button with primary/secondary/outline variants
//! - [`Card`] - Grouped-content surface, flat or elevated
//! - [`Heading`] - Semantic headings h1-h6
//! - [`Text`] - Body text with the size scale
//! - [`Input`] - Text input with focus/hover border states
//! - [`Gradient`] - Linear gradient fill, optionally rotating
//! - [`GradientBorderView`] - Content wrapped in a gradient border
//! - [`GradientText`] - Gradient-masked text

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod button;
pub mod card;
pub mod common;
pub mod container;
pub mod gradient;
pub mod gradient_border;
pub mod gradient_text;
pub mod heading;
pub mod input;
pub mod text;

pub use button::{Button, ButtonSize, ButtonStyles, ButtonVariant};
pub use card::{Card, CardStyles, CardVariant, Shadow};
pub use common::{
    AccessibilityProps, Alignment, ComponentId, Dimension, EventHandler, FlexDirection,
    JustifyContent, Spacing, StyleProps,
};
pub use container::Container;
pub use gradient::{Gradient, GradientProps};
pub use gradient_border::{GradientBorderOverlay, GradientBorderView, WebBorderOverlay};
pub use gradient_text::{GradientText, GradientTextStyles, WebTextStyles};
pub use heading::{Heading, HeadingLevel};
pub use input::{Input, InputState, InputStyles};
pub use text::{Text, TextSize};
