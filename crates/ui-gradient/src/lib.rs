//! Gradient geometry and animation core for Spectra UI
//!
//! This crate is the rendering-math heart of the gradient component family:
//!
//! - [`geometry`] - converts rotation angles to normalized gradient
//!   start/end points (and back to CSS angles with a stretch ratio that
//!   keeps the blended band width constant across aspect ratios)
//! - [`color`] - resolves symbolic color tokens through an injected
//!   [`TokenResolver`](ui_theme::TokenResolver)
//! - [`css`] - synthesizes `linear-gradient(...)` strings with stretched
//!   color stops for the web rendering path
//! - [`dimensions`] - tracks the rendered box size from props or layout
//!   measurement events
//! - [`motion`] - the reduced-motion preference boundary
//! - [`animation`] - the frame-driven rotation state machine
//! - [`render`] - the platform render strategy (web CSS vs. native
//!   gradient primitive), selected at component construction
//!
//! Everything here is single-threaded and frame-driven: state belongs to
//! one component instance and is only mutated through its own tick and
//! layout calls. The host supplies the frame schedule, the theme resolver,
//! and the reduced-motion signal.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod animation;
pub mod color;
pub mod css;
pub mod dimensions;
pub mod geometry;
pub mod motion;
pub mod render;

use thiserror::Error;

/// Gradient pipeline error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GradientError {
    /// The colors and locations arrays must be the same length
    #[error("stop count mismatch: {colors} colors, {locations} locations")]
    StopCountMismatch {
        /// Number of colors supplied
        colors: usize,
        /// Number of stop locations supplied
        locations: usize,
    },

    /// A gradient needs at least one color stop
    #[error("gradient has no color stops")]
    NoStops,
}

/// Result type for gradient operations
pub type Result<T> = std::result::Result<T, GradientError>;

// Re-export commonly used types
pub use animation::{RotationAnimator, DEFAULT_ROTATION_DURATION_SECS, DEFAULT_SPEED_MULTIPLIER};
pub use color::{resolve_color, TOKEN_PREFIX};
pub use css::build_gradient_string;
pub use dimensions::{DimensionTracker, Dimensions};
pub use geometry::{
    angle_to_points, css_projection, visual_speed_multiplier, CssProjection, GradientLine,
    GradientPoint, PointInput,
};
pub use motion::{MotionPreference, SystemMotion};
pub use render::{GradientFrame, GradientPaint, NativeRenderer, RenderStrategy, WebRenderer};
