//! Angle/point geometry for gradient lines
//!
//! Angles are measured in degrees, clockwise, with 0° pointing up (negative
//! y). Points are normalized to `[0, 1]` box coordinates with the origin at
//! the top-left. The gradient line always passes through the box center
//! `(0.5, 0.5)`.
//!
//! Two corrections keep the rendered gradient visually stable:
//!
//! - [`angle_to_points`] rescales the direction vector so the pixel-space
//!   gradient line always spans the box diagonal, keeping the blended band
//!   width constant across aspect ratios and angles.
//! - [`css_projection`] computes the stretch ratio a CSS `linear-gradient`
//!   needs to widen its color stops, because CSS always paints its gradient
//!   line across the perpendicular span rather than the diagonal.

use crate::dimensions::Dimensions;
use serde::{Deserialize, Serialize};

/// A point on the gradient axis, in normalized `[0, 1]` box coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GradientPoint {
    /// Horizontal position (0 = left edge, 1 = right edge)
    pub x: f32,
    /// Vertical position (0 = top edge, 1 = bottom edge)
    pub y: f32,
}

impl GradientPoint {
    /// Create a point from normalized coordinates.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Accepted input forms for a gradient point: `{x, y}` or `[x, y]`.
///
/// Normalized into [`GradientPoint`] at the public boundary; nothing past
/// the component constructors sees this union type.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointInput {
    /// Object form with named fields
    Named {
        /// Horizontal position
        x: f32,
        /// Vertical position
        y: f32,
    },
    /// Ordered pair form
    Pair([f32; 2]),
}

impl From<PointInput> for GradientPoint {
    fn from(input: PointInput) -> Self {
        match input {
            PointInput::Named { x, y } => GradientPoint::new(x, y),
            PointInput::Pair([x, y]) => GradientPoint::new(x, y),
        }
    }
}

impl From<[f32; 2]> for PointInput {
    fn from(p: [f32; 2]) -> Self {
        PointInput::Pair(p)
    }
}

impl From<(f32, f32)> for PointInput {
    fn from((x, y): (f32, f32)) -> Self {
        PointInput::Named { x, y }
    }
}

impl From<GradientPoint> for PointInput {
    fn from(p: GradientPoint) -> Self {
        PointInput::Named { x: p.x, y: p.y }
    }
}

/// The start and end of a gradient line.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientLine {
    /// Line start point
    pub start: GradientPoint,
    /// Line end point
    pub end: GradientPoint,
}

/// Converts an angle in degrees to gradient start and end points.
///
/// When both dimensions are known, the direction vector is rescaled so the
/// pixel-space gradient line length equals the box diagonal. Without this,
/// a steep line across a wide flat box compresses the blend band.
///
/// The resulting points are centered on `(0.5, 0.5)` and may fall outside
/// `[0, 1]`; render targets that clip must accept the overflow.
pub fn angle_to_points(angle_degrees: f32, dims: Option<Dimensions>) -> GradientLine {
    let rad = angle_degrees.to_radians();

    // Unit direction: 0 degrees points up, angles run clockwise.
    let x = rad.sin();
    let y = -rad.cos();

    let mut normalized_x = x;
    let mut normalized_y = y;

    if let Some(d) = dims {
        let reference_distance = d.diagonal();

        let width_x = d.width * x;
        let height_y = d.height * y;
        let unit_pixel_distance = (width_x * width_x + height_y * height_y).sqrt();

        // sin and cos are never simultaneously zero, so this only guards
        // against non-finite input; fall back to the unnormalized vector.
        if unit_pixel_distance > 0.0 {
            let scale = reference_distance / unit_pixel_distance;
            normalized_x = x * scale;
            normalized_y = y * scale;
        }
    }

    let length = 0.5;
    GradientLine {
        start: GradientPoint::new(0.5 - normalized_x * length, 0.5 - normalized_y * length),
        end: GradientPoint::new(0.5 + normalized_x * length, 0.5 + normalized_y * length),
    }
}

/// A gradient line projected into the CSS `linear-gradient` convention.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CssProjection {
    /// CSS angle in degrees (0 = to top, 90 = to right, clockwise)
    pub angle: f32,
    /// Factor the color stops must be stretched by so the blended band
    /// width matches the diagonal reference scale (>= 1 for lines through
    /// the center of the box)
    pub stretch_ratio: f32,
}

/// Converts normalized start/end points into a CSS angle and stretch ratio.
///
/// Both quantities come from one shared direction-vector computation so
/// they cannot disagree through rounding.
///
/// The stretch ratio is `diagonal / perpendicularSpan`, where the
/// perpendicular span is the box extent projected onto the axis
/// perpendicular to the gradient line - the true band width a CSS gradient
/// painter renders.
pub fn css_projection(start: GradientPoint, end: GradientPoint, dims: Dimensions) -> CssProjection {
    // Shared direction vector, in pixel space.
    let dx = (end.x - start.x) * dims.width;
    let dy = (end.y - start.y) * dims.height;

    // atan2 measures counter-clockwise from east; CSS measures clockwise
    // from north.
    let direction = (-dy).atan2(dx);
    let angle = 90.0 - direction.to_degrees();

    let perp = direction + std::f32::consts::FRAC_PI_2;
    let perpendicular_span = dims.width * perp.sin().abs() + dims.height * perp.cos().abs();
    let stretch_ratio = dims.diagonal() / perpendicular_span;

    CssProjection {
        angle,
        stretch_ratio,
    }
}

/// Calculates the speed multiplier that keeps rotation visually uniform.
///
/// A rotating gradient line sweeps visually faster when aligned with the
/// box's short axis. The multiplier is `(current / reference)^2` where
/// `current = sqrt((w sin t)^2 + (h cos t)^2)` and
/// `reference = sqrt((w^2 + h^2) / 2)`. The exponent 2 is a tuning constant
/// kept for visual parity; do not re-derive it.
pub fn visual_speed_multiplier(angle_degrees: f32, dims: Dimensions) -> f32 {
    let rad = angle_degrees.to_radians();

    let width_sin = dims.width * rad.sin();
    let height_cos = dims.height * rad.cos();
    let current_visual_speed = (width_sin * width_sin + height_cos * height_cos).sqrt();

    let reference_visual_speed =
        ((dims.width * dims.width + dims.height * dims.height) * 0.5).sqrt();

    if current_visual_speed > 0.0 && reference_visual_speed > 0.0 {
        let raw = current_visual_speed / reference_visual_speed;
        raw * raw
    } else {
        crate::animation::DEFAULT_SPEED_MULTIPLIER
    }
}
