//! Platform render strategies
//!
//! A gradient component carries a [`RenderStrategy`] chosen at
//! construction: web hosts paint with a synthesized CSS
//! `linear-gradient(...)` string, native hosts receive the normalized
//! points and resolved colors and hand them to their gradient primitive.
//! Both strategies consume the same [`GradientFrame`] snapshot, so every
//! geometry decision is made once, upstream of the platform split.

use serde::{Deserialize, Serialize};
use ui_theme::TokenResolver;

use crate::color::resolve_color;
use crate::css::build_gradient_string;
use crate::dimensions::Dimensions;
use crate::geometry::{css_projection, GradientPoint};
use crate::{GradientError, Result};

/// Fallback stop angle used before the first layout measurement lands.
const FALLBACK_ANGLE: f32 = 45.0;

/// One frame's worth of gradient state, borrowed from the owning
/// component.
///
/// `start`/`end` are the current gradient line (already animated if the
/// component rotates). `animated_angle` carries the rotation angle
/// separately so the web path can fall back to it when dimensions are
/// still unknown and the stretch projection cannot run yet.
#[derive(Debug, Clone, Copy)]
pub struct GradientFrame<'a> {
    /// Gradient line start, normalized box coordinates
    pub start: GradientPoint,
    /// Gradient line end, normalized box coordinates
    pub end: GradientPoint,
    /// Color stops; tokens are resolved by the strategy
    pub colors: &'a [String],
    /// Stop locations in `[0, 1]`; empty means evenly spaced
    pub locations: &'a [f32],
    /// Measured box size, if layout has reported one
    pub dimensions: Option<Dimensions>,
    /// Current rotation angle when the component animates
    pub animated_angle: Option<f32>,
}

/// Platform paint instructions, ready for the host to apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum GradientPaint {
    /// Web: a `background-image` value
    #[serde(rename_all = "camelCase")]
    Css {
        /// Full `linear-gradient(...)` string
        background_image: String,
    },
    /// Native: points and resolved stops for the platform gradient view
    #[serde(rename_all = "camelCase")]
    Native {
        /// Gradient line start
        start: GradientPoint,
        /// Gradient line end
        end: GradientPoint,
        /// Resolved color values
        colors: Vec<String>,
        /// Stop locations in `[0, 1]`
        locations: Vec<f32>,
    },
}

/// Turns a gradient frame into platform paint instructions.
pub trait RenderStrategy {
    /// Produce paint instructions for the frame.
    ///
    /// Fails with [`GradientError::StopCountMismatch`] when explicit
    /// locations disagree with the color count.
    fn paint(
        &self,
        frame: &GradientFrame<'_>,
        resolver: &dyn TokenResolver,
    ) -> Result<GradientPaint>;
}

/// Web strategy: synthesize a CSS `linear-gradient(...)` string.
///
/// The CSS angle and stop stretch come from [`css_projection`] once the
/// box size is known. Before the first layout, the animated angle (or a
/// neutral diagonal) is used with unstretched stops; the first layout
/// event repaints with the exact projection.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebRenderer;

impl RenderStrategy for WebRenderer {
    fn paint(
        &self,
        frame: &GradientFrame<'_>,
        resolver: &dyn TokenResolver,
    ) -> Result<GradientPaint> {
        check_stop_counts(frame)?;

        let (angle, stretch_ratio) = match frame.dimensions {
            Some(dims) => {
                let proj = css_projection(frame.start, frame.end, dims);
                (proj.angle, proj.stretch_ratio)
            }
            None => (frame.animated_angle.unwrap_or(FALLBACK_ANGLE), 1.0),
        };

        let (colors, locations) = resolve_stops(frame, resolver);
        let background_image = build_gradient_string(angle, &colors, &locations, stretch_ratio)?;
        Ok(GradientPaint::Css { background_image })
    }
}

/// Native strategy: pass points and resolved stops straight through.
///
/// The points already carry the diagonal normalization from the
/// geometry layer, so the native gradient view renders them as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeRenderer;

impl RenderStrategy for NativeRenderer {
    fn paint(
        &self,
        frame: &GradientFrame<'_>,
        resolver: &dyn TokenResolver,
    ) -> Result<GradientPaint> {
        check_stop_counts(frame)?;

        let (colors, locations) = resolve_stops(frame, resolver);
        Ok(GradientPaint::Native {
            start: frame.start,
            end: frame.end,
            colors,
            locations,
        })
    }
}

fn check_stop_counts(frame: &GradientFrame<'_>) -> Result<()> {
    if frame.colors.is_empty() {
        return Err(GradientError::NoStops);
    }
    if !frame.locations.is_empty() && frame.locations.len() != frame.colors.len() {
        return Err(GradientError::StopCountMismatch {
            colors: frame.colors.len(),
            locations: frame.locations.len(),
        });
    }
    Ok(())
}

/// Resolve color tokens and materialize evenly spaced locations when none
/// were given, so both platform paths emit the same stop list.
fn resolve_stops(frame: &GradientFrame<'_>, resolver: &dyn TokenResolver) -> (Vec<String>, Vec<f32>) {
    let colors: Vec<String> = frame
        .colors
        .iter()
        .map(|c| resolve_color(c, resolver))
        .collect();

    let locations = if frame.locations.is_empty() {
        let divisor = (colors.len() - 1).max(1) as f32;
        (0..colors.len()).map(|i| i as f32 / divisor).collect()
    } else {
        frame.locations.to_vec()
    };

    (colors, locations)
}
