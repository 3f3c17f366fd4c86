//! CSS linear-gradient synthesis
//!
//! Builds the `linear-gradient(...)` background-image string for the web
//! rendering path, stretching stop locations by the ratio computed in
//! [`css_projection`](crate::geometry::css_projection) so the blended band
//! width stays constant as the gradient rotates. Stretched stops are
//! re-centered on the midpoint of the gradient line and may extend past
//! 0% / 100%.

use crate::GradientError;

/// Build a CSS linear-gradient string with stretched color stops.
///
/// Colors must already be resolved to literal values. When `locations` is
/// empty, stops are spaced evenly; otherwise it must be the same length as
/// `colors` or the call fails with
/// [`GradientError::StopCountMismatch`].
pub fn build_gradient_string(
    css_angle: f32,
    colors: &[String],
    locations: &[f32],
    stretch_ratio: f32,
) -> Result<String, GradientError> {
    if colors.is_empty() {
        return Err(GradientError::NoStops);
    }
    if !locations.is_empty() && locations.len() != colors.len() {
        return Err(GradientError::StopCountMismatch {
            colors: colors.len(),
            locations: locations.len(),
        });
    }

    // Map [0, 1] stop locations to [offset, offset + span]; a ratio above 1
    // widens the range past 0%..100% while keeping it centered.
    let span = 100.0 * stretch_ratio;
    let offset = (100.0 - span) / 2.0;
    let even_divisor = (colors.len() - 1).max(1) as f32;

    let stops = colors
        .iter()
        .enumerate()
        .map(|(i, color)| {
            let base = if locations.is_empty() {
                i as f32 / even_divisor
            } else {
                locations[i]
            };
            let stretched = offset + base * span;
            format!("{} {}%", color, stretched)
        })
        .collect::<Vec<_>>()
        .join(", ");

    Ok(format!("linear-gradient({}deg, {})", css_angle, stops))
}
