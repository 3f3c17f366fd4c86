//! Gradient text component
//!
//! Text filled with a gradient instead of a solid color. Web hosts clip a
//! background gradient to the glyphs (`background-clip: text` with a
//! transparent fill); native hosts mask a gradient fill with the text
//! shape. Unlike the gradient fill container, text never stretches its
//! color stops: the glyph run is the visible area, so stops map straight
//! to `location * 100%`.

use crate::common::{is_default_style, ComponentId, StyleProps};
use crate::gradient::{DEFAULT_COLORS, DEFAULT_LOCATIONS};
use crate::text::TextSize;
use serde::{Deserialize, Serialize};
use ui_gradient::render::RenderStrategy;
use ui_gradient::{
    build_gradient_string, css_projection, resolve_color, Dimensions, GradientError,
    GradientFrame, GradientPaint, GradientPoint, PointInput, Result,
};
use ui_theme::TokenResolver;

/// Gradient text component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientText {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Text content
    pub content: String,
    /// Size on the text scale
    #[serde(default)]
    pub size: TextSize,
    /// Color stops (token references or literals)
    pub colors: Vec<String>,
    /// Stop locations in `[0, 1]`, same length as `colors`
    pub locations: Vec<f32>,
    /// Gradient line start, normalized coordinates
    pub start: GradientPoint,
    /// Gradient line end
    pub end: GradientPoint,
    /// Style props
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: StyleProps,
}

impl GradientText {
    /// Create gradient text with the default brand sweep.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: None,
            content: content.into(),
            size: TextSize::default(),
            colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
            locations: DEFAULT_LOCATIONS.to_vec(),
            start: GradientPoint::new(0.0, 1.0),
            end: GradientPoint::new(1.0, 0.0),
            style: StyleProps::default(),
        }
    }

    /// Replace the color stops; colors and locations travel together.
    pub fn stops(mut self, colors: Vec<String>, locations: Vec<f32>) -> Result<Self> {
        if !locations.is_empty() && locations.len() != colors.len() {
            return Err(GradientError::StopCountMismatch {
                colors: colors.len(),
                locations: locations.len(),
            });
        }
        self.colors = colors;
        self.locations = locations;
        Ok(self)
    }

    /// Set the gradient line start. Accepts `{x, y}` or `[x, y]` form.
    pub fn with_start(mut self, start: impl Into<PointInput>) -> Self {
        self.start = start.into().into();
        self
    }

    /// Set the gradient line end.
    pub fn with_end(mut self, end: impl Into<PointInput>) -> Self {
        self.end = end.into().into();
        self
    }

    /// Set the text size
    pub fn with_size(mut self, size: TextSize) -> Self {
        self.size = size;
        self
    }

    /// Web styles: the gradient clipped to the glyphs.
    ///
    /// The angle comes from the start/end direction alone (unit box), with
    /// no stop stretching.
    pub fn web_styles(&self, resolver: &dyn TokenResolver) -> Result<GradientTextStyles> {
        let colors: Vec<String> = self
            .effective_colors()
            .iter()
            .map(|c| resolve_color(c, resolver))
            .collect();
        let unit = Dimensions {
            width: 1.0,
            height: 1.0,
        };
        let angle = css_projection(self.start, self.end, unit).angle;
        let background = build_gradient_string(angle, &colors, &self.locations, 1.0)?;
        Ok(GradientTextStyles::Web(WebTextStyles {
            background,
            background_clip: "text".to_string(),
            webkit_text_fill_color: "transparent".to_string(),
        }))
    }

    /// Native styles: a gradient fill to be masked by the text shape.
    pub fn native_styles(
        &self,
        strategy: &dyn RenderStrategy,
        resolver: &dyn TokenResolver,
    ) -> Result<GradientTextStyles> {
        let colors = self.effective_colors();
        let frame = GradientFrame {
            start: self.start,
            end: self.end,
            colors: &colors,
            locations: &self.locations,
            dimensions: None,
            animated_angle: None,
        };
        Ok(GradientTextStyles::Native {
            fill: strategy.paint(&frame, resolver)?,
        })
    }

    /// The raw color refs, degraded to a black-to-white fallback when empty.
    fn effective_colors(&self) -> Vec<String> {
        if self.colors.is_empty() {
            tracing::warn!("gradient text has no colors, using fallback stops");
            return vec!["#000000".to_string(), "#ffffff".to_string()];
        }
        self.colors.clone()
    }
}

/// Platform gradient-text styling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "platform", rename_all = "camelCase")]
pub enum GradientTextStyles {
    /// Web: background gradient clipped to the glyphs
    Web(WebTextStyles),
    /// Native: gradient fill masked by the text shape
    Native {
        /// The gradient fill behind the text mask
        fill: GradientPaint,
    },
}

/// CSS properties for web gradient text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebTextStyles {
    /// `background` value
    pub background: String,
    /// `background-clip` value
    pub background_clip: String,
    /// `-webkit-text-fill-color` value
    pub webkit_text_fill_color: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ui_gradient::NativeRenderer;
    use ui_theme::{get_theme, ThemeName};

    #[test]
    fn test_web_styles_clip_to_text() {
        let theme = get_theme(ThemeName::Light);
        let styles = GradientText::new("Spectra").web_styles(&theme).unwrap();
        let GradientTextStyles::Web(web) = styles else {
            panic!("expected web styles");
        };
        // Default bottom-left to top-right sweep is 45 degrees; stops are
        // unstretched.
        assert_eq!(
            web.background,
            "linear-gradient(45deg, #4c1d95 0%, #db2777 50%, #dc2626 100%)"
        );
        assert_eq!(web.background_clip, "text");
        assert_eq!(web.webkit_text_fill_color, "transparent");
    }

    #[test]
    fn test_web_angle_follows_points() {
        let theme = get_theme(ThemeName::Light);
        let styles = GradientText::new("Down")
            .with_start([0.0, 0.0])
            .with_end([0.0, 1.0])
            .web_styles(&theme)
            .unwrap();
        let GradientTextStyles::Web(web) = styles else {
            panic!("expected web styles");
        };
        // Top to bottom is 180 degrees in the CSS convention.
        assert!(web.background.starts_with("linear-gradient(180deg"));
    }

    #[test]
    fn test_native_styles_carry_fill() {
        let theme = get_theme(ThemeName::Light);
        let styles = GradientText::new("Spectra")
            .native_styles(&NativeRenderer, &theme)
            .unwrap();
        let GradientTextStyles::Native { fill } = styles else {
            panic!("expected native styles");
        };
        let GradientPaint::Native { start, colors, .. } = fill else {
            panic!("expected native paint");
        };
        assert_eq!(start, GradientPoint::new(0.0, 1.0));
        assert_eq!(colors[0], "#4c1d95");
    }

    #[test]
    fn test_stops_are_co_required() {
        let err = GradientText::new("x")
            .stops(vec!["#000".into()], vec![0.0, 1.0])
            .unwrap_err();
        assert!(matches!(err, GradientError::StopCountMismatch { .. }));
    }
}
