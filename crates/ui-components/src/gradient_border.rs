//! Gradient border component
//!
//! Wraps content with a gradient-colored border. The border is drawn by an
//! absolutely-positioned overlay rather than a real border, so the wrapper
//! compensates by widening its padding by the border width; the content
//! then sits exactly where it would with a solid border.
//!
//! Web hosts draw the overlay with a border-box gradient masked down to the
//! border ring (`mask-composite: exclude`); native hosts mask a gradient
//! fill with the border shape.

use crate::common::{is_default_style, ComponentId, Spacing, StyleProps};
use crate::gradient::{DEFAULT_COLORS, DEFAULT_LOCATIONS};
use serde::{Deserialize, Serialize};
use ui_gradient::render::RenderStrategy;
use ui_gradient::{GradientFrame, GradientPaint, GradientPoint, Result};
use ui_theme::TokenResolver;

/// CSS mask pair that keeps only the border ring of the overlay.
const BORDER_MASK: &str = "linear-gradient(#fff 0 0) padding-box, linear-gradient(#fff 0 0)";

/// Gradient border component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientBorderView {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Border width in pixels
    pub border_width: f32,
    /// Border radius in pixels
    pub border_radius: f32,
    /// Style props for the wrapper
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: StyleProps,
}

impl Default for GradientBorderView {
    fn default() -> Self {
        Self {
            id: None,
            border_width: 1.0,
            border_radius: 0.0,
            style: StyleProps::default(),
        }
    }
}

impl GradientBorderView {
    /// Create a gradient border with the default 1px width.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the border width
    pub fn with_border_width(mut self, width: f32) -> Self {
        self.border_width = width;
        self
    }

    /// Set the border radius
    pub fn with_border_radius(mut self, radius: f32) -> Self {
        self.border_radius = radius;
        self
    }

    /// Set wrapper style props
    pub fn with_style(mut self, style: StyleProps) -> Self {
        self.style = style;
        self
    }

    /// The wrapper style with border compensation applied: each side's
    /// padding grows by the border width, and the real border is removed
    /// so only the overlay draws one.
    pub fn content_style(&self) -> StyleProps {
        let (top, right, bottom, left) = self
            .style
            .padding
            .unwrap_or(Spacing::Uniform(0.0))
            .sides();
        let bw = self.border_width;

        StyleProps {
            padding: Some(Spacing::individual(
                top + bw,
                right + bw,
                bottom + bw,
                left + bw,
            )),
            border_width: None,
            border_color: None,
            border_radius: Some(self.border_radius),
            ..self.style.clone()
        }
    }

    /// Build the border overlay through the given render strategy.
    ///
    /// The overlay always uses the brand sweep at a fixed diagonal; both
    /// platforms share the same stop locations.
    pub fn overlay(
        &self,
        strategy: &dyn RenderStrategy,
        resolver: &dyn TokenResolver,
    ) -> Result<GradientBorderOverlay> {
        let colors: Vec<String> = DEFAULT_COLORS.iter().map(|c| c.to_string()).collect();
        let frame = GradientFrame {
            start: GradientPoint::new(0.0, 1.0),
            end: GradientPoint::new(1.0, 0.0),
            colors: &colors,
            locations: DEFAULT_LOCATIONS,
            dimensions: None,
            animated_angle: None,
        };

        let overlay = match strategy.paint(&frame, resolver)? {
            GradientPaint::Css { background_image } => {
                GradientBorderOverlay::Web(WebBorderOverlay {
                    background: format!("{} border-box", background_image),
                    mask: BORDER_MASK.to_string(),
                    mask_composite: "exclude".to_string(),
                    border_width: self.border_width,
                    border_radius: self.border_radius,
                })
            }
            fill @ GradientPaint::Native { .. } => GradientBorderOverlay::Native {
                border_width: self.border_width,
                border_radius: self.border_radius,
                fill,
            },
        };
        Ok(overlay)
    }
}

/// Platform border-overlay instructions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "platform", rename_all = "camelCase")]
pub enum GradientBorderOverlay {
    /// Web: CSS gradient masked to the border ring
    Web(WebBorderOverlay),
    /// Native: gradient fill masked by the border shape
    #[serde(rename_all = "camelCase")]
    Native {
        /// Mask border width
        border_width: f32,
        /// Mask border radius
        border_radius: f32,
        /// The gradient fill behind the mask
        fill: GradientPaint,
    },
}

/// CSS properties for the web border overlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebBorderOverlay {
    /// `background` value: the gradient painted over the border box
    pub background: String,
    /// `mask` value keeping only the border ring
    pub mask: String,
    /// `mask-composite` value
    pub mask_composite: String,
    /// Width of the transparent border the mask cuts around
    pub border_width: f32,
    /// Overlay border radius
    pub border_radius: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ui_gradient::{NativeRenderer, WebRenderer};
    use ui_theme::{get_theme, ThemeName};

    #[test]
    fn test_padding_compensation_uniform() {
        let view = GradientBorderView::new()
            .with_border_width(2.0)
            .with_style(StyleProps {
                padding: Some(Spacing::uniform(16.0)),
                ..Default::default()
            });
        let style = view.content_style();
        assert_eq!(
            style.padding,
            Some(Spacing::individual(18.0, 18.0, 18.0, 18.0))
        );
        assert!(style.border_width.is_none());
    }

    #[test]
    fn test_padding_compensation_without_user_padding() {
        let style = GradientBorderView::new().content_style();
        // Default 1px border becomes 1px padding on every side.
        assert_eq!(style.padding, Some(Spacing::individual(1.0, 1.0, 1.0, 1.0)));
    }

    #[test]
    fn test_web_overlay_strings() {
        let theme = get_theme(ThemeName::Light);
        let view = GradientBorderView::new()
            .with_border_width(2.0)
            .with_border_radius(16.0);
        let overlay = view.overlay(&WebRenderer, &theme).unwrap();
        let GradientBorderOverlay::Web(web) = overlay else {
            panic!("expected web overlay");
        };
        // Brand sweep resolved, painted over the border box at the
        // unmeasured 45 degree fallback.
        assert_eq!(
            web.background,
            "linear-gradient(45deg, #4c1d95 0%, #db2777 50%, #dc2626 100%) border-box"
        );
        assert_eq!(
            web.mask,
            "linear-gradient(#fff 0 0) padding-box, linear-gradient(#fff 0 0)"
        );
        assert_eq!(web.mask_composite, "exclude");
        assert_eq!(web.border_width, 2.0);
        assert_eq!(web.border_radius, 16.0);
    }

    #[test]
    fn test_native_overlay_masks_a_gradient_fill() {
        let theme = get_theme(ThemeName::Light);
        let view = GradientBorderView::new().with_border_radius(12.0);
        let overlay = view.overlay(&NativeRenderer, &theme).unwrap();
        let GradientBorderOverlay::Native {
            border_width,
            border_radius,
            fill,
        } = overlay
        else {
            panic!("expected native overlay");
        };
        assert_eq!(border_width, 1.0);
        assert_eq!(border_radius, 12.0);
        let GradientPaint::Native { colors, locations, .. } = fill else {
            panic!("expected native fill");
        };
        assert_eq!(colors, vec!["#4c1d95", "#db2777", "#dc2626"]);
        assert_eq!(locations, vec![0.0, 0.5, 1.0]);
    }
}
