//! Gradient fill component
//!
//! A container painted with a linear gradient, optionally rotating. The
//! component owns its runtime state (measured dimensions and the rotation
//! animator); the host drives it with layout events and frame ticks and
//! asks for paint instructions through a [`RenderStrategy`] chosen at
//! construction time.
//!
//! Default look: the brand sweep `$purple11 -> $pink7 -> $red7` from
//! bottom-left to top-right.

use crate::common::{is_default_style, ComponentId, StyleProps};
use serde::{Deserialize, Serialize};
use ui_gradient::{
    angle_to_points, DimensionTracker, GradientError, GradientFrame, GradientLine, GradientPaint,
    GradientPoint, MotionPreference, PointInput, Result, RotationAnimator,
};
use ui_gradient::render::RenderStrategy;
use ui_theme::TokenResolver;

/// Default color stops (brand sweep)
pub const DEFAULT_COLORS: &[&str] = &["$purple11", "$pink7", "$red7"];

/// Default stop locations
pub const DEFAULT_LOCATIONS: &[f32] = &[0.0, 0.5, 1.0];

/// Serializable gradient props, the wire half of the component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientProps {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Color stops (token references or literals)
    pub colors: Vec<String>,
    /// Stop locations in `[0, 1]`, same length as `colors`
    pub locations: Vec<f32>,
    /// Gradient line start, normalized box coordinates
    pub start: GradientPoint,
    /// Gradient line end
    pub end: GradientPoint,
    /// Whether the gradient rotates
    #[serde(default)]
    pub animated: bool,
    /// Seconds per full rotation
    pub rotation_duration: f32,
    /// Starting angle in degrees
    pub initial_angle: f32,
    /// Style props
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: StyleProps,
}

impl Default for GradientProps {
    fn default() -> Self {
        Self {
            id: None,
            colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
            locations: DEFAULT_LOCATIONS.to_vec(),
            start: GradientPoint::new(0.0, 1.0),
            end: GradientPoint::new(1.0, 0.0),
            animated: false,
            rotation_duration: ui_theme::duration::GRADIENT_ROTATION,
            initial_angle: 0.0,
            style: StyleProps::default(),
        }
    }
}

/// Gradient fill component: props plus the runtime state the host drives.
#[derive(Debug, Clone)]
pub struct Gradient {
    props: GradientProps,
    tracker: DimensionTracker,
    animator: RotationAnimator,
}

impl Default for Gradient {
    fn default() -> Self {
        Self::new()
    }
}

impl Gradient {
    /// Create a gradient with the default brand stops.
    pub fn new() -> Self {
        Self::from_props(GradientProps::default())
    }

    /// Create a gradient from explicit props.
    pub fn from_props(props: GradientProps) -> Self {
        let animator = RotationAnimator::new(props.rotation_duration, props.initial_angle);
        Self {
            props,
            tracker: DimensionTracker::new(),
            animator,
        }
    }

    /// Replace the color stops.
    ///
    /// Colors and locations travel together; supplying them with different
    /// lengths is a contract violation and fails immediately rather than
    /// rendering something half-right.
    pub fn stops(mut self, colors: Vec<String>, locations: Vec<f32>) -> Result<Self> {
        if !locations.is_empty() && locations.len() != colors.len() {
            return Err(GradientError::StopCountMismatch {
                colors: colors.len(),
                locations: locations.len(),
            });
        }
        self.props.colors = colors;
        self.props.locations = locations;
        Ok(self)
    }

    /// Set the gradient line start. Accepts `{x, y}` or `[x, y]` form;
    /// normalized immediately.
    pub fn with_start(mut self, start: impl Into<PointInput>) -> Self {
        self.props.start = start.into().into();
        self
    }

    /// Set the gradient line end.
    pub fn with_end(mut self, end: impl Into<PointInput>) -> Self {
        self.props.end = end.into().into();
        self
    }

    /// Enable or disable rotation.
    pub fn animated(mut self, animated: bool) -> Self {
        self.props.animated = animated;
        self
    }

    /// Set seconds per full rotation.
    pub fn with_rotation_duration(mut self, secs: f32) -> Self {
        self.props.rotation_duration = secs;
        self.animator.set_rotation_duration(secs);
        self
    }

    /// Set the starting rotation angle in degrees.
    pub fn with_initial_angle(mut self, degrees: f32) -> Self {
        self.props.initial_angle = degrees;
        self.animator.set_initial_angle(degrees);
        self
    }

    /// Set style props.
    pub fn with_style(mut self, style: StyleProps) -> Self {
        self.props.style = style;
        self
    }

    /// The serializable props.
    pub fn props(&self) -> &GradientProps {
        &self.props
    }

    /// Whether the rotation loop should currently be scheduled.
    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    /// The current rotation angle in degrees.
    pub fn angle(&self) -> f32 {
        self.animator.angle()
    }

    /// Mount the component: seed dimensions from fixed pixel style props
    /// (only useful when animated) and reconcile the animator with the
    /// animated flag and the current reduced-motion preference.
    pub fn begin(&mut self, motion: &dyn MotionPreference) {
        self.tracker = DimensionTracker::from_props(
            self.props.animated,
            self.props.style.width_px(),
            self.props.style.height_px(),
        );
        self.animator
            .sync(self.props.animated, motion.prefers_reduced_motion());
    }

    /// Record a layout measurement. Returns true when the size changed.
    pub fn on_layout(&mut self, width: f32, height: f32) -> bool {
        self.tracker.record_layout(width, height)
    }

    /// Advance the rotation to the frame at `now_ms` and return the angle.
    ///
    /// The reduced-motion preference is re-queried every tick so a
    /// mid-session flip takes effect on the next frame.
    pub fn tick(&mut self, now_ms: f64, motion: &dyn MotionPreference) -> f32 {
        self.animator
            .sync(self.props.animated, motion.prefers_reduced_motion());
        self.animator.tick(now_ms, self.tracker.current())
    }

    /// The current gradient line: animated angle geometry while rotating,
    /// the configured start/end points otherwise.
    pub fn line(&self) -> GradientLine {
        if self.props.animated {
            angle_to_points(self.animator.angle(), self.tracker.current())
        } else {
            GradientLine {
                start: self.props.start,
                end: self.props.end,
            }
        }
    }

    /// Produce paint instructions through the given render strategy.
    ///
    /// An empty color list degrades to a black-to-white fallback with a
    /// warning instead of failing the render.
    pub fn paint(
        &self,
        strategy: &dyn RenderStrategy,
        resolver: &dyn TokenResolver,
    ) -> Result<GradientPaint> {
        let (colors, locations): (Vec<String>, Vec<f32>) = if self.props.colors.is_empty() {
            tracing::warn!("gradient has no colors, using fallback stops");
            (
                vec!["#000000".to_string(), "#ffffff".to_string()],
                vec![0.0, 1.0],
            )
        } else {
            (self.props.colors.clone(), self.props.locations.clone())
        };

        let line = self.line();
        let frame = GradientFrame {
            start: line.start,
            end: line.end,
            colors: &colors,
            locations: &locations,
            dimensions: self.tracker.current(),
            animated_angle: self.props.animated.then(|| self.animator.angle()),
        };
        strategy.paint(&frame, resolver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Dimension;
    use ui_gradient::{NativeRenderer, SystemMotion, WebRenderer};
    use ui_theme::{get_theme, ThemeName};

    #[test]
    fn test_defaults() {
        let g = Gradient::new();
        assert_eq!(g.props().colors, vec!["$purple11", "$pink7", "$red7"]);
        assert_eq!(g.props().locations, vec![0.0, 0.5, 1.0]);
        assert_eq!(g.props().start, GradientPoint::new(0.0, 1.0));
        assert_eq!(g.props().end, GradientPoint::new(1.0, 0.0));
        assert!(!g.props().animated);
        assert_eq!(g.props().rotation_duration, 5.0);
    }

    #[test]
    fn test_stops_are_co_required() {
        let err = Gradient::new()
            .stops(vec!["#000".into(), "#fff".into()], vec![0.0, 0.5, 1.0])
            .unwrap_err();
        assert_eq!(
            err,
            GradientError::StopCountMismatch {
                colors: 2,
                locations: 3
            }
        );
    }

    #[test]
    fn test_point_inputs_normalize() {
        let g = Gradient::new().with_start([0.2, 0.8]).with_end((0.9, 0.1));
        assert_eq!(g.props().start, GradientPoint::new(0.2, 0.8));
        assert_eq!(g.props().end, GradientPoint::new(0.9, 0.1));
    }

    #[test]
    fn test_static_paint_uses_prop_points() {
        let theme = get_theme(ThemeName::Light);
        let mut g = Gradient::new();
        g.begin(&SystemMotion);
        g.on_layout(100.0, 100.0);

        let paint = g.paint(&NativeRenderer, &theme).unwrap();
        let GradientPaint::Native { start, end, colors, .. } = paint else {
            panic!("expected native paint");
        };
        assert_eq!(start, GradientPoint::new(0.0, 1.0));
        assert_eq!(end, GradientPoint::new(1.0, 0.0));
        // Brand tokens resolved.
        assert_eq!(colors[0], "#4c1d95");
        assert_eq!(colors[1], "#db2777");
        assert_eq!(colors[2], "#dc2626");
    }

    #[test]
    fn test_animated_paint_follows_angle() {
        let theme = get_theme(ThemeName::Light);
        let mut g = Gradient::new().animated(true).with_initial_angle(90.0);
        g.begin(&SystemMotion);
        g.on_layout(200.0, 200.0);
        assert!(g.is_animating());

        // At 90 degrees the line is horizontal, pointing right.
        let line = g.line();
        assert!((line.start.y - 0.5).abs() < 1e-4);
        assert!((line.end.y - 0.5).abs() < 1e-4);
        assert!(line.end.x > line.start.x);

        let paint = g.paint(&WebRenderer, &theme).unwrap();
        let GradientPaint::Css { background_image } = paint else {
            panic!("expected css paint");
        };
        assert!(background_image.starts_with("linear-gradient(90deg"));
    }

    #[test]
    fn test_empty_colors_degrade_with_fallback() {
        let theme = get_theme(ThemeName::Light);
        let mut g = Gradient::new().stops(vec![], vec![]).unwrap();
        g.begin(&SystemMotion);

        let paint = g.paint(&NativeRenderer, &theme).unwrap();
        let GradientPaint::Native { colors, locations, .. } = paint else {
            panic!("expected native paint");
        };
        assert_eq!(colors, vec!["#000000", "#ffffff"]);
        assert_eq!(locations, vec![0.0, 1.0]);
    }

    #[test]
    fn test_reduced_motion_keeps_gradient_static() {
        struct Reduced;
        impl MotionPreference for Reduced {
            fn prefers_reduced_motion(&self) -> bool {
                true
            }
        }

        let mut g = Gradient::new().animated(true);
        g.begin(&Reduced);
        assert!(!g.is_animating());
        g.tick(0.0, &Reduced);
        let angle = g.tick(1000.0, &Reduced);
        assert_eq!(angle, 0.0);
    }

    #[test]
    fn test_begin_seeds_dims_from_pixel_props() {
        let style = StyleProps {
            width: Some(Dimension::px(320.0)),
            height: Some(Dimension::px(80.0)),
            ..Default::default()
        };
        let mut g = Gradient::new().animated(true).with_style(style);
        g.begin(&SystemMotion);
        // No layout event needed: first tick already has real dimensions,
        // so the gradient line spans the diagonal.
        g.tick(0.0, &SystemMotion);
        let line = g.line();
        let dx = (line.end.x - line.start.x) * 320.0;
        let dy = (line.end.y - line.start.y) * 80.0;
        let len = (dx * dx + dy * dy).sqrt();
        let diag = (320.0f32 * 320.0 + 80.0 * 80.0).sqrt();
        assert!((len - diag).abs() < 1e-2);
    }
}
