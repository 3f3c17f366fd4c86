//! Gradient Pipeline Integration Tests
//!
//! End-to-end tests for the full gradient data flow: animation driver to
//! angle geometry to token resolution to platform paint instructions.

use ui_components::{Gradient, StyleProps};
use ui_gradient::{
    angle_to_points, build_gradient_string, css_projection, Dimensions, GradientPaint,
    MotionPreference, NativeRenderer, RotationAnimator, SystemMotion, WebRenderer,
};
use ui_theme::{get_theme, ColorTokens, ThemeName};

struct ReducedMotion;

impl MotionPreference for ReducedMotion {
    fn prefers_reduced_motion(&self) -> bool {
        true
    }
}

/// A toggleable preference for mid-session flips.
struct TogglableMotion(std::cell::Cell<bool>);

impl MotionPreference for TogglableMotion {
    fn prefers_reduced_motion(&self) -> bool {
        self.0.get()
    }
}

/// Drive an animated gradient through mount, layout, and a second of
/// frames, then verify the web paint reflects the advanced angle.
#[test]
fn test_animated_gradient_full_pipeline() {
    let theme = get_theme(ThemeName::Light);
    let mut gradient = Gradient::new().animated(true).with_rotation_duration(1.0);

    // Phase 1: mount. No dimensions yet, so painting falls back to the
    // current animated angle with unstretched stops.
    gradient.begin(&SystemMotion);
    assert!(gradient.is_animating());
    let paint = gradient.paint(&WebRenderer, &theme).unwrap();
    let GradientPaint::Css { background_image } = paint else {
        panic!("expected css paint");
    };
    assert!(background_image.starts_with("linear-gradient(0deg"));

    // Phase 2: layout lands, frames advance. A square box runs at unit
    // speed: half a second at duration 1s is 180 degrees.
    assert!(gradient.on_layout(300.0, 300.0));
    gradient.tick(0.0, &SystemMotion);
    let mut now: f64 = 0.0;
    while now < 500.0 {
        now += 16.0;
        gradient.tick(now.min(500.0), &SystemMotion);
    }
    let angle = gradient.tick(500.0, &SystemMotion);
    assert!((angle - 180.0).abs() < 1.0, "angle {angle}");

    // Phase 3: paint again. Dimensions are known, so the CSS angle comes
    // from the projected gradient line and matches the animated angle on a
    // square box.
    let paint = gradient.paint(&WebRenderer, &theme).unwrap();
    let GradientPaint::Css { background_image } = paint else {
        panic!("expected css paint");
    };
    let angle_str: String = background_image
        .chars()
        .skip("linear-gradient(".len())
        .take_while(|c| *c != 'd')
        .collect();
    let css_angle: f32 = angle_str.parse().unwrap();
    let diff = (css_angle - angle).rem_euclid(360.0);
    assert!(diff < 1.0 || (360.0 - diff) < 1.0, "css {css_angle} vs {angle}");
    // Brand tokens resolved to hex in the output.
    assert!(background_image.contains("#4c1d95"));
    assert!(background_image.contains("#db2777"));
    assert!(background_image.contains("#dc2626"));
}

/// The same gradient state paints consistently on both platforms: the
/// native path gets the identical points and resolved stops the web path
/// projects into CSS.
#[test]
fn test_platform_parity_from_shared_state() {
    let theme = get_theme(ThemeName::Dark);
    let mut gradient = Gradient::new();
    gradient.begin(&SystemMotion);
    gradient.on_layout(200.0, 100.0);

    let native = gradient.paint(&NativeRenderer, &theme).unwrap();
    let GradientPaint::Native {
        start,
        end,
        colors,
        locations,
    } = native
    else {
        panic!("expected native paint");
    };
    assert_eq!(locations, vec![0.0, 0.5, 1.0]);

    // Project the same line the native path received; the web string must
    // carry that projection's angle.
    let dims = Dimensions::new(200.0, 100.0).unwrap();
    let proj = css_projection(start, end, dims);
    let expected = build_gradient_string(proj.angle, &colors, &locations, proj.stretch_ratio)
        .unwrap();

    let web = gradient.paint(&WebRenderer, &theme).unwrap();
    let GradientPaint::Css { background_image } = web else {
        panic!("expected css paint");
    };
    assert_eq!(background_image, expected);
}

/// Stop stretching widens the stop range symmetrically around 50%.
#[test]
fn test_stop_stretching_is_symmetric() {
    let colors = vec!["#000".to_string(), "#888".to_string(), "#fff".to_string()];
    let s = build_gradient_string(45.0, &colors, &[0.0, 0.5, 1.0], 1.5).unwrap();
    assert_eq!(s, "linear-gradient(45deg, #000 -25%, #888 50%, #fff 125%)");
}

/// A vertical gradient across a wide box stretches by diagonal over
/// height, keeping the blended band the same visual width as the diagonal
/// case.
#[test]
fn test_band_width_invariant_across_angles() {
    let dims = Dimensions::new(400.0, 100.0).unwrap();

    let diagonal = css_projection(
        ui_gradient::GradientPoint::new(0.0, 1.0),
        ui_gradient::GradientPoint::new(1.0, 0.0),
        dims,
    );
    assert!((diagonal.stretch_ratio - 1.0).abs() < 1e-4);

    let vertical_line = angle_to_points(0.0, Some(dims));
    let vertical = css_projection(vertical_line.start, vertical_line.end, dims);
    let expected = dims.diagonal() / 100.0;
    assert!((vertical.stretch_ratio - expected).abs() < 1e-3);
}

/// Reduced motion flipping on mid-session stops the rotation on the next
/// tick and freezes the angle; flipping back off restarts from the
/// initial angle.
#[test]
fn test_reduced_motion_flips_mid_session() {
    let motion = TogglableMotion(std::cell::Cell::new(false));
    let mut gradient = Gradient::new()
        .animated(true)
        .with_rotation_duration(1.0)
        .with_initial_angle(30.0);

    gradient.begin(&motion);
    gradient.on_layout(100.0, 100.0);
    gradient.tick(0.0, &motion);
    gradient.tick(250.0, &motion);
    let advanced = gradient.angle();
    assert!(advanced > 30.0);

    // Preference flips on; the very next tick stops the loop.
    motion.0.set(true);
    let frozen = gradient.tick(500.0, &motion);
    assert_eq!(frozen, advanced);
    assert!(!gradient.is_animating());
    assert_eq!(gradient.tick(9000.0, &motion), advanced);

    // Flips back off: fresh entry from the initial angle.
    motion.0.set(false);
    gradient.tick(9100.0, &motion);
    assert!(gradient.is_animating());
    assert_eq!(gradient.angle(), 30.0);
}

/// Missing tokens degrade to the verbatim reference in the final output
/// rather than failing the render.
#[test]
fn test_unknown_token_passes_through_to_output() {
    let tokens = ColorTokens::standard();
    let mut gradient = Gradient::new()
        .stops(
            vec!["$nonexistent9".to_string(), "$purple9".to_string()],
            vec![0.0, 1.0],
        )
        .unwrap();
    gradient.begin(&SystemMotion);
    gradient.on_layout(100.0, 100.0);

    let paint = gradient.paint(&WebRenderer, &tokens).unwrap();
    let GradientPaint::Css { background_image } = paint else {
        panic!("expected css paint");
    };
    assert!(background_image.contains("$nonexistent9"));
    assert!(background_image.contains("#6b21a8"));
}

/// The animator restarts cleanly: disable, re-enable, and the angle is
/// back at the configured initial value with no stale timing.
#[test]
fn test_animator_restart_is_clean() {
    let mut animator = RotationAnimator::new(2.0, 45.0);
    animator.sync(true, false);
    animator.tick(0.0, Dimensions::new(100.0, 100.0));
    animator.tick(800.0, Dimensions::new(100.0, 100.0));
    assert!(animator.angle() > 45.0);

    animator.sync(false, false);
    animator.sync(true, false);
    assert_eq!(animator.angle(), 45.0);
    // First tick after restart is baseline only, even with a huge jump in
    // the clock.
    assert_eq!(animator.tick(1_000_000.0, None), 45.0);
}

/// Layout events only take effect when they change the size; invalid
/// measurements are discarded entirely.
#[test]
fn test_layout_change_detection() {
    let mut gradient = Gradient::new().animated(true);
    gradient.begin(&ReducedMotion);

    assert!(gradient.on_layout(120.0, 40.0));
    assert!(!gradient.on_layout(120.0, 40.0));
    assert!(!gradient.on_layout(0.0, 40.0));
    assert!(gradient.on_layout(120.0, 50.0));
}

/// The begin call seeds dimensions from fixed pixel style props so an
/// animated gradient has real geometry before its first layout event.
#[test]
fn test_props_seed_dimensions_before_layout() {
    use ui_components::Dimension;

    let style = StyleProps {
        width: Some(Dimension::px(300.0)),
        height: Some(Dimension::px(100.0)),
        ..Default::default()
    };
    let theme = get_theme(ThemeName::Light);
    let mut gradient = Gradient::new().animated(true).with_style(style);
    gradient.begin(&SystemMotion);

    let paint = gradient.paint(&WebRenderer, &theme).unwrap();
    let GradientPaint::Css { background_image } = paint else {
        panic!("expected css paint");
    };
    // Dimensions known up front: the initial vertical line across a wide
    // box stretches its stops beyond [0, 100], so the first stop is
    // negative.
    let dims = Dimensions::new(300.0, 100.0).unwrap();
    let line = angle_to_points(0.0, Some(dims));
    let proj = css_projection(line.start, line.end, dims);
    assert!(proj.stretch_ratio > 1.0);
    assert!(background_image.contains("-"), "{background_image}");
}
