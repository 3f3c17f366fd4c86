//! Rotation animation driver
//!
//! An explicit Idle/Running state machine advanced by host frame
//! callbacks. The host owns the frame schedule (one `tick` per display
//! frame with its timestamp); the animator owns the angle and timing
//! state. One animator belongs to exactly one component instance and is
//! never shared, so all mutation happens through ordered calls on the
//! rendering thread.
//!
//! While running, the angular speed is modulated by
//! [`visual_speed_multiplier`] so the *visual* sweep rate stays constant
//! despite the box's aspect ratio.

use crate::dimensions::Dimensions;
use crate::geometry::visual_speed_multiplier;

/// Default full-rotation duration in seconds.
pub const DEFAULT_ROTATION_DURATION_SECS: f32 = 5.0;

/// Speed multiplier applied while the box dimensions are still unknown.
pub const DEFAULT_SPEED_MULTIPLIER: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    /// Not animating; the angle is frozen where the last run stopped.
    Idle { angle: f32 },
    Running {
        angle: f32,
        last_tick_ms: Option<f64>,
    },
}

/// Frame-driven rotation state machine for animated gradients.
///
/// Transitions:
/// - Idle -> Running when the component is animated and reduced motion is
///   off; the angle resets to the initial angle.
/// - Running -> Idle when animation is disabled, reduced motion turns on,
///   or the owner stops it; the angle freezes and timing state is cleared
///   so a restart begins cleanly from the initial angle.
/// - Changing the initial angle while running re-enters fresh rather than
///   jumping mid-sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationAnimator {
    rotation_duration_secs: f32,
    initial_angle: f32,
    phase: Phase,
}

impl Default for RotationAnimator {
    fn default() -> Self {
        Self::new(DEFAULT_ROTATION_DURATION_SECS, 0.0)
    }
}

impl RotationAnimator {
    /// Create an idle animator.
    ///
    /// `rotation_duration_secs` is the time for one full 360 degree sweep
    /// at reference speed; non-positive durations are clamped to the
    /// default.
    pub fn new(rotation_duration_secs: f32, initial_angle: f32) -> Self {
        let rotation_duration_secs = if rotation_duration_secs > 0.0 {
            rotation_duration_secs
        } else {
            DEFAULT_ROTATION_DURATION_SECS
        };
        Self {
            rotation_duration_secs,
            initial_angle,
            phase: Phase::Idle {
                angle: normalize_angle(initial_angle),
            },
        }
    }

    /// Whether the frame loop should currently be scheduled.
    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    /// The current rotation angle in `[0, 360)` degrees.
    pub fn angle(&self) -> f32 {
        match self.phase {
            Phase::Running { angle, .. } => angle,
            Phase::Idle { angle } => angle,
        }
    }

    /// One full rotation duration, in seconds.
    pub fn rotation_duration_secs(&self) -> f32 {
        self.rotation_duration_secs
    }

    /// The configured initial angle, in degrees.
    pub fn initial_angle(&self) -> f32 {
        self.initial_angle
    }

    /// Change the rotation duration; takes effect on the next tick.
    pub fn set_rotation_duration(&mut self, secs: f32) {
        if secs > 0.0 {
            self.rotation_duration_secs = secs;
        }
    }

    /// Change the initial angle.
    ///
    /// A running animation restarts from the new angle (fresh entry, not a
    /// mid-sweep jump).
    pub fn set_initial_angle(&mut self, degrees: f32) {
        self.initial_angle = degrees;
        if self.is_running() {
            self.enter_running();
        }
    }

    /// Reconcile the phase with the animated flag and the reduced-motion
    /// preference. Call whenever either input may have changed; the caller
    /// re-queries the reduced-motion signal on every evaluation so a
    /// mid-session preference flip stops the loop here.
    pub fn sync(&mut self, animated: bool, reduced_motion: bool) {
        let should_run = animated && !reduced_motion;
        match (&self.phase, should_run) {
            (Phase::Idle { .. }, true) => self.enter_running(),
            (Phase::Running { .. }, false) => self.stop(),
            _ => {}
        }
    }

    /// Stop the animation, freezing the angle and clearing timing state.
    ///
    /// Stopping is synchronous and total: no further mutation happens
    /// until a fresh entry, which starts from the initial angle again.
    pub fn stop(&mut self) {
        self.phase = Phase::Idle {
            angle: self.angle(),
        };
    }

    /// Advance the animation to the frame at `now_ms` (milliseconds on any
    /// monotonic clock) and return the current angle.
    ///
    /// The first tick after entry only records the timestamp baseline.
    /// When dimensions are unknown the speed multiplier falls back to
    /// [`DEFAULT_SPEED_MULTIPLIER`]. Ticks while idle return the frozen
    /// angle without mutating anything.
    pub fn tick(&mut self, now_ms: f64, dims: Option<Dimensions>) -> f32 {
        let Phase::Running {
            angle,
            last_tick_ms,
        } = self.phase
        else {
            return self.angle();
        };

        let Some(last) = last_tick_ms else {
            self.phase = Phase::Running {
                angle,
                last_tick_ms: Some(now_ms),
            };
            return angle;
        };

        // Backwards timestamps contribute nothing rather than rewinding.
        let delta_secs = ((now_ms - last).max(0.0) * 0.001) as f32;

        let speed_multiplier = match dims {
            Some(d) => visual_speed_multiplier(angle, d),
            None => DEFAULT_SPEED_MULTIPLIER,
        };

        let base_degrees_per_second = 360.0 / self.rotation_duration_secs;
        let next =
            normalize_angle(angle + base_degrees_per_second * speed_multiplier * delta_secs);

        self.phase = Phase::Running {
            angle: next,
            last_tick_ms: Some(now_ms),
        };
        next
    }

    fn enter_running(&mut self) {
        self.phase = Phase::Running {
            angle: normalize_angle(self.initial_angle),
            last_tick_ms: None,
        };
    }
}

#[inline]
fn normalize_angle(degrees: f32) -> f32 {
    degrees.rem_euclid(360.0)
}
