//! Reduced-motion preference boundary
//!
//! The host environment supplies the actual signal (a media query on web,
//! an accessibility setting on native). The animator re-queries the
//! preference on every sync, so a mid-session change stops a running
//! animation on the next evaluation.

/// Source of the user's reduced-motion preference.
pub trait MotionPreference {
    /// Whether the user has asked for non-essential animation to stop.
    fn prefers_reduced_motion(&self) -> bool;
}

/// Default preference for platforms without a reduced-motion signal:
/// animation proceeds.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemMotion;

impl MotionPreference for SystemMotion {
    fn prefers_reduced_motion(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_signal_allows_motion() {
        assert!(!SystemMotion.prefers_reduced_motion());
    }
}
