//! Rendered-size tracking for gradient components
//!
//! Dimensions come either from explicit numeric props (when the component
//! is animated and the caller knows its size up front) or from the host's
//! layout-measurement events. Zero or negative measurements are never
//! stored.

use serde::{Deserialize, Serialize};

/// Box dimensions in device-independent pixels.
///
/// Both components are strictly positive; construct through
/// [`Dimensions::new`], which rejects anything else.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl Dimensions {
    /// Create dimensions, rejecting non-positive or non-finite components.
    pub fn new(width: f32, height: f32) -> Option<Self> {
        if width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite() {
            Some(Self { width, height })
        } else {
            None
        }
    }

    /// Diagonal length in pixels.
    #[inline]
    pub fn diagonal(&self) -> f32 {
        (self.width * self.width + self.height * self.height).sqrt()
    }
}

/// Tracks the latest known size of a component's box.
///
/// Owned by a single component instance. Updates are wholesale
/// replacements, and a layout event that reports the same size as the
/// previous one is a no-op so downstream recomputation is skipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensionTracker {
    current: Option<Dimensions>,
}

impl DimensionTracker {
    /// Create a tracker with no known size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the tracker from width/height props.
    ///
    /// Props only take effect for animated components (static gradients do
    /// not need dimensions ahead of measurement), and only when both are
    /// positive numbers.
    pub fn from_props(animated: bool, width: Option<f32>, height: Option<f32>) -> Self {
        let current = match (animated, width, height) {
            (true, Some(w), Some(h)) => Dimensions::new(w, h),
            _ => None,
        };
        Self { current }
    }

    /// Record a layout measurement event.
    ///
    /// Returns `true` when the stored dimensions actually changed.
    /// Measurements with a non-positive component are discarded and the
    /// previous value is retained.
    pub fn record_layout(&mut self, width: f32, height: f32) -> bool {
        let Some(next) = Dimensions::new(width, height) else {
            return false;
        };
        if self.current == Some(next) {
            return false;
        }
        self.current = Some(next);
        true
    }

    /// The latest known dimensions, if any.
    pub fn current(&self) -> Option<Dimensions> {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive() {
        assert!(Dimensions::new(0.0, 50.0).is_none());
        assert!(Dimensions::new(50.0, -1.0).is_none());
        assert!(Dimensions::new(f32::NAN, 50.0).is_none());
        assert!(Dimensions::new(1.0, 1.0).is_some());
    }

    #[test]
    fn test_props_seed_only_when_animated() {
        let t = DimensionTracker::from_props(true, Some(120.0), Some(60.0));
        assert_eq!(t.current(), Dimensions::new(120.0, 60.0));

        let t = DimensionTracker::from_props(false, Some(120.0), Some(60.0));
        assert_eq!(t.current(), None);

        let t = DimensionTracker::from_props(true, Some(120.0), None);
        assert_eq!(t.current(), None);
    }

    #[test]
    fn test_layout_ignores_zero_measurement() {
        let mut t = DimensionTracker::new();
        assert!(t.record_layout(100.0, 50.0));
        // A zero-width report is discarded; the prior value survives.
        assert!(!t.record_layout(0.0, 50.0));
        assert_eq!(t.current(), Dimensions::new(100.0, 50.0));
    }

    #[test]
    fn test_layout_suppresses_no_op_updates() {
        let mut t = DimensionTracker::new();
        assert!(t.record_layout(100.0, 50.0));
        assert!(!t.record_layout(100.0, 50.0));
        assert!(t.record_layout(100.0, 51.0));
    }
}
