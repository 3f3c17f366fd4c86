//! Design tokens for Spectra UI
//!
//! Spacing, radius, and duration primitives shared by the component crates.

/// Spacing scale in pixels
/// Based on a 4px base unit with t-shirt sizes
pub mod spacing {
    /// 2px - Extra extra small
    pub const SPACE_2XS: f32 = 2.0;
    /// 4px - Extra small
    pub const SPACE_XS: f32 = 4.0;
    /// 8px - Small
    pub const SPACE_SM: f32 = 8.0;
    /// 12px - Medium
    pub const SPACE_MD: f32 = 12.0;
    /// 16px - Large
    pub const SPACE_LG: f32 = 16.0;
    /// 20px - Extra large
    pub const SPACE_XL: f32 = 20.0;
    /// 24px - 2x large
    pub const SPACE_2XL: f32 = 24.0;
    /// 32px - 3x large
    pub const SPACE_3XL: f32 = 32.0;

    /// Get spacing value by name
    pub fn get(name: &str) -> Option<f32> {
        match name {
            "2xs" => Some(SPACE_2XS),
            "xs" => Some(SPACE_XS),
            "sm" => Some(SPACE_SM),
            "md" => Some(SPACE_MD),
            "lg" => Some(SPACE_LG),
            "xl" => Some(SPACE_XL),
            "2xl" => Some(SPACE_2XL),
            "3xl" => Some(SPACE_3XL),
            _ => None,
        }
    }
}

/// Border radius tokens
pub mod radius {
    /// Small radius (6px)
    pub const SM: f32 = 6.0;
    /// Medium radius (9px)
    pub const MD: f32 = 9.0;
    /// Large radius (12px) - the card/input default
    pub const LG: f32 = 12.0;
    /// Extra large radius (16px)
    pub const XL: f32 = 16.0;
    /// Fully rounded (pill/circle)
    pub const FULL: f32 = 9999.0;

    /// Get radius value by name
    pub fn get(name: &str) -> Option<f32> {
        match name {
            "sm" => Some(SM),
            "md" => Some(MD),
            "lg" => Some(LG),
            "xl" => Some(XL),
            "full" => Some(FULL),
            _ => None,
        }
    }
}

/// Animation duration tokens, in seconds
pub mod duration {
    /// Fast transitions (hover states)
    pub const FAST: f32 = 0.15;
    /// Normal transitions
    pub const NORMAL: f32 = 0.25;
    /// Slow transitions (emphasis)
    pub const SLOW: f32 = 0.4;
    /// Default full-rotation duration for animated gradients
    pub const GRADIENT_ROTATION: f32 = 5.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_lookup() {
        assert_eq!(spacing::get("md"), Some(12.0));
        assert_eq!(spacing::get("3xl"), Some(32.0));
        assert_eq!(spacing::get("giant"), None);
    }

    #[test]
    fn test_radius_lookup() {
        assert_eq!(radius::get("lg"), Some(12.0));
        assert_eq!(radius::get("full"), Some(radius::FULL));
        assert_eq!(radius::get("0"), None);
    }
}
