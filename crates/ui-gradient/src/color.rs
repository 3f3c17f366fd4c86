//! Symbolic color resolution
//!
//! Color references are either literal values ("#db2777", "white") or
//! theme tokens marked with a `$` prefix ("$purple9"). Resolution never
//! fails the render: an unknown token is logged and returned verbatim so
//! downstream painting proceeds with something.

use ui_theme::TokenResolver;

/// Prefix character marking a symbolic token reference.
pub const TOKEN_PREFIX: char = '$';

/// Resolve a color reference against a theme resolver.
///
/// - `$name` resolves through the injected resolver; unknown tokens warn
///   and come back unchanged (including the prefix).
/// - Anything else is treated as a literal color and returned as-is.
pub fn resolve_color(color_ref: &str, resolver: &dyn TokenResolver) -> String {
    if let Some(name) = color_ref.strip_prefix(TOKEN_PREFIX) {
        match resolver.lookup(name) {
            Some(value) => value.to_string(),
            None => {
                tracing::warn!(token = color_ref, "color token not found in theme");
                color_ref.to_string()
            }
        }
    } else {
        color_ref.to_string()
    }
}
