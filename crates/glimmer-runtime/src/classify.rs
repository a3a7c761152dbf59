//! Default classification policy for this runtime.
//!
//! The core only requires *some* key/color functions; these are the ones
//! the binary injects. Keys follow `namespace/name`. Colors come from the
//! `glimmer/color` attribute when it parses as a hex triplet, otherwise
//! the resource shows the default blue.

use tracing::warn;

use glimmer_core::{Color, ResourceSnapshot};

/// Attribute consulted for a resource's display color.
pub const COLOR_ATTRIBUTE: &str = "glimmer/color";

/// Color for resources without a usable `glimmer/color` attribute.
pub const DEFAULT_COLOR: Color = Color::BLUE;

/// Pick a color for `snapshot`. Never fails; a malformed attribute falls
/// back to the default so one bad label cannot stop the controller.
#[must_use]
pub fn classify_color(snapshot: &ResourceSnapshot) -> Color {
    let Some(value) = snapshot.attribute(COLOR_ATTRIBUTE) else {
        return DEFAULT_COLOR;
    };
    match Color::from_hex(value) {
        Ok(color) => color,
        Err(e) => {
            warn!(
                name = %snapshot.name,
                value,
                error = %e,
                "Unparseable color attribute, using default"
            );
            DEFAULT_COLOR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_attribute() {
        let snapshot =
            ResourceSnapshot::new("default", "web-0").with_attribute(COLOR_ATTRIBUTE, "#FF0000");
        assert_eq!(classify_color(&snapshot), Color::RED);
    }

    #[test]
    fn test_missing_attribute_defaults() {
        let snapshot = ResourceSnapshot::new("default", "web-0");
        assert_eq!(classify_color(&snapshot), DEFAULT_COLOR);
    }

    #[test]
    fn test_malformed_attribute_defaults() {
        let snapshot =
            ResourceSnapshot::new("default", "web-0").with_attribute(COLOR_ATTRIBUTE, "crimson");
        assert_eq!(classify_color(&snapshot), DEFAULT_COLOR);
    }
}
