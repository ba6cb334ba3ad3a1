//! Accessibility check on the derived rem coefficient.
//!
//! A rem coefficient between -1 and 1 leaves the preferred size almost
//! entirely viewport-driven, so browser zoom barely changes it.

/// Shown under the code blocks when [`needs_zoom_warning`] holds.
pub const ZOOM_WARNING: &str = "The number in front of the rem portion of the CSS rule should \
not be between -1 and 1. This makes it hard to zoom in on the text (try it), which reduces \
accessibility for visually impaired people.";

pub fn needs_zoom_warning(rem_coefficient: f64) -> bool {
    rem_coefficient.abs() < 1.0
}
