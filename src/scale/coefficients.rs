//! Linear interpolation between the two (width, size) breakpoints.

use serde::{Deserialize, Serialize};

use super::{Field, FluidScaleParameters};
use crate::error::{FluidError, Result};

/// Turns a rem-per-px slope into a `vw` multiplier: 100vw spans the whole
/// viewport and 1rem is 16px.
pub const VW_SCALE: f64 = 1600.0;

/// The preferred term of a clamp expression: `{vw}vw + {rem}rem`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FluidScaleCoefficients {
    pub vw_coefficient: f64,
    pub rem_coefficient: f64,
}

/// Round to one decimal place, halves towards positive infinity.
pub fn round1(x: f64) -> f64 {
    (x * 10.0 + 0.5).floor() / 10.0
}

/// Derive the coefficients of the line through `(min_width, min_size)` and
/// `(max_width, max_size)`.
///
/// # Errors
/// [`FluidError::DegenerateRange`] when both widths are equal, and
/// [`FluidError::NonFinite`] when an input or a result is NaN or infinite.
pub fn derive(
    min_size: f64,
    min_width: f64,
    max_size: f64,
    max_width: f64,
) -> Result<FluidScaleCoefficients> {
    for (field, value) in [
        (Field::MinSize, min_size),
        (Field::MinWidth, min_width),
        (Field::MaxSize, max_size),
        (Field::MaxWidth, max_width),
    ] {
        if !value.is_finite() {
            return Err(FluidError::NonFinite {
                field: field.name(),
            });
        }
    }

    let span = max_width - min_width;
    if span == 0.0 {
        log::warn!("degenerate width range: both breakpoints at {min_width}px");
        return Err(FluidError::DegenerateRange { width: min_width });
    }

    let slope = (max_size - min_size) / span;
    let vw_coefficient = round1(VW_SCALE * slope);
    let rem_coefficient = round1(min_size - min_width * slope);

    if !vw_coefficient.is_finite() {
        return Err(FluidError::NonFinite {
            field: "vwCoefficient",
        });
    }
    if !rem_coefficient.is_finite() {
        return Err(FluidError::NonFinite {
            field: "remCoefficient",
        });
    }

    log::debug!(
        "derived {vw_coefficient}vw {rem_coefficient:+}rem from {min_size}rem@{min_width}px..{max_size}rem@{max_width}px"
    );

    Ok(FluidScaleCoefficients {
        vw_coefficient,
        rem_coefficient,
    })
}

impl FluidScaleParameters {
    /// [`derive`] applied to these parameters.
    pub fn derive(&self) -> Result<FluidScaleCoefficients> {
        derive(self.min_size, self.min_width, self.max_size, self.max_width)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scenario() {
        let c = derive(1.5, 700.0, 3.0, 1000.0).unwrap();
        assert_eq!(c.vw_coefficient, 8.0);
        assert_eq!(c.rem_coefficient, -2.0);
    }

    #[test]
    fn test_round1_halves_go_up() {
        assert_eq!(round1(0.25), 0.3);
        assert_eq!(round1(-0.25), -0.2);
        assert_eq!(round1(1.04), 1.0);
        assert_eq!(round1(-2.0), -2.0);
    }

    #[test]
    fn test_equal_widths_rejected() {
        let err = derive(1.0, 800.0, 2.0, 800.0).unwrap_err();
        assert_eq!(err, FluidError::DegenerateRange { width: 800.0 });
    }

    #[test]
    fn test_non_finite_input_rejected() {
        let err = derive(f64::NAN, 700.0, 3.0, 1000.0).unwrap_err();
        assert_eq!(err, FluidError::NonFinite { field: "minSize" });
        let err = derive(1.0, 700.0, 3.0, f64::INFINITY).unwrap_err();
        assert_eq!(err, FluidError::NonFinite { field: "maxWidth" });
    }

    #[test]
    fn test_overflowing_slope_rejected() {
        let err = derive(0.0, 0.0, f64::MAX, 1e-300).unwrap_err();
        assert!(matches!(err, FluidError::NonFinite { .. }));
    }

    #[test]
    fn test_reversed_widths_still_describe_the_same_line() {
        let forward = derive(1.5, 700.0, 3.0, 1000.0).unwrap();
        let reversed = derive(3.0, 1000.0, 1.5, 700.0).unwrap();
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_params_derive_matches_free_function() {
        let p = FluidScaleParameters::new(1.0, 320.0, 2.0, 1280.0);
        assert_eq!(p.derive().unwrap(), derive(1.0, 320.0, 2.0, 1280.0).unwrap());
    }
}
