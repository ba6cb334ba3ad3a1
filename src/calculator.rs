//! `FluidScaleCalculator` - the state behind every front end.
//!
//! Holds the four inputs and the last derivation. Every setter recomputes
//! immediately, so the derived values never lag behind the inputs.

use serde::Serialize;

use crate::a11y::needs_zoom_warning;
use crate::config::DisplayOptions;
use crate::css::{ClampExpression, Declaration, Layout};
use crate::error::{FluidError, Result};
use crate::scale::{parse_lenient, Field, FluidScaleCoefficients, FluidScaleParameters};

#[derive(Debug, Clone)]
pub struct FluidScaleCalculator {
    params: FluidScaleParameters,
    derived: Result<FluidScaleCoefficients>,
}

impl Default for FluidScaleCalculator {
    fn default() -> Self {
        Self::new(FluidScaleParameters::default())
    }
}

impl FluidScaleCalculator {
    pub fn new(params: FluidScaleParameters) -> Self {
        let derived = params.derive();
        Self { params, derived }
    }

    pub fn params(&self) -> &FluidScaleParameters {
        &self.params
    }

    /// Set one input and recompute.
    pub fn set(&mut self, field: Field, value: f64) {
        self.params.set(field, value);
        self.recompute();
    }

    /// Set one input from raw text field contents and recompute.
    ///
    /// Text without a numeric prefix coerces to zero.
    pub fn set_text(&mut self, field: Field, text: &str) -> f64 {
        let value = parse_lenient(text);
        self.set(field, value);
        value
    }

    /// Replace all four inputs and recompute.
    pub fn set_params(&mut self, params: FluidScaleParameters) {
        self.params = params;
        self.recompute();
    }

    /// Re-derive the coefficients from the current inputs.
    pub fn recompute(&mut self) {
        self.derived = self.params.derive();
        if let Err(e) = &self.derived {
            log::debug!("recompute left calculator without coefficients: {e}");
        }
    }

    pub fn coefficients(&self) -> Result<FluidScaleCoefficients> {
        self.derived.clone()
    }

    /// Why there are no coefficients, if there aren't.
    pub fn error(&self) -> Option<&FluidError> {
        self.derived.as_ref().err()
    }

    pub fn clamp(&self) -> Result<ClampExpression> {
        let coefficients = self.coefficients()?;
        Ok(ClampExpression::from_parts(&self.params, coefficients))
    }

    pub fn declaration(&self, property: Option<&str>, layout: Layout) -> Result<String> {
        Ok(Declaration::new(property, self.clamp()?).render(layout))
    }

    /// Text for the clipboard.
    pub fn clipboard_text(&self) -> Result<String> {
        Ok(Declaration::clipboard_text(self.clamp()?))
    }

    /// Whether the accessibility warning should be visible. Never shown
    /// without coefficients.
    pub fn warning(&self) -> bool {
        self.derived
            .as_ref()
            .is_ok_and(|c| needs_zoom_warning(c.rem_coefficient))
    }

    /// Everything a front end renders, for one viewport width.
    pub fn snapshot(&self, viewport_width: f64, options: &DisplayOptions) -> CalculatorSnapshot {
        let layout = Layout::for_viewport(viewport_width, options.line_break_below_px);
        let clamp = self.clamp().ok();

        let mut declarations = Vec::with_capacity(options.properties.len() + 1);
        if let Some(clamp) = clamp {
            declarations.push(Declaration::new(None, clamp).render(layout));
            declarations.extend(
                options
                    .properties
                    .iter()
                    .map(|p| Declaration::new(Some(p.as_str()), clamp).render(layout)),
            );
        }

        CalculatorSnapshot {
            params: self.params,
            coefficients: self.derived.as_ref().ok().copied(),
            error: self.error().map(ToString::to_string),
            layout,
            clamp: clamp.map(|c| c.render(layout)),
            declarations,
            warning: self.warning(),
            preview_size_rem: clamp.map(|c| c.evaluate(viewport_width)),
        }
    }
}

/// Serializable view of the calculator at one viewport width.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorSnapshot {
    pub params: FluidScaleParameters,
    pub coefficients: Option<FluidScaleCoefficients>,
    pub error: Option<String>,
    pub layout: Layout,
    pub clamp: Option<String>,
    pub declarations: Vec<String>,
    pub warning: bool,
    /// Resolved size of the preview text at this viewport width
    pub preview_size_rem: Option<f64>,
}

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_default_calculator() {
        let calc = FluidScaleCalculator::default();
        let c = calc.coefficients().unwrap();
        assert_eq!(c.vw_coefficient, 8.0);
        assert_eq!(c.rem_coefficient, -2.0);
        assert!(!calc.warning());
        assert_eq!(
            calc.clipboard_text().unwrap(),
            "font-size: clamp(1.5rem, 8vw - 2rem, 3rem);"
        );
    }

    #[test]
    fn test_setter_recomputes() {
        let mut calc = FluidScaleCalculator::default();
        calc.set(Field::MaxSize, 4.5);
        // slope 3/300 = 0.01 -> 16vw, 1.5 - 7 = -5.5
        let c = calc.coefficients().unwrap();
        assert_eq!(c.vw_coefficient, 16.0);
        assert_eq!(c.rem_coefficient, -5.5);
    }

    #[test]
    fn test_set_text_coerces() {
        let mut calc = FluidScaleCalculator::default();
        assert_eq!(calc.set_text(Field::MinSize, "oops"), 0.0);
        assert_eq!(calc.params().min_size, 0.0);
        assert_eq!(calc.set_text(Field::MinSize, "2rem"), 2.0);
        assert_eq!(calc.params().min_size, 2.0);
    }

    #[test]
    fn test_equal_widths_then_recovery() {
        let mut calc = FluidScaleCalculator::default();
        calc.set(Field::MaxWidth, 700.0);
        assert!(matches!(
            calc.error(),
            Some(FluidError::DegenerateRange { .. })
        ));
        assert!(calc.clamp().is_err());
        assert!(!calc.warning());

        calc.set(Field::MaxWidth, 1000.0);
        assert!(calc.error().is_none());
        assert_eq!(calc.clamp().unwrap().to_string(), "clamp(1.5rem, 8vw - 2rem, 3rem)");
    }

    #[test]
    fn test_warning_tracks_rem_coefficient() {
        // 1rem@400 .. 2rem@1200: slope 1/800, rem = 1 - 0.5 = 0.5
        let calc = FluidScaleCalculator::new(FluidScaleParameters::new(1.0, 400.0, 2.0, 1200.0));
        assert_eq!(calc.coefficients().unwrap().rem_coefficient, 0.5);
        assert!(calc.warning());
    }

    #[test]
    fn test_snapshot_wide_viewport() {
        let calc = FluidScaleCalculator::default();
        let snap = calc.snapshot(1200.0, &DisplayOptions::default());
        assert_eq!(snap.layout, Layout::SingleLine);
        assert_eq!(snap.clamp.as_deref(), Some("clamp(1.5rem, 8vw - 2rem, 3rem)"));
        assert_eq!(
            snap.declarations,
            vec![
                "clamp(1.5rem, 8vw - 2rem, 3rem);",
                "font-size: clamp(1.5rem, 8vw - 2rem, 3rem);",
                "width: clamp(1.5rem, 8vw - 2rem, 3rem);",
            ]
        );
        assert_eq!(snap.preview_size_rem, Some(3.0));
        assert!(snap.error.is_none());
    }

    #[test]
    fn test_snapshot_narrow_viewport() {
        let calc = FluidScaleCalculator::default();
        let snap = calc.snapshot(500.0, &DisplayOptions::default());
        assert_eq!(snap.layout, Layout::LineBroken);
        assert_eq!(snap.declarations[1], "font-size: clamp(\n  1.5rem,\n  8vw - 2rem,\n  3rem\n);");
        assert_eq!(snap.preview_size_rem, Some(1.5));
    }

    #[test]
    fn test_snapshot_degenerate() {
        let calc = FluidScaleCalculator::new(FluidScaleParameters::new(1.0, 900.0, 2.0, 900.0));
        let snap = calc.snapshot(1200.0, &DisplayOptions::default());
        assert!(snap.coefficients.is_none());
        assert!(snap.declarations.is_empty());
        assert_eq!(
            snap.error.as_deref(),
            Some("Minimum and maximum viewport widths must differ (both are 900px)")
        );
    }
}
