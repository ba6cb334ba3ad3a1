//! The `clamp(min, preferred, max)` expression and its two on-screen layouts.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::number::format_number;
use crate::error::FluidError;
use crate::scale::{FluidScaleCoefficients, FluidScaleParameters};

/// Viewport widths at or below this many pixels get the line-broken layout.
pub const LINE_BREAK_BELOW_PX: f64 = 700.0;

/// Root font size the `vw` coefficient assumes.
pub const ROOT_FONT_SIZE_PX: f64 = 16.0;

/// How a clamp expression is laid out in a code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Layout {
    /// `clamp(1.5rem, 8vw - 2rem, 3rem)`
    SingleLine,
    /// One argument per line, two-space indent.
    LineBroken,
}

impl Layout {
    /// Pick a layout for the current window width.
    pub fn for_viewport(viewport_width: f64, line_break_below: f64) -> Self {
        if viewport_width > line_break_below {
            Layout::SingleLine
        } else {
            Layout::LineBroken
        }
    }
}

/// A fully derived clamp expression.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClampExpression {
    pub min_size: f64,
    pub vw_coefficient: f64,
    pub rem_coefficient: f64,
    pub max_size: f64,
}

impl ClampExpression {
    pub fn new(min_size: f64, coefficients: FluidScaleCoefficients, max_size: f64) -> Self {
        Self {
            min_size,
            vw_coefficient: coefficients.vw_coefficient,
            rem_coefficient: coefficients.rem_coefficient,
            max_size,
        }
    }

    pub fn from_parts(params: &FluidScaleParameters, coefficients: FluidScaleCoefficients) -> Self {
        Self::new(params.min_size, coefficients, params.max_size)
    }

    /// `+` for a non-negative rem coefficient, `-` otherwise.
    pub fn sign(&self) -> char {
        if self.rem_coefficient >= 0.0 {
            '+'
        } else {
            '-'
        }
    }

    /// The middle argument, e.g. `8vw - 2rem`.
    pub fn preferred(&self) -> String {
        format!(
            "{}vw {} {}rem",
            format_number(self.vw_coefficient),
            self.sign(),
            format_number(self.rem_coefficient.abs())
        )
    }

    /// Render as `clamp(...)` in the given layout.
    pub fn render(&self, layout: Layout) -> String {
        let min = format!("{}rem", format_number(self.min_size));
        let max = format!("{}rem", format_number(self.max_size));
        let preferred = self.preferred();
        match layout {
            Layout::SingleLine => format!("clamp({min}, {preferred}, {max})"),
            Layout::LineBroken => format!("clamp(\n  {min},\n  {preferred},\n  {max}\n)"),
        }
    }

    /// Size in rem a browser resolves this expression to at `viewport_px`.
    ///
    /// Like CSS `clamp()`, the minimum wins when it exceeds the maximum.
    pub fn evaluate(&self, viewport_px: f64) -> f64 {
        let preferred =
            self.vw_coefficient * viewport_px / 100.0 / ROOT_FONT_SIZE_PX + self.rem_coefficient;
        preferred.min(self.max_size).max(self.min_size)
    }
}

impl fmt::Display for ClampExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Layout::SingleLine))
    }
}

impl FromStr for ClampExpression {
    type Err = FluidError;

    /// Read back either layout produced by [`ClampExpression::render`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches(';').trim_end();
        let inner = trimmed
            .strip_prefix("clamp(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| FluidError::Parse(format!("expected clamp(...), got {trimmed:?}")))?;

        let mut args = inner.split(',').map(str::trim);
        let (Some(min), Some(preferred), Some(max), None) =
            (args.next(), args.next(), args.next(), args.next())
        else {
            return Err(FluidError::Parse(format!(
                "expected three arguments in {trimmed:?}"
            )));
        };

        let mut terms = preferred.split_whitespace();
        let (Some(vw), Some(sign), Some(rem), None) =
            (terms.next(), terms.next(), terms.next(), terms.next())
        else {
            return Err(FluidError::Parse(format!(
                "expected `<n>vw <sign> <n>rem`, got {preferred:?}"
            )));
        };

        let rem_magnitude = parse_unit(rem, "rem")?;
        let rem_coefficient = match sign {
            "+" => rem_magnitude,
            "-" => -rem_magnitude,
            other => return Err(FluidError::Parse(format!("unexpected sign {other:?}"))),
        };

        Ok(Self {
            min_size: parse_unit(min, "rem")?,
            vw_coefficient: parse_unit(vw, "vw")?,
            rem_coefficient,
            max_size: parse_unit(max, "rem")?,
        })
    }
}

fn parse_unit(token: &str, unit: &str) -> Result<f64, FluidError> {
    token
        .strip_suffix(unit)
        .and_then(|n| n.parse::<f64>().ok())
        .ok_or_else(|| FluidError::Parse(format!("expected a number in {unit}, got {token:?}")))
}
