//! Display options for the calculator front ends.
//!
//! Every field has a default, so a JS caller can pass `{}` or a partial object.

use serde::{Deserialize, Serialize};

use crate::css::{COPY_PROPERTY, LINE_BREAK_BELOW_PX};
use crate::feedback::TOOLTIP_DURATION_MS;
use crate::scale::FluidScaleParameters;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayOptions {
    /// Viewport widths (px) at or below this use the line-broken layout
    pub line_break_below_px: f64,
    /// How long the copy acknowledgement stays up
    pub tooltip_duration_ms: u32,
    /// Inputs shown on first render
    pub initial: FluidScaleParameters,
    /// Text in the live preview box
    pub preview_text: String,
    /// Properties to render declarations for, after the bare expression
    pub properties: Vec<String>,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            line_break_below_px: LINE_BREAK_BELOW_PX,
            tooltip_duration_ms: TOOLTIP_DURATION_MS,
            initial: FluidScaleParameters::default(),
            preview_text: "Result (edit me!)".to_string(),
            properties: vec![COPY_PROPERTY.to_string(), "width".to_string()],
        }
    }
}
