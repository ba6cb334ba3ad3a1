//! Structured error types for fluid-sizes.
//!
//! Everything that can go wrong between reading four numbers and putting a
//! clamp expression on screen ends up here.

/// All errors that can occur while deriving, formatting, or displaying a clamp.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FluidError {
    /// Minimum and maximum viewport widths are equal, so the slope is undefined.
    #[error("Minimum and maximum viewport widths must differ (both are {width}px)")]
    DegenerateRange { width: f64 },

    /// An input or derived value is NaN or infinite.
    #[error("{field} is not a finite number")]
    NonFinite { field: &'static str },

    /// A clamp expression could not be read back.
    #[error("Invalid clamp expression: {0}")]
    Parse(String),

    /// Unknown input field name coming from the JS side.
    #[error("Unknown input field: {0}")]
    UnknownField(String),

    /// DOM construction or lookup failure.
    #[error("DOM error: {0}")]
    Dom(String),

    /// Clipboard write was rejected by the browser.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Options object from JS could not be deserialized.
    #[error("Invalid options: {0}")]
    Options(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FluidError>;

#[cfg(target_arch = "wasm32")]
impl From<FluidError> for wasm_bindgen::JsValue {
    fn from(e: FluidError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for FluidError {
    fn from(v: wasm_bindgen::JsValue) -> Self {
        Self::Dom(v.as_string().unwrap_or_else(|| format!("{v:?}")))
    }
}
