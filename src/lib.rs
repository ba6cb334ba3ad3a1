//! fluid-sizes - CSS `clamp()` calculator for fluid typography and sizing
//!
//! Given a size at a small viewport and a size at a large viewport, derives the
//! line between them and renders it as a `clamp()` expression:
//! - Coefficient derivation (`vw` slope and `rem` offset, one decimal)
//! - Single-line and line-broken CSS output
//! - Accessibility warning when zoom would barely affect the result
//! - Interactive browser calculator with copy-to-clipboard and live preview
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { FluidSizes } from 'fluid-sizes';
//! await init();
//! const app = FluidSizes.mount(document.getElementById('app'), {});
//! app.set_input('maxSize', '4');
//! app.free(); // tears down listeners and pending timers
//! ```

pub mod a11y;
pub mod calculator;
pub mod config;
pub mod css;
pub mod error;
pub mod feedback;
pub mod scale;

// Browser front end
pub mod app;

use wasm_bindgen::prelude::*;

pub use app::FluidSizes;
pub use calculator::{CalculatorSnapshot, FluidScaleCalculator};
pub use config::DisplayOptions;
pub use css::{ClampExpression, Declaration, Layout};
pub use error::FluidError;
pub use scale::{derive, Field, FluidScaleCoefficients, FluidScaleParameters};

/// Derive the clamp coefficients and return them as `{ vwCoefficient, remCoefficient }`
///
/// # Errors
/// Returns an error if the widths are equal or any input is not finite.
#[wasm_bindgen]
pub fn derive_coefficients(
    min_size: f64,
    min_width: f64,
    max_size: f64,
    max_width: f64,
) -> std::result::Result<JsValue, JsValue> {
    let coefficients = derive(min_size, min_width, max_size, max_width)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&coefficients)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Render the single-line `clamp(...)` expression for the given inputs
///
/// # Errors
/// Returns an error if the widths are equal or any input is not finite.
#[wasm_bindgen]
pub fn clamp_expression(
    min_size: f64,
    min_width: f64,
    max_size: f64,
    max_width: f64,
) -> std::result::Result<String, JsValue> {
    let params = FluidScaleParameters::new(min_size, min_width, max_size, max_width);
    let coefficients = params
        .derive()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(ClampExpression::from_parts(&params, coefficients).to_string())
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
