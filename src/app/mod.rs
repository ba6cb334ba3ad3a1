//! `FluidSizes` - the interactive calculator mounted into a web page.
//!
//! This module provides the WASM-exported `FluidSizes` struct that handles:
//! - Building the input fields, code blocks, warning banner and live preview
//! - Recomputing on every input event and window resize
//! - Copy-to-clipboard with a per-block tooltip
//! - Tearing all of it down (listeners, DOM, pending timers) when freed
//!
//! Outside wasm32 the struct runs headless: same state and recompute path,
//! no DOM.

#[cfg(target_arch = "wasm32")]
mod clipboard;
#[cfg(target_arch = "wasm32")]
mod console;
#[cfg(target_arch = "wasm32")]
mod listener;
#[cfg(target_arch = "wasm32")]
mod timer;
#[cfg(target_arch = "wasm32")]
mod view;

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use web_sys::HtmlElement;

use crate::calculator::{CalculatorSnapshot, FluidScaleCalculator};
use crate::config::DisplayOptions;
use crate::scale::Field;

#[cfg(target_arch = "wasm32")]
use listener::Listener;
#[cfg(target_arch = "wasm32")]
use view::View;

/// Window width assumed when the window does not report one.
#[cfg(target_arch = "wasm32")]
const DEFAULT_VIEWPORT_WIDTH: f64 = 1024.0;

/// Shared state that can be accessed by event handlers
pub(crate) struct SharedState {
    pub(crate) calculator: FluidScaleCalculator,
    pub(crate) options: DisplayOptions,
    pub(crate) viewport_width: f64,
    #[cfg(target_arch = "wasm32")]
    pub(crate) view: Option<View>,
}

impl SharedState {
    fn new(options: DisplayOptions, viewport_width: f64) -> Self {
        Self {
            calculator: FluidScaleCalculator::new(options.initial),
            options,
            viewport_width,
            #[cfg(target_arch = "wasm32")]
            view: None,
        }
    }

    pub(crate) fn snapshot(&self) -> CalculatorSnapshot {
        self.calculator.snapshot(self.viewport_width, &self.options)
    }

    /// Push the current derived state into the DOM, if mounted.
    pub(crate) fn refresh(&mut self) {
        #[cfg(target_arch = "wasm32")]
        {
            let snapshot = self.snapshot();
            let clamp = self.calculator.clamp().ok();
            if let Some(view) = self.view.as_mut() {
                view.render(&snapshot, clamp.as_ref(), self.viewport_width);
            }
        }
    }
}

/// The calculator exported to JavaScript
#[wasm_bindgen]
pub struct FluidSizes {
    state: Rc<RefCell<SharedState>>,
    #[cfg(target_arch = "wasm32")]
    #[allow(dead_code)] // Dropping these unregisters the DOM listeners
    listeners: Vec<Listener>,
}

impl FluidSizes {
    /// Calculator without any DOM, for native callers and tests.
    pub fn headless(options: DisplayOptions, viewport_width: f64) -> Self {
        Self {
            state: Rc::new(RefCell::new(SharedState::new(options, viewport_width))),
            #[cfg(target_arch = "wasm32")]
            listeners: Vec::new(),
        }
    }

    /// Apply raw text from one input field. Returns the coerced value.
    pub fn update(&self, field: Field, text: &str) -> f64 {
        Self::apply_input(&self.state, field, text)
    }

    pub fn set_viewport_width(&self, width: f64) {
        Self::apply_resize(&self.state, width);
    }

    pub fn current(&self) -> CalculatorSnapshot {
        self.state.borrow().snapshot()
    }

    pub(crate) fn apply_input(state: &Rc<RefCell<SharedState>>, field: Field, text: &str) -> f64 {
        let mut s = state.borrow_mut();
        let value = s.calculator.set_text(field, text);
        log::debug!("{} <- {text:?} ({value})", field.name());
        s.refresh();
        value
    }

    pub(crate) fn apply_resize(state: &Rc<RefCell<SharedState>>, width: f64) {
        let mut s = state.borrow_mut();
        if (s.viewport_width - width).abs() < f64::EPSILON {
            return;
        }
        s.viewport_width = width;
        s.refresh();
    }
}

#[wasm_bindgen]
impl FluidSizes {
    /// Build the calculator inside `container`
    ///
    /// `options` is a (possibly partial) `DisplayOptions` object, or
    /// `undefined` for the defaults. Listeners for input, resize and copy are
    /// registered automatically; call `free()` to remove them again.
    #[cfg(target_arch = "wasm32")]
    pub fn mount(container: &HtmlElement, options: JsValue) -> Result<FluidSizes, JsValue> {
        console_error_panic_hook::set_once();
        console::init();

        let options: DisplayOptions = if options.is_undefined() || options.is_null() {
            DisplayOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options)
                .map_err(|e| crate::error::FluidError::Options(e.to_string()))?
        };

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let viewport_width = window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(DEFAULT_VIEWPORT_WIDTH);

        let state = Rc::new(RefCell::new(SharedState::new(options, viewport_width)));
        let view = {
            let s = state.borrow();
            View::build(container, &s.options)?
        };

        let mut listeners = Vec::new();
        let weak = Rc::downgrade(&state);

        for (field, input) in view.inputs() {
            let weak = weak.clone();
            let input_ref = input.clone();
            listeners.push(Listener::register(input.as_ref(), "input", move |_| {
                if let Some(state) = weak.upgrade() {
                    Self::apply_input(&state, field, &input_ref.value());
                }
            })?);
        }

        for (index, button) in view.copy_buttons().into_iter().enumerate() {
            let weak = weak.clone();
            listeners.push(Listener::register(button.as_ref(), "click", move |_| {
                if let Some(state) = weak.upgrade() {
                    Self::copy_block(&state, index);
                }
            })?);
        }

        {
            let weak = weak.clone();
            let window_ref = window.clone();
            listeners.push(Listener::register(window.as_ref(), "resize", move |_| {
                let Some(width) = window_ref.inner_width().ok().and_then(|w| w.as_f64()) else {
                    return;
                };
                if let Some(state) = weak.upgrade() {
                    Self::apply_resize(&state, width);
                }
            })?);
        }

        {
            let mut s = state.borrow_mut();
            s.view = Some(view);
            s.refresh();
        }
        log::info!("fluid-sizes {} mounted", crate::version());

        Ok(FluidSizes { state, listeners })
    }

    /// Set an input field by name (`minSize`, `minWidth`, `maxSize`, `maxWidth`)
    ///
    /// The text is coerced the same way typed input is. Returns the number
    /// that was stored.
    pub fn set_input(&self, field: &str, text: &str) -> Result<f64, JsValue> {
        let field: Field = field
            .parse()
            .map_err(|e: crate::error::FluidError| JsValue::from_str(&e.to_string()))?;
        let value = self.update(field, text);
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(view) = self.state.borrow().view.as_ref() {
                view.show_input(field, value);
            }
        }
        Ok(value)
    }

    /// Tell the calculator the window width changed
    pub fn resize(&self, width: f64) {
        self.set_viewport_width(width);
    }

    /// Current derived state as a JS object
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.current())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    /// Single-line clamp expression, or `undefined` when the widths are equal
    pub fn clamp(&self) -> Option<String> {
        self.state
            .borrow()
            .calculator
            .clamp()
            .ok()
            .map(|c| c.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for FluidSizes {
    fn drop(&mut self) {
        // Listeners first so no handler runs against a half-torn-down view
        self.listeners.clear();
        if let Ok(mut s) = self.state.try_borrow_mut() {
            // Dropping the view removes its DOM and cancels pending tooltip timers
            s.view = None;
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::css::Layout;

    #[test]
    fn test_headless_defaults() {
        let app = FluidSizes::headless(DisplayOptions::default(), 1200.0);
        let snap = app.current();
        assert_eq!(snap.clamp.as_deref(), Some("clamp(1.5rem, 8vw - 2rem, 3rem)"));
        assert_eq!(snap.layout, Layout::SingleLine);
    }

    #[test]
    fn test_update_recomputes() {
        let app = FluidSizes::headless(DisplayOptions::default(), 1200.0);
        assert_eq!(app.update(Field::MinSize, "1"), 1.0);
        // slope 2/300 -> 10.666.. -> 10.7vw, 1 - 4.666.. -> -3.7rem
        assert_eq!(
            app.current().clamp.as_deref(),
            Some("clamp(1rem, 10.7vw - 3.7rem, 3rem)")
        );
    }

    #[test]
    fn test_resize_switches_layout() {
        let app = FluidSizes::headless(DisplayOptions::default(), 1200.0);
        app.set_viewport_width(640.0);
        assert_eq!(app.current().layout, Layout::LineBroken);
        app.set_viewport_width(701.0);
        assert_eq!(app.current().layout, Layout::SingleLine);
    }

    #[test]
    fn test_initial_params_from_options() {
        let mut options = DisplayOptions::default();
        options.initial.max_size = 4.5;
        let app = FluidSizes::headless(options, 1200.0);
        let c = app.current().coefficients.unwrap();
        assert_eq!(c.vw_coefficient, 16.0);
    }
}
