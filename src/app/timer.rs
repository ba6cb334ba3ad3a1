//! Cancellable tooltip timeout.
//!
//! The timeout id and its callback live together; dropping the timer clears
//! the pending timeout, so the callback can never run after its code block
//! is gone.

use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::{FluidSizes, SharedState};

pub(crate) struct TooltipTimer {
    handle: Option<i32>,
    callback: Option<Closure<dyn FnMut()>>,
}

impl TooltipTimer {
    pub(crate) fn new() -> Self {
        Self {
            handle: None,
            callback: None,
        }
    }

    /// Dismiss the tooltip of code block `block` after `duration_ms`.
    ///
    /// Returns `false` if the browser refused to schedule the timeout.
    pub(crate) fn schedule(
        &mut self,
        state: &Weak<RefCell<SharedState>>,
        block: usize,
        duration_ms: u32,
    ) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        if let Some(handle) = self.handle.take() {
            window.clear_timeout_with_handle(handle);
        }
        // Created once and reused so the closure is never dropped while running
        if self.callback.is_none() {
            let state = state.clone();
            self.callback = Some(Closure::wrap(Box::new(move || {
                if let Some(state) = state.upgrade() {
                    FluidSizes::dismiss_tooltip(&state, block);
                }
            }) as Box<dyn FnMut()>));
        }
        let Some(callback) = self.callback.as_ref() else {
            return false;
        };
        let timeout = i32::try_from(duration_ms).unwrap_or(i32::MAX);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            timeout,
        ) {
            Ok(id) => {
                self.handle = Some(id);
                true
            }
            Err(_) => {
                self.handle = None;
                false
            }
        }
    }

    /// The timeout ran; nothing left to cancel.
    pub(crate) fn fired(&mut self) {
        self.handle = None;
    }

    pub(crate) fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(handle);
            }
        }
    }
}

impl Drop for TooltipTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
