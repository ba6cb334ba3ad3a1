//! Copy-to-clipboard for the code blocks.
//!
//! The write is async; its completion holds only a weak reference to the
//! app, so a calculator freed mid-copy is simply skipped.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::JsFuture;

use super::{FluidSizes, SharedState};
use crate::error::{FluidError, Result};
use crate::feedback::CopyOutcome;

impl FluidSizes {
    pub(crate) fn copy_block(state: &Rc<RefCell<SharedState>>, block: usize) {
        let text = {
            let mut s = state.borrow_mut();
            let Ok(text) = s.calculator.clipboard_text() else {
                return;
            };
            let Some(code_block) = s.view.as_mut().and_then(|v| v.block_mut(block)) else {
                return;
            };
            if !code_block.feedback.begin() {
                log::debug!("copy from block {block} ignored, tooltip still active");
                return;
            }
            text
        };

        let weak = Rc::downgrade(state);
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = match write_clipboard(&text).await {
                Ok(()) => CopyOutcome::Copied,
                Err(e) => {
                    log::warn!("{e}");
                    CopyOutcome::Failed
                }
            };
            if let Some(state) = weak.upgrade() {
                Self::finish_copy(&state, block, outcome);
            }
        });
    }

    fn finish_copy(state: &Rc<RefCell<SharedState>>, block: usize, outcome: CopyOutcome) {
        let weak = Rc::downgrade(state);
        let mut s = state.borrow_mut();
        let duration = s.options.tooltip_duration_ms;
        let Some(code_block) = s.view.as_mut().and_then(|v| v.block_mut(block)) else {
            return;
        };
        let Some(message) = code_block.feedback.resolve(outcome) else {
            return;
        };
        code_block.show_tooltip(message);
        if !code_block.timer.schedule(&weak, block, duration) {
            code_block.feedback.dismiss();
            code_block.hide_tooltip();
        }
    }

    pub(crate) fn dismiss_tooltip(state: &Rc<RefCell<SharedState>>, block: usize) {
        let mut s = state.borrow_mut();
        let Some(code_block) = s.view.as_mut().and_then(|v| v.block_mut(block)) else {
            return;
        };
        code_block.timer.fired();
        code_block.feedback.dismiss();
        code_block.hide_tooltip();
    }
}

async fn write_clipboard(text: &str) -> Result<()> {
    let window = web_sys::window().ok_or_else(|| FluidError::Clipboard("no window".into()))?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| FluidError::Clipboard(e.as_string().unwrap_or_else(|| format!("{e:?}"))))
}
