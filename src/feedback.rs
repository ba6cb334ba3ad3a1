//! Copy-to-clipboard acknowledgement state.
//!
//! Each code block owns one `CopyFeedback`. The browser side drives it:
//! `begin` on click, `resolve` when the clipboard promise settles, and
//! `dismiss` when the tooltip timer fires.

use serde::Serialize;

/// How long the tooltip stays visible after a copy.
pub const TOOLTIP_DURATION_MS: u32 = 1500;

/// Result of a clipboard write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CopyOutcome {
    Copied,
    Failed,
}

impl CopyOutcome {
    pub fn message(self) -> &'static str {
        match self {
            CopyOutcome::Copied => "Copied!",
            CopyOutcome::Failed => "Could not copy to clipboard :(",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase", tag = "state", content = "outcome")]
pub enum CopyFeedback {
    #[default]
    Idle,
    /// Clipboard write in flight
    Pending,
    /// Tooltip visible
    Showing(CopyOutcome),
}

impl CopyFeedback {
    /// Start a copy. Returns `false`, and changes nothing, while a previous
    /// copy is still pending or its tooltip is still up.
    pub fn begin(&mut self) -> bool {
        if *self != CopyFeedback::Idle {
            return false;
        }
        *self = CopyFeedback::Pending;
        true
    }

    /// Record the clipboard result. Returns the tooltip text to show, or
    /// `None` if no copy was pending.
    pub fn resolve(&mut self, outcome: CopyOutcome) -> Option<&'static str> {
        if *self != CopyFeedback::Pending {
            return None;
        }
        *self = CopyFeedback::Showing(outcome);
        Some(outcome.message())
    }

    /// Hide the tooltip.
    pub fn dismiss(&mut self) {
        *self = CopyFeedback::Idle;
    }

    pub fn tooltip(&self) -> Option<&'static str> {
        match self {
            CopyFeedback::Showing(outcome) => Some(outcome.message()),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        *self != CopyFeedback::Idle
    }
}
