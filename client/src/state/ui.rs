//! Local UI chrome state (theme, transient toast).
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of domain data so pages can show
//! transient feedback without owning timer plumbing. The toast sequence
//! counter lets the auto-dismiss task skip clearing a toast that was
//! replaced while it slept.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Visual flavor of a toast message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}

/// A transient notification shown at the screen edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

/// UI state for dark mode and the active toast.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub toast: Option<Toast>,
    pub toast_seq: u64,
}

impl UiState {
    /// Replace the current toast and bump the sequence counter.
    /// Returns the new sequence for the dismiss task to compare against.
    pub fn push_toast(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.toast_seq += 1;
        self.toast = Some(Toast { message: message.into(), kind });
        self.toast_seq
    }

    /// Clear the toast, but only if `seq` still names the active one.
    pub fn dismiss_toast(&mut self, seq: u64) {
        if self.toast_seq == seq {
            self.toast = None;
        }
    }
}
