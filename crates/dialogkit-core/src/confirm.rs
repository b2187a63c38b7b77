//! Reusable confirmation dialog
//!
//! A stateless yes/no prompt. The host owns visibility and closes the
//! dialog from its own confirm/cancel callbacks.

use std::fmt;

use crate::error::{DialogError, Result};
use crate::Callback;

/// Default title shown when the host doesn't set one
pub const DEFAULT_CONFIRM_TITLE: &str = "Confirm";

/// The two actionable controls of a confirm dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmControl {
    #[default]
    Cancel,
    Confirm,
}

impl ConfirmControl {
    /// Controls in display order
    pub const ALL: [ConfirmControl; 2] = [ConfirmControl::Cancel, ConfirmControl::Confirm];

    pub fn label(&self) -> &'static str {
        match self {
            ConfirmControl::Cancel => "Cancel",
            ConfirmControl::Confirm => "Confirm",
        }
    }

    fn other(self) -> Self {
        match self {
            ConfirmControl::Cancel => ConfirmControl::Confirm,
            ConfirmControl::Confirm => ConfirmControl::Cancel,
        }
    }
}

/// Everything a renderer needs to draw a visible confirm dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmView<'a> {
    pub title: &'a str,
    pub message: &'a str,
    /// Control that `activate_focused` would trigger
    pub focused: ConfirmControl,
}

/// Confirmation dialog state and callbacks
pub struct ConfirmDialog {
    visible: bool,
    title: String,
    message: String,
    focused: ConfirmControl,
    on_confirm: Callback,
    on_cancel: Callback,
}

impl ConfirmDialog {
    /// Create a hidden dialog with a message and no-op callbacks
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            visible: false,
            title: DEFAULT_CONFIRM_TITLE.to_string(),
            message: message.into(),
            focused: ConfirmControl::default(),
            on_confirm: Box::new(|| {}),
            on_cancel: Box::new(|| {}),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the callback run when the user confirms
    pub fn on_confirm(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_confirm = Box::new(callback);
        self
    }

    /// Set the callback run when the user cancels
    pub fn on_cancel(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_cancel = Box::new(callback);
        self
    }

    /// Rebind the confirm callback, e.g. per pending action
    pub fn set_on_confirm(&mut self, callback: impl FnMut() + Send + 'static) {
        self.on_confirm = Box::new(callback);
    }

    pub fn set_on_cancel(&mut self, callback: impl FnMut() + Send + 'static) {
        self.on_cancel = Box::new(callback);
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Host-driven visibility; focus goes back to Cancel on every show
    pub fn set_visible(&mut self, visible: bool) {
        if visible && !self.visible {
            self.focused = ConfirmControl::default();
            tracing::debug!(title = %self.title, "Confirm dialog shown");
        } else if !visible && self.visible {
            tracing::debug!(title = %self.title, "Confirm dialog hidden");
        }
        self.visible = visible;
    }

    /// Set the message and make the dialog visible
    pub fn show(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.set_visible(true);
    }

    pub fn hide(&mut self) {
        self.set_visible(false);
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn focused(&self) -> ConfirmControl {
        self.focused
    }

    pub fn focus(&mut self, control: ConfirmControl) {
        self.focused = control;
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.other();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.other();
    }

    /// Render model, `None` while hidden
    pub fn view(&self) -> Option<ConfirmView<'_>> {
        self.visible.then(|| ConfirmView {
            title: &self.title,
            message: &self.message,
            focused: self.focused,
        })
    }

    /// Invoke the callback bound to `control`
    ///
    /// Only that one callback runs. A hidden dialog has no controls, so
    /// nothing is invoked and [`DialogError::NotVisible`] is returned.
    pub fn activate(&mut self, control: ConfirmControl) -> Result<()> {
        if !self.visible {
            return Err(DialogError::NotVisible);
        }

        tracing::debug!(control = control.label(), "Confirm dialog control activated");
        match control {
            ConfirmControl::Confirm => (self.on_confirm)(),
            ConfirmControl::Cancel => (self.on_cancel)(),
        }
        Ok(())
    }

    /// Activate whichever control has focus
    pub fn activate_focused(&mut self) -> Result<ConfirmControl> {
        let control = self.focused;
        self.activate(control)?;
        Ok(control)
    }

    pub fn confirm(&mut self) -> Result<()> {
        self.activate(ConfirmControl::Confirm)
    }

    pub fn cancel(&mut self) -> Result<()> {
        self.activate(ConfirmControl::Cancel)
    }
}

impl fmt::Debug for ConfirmDialog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfirmDialog")
            .field("visible", &self.visible)
            .field("title", &self.title)
            .field("message", &self.message)
            .field("focused", &self.focused)
            .finish_non_exhaustive()
    }
}
