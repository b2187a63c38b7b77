//! Single text-field input dialog
//!
//! The dialog owns the text being edited. The host owns visibility and the
//! initial value; every time the dialog is shown (or the initial value
//! changes while it is shown) the text is re-seeded from that value.
//! Hiding never clears the text.
//!
//! Submitting trims the text, silently drops empty values and hands the
//! rest to the host's submit callback. Asynchronous callbacks are tracked
//! as cancellable tasks; see [`ReentryPolicy`] for what happens when the
//! user submits again before one finishes.

use std::fmt;

use crate::error::{DialogError, Result};
use crate::submission::{
    ReentryPolicy, SubmissionTracker, Submission, SubmitCompletion, SubmitOutcome,
};
use crate::text_field::TextField;
use crate::Callback;

/// Host callback receiving the trimmed value
pub type SubmitCallback = Box<dyn FnMut(String) -> Submission + Send>;

/// Everything a renderer needs to draw a visible input dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputView<'a> {
    pub title: &'a str,
    pub label: &'a str,
    /// Literal field content
    pub value: &'a str,
    /// Field content left of the caret
    pub before_cursor: &'a str,
    /// The field must be non-empty to submit
    pub required: bool,
    /// The field takes keyboard focus when shown
    pub focused: bool,
    /// At least one submission is in flight
    pub submitting: bool,
    /// Whether the submit control accepts activation
    pub submit_enabled: bool,
}

/// Input dialog state and callbacks
pub struct InputDialog {
    visible: bool,
    title: String,
    label: String,
    initial_value: Option<String>,
    field: TextField,
    policy: ReentryPolicy,
    tracker: SubmissionTracker,
    on_submit: SubmitCallback,
    on_cancel: Callback,
}

impl InputDialog {
    /// Create a hidden dialog with no initial value and no-op callbacks
    pub fn new(title: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            visible: false,
            title: title.into(),
            label: label.into(),
            initial_value: None,
            field: TextField::new(),
            policy: ReentryPolicy::default(),
            tracker: SubmissionTracker::new(),
            on_submit: Box::new(|_| Submission::ok()),
            on_cancel: Box::new(|| {}),
        }
    }

    pub fn with_initial_value(mut self, value: impl Into<String>) -> Self {
        self.initial_value = Some(value.into());
        self
    }

    pub fn with_reentry_policy(mut self, policy: ReentryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the callback receiving trimmed, non-empty values
    pub fn on_submit(mut self, callback: impl FnMut(String) -> Submission + Send + 'static) -> Self {
        self.on_submit = Box::new(callback);
        self
    }

    /// Set the callback run when the user cancels
    pub fn on_cancel(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_cancel = Box::new(callback);
        self
    }

    /// Rebind the submit callback, e.g. when the host's target changes
    pub fn set_on_submit(&mut self, callback: impl FnMut(String) -> Submission + Send + 'static) {
        self.on_submit = Box::new(callback);
    }

    pub fn set_on_cancel(&mut self, callback: impl FnMut() + Send + 'static) {
        self.on_cancel = Box::new(callback);
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Host-driven visibility
    ///
    /// Showing a hidden dialog re-seeds the text. Hiding keeps the text
    /// but aborts any pending submission; its result is never reported.
    pub fn set_visible(&mut self, visible: bool) {
        match (self.visible, visible) {
            (false, true) => {
                self.visible = true;
                self.reseed();
                tracing::debug!(title = %self.title, "Input dialog shown");
            }
            (true, false) => {
                self.visible = false;
                let aborted = self.tracker.abort_all();
                tracing::debug!(title = %self.title, aborted, "Input dialog hidden");
            }
            _ => {}
        }
    }

    pub fn show(&mut self) {
        self.set_visible(true);
    }

    pub fn hide(&mut self) {
        self.set_visible(false);
    }

    pub fn initial_value(&self) -> Option<&str> {
        self.initial_value.as_deref()
    }

    /// Change the seed value; re-seeds immediately if visible and changed
    pub fn set_initial_value(&mut self, value: Option<String>) {
        if self.initial_value == value {
            return;
        }
        self.initial_value = value;
        if self.visible {
            self.reseed();
        }
    }

    /// Reset the text to the initial value (or empty)
    pub fn reseed(&mut self) {
        self.field
            .set_value(self.initial_value.clone().unwrap_or_default());
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn reentry_policy(&self) -> ReentryPolicy {
        self.policy
    }

    /// Current literal field content
    pub fn text(&self) -> &str {
        self.field.value()
    }

    pub fn field(&self) -> &TextField {
        &self.field
    }

    /// Apply an edit to the field; ignored while hidden
    pub fn edit(&mut self, f: impl FnOnce(&mut TextField)) {
        if self.visible {
            f(&mut self.field);
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.edit(|field| field.insert_char(c));
    }

    pub fn insert_str(&mut self, s: &str) {
        self.edit(|field| field.insert_str(s));
    }

    pub fn backspace(&mut self) {
        self.edit(|field| {
            field.backspace();
        });
    }

    pub fn delete(&mut self) {
        self.edit(|field| {
            field.delete();
        });
    }

    pub fn move_left(&mut self) {
        self.edit(TextField::move_left);
    }

    pub fn move_right(&mut self) {
        self.edit(TextField::move_right);
    }

    pub fn move_home(&mut self) {
        self.edit(TextField::move_home);
    }

    pub fn move_end(&mut self) {
        self.edit(TextField::move_end);
    }

    pub fn clear(&mut self) {
        self.edit(TextField::clear);
    }

    /// Whether any submission is in flight
    pub fn is_submitting(&self) -> bool {
        self.tracker.is_pending()
    }

    pub fn pending_count(&self) -> usize {
        self.tracker.pending_count()
    }

    /// Whether the submit control currently accepts activation
    pub fn submit_enabled(&self) -> bool {
        self.visible && !(self.policy == ReentryPolicy::Guarded && self.tracker.is_pending())
    }

    /// Render model, `None` while hidden
    pub fn view(&self) -> Option<InputView<'_>> {
        self.visible.then(|| InputView {
            title: &self.title,
            label: &self.label,
            value: self.field.value(),
            before_cursor: self.field.before_cursor(),
            required: true,
            focused: true,
            submitting: self.tracker.is_pending(),
            submit_enabled: self.submit_enabled(),
        })
    }

    /// Run the submission protocol
    ///
    /// The callback is invoked at most once per call, and only with a
    /// trimmed, non-empty value. The dialog never closes itself.
    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.visible {
            return SubmitOutcome::Hidden;
        }

        let value = self.field.value().trim();
        if value.is_empty() {
            tracing::debug!(title = %self.title, "Dropping empty submission");
            return SubmitOutcome::Empty;
        }

        if !self.submit_enabled() {
            tracing::debug!(title = %self.title, "Submit ignored while a submission is pending");
            return SubmitOutcome::Busy;
        }

        let value = value.to_string();
        match (self.on_submit)(value.clone()) {
            Submission::Ready(result) => {
                if let Err(e) = &result {
                    tracing::warn!(title = %self.title, "Submission rejected: {}", e);
                }
                SubmitOutcome::Completed(result)
            }
            Submission::Deferred(future) => {
                let ticket = self.tracker.next_ticket();
                match self.tracker.spawn(ticket, value, future) {
                    Ok(()) => {
                        tracing::info!(title = %self.title, %ticket, "Submission started");
                        SubmitOutcome::Started(ticket)
                    }
                    Err(e) => {
                        tracing::warn!(title = %self.title, "Could not start submission: {}", e);
                        SubmitOutcome::Completed(Err(e))
                    }
                }
            }
        }
    }

    /// Invoke the cancel callback; the text is left untouched
    pub fn cancel(&mut self) -> Result<()> {
        if !self.visible {
            return Err(DialogError::NotVisible);
        }
        (self.on_cancel)();
        Ok(())
    }

    /// Abort every pending submission, returning how many were aborted
    pub fn cancel_pending(&mut self) -> usize {
        self.tracker.abort_all()
    }

    /// Collect finished submissions without waiting
    pub fn poll_completions(&mut self) -> Vec<SubmitCompletion> {
        let done = self.tracker.poll();
        for completion in &done {
            log_completion(&self.title, completion);
        }
        done
    }

    /// Wait for the next pending submission; `None` when nothing is pending
    pub async fn next_completion(&mut self) -> Option<SubmitCompletion> {
        let completion = self.tracker.next().await?;
        log_completion(&self.title, &completion);
        Some(completion)
    }
}

fn log_completion(title: &str, completion: &SubmitCompletion) {
    match &completion.result {
        Ok(()) => tracing::info!(title, ticket = %completion.ticket, "Submission completed"),
        Err(e) => tracing::warn!(title, ticket = %completion.ticket, "Submission failed: {}", e),
    }
}

impl fmt::Debug for InputDialog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputDialog")
            .field("visible", &self.visible)
            .field("title", &self.title)
            .field("label", &self.label)
            .field("initial_value", &self.initial_value)
            .field("field", &self.field)
            .field("policy", &self.policy)
            .field("pending", &self.tracker.pending_count())
            .finish_non_exhaustive()
    }
}
