//! Submission results and in-flight task tracking
//!
//! A submit callback either finishes on the spot ([`Submission::Ready`]) or
//! hands back a future ([`Submission::Deferred`]). Deferred futures run as
//! tokio tasks; each one gets a [`SubmitTicket`] and reports a
//! [`SubmitCompletion`] over a channel owned by the dialog.

use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::future::BoxFuture;
use futures::FutureExt;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

use crate::error::SubmitError;

/// Future returned by an asynchronous submit callback
pub type SubmitFuture = BoxFuture<'static, Result<(), SubmitError>>;

/// What a submit callback hands back to the dialog
pub enum Submission {
    /// The callback finished synchronously
    Ready(Result<(), SubmitError>),
    /// The callback must be awaited
    Deferred(SubmitFuture),
}

impl Submission {
    /// Synchronous success
    pub fn ok() -> Self {
        Submission::Ready(Ok(()))
    }

    /// Synchronous rejection
    pub fn rejected(reason: impl Into<String>) -> Self {
        Submission::Ready(Err(SubmitError::rejected(reason)))
    }

    /// Wrap a future to be awaited
    pub fn deferred<F>(future: F) -> Self
    where
        F: Future<Output = Result<(), SubmitError>> + Send + 'static,
    {
        Submission::Deferred(future.boxed())
    }
}

impl fmt::Debug for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Submission::Ready(result) => f.debug_tuple("Ready").field(result).finish(),
            Submission::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

/// Identifies one submission of one dialog instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubmitTicket(u64);

impl SubmitTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubmitTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Result of a deferred submission, reported back to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitCompletion {
    pub ticket: SubmitTicket,
    /// The trimmed value that was submitted
    pub value: String,
    pub result: Result<(), SubmitError>,
}

/// Whether a new submit is allowed while another one is pending
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReentryPolicy {
    /// The submit control is disabled while a submission is pending
    #[default]
    Guarded,
    /// Every submit invokes the callback, several may be in flight
    Concurrent,
}

/// What happened when the host triggered submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Dialog is hidden, nothing happened
    Hidden,
    /// Empty after trimming, silently dropped
    Empty,
    /// A submission is pending and the policy is guarded
    Busy,
    /// The callback finished synchronously
    Completed(Result<(), SubmitError>),
    /// The callback returned a future, now running under this ticket
    Started(SubmitTicket),
}

impl SubmitOutcome {
    /// Whether the submit callback was invoked
    pub fn invoked(&self) -> bool {
        matches!(self, SubmitOutcome::Completed(_) | SubmitOutcome::Started(_))
    }
}

/// Owns the in-flight tasks of one dialog
pub(crate) struct SubmissionTracker {
    next_ticket: u64,
    pending: BTreeMap<SubmitTicket, AbortHandle>,
    tx: mpsc::UnboundedSender<SubmitCompletion>,
    rx: mpsc::UnboundedReceiver<SubmitCompletion>,
}

impl SubmissionTracker {
    pub(crate) fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            next_ticket: 0,
            pending: BTreeMap::new(),
            tx,
            rx,
        }
    }

    pub(crate) fn next_ticket(&mut self) -> SubmitTicket {
        self.next_ticket += 1;
        SubmitTicket(self.next_ticket)
    }

    /// Whether any task is still running
    ///
    /// A finished task stops counting here even before its completion is
    /// collected.
    pub(crate) fn is_pending(&self) -> bool {
        self.pending.values().any(|handle| !handle.is_finished())
    }

    pub(crate) fn pending_count(&self) -> usize {
        self.pending
            .values()
            .filter(|handle| !handle.is_finished())
            .count()
    }

    /// Whether any completion is still owed to the host
    fn has_uncollected(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Run `future` on the current tokio runtime under `ticket`
    pub(crate) fn spawn(
        &mut self,
        ticket: SubmitTicket,
        value: String,
        future: SubmitFuture,
    ) -> Result<(), SubmitError> {
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| SubmitError::NoRuntime)?;
        let tx = self.tx.clone();

        let handle = runtime.spawn(async move {
            let result = AssertUnwindSafe(future)
                .catch_unwind()
                .await
                .unwrap_or(Err(SubmitError::Panicked));
            // Receiver lives as long as the dialog
            let _ = tx.send(SubmitCompletion {
                ticket,
                value,
                result,
            });
        });

        self.pending.insert(ticket, handle.abort_handle());
        Ok(())
    }

    /// Drain finished submissions without waiting
    pub(crate) fn poll(&mut self) -> Vec<SubmitCompletion> {
        let mut done = Vec::new();
        while let Ok(completion) = self.rx.try_recv() {
            if let Some(completion) = self.accept(completion) {
                done.push(completion);
            }
        }
        done
    }

    /// Wait for the next pending submission to finish
    pub(crate) async fn next(&mut self) -> Option<SubmitCompletion> {
        while self.has_uncollected() {
            let completion = self.rx.recv().await?;
            if let Some(completion) = self.accept(completion) {
                return Some(completion);
            }
        }
        None
    }

    /// Abort every pending task and drop uncollected completions
    ///
    /// Returns how many submissions were discarded.
    pub(crate) fn abort_all(&mut self) -> usize {
        let count = self.pending.len();
        for (ticket, handle) in std::mem::take(&mut self.pending) {
            tracing::debug!(%ticket, "Aborting pending submission");
            handle.abort();
        }
        count
    }

    fn accept(&mut self, completion: SubmitCompletion) -> Option<SubmitCompletion> {
        if self.pending.remove(&completion.ticket).is_some() {
            Some(completion)
        } else {
            tracing::debug!(ticket = %completion.ticket, "Discarding late completion");
            None
        }
    }
}

impl Drop for SubmissionTracker {
    fn drop(&mut self) {
        self.abort_all();
    }
}
