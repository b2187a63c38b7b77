//! Error types for dialogkit

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DialogError>;

/// Errors reported by dialog operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DialogError {
    #[error("Dialog is not visible")]
    NotVisible,

    #[error("Submission failed: {0}")]
    Submit(#[from] SubmitError),
}

/// Failure of a host submit callback
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The host refused the value (validation, conflicts, ...)
    #[error("{0}")]
    Rejected(String),

    #[error("Submission was cancelled")]
    Aborted,

    #[error("Submission task panicked")]
    Panicked,

    #[error("No async runtime available to run the submission")]
    NoRuntime,
}

impl SubmitError {
    /// Shorthand for a host-side rejection
    pub fn rejected(reason: impl Into<String>) -> Self {
        SubmitError::Rejected(reason.into())
    }
}
