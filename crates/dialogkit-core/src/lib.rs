//! dialogkit core
//!
//! Renderer-independent state for two modal dialogs:
//!
//! - [`ConfirmDialog`]: a yes/no prompt with confirm/cancel callbacks
//! - [`InputDialog`]: a single text field whose trimmed value is handed to a
//!   (possibly asynchronous) submit callback
//!
//! The host application owns visibility. Dialogs never close themselves;
//! the host hides them from its own callbacks.

pub mod confirm;
pub mod error;
pub mod input;
pub mod submission;
pub mod text_field;

pub use confirm::{ConfirmControl, ConfirmDialog, ConfirmView};
pub use error::{DialogError, Result, SubmitError};
pub use input::{InputDialog, InputView, SubmitCallback};
pub use submission::{
    ReentryPolicy, Submission, SubmitCompletion, SubmitFuture, SubmitOutcome, SubmitTicket,
};
pub use text_field::TextField;

/// Zero-argument host notification
pub type Callback = Box<dyn FnMut() + Send>;
