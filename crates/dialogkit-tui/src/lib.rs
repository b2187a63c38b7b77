//! dialogkit terminal frontend
//!
//! ratatui rendering and key bindings for the `dialogkit-core` dialogs,
//! plus the demo host used by the `dialogkit` binary.

pub mod app;
pub mod logging;
pub mod ui;

pub use app::{App, Event, EventHandler, TuiConfig};
