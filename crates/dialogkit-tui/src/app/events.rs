//! Event handling for the TUI
//!
//! Terminal input, ticks and dialog callbacks all arrive on one channel.
//! Dialog callbacks only hold a sender, so they never borrow the app.

use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::state::{ConfirmAction, InputKind};

/// Application events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Keyboard input
    Key(KeyEvent),
    /// Bracketed paste
    Paste(String),
    /// Terminal resized
    Resize,
    /// Periodic tick (toasts, submission polling)
    Tick,
    /// The confirm dialog's confirm control fired
    Confirmed(ConfirmAction),
    /// The confirm dialog's cancel control fired
    ConfirmCancelled,
    /// An input dialog's cancel control fired
    InputCancelled(InputKind),
}

/// Owns the event channel and the terminal reader task
pub struct EventHandler {
    sender: mpsc::UnboundedSender<Event>,
    receiver: mpsc::UnboundedReceiver<Event>,
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            sender,
            receiver,
            tick_rate,
        }
    }

    /// Get a clone of the sender for callbacks and other tasks
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.sender.clone()
    }

    /// Spawn the task forwarding terminal events and ticks
    pub fn start(&self) -> JoinHandle<()> {
        let tx = self.sender.clone();
        let tick_rate = self.tick_rate;

        tokio::spawn(async move {
            let mut reader = EventStream::new();
            let mut interval = tokio::time::interval(tick_rate);

            loop {
                let event = tokio::select! {
                    _ = interval.tick() => Some(Event::Tick),
                    maybe = reader.next() => match maybe {
                        Some(Ok(event)) => translate(event),
                        Some(Err(e)) => {
                            tracing::error!("Terminal event error: {}", e);
                            break;
                        }
                        None => break,
                    },
                };

                if let Some(event) = event {
                    if tx.send(event).is_err() {
                        break;
                    }
                }
            }
            tracing::debug!("Event reader stopped");
        })
    }

    /// Non-blocking receive
    pub fn try_recv(&mut self) -> Option<Event> {
        self.receiver.try_recv().ok()
    }

    /// Wait for the next event
    pub async fn next(&mut self) -> Option<Event> {
        self.receiver.recv().await
    }
}

fn translate(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        CrosstermEvent::Paste(text) => Some(Event::Paste(text)),
        CrosstermEvent::Resize(_, _) => Some(Event::Resize),
        _ => None,
    }
}
