//! Application state

use dialogkit_core::{ConfirmDialog, InputDialog};

use super::store::SharedStore;
use crate::ui::components::notification::NotificationManager;
use crate::ui::Theme;

/// Action waiting behind the confirm dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Remove the named widget
    DeleteWidget(String),
    /// Leave the application
    Quit,
}

impl ConfirmAction {
    pub fn title(&self) -> &'static str {
        match self {
            ConfirmAction::DeleteWidget(_) => "Delete Widget",
            ConfirmAction::Quit => "Quit",
        }
    }

    pub fn message(&self) -> String {
        match self {
            ConfirmAction::DeleteWidget(name) => {
                format!("Delete '{}'? This cannot be undone.", name)
            }
            ConfirmAction::Quit => "Are you sure you want to quit?".to_string(),
        }
    }
}

/// Which input dialog an event refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Create,
    Rename,
}

/// Application state
pub struct AppState {
    /// Widgets shared with submit futures
    pub store: SharedStore,

    /// Widget list selection index
    pub selected: usize,

    pub confirm: ConfirmDialog,

    /// What the confirm dialog is currently asking about
    pub confirm_action: Option<ConfirmAction>,

    pub create_dialog: InputDialog,

    pub rename_dialog: InputDialog,

    pub notifications: NotificationManager,

    pub theme: Theme,
}

impl AppState {
    /// Get the input dialog for `kind`
    pub fn input_dialog(&mut self, kind: InputKind) -> &mut InputDialog {
        match kind {
            InputKind::Create => &mut self.create_dialog,
            InputKind::Rename => &mut self.rename_dialog,
        }
    }

    /// Name of the selected widget (if any)
    pub fn selected_name(&self) -> Option<String> {
        self.store
            .lock()
            .widgets()
            .get(self.selected)
            .map(|w| w.name.clone())
    }

    /// Keep the selection inside the list after removals
    pub fn clamp_selection(&mut self) {
        let len = self.store.lock().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    /// Whether any dialog is on screen
    pub fn dialog_open(&self) -> bool {
        self.confirm.is_visible() || self.create_dialog.is_visible() || self.rename_dialog.is_visible()
    }
}
