//! Demo host application
//!
//! Owns the dialogs' visibility and wires their callbacks to its own state:
//! creating, renaming and deleting named widgets. Every dialog is closed by
//! this host, never by the dialog itself.

pub mod config;
pub mod events;
pub mod keys;
pub mod state;
pub mod store;

pub use config::{ConfigError, ReentryConfig, TuiConfig};
pub use events::{Event, EventHandler};
pub use state::{AppState, ConfirmAction, InputKind};
pub use store::{SharedStore, StoreError, Widget, WidgetStore};

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use dialogkit_core::{
    ConfirmDialog, InputDialog, ReentryPolicy, Submission, SubmitCompletion, SubmitError,
    SubmitOutcome,
};
use ratatui::prelude::*;
use tokio::sync::mpsc;

use crate::ui;
use crate::ui::components::notification::Notification;
use crate::ui::Theme;
use keys::{handle_confirm_key, handle_input_key, InputKeyResult};

/// Main application struct
pub struct App {
    pub state: AppState,

    /// Whether the app should quit
    pub should_quit: bool,

    config: TuiConfig,

    /// Where dialog callbacks report back
    events: mpsc::UnboundedSender<Event>,
}

impl App {
    /// Create the app; dialog callbacks send into `events`
    pub fn new(config: TuiConfig, events: mpsc::UnboundedSender<Event>) -> Self {
        let store = SharedStore::new();
        let policy = ReentryPolicy::from(config.reentry);

        let confirm = ConfirmDialog::new("").on_cancel(notify(&events, Event::ConfirmCancelled));

        let create_dialog = InputDialog::new("New Widget", "Name")
            .with_reentry_policy(policy)
            .on_submit(create_widget(store.clone(), config.submit_delay()))
            .on_cancel(notify(&events, Event::InputCancelled(InputKind::Create)));

        let rename_dialog = InputDialog::new("Rename Widget", "New name")
            .with_reentry_policy(policy)
            .on_cancel(notify(&events, Event::InputCancelled(InputKind::Rename)));

        let state = AppState {
            store,
            selected: 0,
            confirm,
            confirm_action: None,
            create_dialog,
            rename_dialog,
            notifications: Default::default(),
            theme: Theme::from_variant(config.theme),
        };

        Self {
            state,
            should_quit: false,
            config,
            events,
        }
    }

    pub fn config(&self) -> &TuiConfig {
        &self.config
    }

    /// Run the application main loop
    pub async fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &mut EventHandler,
    ) -> anyhow::Result<()> {
        let reader = events.start();

        while !self.should_quit {
            terminal.draw(|frame| ui::render(frame, &self.state))?;

            match events.next().await {
                Some(event) => self.handle_event(event),
                None => break,
            }
        }

        reader.abort();
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Paste(text) => self.handle_paste(&text),
            Event::Resize => {}
            Event::Tick => self.on_tick(),
            Event::Confirmed(action) => self.on_confirmed(action),
            Event::ConfirmCancelled => {
                tracing::debug!(action = ?self.state.confirm_action, "Confirmation cancelled");
                self.close_confirm();
            }
            Event::InputCancelled(kind) => self.state.input_dialog(kind).hide(),
        }
    }

    /// Age toasts and pick up finished submissions
    pub fn on_tick(&mut self) {
        self.state.notifications.tick();
        for kind in [InputKind::Create, InputKind::Rename] {
            for completion in self.state.input_dialog(kind).poll_completions() {
                self.handle_completion(kind, completion);
            }
        }
    }

    /// React to a finished submission; success closes the dialog
    pub fn handle_completion(&mut self, kind: InputKind, completion: SubmitCompletion) {
        match completion.result {
            Ok(()) => {
                self.state.input_dialog(kind).hide();
                if let Some(index) = self.state.store.lock().position(&completion.value) {
                    self.state.selected = index;
                }
                let verb = match kind {
                    InputKind::Create => "Created",
                    InputKind::Rename => "Renamed to",
                };
                self.state
                    .notifications
                    .push(Notification::success(format!("{} '{}'", verb, completion.value)));
            }
            Err(e) => {
                self.state.notifications.push(Notification::error(e.to_string()));
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.state.confirm.is_visible() {
            handle_confirm_key(&mut self.state.confirm, key);
            return;
        }

        for kind in [InputKind::Create, InputKind::Rename] {
            let dialog = self.state.input_dialog(kind);
            if dialog.is_visible() {
                match handle_input_key(dialog, key) {
                    InputKeyResult::Submitted(SubmitOutcome::Completed(Err(e))) => {
                        self.state.notifications.push(Notification::error(e.to_string()));
                    }
                    InputKeyResult::Submitted(SubmitOutcome::Busy) => {
                        tracing::debug!("Submit pressed while busy");
                    }
                    _ => {}
                }
                return;
            }
        }

        self.handle_list_key(key);
    }

    fn handle_paste(&mut self, text: &str) {
        for kind in [InputKind::Create, InputKind::Rename] {
            let dialog = self.state.input_dialog(kind);
            if dialog.is_visible() {
                dialog.insert_str(text);
                return;
            }
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.selected = self.state.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.state.selected += 1;
                self.state.clamp_selection();
            }
            KeyCode::Char('n') => self.open_create(),
            KeyCode::Char('r') | KeyCode::Enter => self.open_rename(),
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(name) = self.state.selected_name() {
                    self.open_confirm(ConfirmAction::DeleteWidget(name));
                }
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                if self.config.confirm_quit {
                    self.open_confirm(ConfirmAction::Quit);
                } else {
                    self.should_quit = true;
                }
            }
            _ => {}
        }
    }

    pub fn open_create(&mut self) {
        self.state.create_dialog.show();
    }

    /// Show the rename dialog seeded with the selected widget's name
    pub fn open_rename(&mut self) {
        let Some(name) = self.state.selected_name() else {
            return;
        };

        let dialog = &mut self.state.rename_dialog;
        dialog.set_on_submit(rename_widget(
            self.state.store.clone(),
            name.clone(),
            self.config.submit_delay(),
        ));
        dialog.set_initial_value(Some(name));
        dialog.show();
    }

    pub fn open_confirm(&mut self, action: ConfirmAction) {
        let confirm = &mut self.state.confirm;
        confirm.set_title(action.title());
        confirm.set_on_confirm(notify(&self.events, Event::Confirmed(action.clone())));
        confirm.show(action.message());
        self.state.confirm_action = Some(action);
    }

    fn close_confirm(&mut self) {
        self.state.confirm.hide();
        self.state.confirm_action = None;
    }

    fn on_confirmed(&mut self, action: ConfirmAction) {
        self.close_confirm();
        match action {
            ConfirmAction::Quit => self.should_quit = true,
            ConfirmAction::DeleteWidget(name) => {
                let removed = self.state.store.lock().remove(&name);
                match removed {
                    Ok(widget) => {
                        tracing::info!(name = %widget.name, "Widget deleted");
                        self.state.clamp_selection();
                        self.state
                            .notifications
                            .push(Notification::info(format!("Deleted '{}'", widget.name)));
                    }
                    Err(e) => self.state.notifications.push(Notification::error(e.to_string())),
                }
            }
        }
    }
}

/// Callback that posts `event` to the app
fn notify(events: &mpsc::UnboundedSender<Event>, event: Event) -> impl FnMut() + Send + 'static {
    let tx = events.clone();
    move || {
        if tx.send(event.clone()).is_err() {
            tracing::warn!("Event channel closed, dropping {:?}", event);
        }
    }
}

/// Submit callback creating a widget after a simulated delay
fn create_widget(
    store: SharedStore,
    delay: Duration,
) -> impl FnMut(String) -> Submission + Send + 'static {
    move |name| {
        let store = store.clone();
        Submission::deferred(async move {
            tokio::time::sleep(delay).await;
            let result = store.lock().create(&name);
            result
                .map(|_| ())
                .map_err(|e| SubmitError::rejected(e.to_string()))
        })
    }
}

/// Submit callback renaming `from` after a simulated delay
fn rename_widget(
    store: SharedStore,
    from: String,
    delay: Duration,
) -> impl FnMut(String) -> Submission + Send + 'static {
    move |to| {
        let store = store.clone();
        let from = from.clone();
        Submission::deferred(async move {
            tokio::time::sleep(delay).await;
            let result = store.lock().rename(&from, &to);
            result
                .map(|_| ())
                .map_err(|e| SubmitError::rejected(e.to_string()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn test_app(config: TuiConfig) -> (App, mpsc::UnboundedReceiver<Event>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (App::new(config, tx), rx)
    }

    fn instant_config() -> TuiConfig {
        TuiConfig {
            submit_delay_ms: 0,
            ..TuiConfig::default()
        }
    }

    /// Press a key and deliver whatever the dialog callbacks posted
    fn press(app: &mut App, rx: &mut mpsc::UnboundedReceiver<Event>, code: KeyCode) {
        app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
        while let Ok(event) = rx.try_recv() {
            app.handle_event(event);
        }
    }

    fn type_text(app: &mut App, rx: &mut mpsc::UnboundedReceiver<Event>, text: &str) {
        for c in text.chars() {
            press(app, rx, KeyCode::Char(c));
        }
    }

    async fn settle(app: &mut App, kind: InputKind) {
        let completion = app
            .state
            .input_dialog(kind)
            .next_completion()
            .await
            .expect("a pending submission");
        app.handle_completion(kind, completion);
    }

    fn names(app: &App) -> Vec<String> {
        app.state
            .store
            .lock()
            .widgets()
            .iter()
            .map(|w| w.name.clone())
            .collect()
    }

    #[tokio::test]
    async fn test_create_widget_flow() {
        let (mut app, mut rx) = test_app(instant_config());

        press(&mut app, &mut rx, KeyCode::Char('n'));
        assert!(app.state.create_dialog.is_visible());

        type_text(&mut app, &mut rx, "  widget-42  ");
        press(&mut app, &mut rx, KeyCode::Enter);
        assert!(app.state.create_dialog.is_submitting());

        settle(&mut app, InputKind::Create).await;
        assert_eq!(names(&app), vec!["widget-42".to_string()]);
        assert!(!app.state.create_dialog.is_visible());
    }

    #[tokio::test]
    async fn test_blank_create_keeps_dialog_open() {
        let (mut app, mut rx) = test_app(instant_config());
        press(&mut app, &mut rx, KeyCode::Char('n'));
        type_text(&mut app, &mut rx, "   ");
        press(&mut app, &mut rx, KeyCode::Enter);

        assert!(!app.state.create_dialog.is_submitting());
        assert!(app.state.create_dialog.is_visible());
        assert!(names(&app).is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_create_shows_error_and_stays_open() {
        let (mut app, mut rx) = test_app(instant_config());
        app.state.store.lock().create("taken").unwrap();

        press(&mut app, &mut rx, KeyCode::Char('n'));
        type_text(&mut app, &mut rx, "taken");
        press(&mut app, &mut rx, KeyCode::Enter);
        settle(&mut app, InputKind::Create).await;

        assert!(app.state.create_dialog.is_visible());
        assert_eq!(app.state.create_dialog.text(), "taken");
        let toast = app.state.notifications.latest().unwrap();
        assert!(toast.message.contains("already exists"));
    }

    #[tokio::test]
    async fn test_create_dialog_reopens_empty() {
        let (mut app, mut rx) = test_app(instant_config());
        press(&mut app, &mut rx, KeyCode::Char('n'));
        type_text(&mut app, &mut rx, "draft");
        press(&mut app, &mut rx, KeyCode::Esc);
        assert!(!app.state.create_dialog.is_visible());

        press(&mut app, &mut rx, KeyCode::Char('n'));
        assert_eq!(app.state.create_dialog.text(), "");
    }

    #[tokio::test]
    async fn test_rename_seeds_selected_name() {
        let (mut app, mut rx) = test_app(instant_config());
        {
            let mut store = app.state.store.lock();
            store.create("alpha").unwrap();
            store.create("beta").unwrap();
        }

        press(&mut app, &mut rx, KeyCode::Down);
        press(&mut app, &mut rx, KeyCode::Char('r'));
        assert_eq!(app.state.rename_dialog.text(), "beta");

        let ctrl_u = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        app.handle_event(Event::Key(ctrl_u));
        type_text(&mut app, &mut rx, "gamma");
        press(&mut app, &mut rx, KeyCode::Enter);
        settle(&mut app, InputKind::Rename).await;

        assert_eq!(names(&app), vec!["alpha".to_string(), "gamma".to_string()]);
        assert!(!app.state.rename_dialog.is_visible());

        // Next rename starts from the new selection's name
        press(&mut app, &mut rx, KeyCode::Up);
        press(&mut app, &mut rx, KeyCode::Char('r'));
        assert_eq!(app.state.rename_dialog.text(), "alpha");
    }

    #[test]
    fn test_delete_confirm_flow() {
        let (mut app, mut rx) = test_app(instant_config());
        app.state.store.lock().create("doomed").unwrap();

        press(&mut app, &mut rx, KeyCode::Char('d'));
        assert!(app.state.confirm.is_visible());
        assert_eq!(
            app.state.confirm_action,
            Some(ConfirmAction::DeleteWidget("doomed".into()))
        );

        press(&mut app, &mut rx, KeyCode::Char('y'));
        assert!(!app.state.confirm.is_visible());
        assert!(names(&app).is_empty());
    }

    #[test]
    fn test_delete_cancel_keeps_widget() {
        let (mut app, mut rx) = test_app(instant_config());
        app.state.store.lock().create("safe").unwrap();

        press(&mut app, &mut rx, KeyCode::Char('d'));
        press(&mut app, &mut rx, KeyCode::Char('n'));
        assert!(!app.state.confirm.is_visible());
        assert_eq!(app.state.confirm_action, None);
        assert_eq!(names(&app), vec!["safe".to_string()]);
    }

    #[test]
    fn test_quit_requires_confirmation() {
        let (mut app, mut rx) = test_app(instant_config());
        press(&mut app, &mut rx, KeyCode::Char('q'));
        assert!(!app.should_quit);
        press(&mut app, &mut rx, KeyCode::Char('y'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_quit_without_confirmation() {
        let config = TuiConfig {
            confirm_quit: false,
            ..instant_config()
        };
        let (mut app, mut rx) = test_app(config);
        press(&mut app, &mut rx, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_paste_goes_to_open_dialog() {
        let (mut app, _rx) = test_app(instant_config());
        app.handle_event(Event::Paste("pasted".into()));
        app.open_create();
        app.handle_event(Event::Paste("pasted".into()));
        assert_eq!(app.state.create_dialog.text(), "pasted");
    }
}
