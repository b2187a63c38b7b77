//! Key bindings for the dialogs
//!
//! Keys are translated into dialog operations; the dialogs themselves
//! decide which callback (if any) runs.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use dialogkit_core::{ConfirmControl, ConfirmDialog, InputDialog, SubmitOutcome};

/// What a key did to an input dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKeyResult {
    /// Key isn't bound
    Ignored,
    /// Text or cursor changed
    Edited,
    /// Submit was triggered
    Submitted(SubmitOutcome),
    /// Cancel was triggered
    Cancelled,
}

/// Route a key to a visible confirm dialog; returns whether it was handled
pub fn handle_confirm_key(dialog: &mut ConfirmDialog, key: KeyEvent) -> bool {
    if !dialog.is_visible() {
        return false;
    }

    let result = match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => dialog.activate(ConfirmControl::Confirm),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            dialog.activate(ConfirmControl::Cancel)
        }
        KeyCode::Enter | KeyCode::Char(' ') => dialog.activate_focused().map(|_| ()),
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
            dialog.focus_next();
            Ok(())
        }
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
            dialog.focus_prev();
            Ok(())
        }
        _ => return false,
    };

    if let Err(e) = result {
        tracing::debug!("Confirm key ignored: {}", e);
    }
    true
}

/// Route a key to a visible input dialog
pub fn handle_input_key(dialog: &mut InputDialog, key: KeyEvent) -> InputKeyResult {
    if !dialog.is_visible() {
        return InputKeyResult::Ignored;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Enter => InputKeyResult::Submitted(dialog.submit()),
        KeyCode::Esc => match dialog.cancel() {
            Ok(()) => InputKeyResult::Cancelled,
            Err(_) => InputKeyResult::Ignored,
        },
        KeyCode::Char('u') if ctrl => {
            dialog.clear();
            InputKeyResult::Edited
        }
        KeyCode::Char('a') if ctrl => {
            dialog.move_home();
            InputKeyResult::Edited
        }
        KeyCode::Char('e') if ctrl => {
            dialog.move_end();
            InputKeyResult::Edited
        }
        KeyCode::Char(_) if ctrl => InputKeyResult::Ignored,
        KeyCode::Char(c) => {
            dialog.insert_char(c);
            InputKeyResult::Edited
        }
        KeyCode::Backspace => {
            dialog.backspace();
            InputKeyResult::Edited
        }
        KeyCode::Delete => {
            dialog.delete();
            InputKeyResult::Edited
        }
        KeyCode::Left => {
            dialog.move_left();
            InputKeyResult::Edited
        }
        KeyCode::Right => {
            dialog.move_right();
            InputKeyResult::Edited
        }
        KeyCode::Home => {
            dialog.move_home();
            InputKeyResult::Edited
        }
        KeyCode::End => {
            dialog.move_end();
            InputKeyResult::Edited
        }
        _ => InputKeyResult::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialogkit_core::Submission;
    use rstest::rstest;
    use std::sync::{Arc, Mutex};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn recording_confirm() -> (ConfirmDialog, Arc<Mutex<Vec<&'static str>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let (c, x) = (log.clone(), log.clone());
        let dialog = ConfirmDialog::new("Sure?")
            .on_confirm(move || c.lock().unwrap().push("confirm"))
            .on_cancel(move || x.lock().unwrap().push("cancel"));
        (dialog, log)
    }

    #[rstest]
    #[case(KeyCode::Char('y'), "confirm")]
    #[case(KeyCode::Char('n'), "cancel")]
    #[case(KeyCode::Esc, "cancel")]
    #[case(KeyCode::Enter, "cancel")]
    fn test_confirm_bindings(#[case] code: KeyCode, #[case] expected: &str) {
        let (mut dialog, log) = recording_confirm();
        dialog.set_visible(true);
        assert!(handle_confirm_key(&mut dialog, key(code)));
        assert_eq!(*log.lock().unwrap(), vec![expected]);
    }

    #[test]
    fn test_confirm_enter_uses_focus() {
        let (mut dialog, log) = recording_confirm();
        dialog.set_visible(true);
        handle_confirm_key(&mut dialog, key(KeyCode::Tab));
        handle_confirm_key(&mut dialog, key(KeyCode::Enter));
        assert_eq!(*log.lock().unwrap(), vec!["confirm"]);
    }

    #[test]
    fn test_hidden_confirm_ignores_keys() {
        let (mut dialog, log) = recording_confirm();
        assert!(!handle_confirm_key(&mut dialog, key(KeyCode::Char('y'))));
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_input_typing_and_submit() {
        let submitted = Arc::new(Mutex::new(Vec::new()));
        let sink = submitted.clone();
        let mut dialog = InputDialog::new("New", "Name").on_submit(move |v| {
            sink.lock().unwrap().push(v);
            Submission::ok()
        });
        dialog.show();

        for c in " ab ".chars() {
            assert_eq!(handle_input_key(&mut dialog, key(KeyCode::Char(c))), InputKeyResult::Edited);
        }
        handle_input_key(&mut dialog, key(KeyCode::Left));
        handle_input_key(&mut dialog, key(KeyCode::Backspace));
        assert_eq!(dialog.text(), " a ");

        assert_eq!(
            handle_input_key(&mut dialog, key(KeyCode::Enter)),
            InputKeyResult::Submitted(SubmitOutcome::Completed(Ok(())))
        );
        assert_eq!(*submitted.lock().unwrap(), vec!["a".to_string()]);
    }

    #[test]
    fn test_input_ctrl_u_clears() {
        let mut dialog = InputDialog::new("Rename", "Name").with_initial_value("old");
        dialog.show();
        let ctrl_u = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        handle_input_key(&mut dialog, ctrl_u);
        assert_eq!(dialog.text(), "");
        assert_eq!(
            handle_input_key(&mut dialog, key(KeyCode::Enter)),
            InputKeyResult::Submitted(SubmitOutcome::Empty)
        );
    }

    #[test]
    fn test_input_escape_cancels() {
        let mut dialog = InputDialog::new("New", "Name");
        assert_eq!(handle_input_key(&mut dialog, key(KeyCode::Esc)), InputKeyResult::Ignored);
        dialog.show();
        assert_eq!(handle_input_key(&mut dialog, key(KeyCode::Esc)), InputKeyResult::Cancelled);
    }
}
