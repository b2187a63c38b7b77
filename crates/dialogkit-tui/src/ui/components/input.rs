//! Input dialog component

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use dialogkit_core::InputDialog;

use crate::ui::layout::{centered_rect_fixed, dialog_block};
use crate::ui::{Theme, ThemeRole};

const DIALOG_WIDTH: u16 = 56;
const DIALOG_HEIGHT: u16 = 11;

/// Render the dialog on top of `area` and place the terminal cursor in the
/// field; draws nothing while hidden
pub fn render(frame: &mut Frame, area: Rect, dialog: &InputDialog, theme: &Theme) {
    let Some(view) = dialog.view() else {
        return;
    };

    let dialog_area = centered_rect_fixed(DIALOG_WIDTH, DIALOG_HEIGHT, area);
    frame.render_widget(Clear, dialog_area);

    let block = dialog_block(view.title, theme);
    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Label
            Constraint::Length(3), // Field
            Constraint::Min(1),    // Status
            Constraint::Length(1), // Help
        ])
        .split(inner);

    let mut label = vec![Span::styled(view.label, theme.style(ThemeRole::Text))];
    if view.required {
        label.push(Span::styled(" *", theme.style(ThemeRole::Danger)));
    }
    frame.render_widget(Paragraph::new(Line::from(label)), chunks[0]);

    let field_role = if view.focused {
        ThemeRole::BorderFocused
    } else {
        ThemeRole::Border
    };
    let field_block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.style(field_role));
    let field_inner = field_block.inner(chunks[1]);
    frame.render_widget(field_block, chunks[1]);

    let (shown, caret) = visible_window(view.value, view.before_cursor, field_inner.width);
    frame.render_widget(
        Paragraph::new(shown).style(theme.style(ThemeRole::Input)),
        field_inner,
    );
    if view.focused && field_inner.width > 0 {
        frame.set_cursor_position(Position::new(field_inner.x + caret, field_inner.y));
    }

    if view.submitting {
        let status = Paragraph::new("Submitting\u{2026}")
            .style(theme.style(ThemeRole::Accent))
            .alignment(Alignment::Center);
        frame.render_widget(status, chunks[2]);
    }

    let submit_role = if view.submit_enabled {
        ThemeRole::TextMuted
    } else {
        ThemeRole::Disabled
    };
    let help = Line::from(vec![
        Span::styled("[Enter] Submit", theme.style(submit_role)),
        Span::raw("  "),
        Span::styled("[Esc] Cancel", theme.style(ThemeRole::TextMuted)),
    ]);
    frame.render_widget(
        Paragraph::new(help).alignment(Alignment::Center),
        chunks[3],
    );
}

/// Tail of `value` that fits in `width` columns with the caret visible,
/// and the caret column within it
fn visible_window<'a>(value: &'a str, before_cursor: &str, width: u16) -> (&'a str, u16) {
    let width = width as usize;
    if width == 0 {
        return ("", 0);
    }

    let caret = before_cursor.width();
    let mut skipped = 0;
    let mut start = 0;
    for (i, c) in value.char_indices() {
        if caret - skipped < width {
            break;
        }
        skipped += c.width().unwrap_or(0);
        start = i + c.len_utf8();
    }

    (&value[start..], (caret - skipped) as u16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::{buffer_text, draw};
    use dialogkit_core::{ReentryPolicy, Submission};
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    #[test]
    fn test_hidden_dialog_draws_nothing() {
        let dialog = InputDialog::new("Rename", "Name").with_initial_value("X");
        let buffer = draw(70, 20, |frame| {
            let area = frame.area();
            render(frame, area, &dialog, &Theme::dark())
        });
        assert_eq!(buffer, Buffer::empty(Rect::new(0, 0, 70, 20)));
    }

    #[test]
    fn test_shown_dialog_renders_seeded_value() {
        let mut dialog = InputDialog::new("Rename widget", "Name").with_initial_value("X-ray");
        dialog.set_visible(true);
        let buffer = draw(70, 20, |frame| {
            let area = frame.area();
            render(frame, area, &dialog, &Theme::dark())
        });

        let text = buffer_text(&buffer);
        assert!(text.contains(" Rename widget "));
        assert!(text.contains("Name *"));
        assert!(text.contains("X-ray"));
        assert!(text.contains("[Enter] Submit"));
        assert!(!text.contains("Submitting"));
    }

    #[test]
    fn test_cursor_follows_caret() {
        let mut dialog = InputDialog::new("New", "Name");
        dialog.show();
        dialog.insert_str("abcd");
        dialog.move_left();

        let mut terminal = Terminal::new(TestBackend::new(70, 20)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, area, &dialog, &Theme::dark())
            })
            .unwrap();

        // Dialog at (7, 4); border, margin, label row and field border put
        // the text at (10, 8)
        let position = terminal.get_cursor_position().unwrap();
        assert_eq!(position, Position::new(10 + 3, 8));
    }

    #[tokio::test]
    async fn test_pending_submission_shows_status() {
        let mut dialog = InputDialog::new("New", "Name")
            .with_reentry_policy(ReentryPolicy::Guarded)
            .on_submit(|_| Submission::deferred(futures::future::pending()));
        dialog.show();
        dialog.insert_str("slow");
        dialog.submit();

        let buffer = draw(70, 20, |frame| {
            let area = frame.area();
            render(frame, area, &dialog, &Theme::dark())
        });
        assert!(buffer_text(&buffer).contains("Submitting"));
        dialog.cancel_pending();
    }

    #[test]
    fn test_visible_window_fits() {
        assert_eq!(visible_window("abc", "ab", 10), ("abc", 2));
    }

    #[test]
    fn test_visible_window_scrolls_to_caret() {
        assert_eq!(visible_window("abcdefgh", "abcdefgh", 4), ("fgh", 3));
        assert_eq!(visible_window("abcdefgh", "abcd", 4), ("bcdefgh", 3));
    }

    #[test]
    fn test_visible_window_wide_chars() {
        // Each ideograph takes two columns
        let value = "日本語テキスト";
        let (shown, caret) = visible_window(value, value, 6);
        assert!(caret < 6);
        assert!(shown.ends_with("スト"));
    }

    #[test]
    fn test_visible_window_zero_width() {
        assert_eq!(visible_window("abc", "a", 0), ("", 0));
    }
}
