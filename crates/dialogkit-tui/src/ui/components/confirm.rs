//! Confirmation dialog component

use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph, Wrap};

use dialogkit_core::{ConfirmControl, ConfirmDialog};

use crate::ui::layout::{centered_rect_fixed, dialog_block, hint_line};
use crate::ui::{Theme, ThemeRole};

const DIALOG_WIDTH: u16 = 50;
const DIALOG_HEIGHT: u16 = 10;

/// Render the dialog on top of `area`; draws nothing while hidden
pub fn render(frame: &mut Frame, area: Rect, dialog: &ConfirmDialog, theme: &Theme) {
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
            Constraint::Min(2),    // Message
            Constraint::Length(1), // Buttons
            Constraint::Length(1), // Help text
        ])
        .split(inner);

    let message = Paragraph::new(view.message)
        .style(theme.style(ThemeRole::Text))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(message, chunks[0]);

    let mut buttons = Vec::new();
    for (i, control) in ConfirmControl::ALL.iter().enumerate() {
        if i > 0 {
            buttons.push(Span::raw("    "));
        }
        let role = if *control == view.focused {
            ThemeRole::ButtonFocused
        } else {
            ThemeRole::ButtonBackground
        };
        buttons.push(Span::styled(
            format!(" {} ", control.label()),
            theme.style(role),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(buttons)).alignment(Alignment::Center),
        chunks[1],
    );

    let help = Paragraph::new(hint_line(&[("y", "Confirm"), ("n/Esc", "Cancel"), ("Tab", "Focus")]))
        .style(theme.style(ThemeRole::TextMuted))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::{buffer_text, draw};
    use ratatui::buffer::Buffer;

    #[test]
    fn test_hidden_dialog_draws_nothing() {
        let dialog = ConfirmDialog::new("Delete widget?");
        let buffer = draw(60, 16, |frame| {
            let area = frame.area();
            render(frame, area, &dialog, &Theme::dark())
        });
        assert_eq!(buffer, Buffer::empty(Rect::new(0, 0, 60, 16)));
    }

    #[test]
    fn test_visible_dialog_shows_message_and_controls() {
        let mut dialog = ConfirmDialog::new("Delete widget?").with_title("Delete");
        dialog.set_visible(true);
        let buffer = draw(60, 16, |frame| {
            let area = frame.area();
            render(frame, area, &dialog, &Theme::dark())
        });

        let text = buffer_text(&buffer);
        assert!(text.contains(" Delete "));
        assert!(text.contains("Delete widget?"));
        assert!(text.contains("Cancel"));
        assert!(text.contains("Confirm"));
    }

    #[test]
    fn test_rendering_is_repeatable() {
        let mut dialog = ConfirmDialog::new("Quit?");
        dialog.set_visible(true);
        let theme = Theme::dark();
        let first = draw(60, 16, |frame| {
            let area = frame.area();
            render(frame, area, &dialog, &theme)
        });
        let second = draw(60, 16, |frame| {
            let area = frame.area();
            render(frame, area, &dialog, &theme)
        });
        assert_eq!(first, second);
    }
}
