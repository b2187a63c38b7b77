//! UI rendering

pub mod components;
pub mod layout;
pub mod theme;

pub use theme::{Theme, ThemeRole, ThemeVariant};

use ratatui::prelude::*;

use crate::app::AppState;
use layout::{render_footer, render_header, ScreenLayout};

const LIST_HINTS: &[(&str, &str)] = &[
    ("n", "New"),
    ("r", "Rename"),
    ("d", "Delete"),
    ("j/k", "Move"),
    ("q", "Quit"),
];

const INPUT_HINTS: &[(&str, &str)] = &[("Enter", "Submit"), ("Esc", "Cancel"), ("Ctrl+U", "Clear")];

const CONFIRM_HINTS: &[(&str, &str)] = &[("y", "Confirm"), ("n", "Cancel"), ("Tab", "Focus")];

/// Main render function; dialogs and toasts draw over the widget list
pub fn render(frame: &mut Frame, state: &AppState) {
    let theme = &state.theme;
    let area = frame.area();
    let layout = ScreenLayout::new(area);

    render_header(frame, layout.header, "Widgets", theme);

    {
        let store = state.store.lock();
        components::widget_list::render(
            frame,
            layout.content,
            store.widgets(),
            state.selected,
            theme,
        );
    }

    let hints = if state.confirm.is_visible() {
        CONFIRM_HINTS
    } else if state.dialog_open() {
        INPUT_HINTS
    } else {
        LIST_HINTS
    };
    render_footer(frame, layout.footer, hints, theme);

    components::input::render(frame, area, &state.create_dialog, theme);
    components::input::render(frame, area, &state.rename_dialog, theme);
    components::confirm::render(frame, area, &state.confirm, theme);

    state.notifications.render(frame, layout.content, theme);
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::{Frame, Terminal};

    /// Draw once into an off-screen terminal and return the buffer
    pub fn draw(width: u16, height: u16, f: impl FnOnce(&mut Frame)) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(f).unwrap();
        terminal.backend().buffer().clone()
    }

    /// Buffer contents as lines of text
    pub fn buffer_text(buffer: &Buffer) -> String {
        let width = buffer.area.width.max(1) as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
