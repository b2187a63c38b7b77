//! Layout helpers for consistent screen structure

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::{Theme, ThemeRole};

/// Standard screen layout with header, content, and footer
pub struct ScreenLayout {
    pub header: Rect,
    pub content: Rect,
    pub footer: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(3),    // Content
                Constraint::Length(2), // Footer
            ])
            .split(area);

        Self {
            header: chunks[0],
            content: chunks[1],
            footer: chunks[2],
        }
    }
}

/// Fixed-size box centered in `area`, shrunk to fit
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Header bar with the application name, a title and the local time
pub fn render_header(frame: &mut Frame, area: Rect, title: &str, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.style(ThemeRole::Border));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16),
            Constraint::Min(10),
            Constraint::Length(8),
        ])
        .split(inner);

    let logo = Paragraph::new(format!(" {} dialogkit", '\u{25C6}'))
        .style(theme.style(ThemeRole::Title));
    frame.render_widget(logo, chunks[0]);

    let title = Paragraph::new(title)
        .style(theme.style(ThemeRole::Text))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[1]);

    let time = chrono::Local::now().format("%H:%M").to_string();
    let time_widget = Paragraph::new(time)
        .style(theme.style(ThemeRole::TextMuted))
        .alignment(Alignment::Right);
    frame.render_widget(time_widget, chunks[2]);
}

/// Footer with `[key] action` hints
pub fn render_footer(frame: &mut Frame, area: Rect, hints: &[(&str, &str)], theme: &Theme) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme.style(ThemeRole::Border));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let footer = Paragraph::new(hint_line(hints))
        .style(theme.style(ThemeRole::TextMuted))
        .alignment(Alignment::Center);
    frame.render_widget(footer, inner);
}

/// Join hints as `[key] action  [key] action`
pub fn hint_line(hints: &[(&str, &str)]) -> String {
    hints
        .iter()
        .map(|(key, action)| format!("[{}] {}", key, action))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Bordered dialog frame with a centered title
pub fn dialog_block<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(format!(" {} ", title))
        .title_alignment(Alignment::Center)
        .title_style(theme.style(ThemeRole::Title))
        .borders(Borders::ALL)
        .border_style(theme.style(ThemeRole::BorderFocused))
}
