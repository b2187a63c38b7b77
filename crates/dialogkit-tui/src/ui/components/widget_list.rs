//! Widget list shown behind the dialogs

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};

use crate::app::Widget;
use crate::ui::{Theme, ThemeRole};

/// Render `widgets` as a table with `selected` highlighted
pub fn render(frame: &mut Frame, area: Rect, widgets: &[Widget], selected: usize, theme: &Theme) {
    let block = Block::default()
        .title(format!(" Widgets ({}) ", widgets.len()))
        .title_style(theme.style(ThemeRole::Title))
        .borders(Borders::ALL)
        .border_style(theme.style(ThemeRole::Border));

    if widgets.is_empty() {
        let hint = Paragraph::new("No widgets yet. Press [n] to create one.")
            .style(theme.style(ThemeRole::TextMuted))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Name").style(theme.style(ThemeRole::Accent)),
        Cell::from("Created").style(theme.style(ThemeRole::Accent)),
    ]);

    let rows: Vec<Row> = widgets
        .iter()
        .map(|w| {
            Row::new(vec![
                Cell::from(w.name.clone()).style(theme.style(ThemeRole::Text)),
                Cell::from(w.created_at.format("%Y-%m-%d %H:%M:%S").to_string())
                    .style(theme.style(ThemeRole::TextMuted)),
            ])
        })
        .collect();

    let table = Table::new(rows, [Constraint::Min(20), Constraint::Length(20)])
        .header(header)
        .block(block)
        .highlight_style(theme.style(ThemeRole::Selection));

    let mut state = TableState::default().with_selected(Some(selected.min(widgets.len() - 1)));
    frame.render_stateful_widget(table, area, &mut state);
}
