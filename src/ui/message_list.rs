use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};

use crate::model::{LogLevel, LogMessage};

/// Color for a severity level
fn level_color(level: LogLevel) -> Color {
    match level {
        LogLevel::Trace => Color::DarkGray,
        LogLevel::Debug => Color::Gray,
        LogLevel::Info => Color::Green,
        LogLevel::Warning => Color::Yellow,
        LogLevel::Error => Color::Red,
        LogLevel::Critical => Color::Magenta,
    }
}

/// Render the stored messages, oldest first
pub fn render_message_list(
    f: &mut Frame,
    area: Rect,
    messages: &[LogMessage],
    selected: Option<usize>,
) {
    let items: Vec<ListItem> = messages
        .iter()
        .map(|message| {
            let line = Line::from(vec![
                Span::styled(
                    message.timestamp.format("%H:%M:%S ").to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{:<5} ", message.level.as_str()),
                    Style::default()
                        .fg(level_color(message.level))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{}: ", message.label),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(message.text.clone()),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

    let mut state = ListState::default();
    state.select(selected);
    f.render_stateful_widget(list, area, &mut state);
}
