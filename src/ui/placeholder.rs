use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::logic::placeholder::Placeholder;

/// Render the empty-state overlay in the middle of the list area
pub fn render_placeholder(f: &mut Frame, area: Rect, placeholder: &Placeholder) {
    let width = (placeholder.subtitle.width().max(placeholder.title.width()) as u16 + 4)
        .min(area.width);
    let height = 4u16.min(area.height);

    let overlay = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let lines = vec![
        Line::from(Span::styled(
            placeholder.title,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            placeholder.subtitle,
            Style::default().fg(Color::DarkGray),
        )),
    ];

    f.render_widget(Clear, overlay);
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), overlay);
}
