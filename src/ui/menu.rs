use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::logic::action_menu::ActionMenuPlan;

/// Render the action-menu overlay from a plan
///
/// Disabled entries are dimmed but still rendered and highlightable; they
/// signal unavailability without disappearing.
pub fn render_action_menu(f: &mut Frame, area: Rect, plan: &ActionMenuPlan, selected: usize) {
    let ActionMenuPlan::Menu { sections } = plan else {
        // Direct-share and hidden plans have no overlay to draw
        return;
    };

    let mut lines: Vec<Line> = Vec::new();
    let mut entry_index = 0usize;

    for (section_index, section) in sections.iter().enumerate() {
        if section_index > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            section.title,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )));

        for entry in &section.entries {
            let is_selected = entry_index == selected;
            let marker = if is_selected { "► " } else { "  " };

            let mut style = Style::default();
            if !entry.enabled {
                style = style.fg(Color::DarkGray);
            }
            if is_selected {
                style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
            }

            lines.push(Line::from(Span::styled(
                format!("{}{}", marker, entry.label),
                style,
            )));
            entry_index += 1;
        }
    }

    let menu_width = 34u16.min(area.width);
    let menu_height = (lines.len() as u16 + 2).min(area.height);
    let menu_area = Rect {
        x: (area.width.saturating_sub(menu_width)) / 2,
        y: (area.height.saturating_sub(menu_height)) / 2,
        width: menu_width,
        height: menu_height,
    };

    let menu = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Actions (↑↓, Enter, Esc) ")
            .border_style(Style::default().fg(Color::Yellow)),
    );

    f.render_widget(Clear, menu_area);
    f.render_widget(menu, menu_area);
}
