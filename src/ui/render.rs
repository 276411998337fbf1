use ratatui::{
    layout::{Constraint, Layout},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

use crate::app::App;
use crate::logic::placeholder::select_placeholder;

use super::{menu, message_list, placeholder, status_bar, toast};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let [list_area, status_area] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(size);

    let messages = app.visible_messages();
    let criteria = app.criteria();

    // Message list inside a titled console frame
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Console ")
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(list_area);
    f.render_widget(block, list_area);
    message_list::render_message_list(f, inner, &messages, app.selected);

    // Empty-state overlay replaces the list content when nothing matches
    if let Some(ph) = select_placeholder(messages.len(), &criteria) {
        placeholder::render_placeholder(f, inner, &ph);
    }

    status_bar::render_status_bar(
        f,
        status_area,
        messages.len(),
        app.session(),
        &criteria,
        &app.menu_plan(),
        app.last_share.as_ref(),
    );

    // Overlays on top of everything else
    if let Some(selected) = app.menu_selected {
        menu::render_action_menu(f, size, &app.menu_plan(), selected);
    }

    if let Some(message) = app.active_toast() {
        toast::render_toast(f, size, &message);
    }
}
