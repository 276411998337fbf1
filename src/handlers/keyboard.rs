//! Keyboard Input Handler
//!
//! Handles all keyboard input and user interactions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

/// Handle keyboard input
///
/// While the action menu is open, keys navigate the menu; otherwise they
/// drive the message list and the global actions.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Menu captures input while open
    if app.menu_selected.is_some() {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.menu_prev(),
            KeyCode::Down | KeyCode::Char('j') => app.menu_next(),
            KeyCode::Enter => app.execute_menu_selection(),
            KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('q') => app.close_menu(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }

        // Toolbar actions: pop-up menu where supported, direct share otherwise
        KeyCode::Char('m') => app.open_menu(),
        KeyCode::Char('s') => app.direct_share(),

        // Quick filters
        KeyCode::Char('c') => app.toggle_session_only(),
        KeyCode::Char('e') => app.toggle_errors_only(),

        // Message list navigation
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),

        _ => {}
    }
}
