// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - render: Main orchestration function that coordinates all rendering
// - message_list: Renders the stored log messages
// - placeholder: Renders the empty-state overlay when no messages match
// - menu: Renders the action-menu overlay from an ActionMenuPlan
// - status_bar: Renders bottom status bar (count, session, key hints)
// - toast: Renders toast notifications (brief pop-up messages)

pub mod menu;
pub mod message_list;
pub mod placeholder;
pub mod render;
pub mod status_bar;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
