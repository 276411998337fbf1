//! Action Menu Planning Logic
//!
//! Pure function that plans the console's toolbar actions from three inputs:
//! the terminal's capability flags, the sharing configuration, and the
//! current message count. The plan is a plain value; `crate::ui::menu`
//! renders it and `crate::app` executes it.

use crate::logic::platform::PlatformCapability;

/// What a menu entry does when executed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ShareAsDocument,
    ShareAsText,
    RemoveAll,
}

/// A single entry in the action menu
///
/// A disabled entry stays visible (it can be highlighted) but is inert:
/// executing it is a no-op. It is never hidden to signal unavailability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub action: MenuAction,
    pub label: &'static str,
    pub enabled: bool,
}

/// A titled group of entries within the structured menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSection {
    pub title: &'static str,
    pub entries: Vec<MenuEntry>,
}

/// The planned toolbar actions for one render pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionMenuPlan {
    /// Structured, sectioned menu (terminals with a menu affordance)
    Menu { sections: Vec<MenuSection> },

    /// Single direct share action (fallback for limited terminals)
    DirectShare { entry: MenuEntry },

    /// No visible action at all
    Hidden,
}

impl ActionMenuPlan {
    /// All entries in display order, across sections
    pub fn entries(&self) -> Vec<&MenuEntry> {
        match self {
            ActionMenuPlan::Menu { sections } => {
                sections.iter().flat_map(|s| s.entries.iter()).collect()
            }
            ActionMenuPlan::DirectShare { entry } => vec![entry],
            ActionMenuPlan::Hidden => Vec::new(),
        }
    }

    /// The sharing section, if the plan has one
    pub fn sharing_section(&self) -> Option<&MenuSection> {
        match self {
            ActionMenuPlan::Menu { sections } => {
                sections.iter().find(|s| s.title == "Share")
            }
            _ => None,
        }
    }

    /// The remove-all entry, if the plan has one
    pub fn remove_all_entry(&self) -> Option<&MenuEntry> {
        self.entries()
            .into_iter()
            .find(|e| e.action == MenuAction::RemoveAll)
    }
}

/// Plan the toolbar actions
///
/// Rules:
/// 1. With a menu affordance, the plan is a structured menu: a "Share"
///    section (present only when sharing is enabled, always exactly two
///    entries) followed by a "Manage" section whose remove-all entry is
///    always present and enabled exactly when `message_count > 0`.
/// 2. Without a menu affordance, the plan is a single direct share action
///    when sharing is enabled, and nothing otherwise.
///
/// The planner never invents actions beyond these three, and never hides
/// remove-all on the menu branch, whatever the sharing flag says.
pub fn build_action_menu(
    platform: PlatformCapability,
    is_store_sharing_enabled: bool,
    message_count: usize,
) -> ActionMenuPlan {
    if platform.supports_menu_affordance {
        let mut sections = Vec::with_capacity(2);

        if is_store_sharing_enabled {
            sections.push(MenuSection {
                title: "Share",
                entries: vec![
                    MenuEntry {
                        action: MenuAction::ShareAsDocument,
                        label: "Share as Log Document",
                        enabled: true,
                    },
                    MenuEntry {
                        action: MenuAction::ShareAsText,
                        label: "Share as Text File",
                        enabled: true,
                    },
                ],
            });
        }

        sections.push(MenuSection {
            title: "Manage",
            entries: vec![MenuEntry {
                action: MenuAction::RemoveAll,
                label: "Remove All Messages",
                enabled: message_count > 0,
            }],
        });

        ActionMenuPlan::Menu { sections }
    } else if is_store_sharing_enabled {
        // Limited terminals get one direct action: share the store in its
        // document form.
        ActionMenuPlan::DirectShare {
            entry: MenuEntry {
                action: MenuAction::ShareAsDocument,
                label: "Share",
                enabled: true,
            },
        }
    } else {
        ActionMenuPlan::Hidden
    }
}
