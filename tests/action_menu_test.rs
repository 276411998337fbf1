//! Tests for action-menu planning
//!
//! The plan depends on the terminal capability, the sharing configuration,
//! and the message count. Remove-all must always be present on the menu
//! branch, disabled (never hidden) when there is nothing to remove.

use logtui::logic::action_menu::{build_action_menu, ActionMenuPlan, MenuAction};
use logtui::logic::platform::PlatformCapability;

fn capability(menu: bool) -> PlatformCapability {
    PlatformCapability {
        supports_menu_affordance: menu,
    }
}

/// Test: menu branch with sharing enabled on an empty store
#[test]
fn test_menu_sharing_enabled_empty_store() {
    let plan = build_action_menu(capability(true), true, 0);

    let sharing = plan.sharing_section().expect("sharing section present");
    assert_eq!(sharing.entries.len(), 2);
    assert!(sharing.entries.iter().all(|e| e.enabled));
    assert_eq!(sharing.entries[0].action, MenuAction::ShareAsDocument);
    assert_eq!(sharing.entries[1].action, MenuAction::ShareAsText);

    let remove_all = plan.remove_all_entry().expect("remove-all present");
    assert!(
        !remove_all.enabled,
        "remove-all must be present but disabled when the store is empty"
    );
}

/// Test: menu branch with sharing disabled still offers remove-all
#[test]
fn test_menu_sharing_disabled_keeps_management() {
    let plan = build_action_menu(capability(true), false, 5);

    assert!(plan.sharing_section().is_none());
    let remove_all = plan.remove_all_entry().expect("remove-all present");
    assert!(remove_all.enabled);
}

/// Test: limited terminals collapse to one direct share action
#[test]
fn test_direct_share_on_limited_terminal() {
    let plan = build_action_menu(capability(false), true, 3);
    match plan {
        ActionMenuPlan::DirectShare { entry } => {
            assert_eq!(entry.action, MenuAction::ShareAsDocument);
            assert!(entry.enabled);
        }
        other => panic!("expected DirectShare, got {:?}", other),
    }
}

/// Test: limited terminal without sharing shows nothing at all
#[test]
fn test_no_action_on_limited_terminal_without_sharing() {
    for count in [0, 1, 100] {
        let plan = build_action_menu(capability(false), false, count);
        assert_eq!(plan, ActionMenuPlan::Hidden);
    }
}

/// Test: remove-all enablement tracks the count exactly on the menu branch
#[test]
fn test_remove_all_enablement_tracks_count() {
    for sharing in [true, false] {
        assert!(!build_action_menu(capability(true), sharing, 0)
            .remove_all_entry()
            .expect("present")
            .enabled);
        assert!(build_action_menu(capability(true), sharing, 1)
            .remove_all_entry()
            .expect("present")
            .enabled);
    }
}

/// Test: the planner only ever emits the three known actions
#[test]
fn test_no_fabricated_actions() {
    for menu in [true, false] {
        for sharing in [true, false] {
            for count in [0, 2] {
                let plan = build_action_menu(capability(menu), sharing, count);
                for entry in plan.entries() {
                    assert!(matches!(
                        entry.action,
                        MenuAction::ShareAsDocument
                            | MenuAction::ShareAsText
                            | MenuAction::RemoveAll
                    ));
                }
            }
        }
    }
}

/// Test: identical inputs produce identical plans
#[test]
fn test_planning_is_idempotent() {
    let a = build_action_menu(capability(true), true, 7);
    let b = build_action_menu(capability(true), true, 7);
    assert_eq!(a, b);
}
