//! Tests for empty-state placeholder selection
//!
//! The console shows one of three fixed messages when the list is empty;
//! the wording depends on whether the criteria are at their defaults and
//! whether the view is scoped to the current session.

use logtui::logic::placeholder::select_placeholder;
use logtui::model::SearchCriteria;

fn criteria(is_default: bool, session_only: bool) -> SearchCriteria {
    SearchCriteria {
        is_default,
        is_current_session_only: session_only,
    }
}

/// Test: any non-zero count suppresses the placeholder, whatever the criteria
#[test]
fn test_messages_present_means_no_placeholder() {
    for is_default in [true, false] {
        for session_only in [true, false] {
            assert!(
                select_placeholder(1, &criteria(is_default, session_only)).is_none(),
                "placeholder must be absent for is_default={}, session_only={}",
                is_default,
                session_only
            );
        }
    }
}

/// Test: empty store, default criteria, current session scope
#[test]
fn test_empty_current_session_wording() {
    let p = select_placeholder(0, &criteria(true, true)).expect("placeholder expected");
    assert_eq!(p.subtitle, "There are no messages in a current session.");
}

/// Test: empty store, default criteria, all sessions
#[test]
fn test_empty_all_sessions_wording() {
    let p = select_placeholder(0, &criteria(true, false)).expect("placeholder expected");
    assert_eq!(p.subtitle, "There are currently no stored messages.");
}

/// Test: non-default criteria win over the session flag
#[test]
fn test_filtered_wording_ignores_session_flag() {
    for session_only in [true, false] {
        let p = select_placeholder(0, &criteria(false, session_only)).expect("placeholder");
        assert_eq!(p.subtitle, "There are no messages for the selected filters");
    }
}

/// Test: selection is a pure function of its inputs
#[test]
fn test_selection_is_idempotent() {
    for count in [0, 1, 10] {
        for is_default in [true, false] {
            for session_only in [true, false] {
                let c = criteria(is_default, session_only);
                assert_eq!(
                    select_placeholder(count, &c),
                    select_placeholder(count, &c)
                );
            }
        }
    }
}
