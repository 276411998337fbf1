//! Placeholder Selection Logic
//!
//! Pure function deciding which empty-state message (if any) the console
//! shows in place of the message list.

use crate::model::SearchCriteria;

/// Empty-state content for the message list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// Select the placeholder for the current message count and search criteria
///
/// Decision order (first match wins):
/// 1. Messages exist → no placeholder
/// 2. Default criteria, current session only → "no messages in a current session"
/// 3. Default criteria, all sessions → "no stored messages"
/// 4. Non-default criteria → "no messages for the selected filters"
///
/// The function is total: every combination of inputs produces a defined
/// result, and identical inputs always produce identical output.
///
/// # Examples
/// ```
/// use logtui::logic::placeholder::select_placeholder;
/// use logtui::model::SearchCriteria;
///
/// assert!(select_placeholder(3, &SearchCriteria::default()).is_none());
/// let p = select_placeholder(0, &SearchCriteria::default()).unwrap();
/// assert_eq!(p.subtitle, "There are no messages in a current session.");
/// ```
pub fn select_placeholder(count: usize, criteria: &SearchCriteria) -> Option<Placeholder> {
    if count > 0 {
        return None;
    }

    let subtitle = if criteria.is_default {
        if criteria.is_current_session_only {
            "There are no messages in a current session."
        } else {
            "There are currently no stored messages."
        }
    } else {
        "There are no messages for the selected filters"
    };

    Some(Placeholder {
        title: "No Messages",
        subtitle,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criteria(is_default: bool, session_only: bool) -> SearchCriteria {
        SearchCriteria {
            is_default,
            is_current_session_only: session_only,
        }
    }

    #[test]
    fn test_no_placeholder_when_messages_exist() {
        for count in [1, 2, 100] {
            assert!(select_placeholder(count, &criteria(true, true)).is_none());
            assert!(select_placeholder(count, &criteria(true, false)).is_none());
            assert!(select_placeholder(count, &criteria(false, true)).is_none());
            assert!(select_placeholder(count, &criteria(false, false)).is_none());
        }
    }

    #[test]
    fn test_default_criteria_current_session() {
        let p = select_placeholder(0, &criteria(true, true)).unwrap();
        assert_eq!(p.title, "No Messages");
        assert_eq!(p.subtitle, "There are no messages in a current session.");
    }

    #[test]
    fn test_default_criteria_all_sessions() {
        let p = select_placeholder(0, &criteria(true, false)).unwrap();
        assert_eq!(p.subtitle, "There are currently no stored messages.");
    }

    #[test]
    fn test_non_default_criteria_ignores_session_flag() {
        for session_only in [true, false] {
            let p = select_placeholder(0, &criteria(false, session_only)).unwrap();
            assert_eq!(p.subtitle, "There are no messages for the selected filters");
        }
    }

    #[test]
    fn test_idempotent() {
        let c = criteria(true, false);
        assert_eq!(select_placeholder(0, &c), select_placeholder(0, &c));
        assert_eq!(select_placeholder(7, &c), select_placeholder(7, &c));
    }
}
