//! Terminal Capability Detection
//!
//! The console adapts its toolbar to what the terminal can express: full
//! terminals get a pop-up action menu, while dumb or non-interactive
//! terminals fall back to a single direct share key. The capability is
//! resolved once at startup and passed around as a plain value, so the
//! decision logic never inspects the environment itself.

use std::io::IsTerminal;

/// What the host terminal supports, resolved once per process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformCapability {
    /// Whether a pop-up menu overlay can be presented
    pub supports_menu_affordance: bool,
}

/// Derive the capability from an environment snapshot
///
/// Pure so it can be tested without faking a terminal: `term` is the value
/// of `$TERM` (if set) and `is_tty` whether stdout is attached to one.
pub fn detect_capability(term: Option<&str>, is_tty: bool) -> PlatformCapability {
    let term_supports_overlay = match term {
        Some(t) => !t.is_empty() && t != "dumb",
        None => false,
    };

    PlatformCapability {
        supports_menu_affordance: is_tty && term_supports_overlay,
    }
}

/// Resolve the capability for the current process environment
pub fn resolve() -> PlatformCapability {
    let term = std::env::var("TERM").ok();
    detect_capability(term.as_deref(), std::io::stdout().is_terminal())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_terminal_supports_menu() {
        let cap = detect_capability(Some("xterm-256color"), true);
        assert!(cap.supports_menu_affordance);
    }

    #[test]
    fn test_dumb_terminal_falls_back() {
        let cap = detect_capability(Some("dumb"), true);
        assert!(!cap.supports_menu_affordance);
    }

    #[test]
    fn test_missing_term_falls_back() {
        assert!(!detect_capability(None, true).supports_menu_affordance);
        assert!(!detect_capability(Some(""), true).supports_menu_affordance);
    }

    #[test]
    fn test_non_tty_falls_back() {
        let cap = detect_capability(Some("xterm-256color"), false);
        assert!(!cap.supports_menu_affordance);
    }
}
