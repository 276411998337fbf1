//! Core value types for the log console

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity level of a log message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    pub fn as_str(&self) -> &str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRIT",
        }
    }
}

/// A single stored log message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogMessage {
    /// When the message was recorded
    pub timestamp: DateTime<Utc>,

    /// Severity level
    pub level: LogLevel,

    /// Subsystem label (e.g. "network", "auth")
    pub label: String,

    /// Message text
    pub text: String,

    /// Identifier of the session that recorded the message
    pub session: u64,
}

/// Immutable snapshot of the active search criteria
///
/// Owned by the filter collaborator; the presentation layer only observes it.
/// A fresh snapshot is taken per evaluation, so the decision functions never
/// see criteria change mid-pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchCriteria {
    /// True when no filter deviates from its default
    pub is_default: bool,

    /// True when only the current session's messages are shown
    pub is_current_session_only: bool,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            is_default: true,
            is_current_session_only: true,
        }
    }
}
