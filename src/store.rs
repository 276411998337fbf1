//! Log Store
//!
//! In-memory message store the console observes. The presentation layer
//! never mutates it except through `remove_all`; export runs on the
//! service worker (`crate::services::export`) which owns a shared handle.

use anyhow::{Context, Result};
use chrono::{Duration, Local, Utc};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::{LogLevel, LogMessage, SearchCriteria};
use crate::ExportMode;

/// Description of a produced share payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareItems {
    /// Where the exported artifact was written
    pub path: PathBuf,

    /// Artifact size in bytes
    pub size: u64,

    /// Which export form produced it
    pub mode: ExportMode,
}

/// In-memory log store scoped to one process run
#[derive(Debug)]
pub struct LoggerStore {
    messages: Vec<LogMessage>,
    session: u64,
}

impl LoggerStore {
    /// Create an empty store for the given session
    pub fn new(session: u64) -> Self {
        Self {
            messages: Vec::new(),
            session,
        }
    }

    /// Identifier of the session this store records into
    pub fn session(&self) -> u64 {
        self.session
    }

    /// Append a message recorded in the current session
    pub fn insert(&mut self, level: LogLevel, label: &str, text: &str) {
        self.messages.push(LogMessage {
            timestamp: Utc::now(),
            level,
            label: label.to_string(),
            text: text.to_string(),
            session: self.session,
        });
    }

    /// Messages visible under the given criteria, oldest first
    ///
    /// Only the session scoping is applied here; richer filtering belongs
    /// to the filter collaborator that produces the criteria snapshot.
    pub fn visible(&self, criteria: &SearchCriteria) -> Vec<LogMessage> {
        self.messages
            .iter()
            .filter(|m| !criteria.is_current_session_only || m.session == self.session)
            .cloned()
            .collect()
    }

    /// Number of messages visible under the given criteria
    pub fn count(&self, criteria: &SearchCriteria) -> usize {
        self.messages
            .iter()
            .filter(|m| !criteria.is_current_session_only || m.session == self.session)
            .count()
    }

    /// Remove every stored message, across all sessions
    pub fn remove_all(&mut self) {
        self.messages.clear();
    }

    /// Export the full store in the requested form
    ///
    /// Writes a timestamped file into `dir` and returns its description.
    /// The document form is one JSON object per line; the text form is a
    /// human-readable rendering.
    pub fn export(&self, mode: ExportMode, dir: &Path) -> Result<ShareItems> {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating export directory {}", dir.display()))?;

        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        let path = dir.join(format!("log-store-{}.{}", stamp, mode.extension()));

        let body = match mode {
            ExportMode::Document => {
                let mut out = String::new();
                for message in &self.messages {
                    out.push_str(&serde_json::to_string(message)?);
                    out.push('\n');
                }
                out
            }
            ExportMode::Text => {
                let mut out = String::new();
                for message in &self.messages {
                    let _ = writeln!(
                        out,
                        "{} [{}] {}: {}",
                        message.timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
                        message.level.as_str(),
                        message.label,
                        message.text
                    );
                }
                out
            }
        };

        fs::write(&path, &body)
            .with_context(|| format!("writing export file {}", path.display()))?;

        Ok(ShareItems {
            size: body.len() as u64,
            path,
            mode,
        })
    }

    /// Seed a handful of sample messages for demo runs
    ///
    /// Includes one message from a previous session so the session-only
    /// toggle has something to hide.
    pub fn seed_demo(&mut self) {
        let now = Utc::now();
        let previous_session = self.session.saturating_sub(1);

        self.messages.push(LogMessage {
            timestamp: now - Duration::minutes(42),
            level: LogLevel::Info,
            label: "application".to_string(),
            text: "previous run finished cleanly".to_string(),
            session: previous_session,
        });

        let samples: [(LogLevel, &str, &str); 5] = [
            (LogLevel::Info, "application", "console attached to store"),
            (LogLevel::Debug, "network", "GET /api/status -> 200 (34 ms)"),
            (
                LogLevel::Warning,
                "network",
                "GET /api/metrics retried after timeout",
            ),
            (LogLevel::Error, "auth", "token refresh failed: 401"),
            (LogLevel::Trace, "cache", "evicted 12 stale entries"),
        ];

        for (offset, (level, label, text)) in samples.iter().enumerate() {
            self.messages.push(LogMessage {
                timestamp: now - Duration::seconds(30 - offset as i64 * 5),
                level: *level,
                label: label.to_string(),
                text: text.to_string(),
                session: self.session,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_respects_session_scope() {
        let mut store = LoggerStore::new(2);
        store.seed_demo();

        let all = SearchCriteria {
            is_default: true,
            is_current_session_only: false,
        };
        let session_only = SearchCriteria::default();

        assert_eq!(store.count(&all), 6);
        assert_eq!(store.count(&session_only), 5);
    }

    #[test]
    fn test_remove_all_clears_every_session() {
        let mut store = LoggerStore::new(2);
        store.seed_demo();
        store.remove_all();

        let all = SearchCriteria {
            is_default: true,
            is_current_session_only: false,
        };
        assert_eq!(store.count(&all), 0);
    }

    #[test]
    fn test_insert_records_current_session() {
        let mut store = LoggerStore::new(7);
        store.insert(LogLevel::Info, "test", "hello");

        let visible = store.visible(&SearchCriteria::default());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].session, 7);
        assert_eq!(visible[0].text, "hello");
    }
}
