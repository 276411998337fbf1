//! Log Console TUI Library
//!
//! Exposes modules for testing

pub mod app;
pub mod config;
pub mod handlers;
pub mod logic;
pub mod model;
pub mod services;
pub mod store;
pub mod ui;

/// Export form for the log store
///
/// Selected from the action menu (or the direct share action on terminals
/// without a menu affordance) and passed through unchanged to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportMode {
    Document, // Structured log document (JSON lines)
    Text,     // Plain-text rendering
}

impl ExportMode {
    pub fn as_str(&self) -> &str {
        match self {
            ExportMode::Document => "document",
            ExportMode::Text => "text",
        }
    }

    /// File extension for the exported artifact
    pub fn extension(&self) -> &str {
        match self {
            ExportMode::Document => "jsonl",
            ExportMode::Text => "txt",
        }
    }
}
