//! External Services
//!
//! This module contains services that run off the UI loop:
//! - export: background export worker serving share requests
//!
//! Re-export commonly used types for convenience

pub mod export;

pub use export::{spawn_export_worker, ExportRequest};
