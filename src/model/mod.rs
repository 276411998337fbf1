//! Data Model
//!
//! Value types observed by the presentation layer:
//! - types: log messages, severity levels, search criteria snapshots
//!
//! The decision logic in `crate::logic` consumes immutable snapshots of
//! these types; nothing in this module is mutated during a render pass.

pub mod types;

pub use types::{LogLevel, LogMessage, SearchCriteria};
