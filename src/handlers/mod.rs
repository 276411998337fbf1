//! Event Handlers
//!
//! - keyboard: user keyboard input dispatch
//!
//! Handlers are functions that take &mut App and mutate state; the actual
//! decisions (what the menu contains, which placeholder to show) live in
//! `crate::logic` and are recomputed per pass.

pub mod keyboard;

pub use keyboard::handle_key;
