//! Business Logic
//!
//! This module contains pure decision functions that can be unit tested:
//! - action_menu: Toolbar action-menu planning from capability flags
//! - placeholder: Empty-state message selection
//! - platform: Terminal capability detection
//!
//! Every function here is synchronous, total over its inputs, and free of
//! side effects; the UI layer renders whatever these functions decide.

pub mod action_menu;
pub mod placeholder;
pub mod platform;
