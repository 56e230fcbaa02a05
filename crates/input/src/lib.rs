//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Every key press
//! is one discrete action; there is no auto-repeat state here, so terminals that
//! never report key releases behave the same as those that do.

pub mod map;

pub use tui_blockfall_types as types;

pub use map::{handle_key_event, should_quit};
