//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The game
//! itself only sees actions, never key codes.

pub mod map;

pub use tui_breakout_types as types;

pub use map::{handle_key_event, is_emergency_quit};
