//! TUI Breakout (workspace facade crate).
//!
//! Re-exports the workspace crates under `tui_breakout::{core,input,term,types}`
//! and holds the pieces only the binary needs: command-line parsing and log
//! setup.

pub mod cli;
pub mod logging;

pub use tui_breakout_core as core;
pub use tui_breakout_input as input;
pub use tui_breakout_term as term;
pub use tui_breakout_types as types;
