//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! The core draws into an abstract [`Surface`](crate::core::Surface);
//! [`FrameBuffer`] is that surface for a real terminal, and
//! [`TerminalRenderer`] flushes it with crossterm, redrawing only changed runs.

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use tui_breakout_core as core;
pub use tui_breakout_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use palette::style_for;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
