//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the whole block-breaker simulation: paddle control,
//! ball motion, collision response, scoring and win/loss detection, plus
//! drawing onto an abstract character surface. It has **no dependencies** on
//! terminals or I/O, so it can be driven headless by tests and benchmarks.
//!
//! # Module Structure
//!
//! - [`config`]: per-game settings (surface size, speeds, seed)
//! - [`entities`]: paddle, ball and block value types, block grid layout
//! - [`game_state`]: the simulation itself (`reset`, `handle_input`, `update`)
//! - [`physics`]: bounce and launch geometry
//! - [`render`]: drawing a frame onto a [`Surface`]
//! - [`rng`]: seeded respawn directions
//! - [`surface`]: the display surface contract
//!
//! # Example
//!
//! ```
//! use tui_breakout_core::{GameConfig, GameState};
//! use tui_breakout_types::{GameAction, Phase};
//!
//! let mut game = GameState::new(GameConfig::new(40, 20).with_paddle_width(8));
//! assert_eq!(game.paddle().x, 16.0);
//!
//! // One 10ms frame: input first, then physics.
//! game.handle_input(Some(GameAction::MoveLeft), 0.01);
//! game.update(0.01);
//!
//! assert_eq!(game.phase(), Phase::Playing);
//! assert!(game.paddle().x < 16.0);
//! ```
//!
//! # Timing
//!
//! There is no fixed timestep. Callers pass the wall-clock seconds since the
//! previous frame and all motion scales with it. Very large steps can carry the
//! ball through a block or past the paddle row in one frame.

pub mod config;
pub mod entities;
pub mod game_state;
pub mod physics;
pub mod render;
pub mod rng;
pub mod surface;

pub use tui_breakout_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use entities::{build_blocks, Ball, Block, Paddle};
pub use game_state::GameState;
pub use physics::{launch_direction, paddle_bounce};
pub use render::ball_appearance;
pub use rng::LaunchRng;
pub use surface::Surface;
