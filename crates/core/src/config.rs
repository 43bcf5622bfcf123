//! Per-game settings.

use crate::types::{DEFAULT_BALL_SPEED, DEFAULT_PADDLE_SPEED, DEFAULT_PADDLE_WIDTH};

/// Settings read by [`GameState`](crate::GameState) when a game is created.
///
/// The surface size is only consulted at reset time; see
/// [`GameState::request_resize`](crate::GameState::request_resize).
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Surface width in cells
    pub width: u16,
    /// Surface height in cells
    pub height: u16,
    /// Paddle width in cells
    pub paddle_width: u16,
    /// Paddle speed in cells/second
    pub paddle_speed: f64,
    /// Ball speed in cells/second
    pub ball_speed: f64,
    /// Seed for respawn launch angles
    pub seed: u64,
}

impl GameConfig {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_paddle_width(mut self, paddle_width: u16) -> Self {
        self.paddle_width = paddle_width;
        self
    }

    pub fn with_paddle_speed(mut self, paddle_speed: f64) -> Self {
        self.paddle_speed = paddle_speed;
        self
    }

    pub fn with_ball_speed(mut self, ball_speed: f64) -> Self {
        self.ball_speed = ball_speed;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
            paddle_width: DEFAULT_PADDLE_WIDTH,
            paddle_speed: DEFAULT_PADDLE_SPEED,
            ball_speed: DEFAULT_BALL_SPEED,
            seed: 1,
        }
    }
}
