//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core simulation, terminal rendering, input mapping).
//!
//! # Coordinates
//!
//! All positions are measured in terminal cells. Column 0 is the left edge and
//! row 0 is the top edge; `y` grows downwards.
//!
//! # Tuning Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_PADDLE_WIDTH` | 10 | Paddle width in cells |
//! | `DEFAULT_PADDLE_SPEED` | 500.0 | Paddle speed in cells/second |
//! | `DEFAULT_BALL_SPEED` | 20.0 | Ball speed in cells/second |
//! | `BLOCK_WIDTH` | 3 | Block width in cells |
//! | `BLOCK_ROWS` | 5 | Rows of blocks per game |
//! | `BLOCK_TOP_ROW` | 3 | First block row from the top |
//! | `BLOCK_SCORE` | 10 | Points per destroyed block |
//! | `STARTING_LIVES` | 3 | Lives at the start of a game |
//! | `FRAME_MS` | 10 | Frame budget of the terminal loop (~100 FPS) |
//!
//! # Examples
//!
//! ```
//! use tui_breakout_types::{ColorIndex, Phase, BLOCK_WIDTH};
//!
//! // Block colors cycle by row
//! assert_eq!(ColorIndex::for_block_row(4), ColorIndex::BlockB);
//!
//! assert!(Phase::Playing.is_playing());
//! assert_eq!(BLOCK_WIDTH, 3);
//! ```

/// Default paddle width in cells
pub const DEFAULT_PADDLE_WIDTH: u16 = 10;

/// Default paddle speed in cells per second
pub const DEFAULT_PADDLE_SPEED: f64 = 500.0;

/// Default ball speed in cells per second
pub const DEFAULT_BALL_SPEED: f64 = 20.0;

/// Width of every block in cells
pub const BLOCK_WIDTH: u16 = 3;

/// Number of block rows created at reset
pub const BLOCK_ROWS: u16 = 5;

/// Row of the first (top) block row
pub const BLOCK_TOP_ROW: u16 = 3;

/// Number of distinct block colors (colors cycle by `row % BLOCK_COLOR_COUNT`)
pub const BLOCK_COLOR_COUNT: u16 = 3;

/// Points awarded per destroyed block
pub const BLOCK_SCORE: u32 = 10;

/// Lives at the start of every game
pub const STARTING_LIVES: u32 = 3;

/// Frame budget of the terminal loop in milliseconds
pub const FRAME_MS: u64 = 10;

/// Number of frames each ball animation step is held for
pub const BALL_ANIM_FRAMES: u64 = 5;

/// Glyph used for every paddle cell
pub const PADDLE_GLYPH: char = '═';

/// Glyph used for every block cell
pub const BLOCK_GLYPH: char = '█';

/// Ball glyphs, cycled every [`BALL_ANIM_FRAMES`] frames
pub const BALL_GLYPHS: [char; 4] = ['O', '@', '●', '*'];

/// Overlay shown once the last life is lost
pub const LOST_BANNER: &str = "GAME OVER - Press 'r' to restart or 'q' to quit";

/// Overlay shown once every block is destroyed
pub const WON_BANNER: &str = "YOU WIN! - Press 'r' to restart or 'q' to quit";

/// Session phase
///
/// - **Playing**: physics runs every frame
/// - **Won**: every block destroyed, simulation frozen
/// - **Lost**: lives exhausted, simulation frozen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Playing,
    Won,
    Lost,
}

impl Phase {
    pub fn is_playing(&self) -> bool {
        matches!(self, Phase::Playing)
    }

    /// True once the session has ended (won or lost).
    pub fn is_finished(&self) -> bool {
        matches!(self, Phase::Won | Phase::Lost)
    }
}

/// Player input for one frame
///
/// Frames without a key press are represented as `Option::<GameAction>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move paddle left (while playing)
    MoveLeft,
    /// Move paddle right (while playing)
    MoveRight,
    /// Start a new game (after win or loss)
    Restart,
    /// Leave the game (after win or loss)
    Quit,
}

/// What the loop driver should do after handing input to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopSignal {
    Continue,
    Quit,
}

/// Closed set of logical colors written to the display surface
///
/// The surface maps each index to an actual palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorIndex {
    Ball,
    /// Alternate ball color on blink frames
    BallBlink,
    Paddle,
    BlockA,
    BlockB,
    BlockC,
    LostBanner,
    /// Status line and the win banner
    Status,
}

impl ColorIndex {
    /// Block color for a block row (0-based within the block grid).
    pub fn for_block_row(row: u16) -> Self {
        match row % BLOCK_COLOR_COUNT {
            0 => ColorIndex::BlockA,
            1 => ColorIndex::BlockB,
            _ => ColorIndex::BlockC,
        }
    }
}
