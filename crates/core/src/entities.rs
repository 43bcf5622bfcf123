//! Paddle, ball and block value types.

use crate::physics::{initial_direction, unit_length};
use crate::types::{ColorIndex, BLOCK_ROWS, BLOCK_TOP_ROW, BLOCK_WIDTH};

/// Player paddle. `y` is fixed for the whole game; only `x` moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub x: f64,
    pub y: f64,
    pub width: u16,
    /// Cells per second
    pub speed: f64,
}

impl Paddle {
    pub fn new(width: u16, speed: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            speed,
        }
    }

    /// Right-most legal `x` on a surface of the given width.
    pub fn max_x(&self, surface_width: u16) -> f64 {
        surface_width.saturating_sub(self.width) as f64
    }

    /// Shift horizontally by `dx` cells, clamped to `[0, surface_width - width]`.
    pub fn shift(&mut self, dx: f64, surface_width: u16) {
        self.x = (self.x + dx).clamp(0.0, self.max_x(surface_width));
    }

    /// Whether column `x` lies within `[self.x, self.x + width)`.
    pub fn spans(&self, x: f64) -> bool {
        x >= self.x && x < self.x + self.width as f64
    }

    /// Relative hit position in `[0, 1)` for a column the paddle spans.
    pub fn hit_position(&self, x: f64) -> f64 {
        if self.width == 0 {
            return 0.5;
        }
        (x - self.x) / self.width as f64
    }

    /// Column the ball respawns above.
    pub fn center_x(&self) -> f64 {
        self.x + (self.width / 2) as f64
    }
}

/// The ball. `(dx, dy)` is a unit vector; `speed` scales it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    /// Cells per second
    pub speed: f64,
}

impl Ball {
    /// A ball at `(x, y)` heading up and to the right at 45°.
    pub fn new(x: f64, y: f64, speed: f64) -> Self {
        let (dx, dy) = initial_direction();
        Self { x, y, dx, dy, speed }
    }

    /// Cell the ball occupies (floored position).
    pub fn cell(&self) -> (i64, i64) {
        (self.x.floor() as i64, self.y.floor() as i64)
    }

    pub fn direction_len(&self) -> f64 {
        unit_length(self.dx, self.dy)
    }
}

/// One destructible block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub color: ColorIndex,
    pub destroyed: bool,
}

impl Block {
    /// Whether the cell `(col, row)` is covered by this block.
    pub fn covers(&self, col: i64, row: i64) -> bool {
        row == self.y as i64 && col >= self.x as i64 && col < self.x as i64 + self.width as i64
    }
}

/// Build the block grid for a surface of the given width.
///
/// Blocks come out row-major, top row first. Collision scanning relies on this
/// order for tie-breaking.
pub fn build_blocks(surface_width: u16) -> Vec<Block> {
    let cols = surface_width / BLOCK_WIDTH;
    let mut blocks = Vec::with_capacity((cols as usize) * (BLOCK_ROWS as usize));
    for row in 0..BLOCK_ROWS {
        for col in 0..cols {
            blocks.push(Block {
                x: col * BLOCK_WIDTH,
                y: BLOCK_TOP_ROW + row,
                width: BLOCK_WIDTH,
                color: ColorIndex::for_block_row(row),
                destroyed: false,
            });
        }
    }
    blocks
}
