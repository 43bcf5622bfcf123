//! Frame drawing for [`GameState`].
//!
//! Drawing is read-only. Every cell is clipped against both the game's
//! surface size and the target's own size, so a shrunk terminal simply loses
//! the cells that no longer fit.

use crate::game_state::GameState;
use crate::surface::Surface;
use crate::types::*;

/// Ball glyph and color for a given frame.
///
/// The glyph advances every [`BALL_ANIM_FRAMES`] frames; the color blinks
/// between `Ball` and `BallBlink` on the same period.
pub fn ball_appearance(frame: u64) -> (char, ColorIndex) {
    let step = frame / BALL_ANIM_FRAMES;
    let glyph = BALL_GLYPHS[(step % BALL_GLYPHS.len() as u64) as usize];
    let color = if step % 2 == 0 {
        ColorIndex::Ball
    } else {
        ColorIndex::BallBlink
    };
    (glyph, color)
}

/// Clipping window plus the target surface.
struct Canvas<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
    width: i64,
    height: i64,
}

impl<S: Surface + ?Sized> Canvas<'_, S> {
    fn put(&mut self, row: i64, col: i64, glyph: char, color: ColorIndex) {
        if row < 0 || col < 0 || row >= self.height || col >= self.width {
            return;
        }
        self.surface.put(row as u16, col as u16, glyph, color);
    }

    fn put_str(&mut self, row: i64, col: i64, text: &str, color: ColorIndex) -> i64 {
        let mut x = col;
        for ch in text.chars() {
            self.put(row, x, ch, color);
            x += 1;
        }
        x
    }

    /// Decimal digits without going through a `String`.
    fn put_u32(&mut self, row: i64, col: i64, value: u32, color: ColorIndex) -> i64 {
        let mut digits = [0u8; 10];
        let mut len = 0;
        let mut v = value;
        loop {
            digits[len] = b'0' + (v % 10) as u8;
            len += 1;
            v /= 10;
            if v == 0 {
                break;
            }
        }
        let mut x = col;
        for &d in digits[..len].iter().rev() {
            self.put(row, x, d as char, color);
            x += 1;
        }
        x
    }
}

impl GameState {
    /// Draw the current frame onto `surface`.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        let (surface_w, surface_h) = surface.size();
        let mut canvas = Canvas {
            width: self.width().min(surface_w) as i64,
            height: self.height().min(surface_h) as i64,
            surface,
        };

        let paddle = self.paddle();
        let paddle_row = paddle.y.floor() as i64;
        let paddle_col = paddle.x.floor() as i64;
        for i in 0..paddle.width as i64 {
            canvas.put(paddle_row, paddle_col + i, PADDLE_GLYPH, ColorIndex::Paddle);
        }

        let (ball_col, ball_row) = self.ball().cell();
        let (glyph, color) = ball_appearance(self.frame());
        canvas.put(ball_row, ball_col, glyph, color);

        for block in self.blocks().iter().filter(|b| !b.destroyed) {
            for i in 0..block.width {
                canvas.put(
                    block.y as i64,
                    (block.x + i) as i64,
                    BLOCK_GLYPH,
                    block.color,
                );
            }
        }

        let x = canvas.put_str(0, 0, "Score: ", ColorIndex::Status);
        let x = canvas.put_u32(0, x, self.score(), ColorIndex::Status);
        let x = canvas.put_str(0, x, "  Lives: ", ColorIndex::Status);
        canvas.put_u32(0, x, self.lives(), ColorIndex::Status);

        let banner = match self.phase() {
            Phase::Playing => None,
            Phase::Lost => Some((LOST_BANNER, ColorIndex::LostBanner)),
            Phase::Won => Some((WON_BANNER, ColorIndex::Status)),
        };
        if let Some((text, color)) = banner {
            let text_w = text.chars().count() as i64;
            let col = ((self.width() as i64 - text_w) / 2).max(0);
            let row = (self.height() / 2) as i64;
            canvas.put_str(row, col, text, color);
        }
    }
}
