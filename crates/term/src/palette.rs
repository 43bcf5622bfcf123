//! Terminal palette for the logical game colors.

use crate::fb::{CellStyle, Rgb};
use crate::types::ColorIndex;

const WHITE: Rgb = Rgb::new(240, 240, 240);
const GREEN: Rgb = Rgb::new(100, 220, 120);
const CYAN: Rgb = Rgb::new(80, 220, 220);
const BLUE: Rgb = Rgb::new(80, 120, 220);
const MAGENTA: Rgb = Rgb::new(200, 120, 220);
const RED: Rgb = Rgb::new(220, 80, 80);
const YELLOW: Rgb = Rgb::new(240, 220, 80);

/// Style used for a logical color. Both ball colors are bold.
pub fn style_for(color: ColorIndex) -> CellStyle {
    match color {
        ColorIndex::Ball => CellStyle::new(WHITE, true),
        ColorIndex::BallBlink => CellStyle::new(YELLOW, true),
        ColorIndex::Paddle => CellStyle::new(GREEN, false),
        ColorIndex::BlockA => CellStyle::new(CYAN, false),
        ColorIndex::BlockB => CellStyle::new(BLUE, false),
        ColorIndex::BlockC => CellStyle::new(MAGENTA, false),
        ColorIndex::LostBanner => CellStyle::new(RED, false),
        ColorIndex::Status => CellStyle::new(YELLOW, false),
    }
}
