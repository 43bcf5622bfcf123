//! Display surface contract.

use crate::types::ColorIndex;

/// A character-cell target that [`GameState::render`](crate::GameState::render) draws into.
///
/// Implementations map [`ColorIndex`] to their own palette. Writes outside the
/// surface must be ignored, never reported.
pub trait Surface {
    /// Surface size as `(width, height)` in cells.
    fn size(&self) -> (u16, u16);

    /// Write one cell.
    fn put(&mut self, row: u16, col: u16, glyph: char, color: ColorIndex);
}
