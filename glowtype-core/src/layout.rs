//! One-shot layout resolution: letter origins on the canvas.

use crate::glyph::{GLYPH_COLS, GLYPH_ROWS, Letter};
use crate::scene::Scene;

/// Precomputed canvas origins for the four letters.
///
/// Resolved once from the scene; the compositor re-reads these every frame
/// instead of recomputing them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    /// Top-left canvas origin `(x, y)` of each letter, in display order.
    pub origins: [(i32, i32); 4],
}

/// Center the four-letter row on the canvas and compute per-letter origins.
///
/// The group is centered on both axes; origins may be negative when the
/// letters do not fit, in which case out-of-bounds pixels are skipped at
/// stamping time rather than rejected here.
pub fn resolve_layout(scene: &Scene) -> Layout {
    let ps = scene.pixel_size as i32;
    let letter_w = GLYPH_COLS as i32 * ps;
    let spacing_w = scene.spacing_cells as i32 * ps;
    let count = Letter::ALL.len() as i32;

    let total_width = count * letter_w + (count - 1) * spacing_w;
    let start_x = (scene.canvas.width as i32 - total_width).div_euclid(2);
    let start_y = (scene.canvas.height as i32 - GLYPH_ROWS as i32 * ps).div_euclid(2);

    let mut origins = [(0, 0); 4];
    for (idx, origin) in origins.iter_mut().enumerate() {
        *origin = (start_x + idx as i32 * (letter_w + spacing_w), start_y);
    }
    Layout { origins }
}

#[cfg(test)]
#[path = "../tests/unit/layout.rs"]
mod tests;
