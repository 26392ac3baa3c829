//! Static bitmap glyphs for the four letters of the display.
//!
//! Each glyph is a fixed 5×4 matrix of cells; a lit cell is later expanded
//! into a `pixel_size × pixel_size` block on the canvas. The set of letters
//! is closed, so lookup has no failure mode.

/// Rows in every glyph bitmap.
pub const GLYPH_ROWS: usize = 5;
/// Columns in every glyph bitmap.
pub const GLYPH_COLS: usize = 4;

/// A fixed-size bitmap pattern for one letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    cells: [[bool; GLYPH_COLS]; GLYPH_ROWS],
}

impl Glyph {
    const fn from_bits(bits: [[u8; GLYPH_COLS]; GLYPH_ROWS]) -> Self {
        let mut cells = [[false; GLYPH_COLS]; GLYPH_ROWS];
        let mut row = 0;
        while row < GLYPH_ROWS {
            let mut col = 0;
            while col < GLYPH_COLS {
                cells[row][col] = bits[row][col] != 0;
                col += 1;
            }
            row += 1;
        }
        Self { cells }
    }

    /// Return `true` when the cell at `(row, col)` is lit.
    pub fn is_lit(&self, row: usize, col: usize) -> bool {
        self.cells[row][col]
    }

    /// Iterate lit cells as `(row, col)` pairs in row-major order.
    pub fn lit_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..GLYPH_ROWS).flat_map(move |row| {
            (0..GLYPH_COLS).filter_map(move |col| self.cells[row][col].then_some((row, col)))
        })
    }
}

/// The closed set of letters the engine can display, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Letter {
    /// First letter.
    A,
    /// Second letter.
    G,
    /// Third letter.
    P,
    /// Fourth letter.
    K,
}

impl Letter {
    /// All letters in fixed left-to-right display order.
    pub const ALL: [Letter; 4] = [Letter::A, Letter::G, Letter::P, Letter::K];

    /// Bitmap for this letter. Pure lookup.
    pub fn glyph(self) -> &'static Glyph {
        match self {
            Letter::A => &GLYPH_A,
            Letter::G => &GLYPH_G,
            Letter::P => &GLYPH_P,
            Letter::K => &GLYPH_K,
        }
    }
}

static GLYPH_A: Glyph = Glyph::from_bits([
    [0, 1, 1, 0],
    [1, 0, 0, 1],
    [1, 1, 1, 1],
    [1, 0, 0, 1],
    [1, 0, 0, 1],
]);

static GLYPH_G: Glyph = Glyph::from_bits([
    [1, 1, 1, 1],
    [1, 0, 0, 0],
    [1, 0, 0, 0],
    [1, 0, 0, 0],
    [1, 1, 1, 1],
]);

static GLYPH_P: Glyph = Glyph::from_bits([
    [1, 1, 1, 1],
    [1, 0, 0, 1],
    [1, 1, 1, 1],
    [1, 0, 0, 0],
    [1, 0, 0, 0],
]);

static GLYPH_K: Glyph = Glyph::from_bits([
    [1, 0, 0, 1],
    [1, 0, 1, 0],
    [1, 1, 0, 0],
    [1, 0, 1, 0],
    [1, 0, 0, 1],
]);
