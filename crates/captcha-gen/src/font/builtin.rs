//! Bundled 5x7 bitmap face.
//!
//! Always available, so a process can generate challenges without shipping
//! a font file. Each glyph is seven row masks; bit 4 is the leftmost column.

use crate::canvas::Canvas;
use crate::color::Rgba;

/// Glyph width in cells.
pub const GLYPH_COLUMNS: u32 = 5;
/// Glyph height in cells (all glyphs sit on the baseline).
pub const GLYPH_ROWS: u32 = 7;
/// Cells per em; 7 rows give a cap height of 0.7 em.
const CELLS_PER_EM: f32 = 10.0;

type Rows = [u8; GLYPH_ROWS as usize];

/// The compiled-in bitmap face.
#[derive(Debug)]
pub struct BitmapFace {
    glyphs: &'static [(char, Rows)],
    fallback: Rows,
}

/// The single bundled face instance.
pub static BUILTIN_FACE: BitmapFace = BitmapFace {
    glyphs: GLYPHS,
    fallback: QUESTION,
};

impl BitmapFace {
    /// Row masks for `ch`, if the face has it.
    pub fn rows(&self, ch: char) -> Option<&Rows> {
        self.glyphs.iter().find(|(c, _)| *c == ch).map(|(_, rows)| rows)
    }

    pub fn has_glyph(&self, ch: char) -> bool {
        self.rows(ch).is_some()
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Row masks for `ch`, falling back to the `?` glyph.
    fn rows_or_fallback(&self, ch: char) -> &Rows {
        self.rows(ch).unwrap_or(&self.fallback)
    }

    /// Whether cell (`col`, `row`) of `ch` is lit. Unknown characters use
    /// the fallback glyph.
    pub fn is_lit(&self, ch: char, col: u32, row: u32) -> bool {
        cell_lit(self.rows_or_fallback(ch), col, row)
    }

    /// Paint `ch` with its bottom-left corner at the baseline `origin`.
    ///
    /// Pixels are lit when their center falls inside a lit cell. Only the
    /// part of the glyph box that overlaps the canvas is visited.
    pub fn draw(
        &self,
        canvas: &mut Canvas,
        ch: char,
        px_per_em: f32,
        origin: (f32, f32),
        color: Rgba,
    ) {
        let cell = px_per_em / CELLS_PER_EM;
        if cell <= 0.0 || !cell.is_finite() {
            return;
        }
        let rows = self.rows_or_fallback(ch);
        let (left, baseline) = origin;
        let top = baseline - cell * GLYPH_ROWS as f32;
        let right = left + cell * GLYPH_COLUMNS as f32;

        let (x0, x1) = clip_span(left, right, canvas.width());
        let (y0, y1) = clip_span(top, baseline, canvas.height());
        for py in y0..y1 {
            let row = ((py as f32 + 0.5 - top) / cell).floor();
            if row < 0.0 {
                continue;
            }
            for px in x0..x1 {
                let col = ((px as f32 + 0.5 - left) / cell).floor();
                if col < 0.0 {
                    continue;
                }
                if cell_lit(rows, col as u32, row as u32) {
                    canvas.blend_pixel(px, py, color, 1.0);
                }
            }
        }
    }
}

fn cell_lit(rows: &Rows, col: u32, row: u32) -> bool {
    if col >= GLYPH_COLUMNS || row >= GLYPH_ROWS {
        return false;
    }
    rows[row as usize] & (1 << (GLYPH_COLUMNS - 1 - col)) != 0
}

/// Pixel range covering `[start, end)` intersected with `[0, limit)`.
fn clip_span(start: f32, end: f32, limit: u32) -> (i32, i32) {
    let lo = start.floor().max(0.0);
    let hi = end.ceil().min(limit as f32);
    if hi <= lo {
        (0, 0)
    } else {
        (lo as i32, hi as i32)
    }
}

const QUESTION: Rows = [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100];

#[rustfmt::skip]
const GLYPHS: &[(char, Rows)] = &[
    (' ', [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000]),
    ('+', [0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000]),
    ('-', [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000]),
    ('=', [0b00000, 0b00000, 0b11111, 0b00000, 0b11111, 0b00000, 0b00000]),
    ('?', QUESTION),
    ('0', [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110]),
    ('1', [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
    ('2', [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111]),
    ('3', [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110]),
    ('4', [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010]),
    ('5', [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110]),
    ('6', [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110]),
    ('7', [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000]),
    ('8', [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110]),
    ('9', [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100]),
    ('A', [0b01110, 0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001]),
    ('B', [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110]),
    ('C', [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110]),
    ('D', [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100]),
    ('E', [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111]),
    ('F', [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000]),
    ('G', [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111]),
    ('H', [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
    ('I', [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
    ('J', [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100]),
    ('K', [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001]),
    ('L', [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111]),
    ('M', [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001]),
    ('N', [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001]),
    ('O', [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
    ('P', [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000]),
    ('Q', [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101]),
    ('R', [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001]),
    ('S', [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110]),
    ('T', [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100]),
    ('U', [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
    ('V', [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100]),
    ('W', [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010]),
    ('X', [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001]),
    ('Y', [0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100]),
    ('Z', [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111]),
    ('a', [0b00000, 0b00000, 0b01110, 0b00001, 0b01111, 0b10001, 0b01111]),
    ('b', [0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b11110]),
    ('c', [0b00000, 0b00000, 0b01110, 0b10000, 0b10000, 0b10001, 0b01110]),
    ('d', [0b00001, 0b00001, 0b01101, 0b10011, 0b10001, 0b10001, 0b01111]),
    ('e', [0b00000, 0b00000, 0b01110, 0b10001, 0b11111, 0b10000, 0b01110]),
    ('f', [0b00110, 0b01001, 0b01000, 0b11100, 0b01000, 0b01000, 0b01000]),
    ('g', [0b00000, 0b01111, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110]),
    ('h', [0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001]),
    ('i', [0b00100, 0b00000, 0b01100, 0b00100, 0b00100, 0b00100, 0b01110]),
    ('j', [0b00010, 0b00000, 0b00110, 0b00010, 0b00010, 0b10010, 0b01100]),
    ('k', [0b10000, 0b10000, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010]),
    ('l', [0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
    ('m', [0b00000, 0b00000, 0b11010, 0b10101, 0b10101, 0b10001, 0b10001]),
    ('n', [0b00000, 0b00000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001]),
    ('o', [0b00000, 0b00000, 0b01110, 0b10001, 0b10001, 0b10001, 0b01110]),
    ('p', [0b00000, 0b00000, 0b11110, 0b10001, 0b11110, 0b10000, 0b10000]),
    ('q', [0b00000, 0b00000, 0b01101, 0b10011, 0b01111, 0b00001, 0b00001]),
    ('r', [0b00000, 0b00000, 0b10110, 0b11001, 0b10000, 0b10000, 0b10000]),
    ('s', [0b00000, 0b00000, 0b01110, 0b10000, 0b01110, 0b00001, 0b11110]),
    ('t', [0b01000, 0b01000, 0b11100, 0b01000, 0b01000, 0b01001, 0b00110]),
    ('u', [0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b10011, 0b01101]),
    ('v', [0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100]),
    ('w', [0b00000, 0b00000, 0b10001, 0b10001, 0b10101, 0b10101, 0b01010]),
    ('x', [0b00000, 0b00000, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001]),
    ('y', [0b00000, 0b00000, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110]),
    ('z', [0b00000, 0b00000, 0b11111, 0b00010, 0b00100, 0b01000, 0b11111]),
];
