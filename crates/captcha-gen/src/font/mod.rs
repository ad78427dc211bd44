//! Fonts and the glyph rendering capability.
//!
//! A [`Font`] is immutable once built. It is shared as a [`FontHandle`]
//! (`Arc<Font>`), and replacing the process-wide font swaps the handle in a
//! [`FontStore`] instead of mutating the font itself.

mod builtin;
mod store;

use std::fmt;
use std::io::Read;
use std::sync::Arc;

use ab_glyph::{point, Font as _, FontArc, PxScale};

use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::error::FontError;

pub use builtin::{BitmapFace, BUILTIN_FACE, GLYPH_COLUMNS, GLYPH_ROWS};
pub use store::FontStore;

/// Shared reference to an immutable font.
pub type FontHandle = Arc<Font>;

/// A font able to paint single glyphs onto a canvas.
#[derive(Clone)]
pub enum Font {
    /// The bundled bitmap face.
    Builtin(&'static BitmapFace),
    /// A parsed TrueType/OpenType font.
    Outline(FontArc),
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Font::Builtin(face) => f
                .debug_struct("Font::Builtin")
                .field("glyphs", &face.glyph_count())
                .finish(),
            Font::Outline(font) => f
                .debug_struct("Font::Outline")
                .field("glyphs", &font.glyph_count())
                .finish(),
        }
    }
}

impl Font {
    /// The bundled 5x7 face.
    pub fn builtin() -> Self {
        Font::Builtin(&BUILTIN_FACE)
    }

    /// Parse and validate font bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self, FontError> {
        let font = FontArc::try_from_vec(bytes.into())?;
        if font.units_per_em().is_none() || font.glyph_count() == 0 {
            return Err(FontError::Parse(ab_glyph::InvalidFont));
        }
        Ok(Font::Outline(font))
    }

    /// Read all of `reader`, then parse.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, FontError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_bytes(bytes)
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Font::Builtin(_))
    }

    pub fn glyph_count(&self) -> usize {
        match self {
            Font::Builtin(face) => face.glyph_count(),
            Font::Outline(font) => font.glyph_count(),
        }
    }

    /// Paint one character.
    ///
    /// `origin` is the left end of the glyph's baseline. Pixels are
    /// coverage-blended in `color`; anything outside the canvas is dropped.
    pub fn draw_glyph(
        &self,
        canvas: &mut Canvas,
        ch: char,
        px_per_em: f32,
        origin: (f32, f32),
        color: Rgba,
    ) {
        match self {
            Font::Builtin(face) => face.draw(canvas, ch, px_per_em, origin, color),
            Font::Outline(font) => draw_outline(font, canvas, ch, px_per_em, origin, color),
        }
    }
}

fn draw_outline(
    font: &FontArc,
    canvas: &mut Canvas,
    ch: char,
    px_per_em: f32,
    origin: (f32, f32),
    color: Rgba,
) {
    // validated at load time, but a zero would only yield an empty scale
    let units_per_em = font.units_per_em().unwrap_or(1000.0);
    let scale = PxScale::from(px_per_em * font.height_unscaled() / units_per_em);

    let glyph = font
        .glyph_id(ch)
        .with_scale_and_position(scale, point(origin.0, origin.1));
    let Some(outlined) = font.outline_glyph(glyph) else {
        return;
    };

    let bounds = outlined.px_bounds();
    let (width, height) = (canvas.width() as f32, canvas.height() as f32);
    let misses_canvas = bounds.max.x <= 0.0
        || bounds.max.y <= 0.0
        || bounds.min.x >= width
        || bounds.min.y >= height;
    if misses_canvas {
        return;
    }
    let (min_x, min_y) = (bounds.min.x as i32, bounds.min.y as i32);
    outlined.draw(|x, y, coverage| {
        canvas.blend_pixel(min_x + x as i32, min_y + y as i32, color, coverage);
    });
}

/// Parse `bytes` and install the result as the process-wide font.
///
/// Invalid data returns an error and leaves the current font in place.
pub fn load_font(bytes: impl Into<Vec<u8>>) -> Result<FontHandle, FontError> {
    FontStore::global().load(bytes)
}

/// Like [`load_font`], reading the bytes from `reader` first.
pub fn load_font_from_reader<R: Read>(reader: R) -> Result<FontHandle, FontError> {
    FontStore::global().load_from_reader(reader)
}
