//! Glyph placement: slot positions, size jitter, baseline jitter, color.

use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::font::Font;
use crate::options::Options;
use crate::paint;
use crate::rng::CaptchaRng;

/// Smallest and largest divisor applied to the canvas height to get a
/// glyph's point size; sizes land in (0.67h, 1.25h] before `font_scale`.
pub const SIZE_DIVISOR_MIN: f64 = 0.8;
pub const SIZE_DIVISOR_MAX: f64 = 1.5;

/// Largest allowed em, in multiples of the canvas's longer side.
pub const MAX_EM_PER_CANVAS: f64 = 16.0;

/// Where and how one character is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphPlacement {
    pub ch: char,
    /// Left end of the baseline.
    pub x: i32,
    /// Baseline y.
    pub y: i32,
    /// Font size in points.
    pub size: f64,
    pub color: Rgba,
}

impl GlyphPlacement {
    /// Pixels per em at `dpi`.
    pub fn px_per_em(&self, dpi: f64) -> f32 {
        (self.size * dpi / 72.0) as f32
    }
}

/// Lay out `text` left to right across a `width x height` canvas.
///
/// Each glyph owns a slot of `width / len` pixels. One random offset,
/// shared by every glyph, shifts all of them inside their slots.
pub fn layout_text(
    text: &str,
    width: u32,
    height: u32,
    opts: &Options,
    rng: &mut CaptchaRng,
) -> Vec<GlyphPlacement> {
    let len = text.chars().count() as u32;
    if len == 0 {
        return Vec::new();
    }

    let slot = width / len;
    let offset = rng.below(slot / 2);
    let h = height as f64;

    text.chars()
        .enumerate()
        .map(|(i, ch)| {
            let divisor = rng.gen_range(SIZE_DIVISOR_MIN..SIZE_DIVISOR_MAX);
            let size = h / divisor * opts.font_scale;
            let color = paint::pick_color(opts, rng);
            let x = (slot * i as u32 + offset) as i32;
            let y = (height / 6 + rng.below(height / 3)) as i32 + (size / 2.0) as i32;
            GlyphPlacement { ch, x, y, size, color }
        })
        .collect()
}

/// Paint every placement with `font`.
pub fn draw_text(canvas: &mut Canvas, font: &Font, placements: &[GlyphPlacement], dpi: f64) {
    for p in placements {
        font.draw_glyph(canvas, p.ch, p.px_per_em(dpi), (p.x as f32, p.y as f32), p.color);
    }
}
