//! The mutable pixel buffer every painter draws into.

use crate::color::Rgba;

/// A fixed-size RGBA canvas (row-major, straight alpha).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<Rgba>,
}

impl Canvas {
    /// Create a zero-initialized (transparent black) canvas.
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            data: vec![Rgba::TRANSPARENT; size],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels (`width * height`).
    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }

    /// Row-major pixel slice.
    pub fn pixels(&self) -> &[Rgba] {
        &self.data
    }

    /// Set every pixel to `color`. Alpha is stored as given.
    pub fn fill(&mut self, color: Rgba) {
        self.data.fill(color);
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Get a pixel, or `None` outside the canvas.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Rgba> {
        self.index(x, y).map(|idx| self.data[idx])
    }

    /// Overwrite one pixel. Coordinates outside the canvas are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if let Some(idx) = self.index(x, y) {
            self.data[idx] = color;
        }
    }

    /// Source-over composite of `color` scaled by `coverage` (0..=1).
    ///
    /// Works on straight alpha, so a transparent background stays
    /// transparent wherever nothing was drawn.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Rgba, coverage: f32) {
        let Some(idx) = self.index(x, y) else {
            return;
        };
        let coverage = coverage.clamp(0.0, 1.0);
        if coverage <= 0.0 {
            return;
        }

        let dst = self.data[idx];
        let src_a = color.a as f32 / 255.0 * coverage;
        let dst_a = dst.a as f32 / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);
        if out_a <= 0.0 {
            self.data[idx] = Rgba::TRANSPARENT;
            return;
        }

        let mix = |s: u8, d: u8| {
            let v = (s as f32 * src_a + d as f32 * dst_a * (1.0 - src_a)) / out_a;
            v.round().clamp(0.0, 255.0) as u8
        };
        self.data[idx] = Rgba::new(
            mix(color.r, dst.r),
            mix(color.g, dst.g),
            mix(color.b, dst.b),
            (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
        );
    }

    /// Interleaved RGBA8 bytes.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.data.iter().flat_map(|c| c.to_rgba8()).collect()
    }

    /// Interleaved RGB8 bytes, flattened over an opaque `matte`.
    pub fn to_rgb8_over(&self, matte: Rgba) -> Vec<u8> {
        self.data.iter().flat_map(|c| c.over(matte)).collect()
    }
}
