//! Color representations and the HSVA to RGBA adapter.

use serde::{Deserialize, Serialize};

/// Straight (non-premultiplied) 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);

    /// Create a color with alpha.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create an opaque gray.
    pub const fn gray(value: u8) -> Self {
        Self::opaque(value, value, value)
    }

    /// Create from `[r, g, b, a]`.
    pub const fn from_rgba8(rgba: [u8; 4]) -> Self {
        Self::new(rgba[0], rgba[1], rgba[2], rgba[3])
    }

    /// Convert to `[r, g, b, a]`.
    pub const fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// HSL lightness in [0, 1]: `(max + min) / (2 * 255)`.
    pub fn lightness(&self) -> f64 {
        let max = self.r.max(self.g).max(self.b) as f64;
        let min = self.r.min(self.g).min(self.b) as f64;
        (max + min) / (2.0 * 255.0)
    }

    /// True when alpha is zero.
    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Composite this color over an opaque matte, dropping alpha.
    pub fn over(&self, matte: Rgba) -> [u8; 3] {
        let a = self.a as f64 / 255.0;
        let mix = |src: u8, dst: u8| (src as f64 * a + dst as f64 * (1.0 - a)).round() as u8;
        [mix(self.r, matte.r), mix(self.g, matte.g), mix(self.b, matte.b)]
    }
}

/// Hue/saturation/value color with 8-bit alpha.
///
/// - `h`: hue as a fraction of the full circle, [0, 1)
/// - `s`: saturation, [0, 1]
/// - `v`: value/brightness, [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsva {
    pub h: f64,
    pub s: f64,
    pub v: f64,
    pub a: u8,
}

impl Hsva {
    pub const fn new(h: f64, s: f64, v: f64, a: u8) -> Self {
        Self { h, s, v, a }
    }

    /// Convert using the six-sector HSV formula.
    pub fn to_rgba(&self) -> Rgba {
        let sector = (self.h * 6.0).floor();
        let f = self.h * 6.0 - sector;
        let v = self.v;
        let p = v * (1.0 - self.s);
        let q = v * (1.0 - f * self.s);
        let t = v * (1.0 - (1.0 - f) * self.s);

        let (r, g, b) = match (sector as i64).rem_euclid(6) {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Rgba::new(to_channel(r), to_channel(g), to_channel(b), self.a)
    }
}

// rounds to nearest; truncation would map v = 0.5 to 127
#[inline]
fn to_channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Either representation; both read back as canonical RGBA.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Rgba(Rgba),
    Hsva(Hsva),
}

impl Color {
    pub fn to_rgba(&self) -> Rgba {
        match self {
            Color::Rgba(c) => *c,
            Color::Hsva(c) => c.to_rgba(),
        }
    }
}

impl From<Rgba> for Color {
    fn from(c: Rgba) -> Self {
        Color::Rgba(c)
    }
}

impl From<Hsva> for Color {
    fn from(c: Hsva) -> Self {
        Color::Hsva(c)
    }
}

impl From<Color> for Rgba {
    fn from(c: Color) -> Self {
        c.to_rgba()
    }
}
