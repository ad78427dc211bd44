//! Random single-pixel speckle noise.

use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::rng::CaptchaRng;

/// Canvas area covered by one speckle at noise factor 1.0.
pub const PIXELS_PER_SPECKLE: f64 = 28.0;

/// Number of speckles for a canvas: `area * factor / 28`, truncated.
pub fn speckle_count(width: u32, height: u32, factor: f64) -> usize {
    let area = width as f64 * height as f64;
    (area * factor / PIXELS_PER_SPECKLE) as usize
}

/// Random opaque color, each channel uniform over [0, 255).
pub fn random_speckle_color(rng: &mut CaptchaRng) -> Rgba {
    let r = rng.below(255) as u8;
    let g = rng.below(255) as u8;
    let b = rng.below(255) as u8;
    Rgba::opaque(r, g, b)
}

/// Scatter speckles over the canvas. Returns how many were painted.
///
/// Positions are independent, so later speckles may overwrite earlier ones.
pub fn paint_noise(canvas: &mut Canvas, factor: f64, rng: &mut CaptchaRng) -> usize {
    let (width, height) = (canvas.width(), canvas.height());
    let count = speckle_count(width, height, factor);
    for _ in 0..count {
        let x = rng.below(width) as i32;
        let y = rng.below(height) as i32;
        let color = random_speckle_color(rng);
        canvas.set_pixel(x, y, color);
    }
    count
}
