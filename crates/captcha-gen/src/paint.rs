//! Color policy shared by curves and glyphs.

use crate::color::{Hsva, Rgba};
use crate::options::{CurveColor, Options};
use crate::rng::CaptchaRng;

/// Pick a palette entry, or a color contrasting with the background when
/// the palette is empty.
pub fn pick_color(opts: &Options, rng: &mut CaptchaRng) -> Rgba {
    match rng.choose(&opts.palette) {
        Some(color) => *color,
        None => contrast_color(opts.background, rng),
    }
}

/// Stroke color for one curve, per the configured curve policy.
pub fn curve_color(opts: &Options, rng: &mut CaptchaRng) -> Rgba {
    match opts.curve_color {
        CurveColor::Contrast => pick_color(opts, rng),
        CurveColor::DarkGray => dark_gray(rng),
    }
}

/// Opaque gray with value in [20, 148).
pub fn dark_gray(rng: &mut CaptchaRng) -> Rgba {
    Rgba::gray(20 + rng.below(128) as u8)
}

/// Saturated color whose brightness sits 0.3..0.5 away from the
/// background's lightness. Transparent backgrounds count as white.
pub fn contrast_color(background: Rgba, rng: &mut CaptchaRng) -> Rgba {
    let lightness = if background.is_transparent() {
        1.0
    } else {
        background.lightness()
    };

    let jitter = rng.gen_f64() * 0.2;
    let value = if lightness >= 0.5 {
        lightness - 0.5 + jitter
    } else {
        lightness + 0.3 + jitter
    };

    let hue = rng.gen_f64();
    let saturation = 0.6 + rng.gen_f64() * 0.2;
    Hsva::new(hue, saturation, value, 255).to_rgba()
}
