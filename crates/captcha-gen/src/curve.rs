//! Decorative sine strokes.
//!
//! Each stroke is a one-pixel polyline sampled at every integer x of its
//! span. There is no anti-aliasing and no stroke width; a true curve
//! renderer (Bezier, thick strokes) is deliberately out of scope.

use std::f64::consts::PI;

use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::options::Options;
use crate::paint;
use crate::rng::CaptchaRng;

/// Canvases at most this wide use the full span instead of jittered ends.
pub const NARROW_WIDTH: u32 = 40;

/// One randomized sine stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct SineCurve {
    /// First x plotted.
    pub x_start: i32,
    /// Last x plotted (inclusive).
    pub x_end: i32,
    /// Peak displacement from the baseline, in pixels.
    pub amplitude: f64,
    /// Baseline y.
    pub y_start: i32,
    /// Half-periods per canvas width, in [1, 2).
    pub frequency: f64,
    /// +1.0 or -1.0.
    pub flip: f64,
    /// Stroke color.
    pub color: Rgba,
    canvas_width: u32,
}

impl SineCurve {
    /// Sample a stroke for a `width x height` canvas.
    pub fn random(width: u32, height: u32, color: Rgba, rng: &mut CaptchaRng) -> Self {
        let (x_start, x_end) = if width <= NARROW_WIDTH {
            (1, width as i32 - 1)
        } else {
            let margin = width / 10;
            let start = rng.below(margin) + 1;
            let end = width - rng.below(margin) - 1;
            (start as i32, end as i32)
        };

        let amplitude = (rng.below(height / 6) + height / 6) as f64;
        let y_start = (rng.below(height * 2 / 3) + height / 6) as i32;
        let frequency = 1.0 + rng.gen_f64();
        let flip = if rng.gen_bool() { -1.0 } else { 1.0 };

        Self {
            x_start,
            x_end,
            amplitude,
            y_start,
            frequency,
            flip,
            color,
            canvas_width: width,
        }
    }

    /// y for a given x: `round(sin(pi * freq * x / width) * amp * flip) + baseline`.
    pub fn y_at(&self, x: i32) -> i32 {
        let phase = PI * self.frequency * x as f64 / self.canvas_width as f64;
        let offset = phase.sin() * self.amplitude * self.flip;
        offset.round() as i32 + self.y_start
    }

    /// Every plotted point, left to right.
    pub fn points(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (self.x_start..=self.x_end).map(move |x| (x, self.y_at(x)))
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        for (x, y) in self.points() {
            canvas.set_pixel(x, y, self.color);
        }
    }
}

/// Draw `opts.curve_count` independent strokes. Returns the strokes drawn.
pub fn paint_curves(canvas: &mut Canvas, opts: &Options, rng: &mut CaptchaRng) -> Vec<SineCurve> {
    let (width, height) = (canvas.width(), canvas.height());
    (0..opts.curve_count)
        .map(|_| {
            let color = paint::curve_color(opts, rng);
            let curve = SineCurve::random(width, height, color, rng);
            curve.draw(canvas);
            curve
        })
        .collect()
}
