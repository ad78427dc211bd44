//! Generation options.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::error::GenerateError;
use crate::layout::{MAX_EM_PER_CANVAS, SIZE_DIVISOR_MIN};

/// Default alphabet: `A-Z`, `a-z`, `0-9`.
pub const DEFAULT_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// How decorative curves pick their stroke color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveColor {
    /// Follow the palette/contrast policy shared with glyphs.
    #[default]
    Contrast,
    /// Random dark gray, independent of palette and background.
    DarkGray,
}

/// Options controlling a single challenge.
///
/// Width and height are not part of the options; they are passed to
/// [`crate::generate`] and fixed for the resulting canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Background fill. Defaults to fully transparent.
    pub background: Rgba,

    /// Symbols the solution is drawn from.
    pub alphabet: String,

    /// Number of symbols in a text solution.
    pub text_length: usize,

    /// Number of sine curves drawn over the noise.
    pub curve_count: usize,

    /// Rendering resolution used to turn point sizes into pixels.
    pub font_dpi: f64,

    /// Global multiplier on the randomized glyph size.
    pub font_scale: f64,

    /// Speckle density multiplier (1.0 is one speckle per 28 px of area).
    pub noise: f64,

    /// Fixed colors for glyphs and curves. Empty means auto contrast.
    pub palette: Vec<Rgba>,

    /// Stroke color policy for curves.
    pub curve_color: CurveColor,

    /// Fixed RNG seed; `None` draws a fresh seed per call.
    pub seed: Option<u64>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            background: Rgba::TRANSPARENT,
            alphabet: DEFAULT_ALPHABET.to_string(),
            text_length: 4,
            curve_count: 2,
            font_dpi: 92.0,
            font_scale: 1.0,
            noise: 1.0,
            palette: Vec::new(),
            curve_color: CurveColor::default(),
            seed: None,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_background(mut self, background: Rgba) -> Self {
        self.background = background;
        self
    }

    pub fn with_alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = alphabet.into();
        self
    }

    pub fn with_text_length(mut self, length: usize) -> Self {
        self.text_length = length;
        self
    }

    pub fn with_curve_count(mut self, count: usize) -> Self {
        self.curve_count = count;
        self
    }

    pub fn with_font_dpi(mut self, dpi: f64) -> Self {
        self.font_dpi = dpi;
        self
    }

    pub fn with_font_scale(mut self, scale: f64) -> Self {
        self.font_scale = scale;
        self
    }

    pub fn with_noise(mut self, noise: f64) -> Self {
        self.noise = noise;
        self
    }

    pub fn with_palette(mut self, palette: Vec<Rgba>) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_curve_color(mut self, curve_color: CurveColor) -> Self {
        self.curve_color = curve_color;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Alphabet as a list of symbols.
    pub fn symbols(&self) -> Vec<char> {
        self.alphabet.chars().collect()
    }

    /// Check options shared by both challenge kinds against a canvas size.
    pub fn validate(&self, width: u32, height: u32) -> Result<(), GenerateError> {
        if width == 0 || height == 0 {
            return Err(GenerateError::invalid(format!(
                "canvas must be non-empty, got {}x{}",
                width, height
            )));
        }
        for (name, value) in [
            ("font_dpi", self.font_dpi),
            ("font_scale", self.font_scale),
            ("noise", self.noise),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GenerateError::invalid(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        let largest_em = height as f64 / SIZE_DIVISOR_MIN * self.font_scale * self.font_dpi / 72.0;
        let limit = MAX_EM_PER_CANVAS * width.max(height) as f64;
        if largest_em > limit {
            return Err(GenerateError::invalid(format!(
                "font_scale {} at {} dpi gives glyphs up to {:.0} px per em, \
                 more than {:.0} for a {}x{} canvas",
                self.font_scale, self.font_dpi, largest_em, limit, width, height
            )));
        }
        Ok(())
    }

    /// Check text-mode specific options.
    pub fn validate_text(&self, width: u32, height: u32) -> Result<(), GenerateError> {
        self.validate(width, height)?;
        if self.alphabet.is_empty() {
            return Err(GenerateError::invalid("alphabet must not be empty"));
        }
        if self.text_length == 0 {
            return Err(GenerateError::invalid("text_length must be at least 1"));
        }
        if (width as usize) < self.text_length {
            return Err(GenerateError::invalid(format!(
                "width {} is too small for {} glyphs",
                width, self.text_length
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let opts = Options::default();
        assert_eq!(opts.background, Rgba::TRANSPARENT);
        assert_eq!(opts.symbols().len(), 62);
        assert_eq!(opts.text_length, 4);
        assert_eq!(opts.curve_count, 2);
        assert_eq!(opts.font_dpi, 92.0);
        assert_eq!(opts.font_scale, 1.0);
        assert_eq!(opts.noise, 1.0);
        assert!(opts.palette.is_empty());
        assert_eq!(opts.curve_color, CurveColor::Contrast);
        assert_eq!(opts.seed, None);
    }

    #[test]
    fn test_builder() {
        let opts = Options::new()
            .with_alphabet("1234567890")
            .with_text_length(6)
            .with_curve_count(0)
            .with_background(Rgba::WHITE)
            .with_seed(9);
        assert_eq!(opts.alphabet, "1234567890");
        assert_eq!(opts.text_length, 6);
        assert_eq!(opts.curve_count, 0);
        assert_eq!(opts.background, Rgba::WHITE);
        assert_eq!(opts.seed, Some(9));
    }

    #[test]
    fn test_validate_rejects_degenerate_input() {
        let opts = Options::default();
        assert!(opts.validate_text(0, 50).is_err());
        assert!(opts.validate_text(150, 0).is_err());
        assert!(opts.validate_text(3, 50).is_err());
        assert!(opts.clone().with_alphabet("").validate_text(150, 50).is_err());
        assert!(opts.clone().with_text_length(0).validate_text(150, 50).is_err());
        assert!(opts.clone().with_font_dpi(0.0).validate(150, 50).is_err());
        assert!(opts.clone().with_font_scale(f64::NAN).validate(150, 50).is_err());
        assert!(opts.clone().with_noise(-1.0).validate(150, 50).is_err());
        assert!(opts.validate_text(150, 50).is_ok());
    }

    #[test]
    fn test_validate_rejects_glyphs_far_larger_than_canvas() {
        let opts = Options::default();
        assert!(opts.clone().with_font_scale(10.0).validate(150, 50).is_ok());

        let err = opts.clone().with_font_scale(200.0).validate(150, 50).unwrap_err();
        assert!(err.to_string().contains("font_scale 200"));
        assert!(opts.with_font_dpi(100_000.0).validate(150, 50).is_err());
    }

    #[test]
    fn test_json_partial_config_uses_defaults() {
        let json = r#"{
            "text_length": 6,
            "curve_color": "dark_gray",
            "palette": [{"r": 1, "g": 2, "b": 3, "a": 255}]
        }"#;
        let opts: Options = serde_json::from_str(json).unwrap();
        assert_eq!(opts.text_length, 6);
        assert_eq!(opts.curve_color, CurveColor::DarkGray);
        assert_eq!(opts.palette, vec![Rgba::opaque(1, 2, 3)]);
        assert_eq!(opts.alphabet, DEFAULT_ALPHABET);
    }

    #[test]
    fn test_json_rejects_unknown_fields() {
        let json = r#"{ "text_lenght": 6 }"#;
        assert!(serde_json::from_str::<Options>(json).is_err());
    }
}
