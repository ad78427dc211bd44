//! The generation pipeline.
//!
//! Every call runs the same stages on a fresh canvas: background fill,
//! speckle noise, sine curves, then the jittered glyphs on top.

use std::io::Write;

use crate::canvas::Canvas;
use crate::curve;
use crate::encode::{self, ImageFormat};
use crate::error::{EncodeError, GenerateError};
use crate::font::FontStore;
use crate::layout;
use crate::noise;
use crate::options::Options;
use crate::rng::CaptchaRng;
use crate::text::{self, Challenge};

/// Length of an equation's drawn text (`"a+b"`).
const EQUATION_GLYPHS: u32 = 3;

/// A generated challenge: the answer and the rendered image.
#[derive(Debug, Clone)]
pub struct Captcha {
    challenge: Challenge,
    canvas: Canvas,
}

impl Captcha {
    /// The expected answer.
    pub fn solution(&self) -> &str {
        &self.challenge.solution
    }

    /// The text painted onto the image. Differs from the solution for
    /// equations.
    pub fn drawn_text(&self) -> &str {
        &self.challenge.drawn
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    pub fn height(&self) -> u32 {
        self.canvas.height()
    }

    pub fn encode(&self, format: &ImageFormat) -> Result<Vec<u8>, EncodeError> {
        encode::encode_canvas(&self.canvas, format)
    }

    pub fn write_to<W: Write>(&self, writer: W, format: &ImageFormat) -> Result<(), EncodeError> {
        encode::write_canvas(&self.canvas, writer, format)
    }
}

/// Runs the pipeline against a particular font store.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'f> {
    fonts: &'f FontStore,
}

impl Generator<'static> {
    /// Generator backed by the process-wide font store.
    pub fn global() -> Self {
        Self {
            fonts: FontStore::global(),
        }
    }
}

impl Default for Generator<'static> {
    fn default() -> Self {
        Self::global()
    }
}

impl<'f> Generator<'f> {
    pub fn with_fonts(fonts: &'f FontStore) -> Self {
        Self { fonts }
    }

    /// Random text challenge of `opts.text_length` symbols.
    #[tracing::instrument(skip(self, opts), fields(seed = ?opts.seed))]
    pub fn generate(
        &self,
        width: u32,
        height: u32,
        opts: &Options,
    ) -> Result<Captcha, GenerateError> {
        opts.validate_text(width, height)?;
        self.render(width, height, opts, |rng| {
            text::text_challenge(&opts.symbols(), opts.text_length, rng)
                .ok_or_else(|| GenerateError::invalid("alphabet must not be empty"))
        })
    }

    /// Single-digit addition challenge; the answer is the sum.
    #[tracing::instrument(skip(self, opts), fields(seed = ?opts.seed))]
    pub fn generate_equation(
        &self,
        width: u32,
        height: u32,
        opts: &Options,
    ) -> Result<Captcha, GenerateError> {
        opts.validate(width, height)?;
        if width < EQUATION_GLYPHS {
            return Err(GenerateError::invalid(format!(
                "width {} is too small for an equation",
                width
            )));
        }
        self.render(width, height, opts, |rng| Ok(text::random_equation(rng)))
    }

    fn render<F>(
        &self,
        width: u32,
        height: u32,
        opts: &Options,
        challenge: F,
    ) -> Result<Captcha, GenerateError>
    where
        F: FnOnce(&mut CaptchaRng) -> Result<Challenge, GenerateError>,
    {
        // one snapshot for the whole call, taken before any work
        let font = self.fonts.current()?;
        let mut rng = CaptchaRng::new(opts.seed);

        let challenge = challenge(&mut rng)?;
        tracing::debug!(drawn = %challenge.drawn, "challenge chosen");

        let mut canvas = Canvas::new(width, height);
        canvas.fill(opts.background);

        let speckles = noise::paint_noise(&mut canvas, opts.noise, &mut rng);
        tracing::debug!(speckles, "noise painted");

        let curves = curve::paint_curves(&mut canvas, opts, &mut rng);
        tracing::debug!(curves = curves.len(), "curves painted");

        let placements = layout::layout_text(&challenge.drawn, width, height, opts, &mut rng);
        layout::draw_text(&mut canvas, &font, &placements, opts.font_dpi);
        tracing::debug!(glyphs = placements.len(), "text drawn");

        Ok(Captcha { challenge, canvas })
    }
}

/// Generate a text challenge with the process-wide font.
pub fn generate(width: u32, height: u32, opts: &Options) -> Result<Captcha, GenerateError> {
    Generator::global().generate(width, height, opts)
}

/// Generate an equation challenge with the process-wide font.
pub fn generate_equation(
    width: u32,
    height: u32,
    opts: &Options,
) -> Result<Captcha, GenerateError> {
    Generator::global().generate_equation(width, height, opts)
}

/// Encode a generated challenge.
pub fn encode(captcha: &Captcha, format: &ImageFormat) -> Result<Vec<u8>, EncodeError> {
    captcha.encode(format)
}

/// Encode and return the bytes with their BLAKE3 hex digest.
pub fn encode_with_hash(
    captcha: &Captcha,
    format: &ImageFormat,
) -> Result<(Vec<u8>, String), EncodeError> {
    encode::encode_canvas_with_hash(&captcha.canvas, format)
}
