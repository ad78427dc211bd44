//! CAPTCHA image generation
//!
//! This crate renders short randomized challenges into RGBA images: speckle
//! noise, sine-wave strokes, and glyphs with jittered size, position and
//! color. Output can be encoded as PNG, JPEG or GIF.
//!
//! # Features
//!
//! - **Text and equation challenges**: random symbols from a configurable
//!   alphabet, or single-digit addition where the answer is the sum
//! - **Contrast-aware colors**: glyph and curve colors are picked against the
//!   background lightness, or from a caller palette
//! - **Swappable fonts**: a bundled bitmap face by default, TrueType/OpenType
//!   through `load_font`
//! - **Reproducible output**: a fixed `Options::seed` yields byte-identical
//!   images
//!
//! # Example
//!
//! ```no_run
//! use captcha_gen::{generate, ImageFormat, Options};
//!
//! let captcha = generate(150, 50, &Options::default()).unwrap();
//! let png = captcha.encode(&ImageFormat::Png).unwrap();
//! std::fs::write("captcha.png", png).unwrap();
//! println!("answer: {}", captcha.solution());
//! ```

pub mod canvas;
pub mod color;
pub mod curve;
pub mod encode;
pub mod error;
pub mod font;
pub mod generate;
pub mod layout;
pub mod noise;
pub mod options;
pub mod paint;
pub mod rng;
pub mod text;

pub use canvas::Canvas;
pub use color::{Color, Hsva, Rgba};
pub use encode::{ImageFormat, DEFAULT_JPEG_QUALITY};
pub use error::{EncodeError, FontError, GenerateError};
pub use font::{load_font, load_font_from_reader, Font, FontHandle, FontStore};
pub use generate::{encode, encode_with_hash, generate, generate_equation, Captcha, Generator};
pub use options::{CurveColor, Options, DEFAULT_ALPHABET};
