//! Raster container encoders.
//!
//! PNG goes through the `png` crate with fixed compression and filter
//! settings, so identical canvases encode to identical bytes. JPEG and GIF
//! go through the `image` codecs.

use std::io::Write;

use image::codecs::gif::GifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use png::{BitDepth, ColorType, Compression, Encoder, FilterType};

use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::error::EncodeError;

/// Default JPEG quality.
pub const DEFAULT_JPEG_QUALITY: u8 = 80;

/// GIF quantizer speed (1 = best quality, 30 = fastest).
const GIF_SPEED: i32 = 10;

/// JPEG has no alpha channel; transparent areas are flattened onto this.
pub const JPEG_MATTE: Rgba = Rgba::WHITE;

/// Output container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg { quality: u8 },
    Gif,
}

impl ImageFormat {
    /// JPEG at [`DEFAULT_JPEG_QUALITY`].
    pub const fn jpeg() -> Self {
        ImageFormat::Jpeg {
            quality: DEFAULT_JPEG_QUALITY,
        }
    }

    /// Conventional file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg { .. } => "jpg",
            ImageFormat::Gif => "gif",
        }
    }

    /// MIME type, for embedders serving images over HTTP.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg { .. } => "image/jpeg",
            ImageFormat::Gif => "image/gif",
        }
    }
}

/// PNG export configuration for deterministic output.
#[derive(Debug, Clone)]
pub struct PngConfig {
    pub compression: Compression,
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

/// Encode `canvas` into `writer`.
pub fn write_canvas<W: Write>(
    canvas: &Canvas,
    writer: W,
    format: &ImageFormat,
) -> Result<(), EncodeError> {
    match *format {
        ImageFormat::Png => write_png(canvas, writer, &PngConfig::default()),
        ImageFormat::Jpeg { quality } => write_jpeg(canvas, writer, quality),
        ImageFormat::Gif => write_gif(canvas, writer),
    }
}

/// Encode `canvas` into a new byte vector.
pub fn encode_canvas(canvas: &Canvas, format: &ImageFormat) -> Result<Vec<u8>, EncodeError> {
    let mut data = Vec::new();
    write_canvas(canvas, &mut data, format)?;
    Ok(data)
}

/// Encode and return the bytes with their BLAKE3 hex digest.
pub fn encode_canvas_with_hash(
    canvas: &Canvas,
    format: &ImageFormat,
) -> Result<(Vec<u8>, String), EncodeError> {
    let data = encode_canvas(canvas, format)?;
    let hash = hash_bytes(&data);
    Ok((data, hash))
}

/// BLAKE3 hex digest of encoded image bytes.
pub fn hash_bytes(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Write an RGBA canvas as PNG.
pub fn write_png<W: Write>(
    canvas: &Canvas,
    writer: W,
    config: &PngConfig,
) -> Result<(), EncodeError> {
    let mut encoder = Encoder::new(writer, canvas.width(), canvas.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&canvas.to_rgba8())?;
    png_writer.finish()?;

    Ok(())
}

/// Write the canvas as baseline JPEG, flattened over [`JPEG_MATTE`].
pub fn write_jpeg<W: Write>(
    canvas: &Canvas,
    mut writer: W,
    quality: u8,
) -> Result<(), EncodeError> {
    if !(1..=100).contains(&quality) {
        return Err(EncodeError::InvalidQuality(quality));
    }
    let data = canvas.to_rgb8_over(JPEG_MATTE);
    let mut encoder = JpegEncoder::new_with_quality(&mut writer, quality);
    encoder.encode(&data, canvas.width(), canvas.height(), ExtendedColorType::Rgb8)?;
    Ok(())
}

/// Write the canvas as a single-frame GIF (palette quantized).
pub fn write_gif<W: Write>(canvas: &Canvas, mut writer: W) -> Result<(), EncodeError> {
    let data = canvas.to_rgba8();
    {
        // the trailer is written when the encoder drops
        let mut encoder = GifEncoder::new_with_speed(&mut writer, GIF_SPEED);
        encoder.encode(&data, canvas.width(), canvas.height(), ExtendedColorType::Rgba8)?;
    }
    writer.flush()?;
    Ok(())
}
