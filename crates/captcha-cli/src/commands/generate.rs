//! Generate command implementation
//!
//! Renders one challenge, writes the image and reports the solution.

use anyhow::{bail, Context, Result};
use captcha_gen::{Captcha, ImageFormat, Options, DEFAULT_JPEG_QUALITY};
use colored::Colorize;
use serde::Serialize;
use std::fs::{self, File};
use std::path::Path;
use std::process::ExitCode;

/// Flags of `captcha generate`.
#[derive(Debug, Clone)]
pub struct GenerateArgs<'a> {
    pub width: u32,
    pub height: u32,
    pub math: bool,
    pub format: &'a str,
    pub quality: Option<u8>,
    pub config: Option<&'a str>,
    pub font: Option<&'a str>,
    pub seed: Option<u64>,
    pub out: Option<&'a str>,
    pub json: bool,
}

/// Machine-readable result line.
#[derive(Debug, Serialize)]
pub struct GenerateOutput {
    pub solution: String,
    pub drawn: String,
    pub path: String,
    pub format: String,
    pub mime_type: String,
    pub width: u32,
    pub height: u32,
    pub hash: String,
}

/// Run the generate command
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(args: &GenerateArgs<'_>) -> Result<ExitCode> {
    let mut options = load_options(args.config)?;
    if let Some(seed) = args.seed {
        options.seed = Some(seed);
    }
    let format = parse_format(args.format, args.quality)?;

    if let Some(font_path) = args.font {
        let file = File::open(font_path)
            .with_context(|| format!("Failed to open font: {}", font_path))?;
        captcha_gen::load_font_from_reader(file)
            .with_context(|| format!("Failed to load font: {}", font_path))?;
    }

    let captcha = if args.math {
        captcha_gen::generate_equation(args.width, args.height, &options)
    } else {
        captcha_gen::generate(args.width, args.height, &options)
    }
    .context("Failed to generate captcha")?;

    let path = args
        .out
        .map(str::to_string)
        .unwrap_or_else(|| default_output_path(&format));
    let hash = write_image(&captcha, &format, Path::new(&path))?;

    if args.json {
        let output = GenerateOutput {
            solution: captcha.solution().to_string(),
            drawn: captcha.drawn_text().to_string(),
            path,
            format: format.extension().to_string(),
            mime_type: format.mime_type().to_string(),
            width: captcha.width(),
            height: captcha.height(),
            hash,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{} {}", "Wrote:".cyan().bold(), path);
        if captcha.drawn_text() != captcha.solution() {
            println!("{} {}", "Drawn:".dimmed(), captcha.drawn_text());
        }
        println!("{} {}", "Solution:".green().bold(), captcha.solution());
    }

    Ok(ExitCode::SUCCESS)
}

/// Read `Options` from a JSON file, or return the defaults.
pub fn load_options(config: Option<&str>) -> Result<Options> {
    let Some(path) = config else {
        return Ok(Options::default());
    };
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path))?;
    let options: Options = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config JSON: {}", path))?;
    Ok(options)
}

/// Map the `--format` / `--quality` pair to an [`ImageFormat`].
pub fn parse_format(format: &str, quality: Option<u8>) -> Result<ImageFormat> {
    let parsed = match format {
        "png" => ImageFormat::Png,
        "gif" => ImageFormat::Gif,
        "jpeg" | "jpg" => {
            let quality = quality.unwrap_or(DEFAULT_JPEG_QUALITY);
            if !(1..=100).contains(&quality) {
                bail!("--quality must be between 1 and 100, got {}", quality);
            }
            return Ok(ImageFormat::Jpeg { quality });
        }
        other => bail!("unsupported format '{}' (expected png, jpeg or gif)", other),
    };
    if quality.is_some() {
        tracing::warn!(format, "--quality only applies to jpeg; ignored");
    }
    Ok(parsed)
}

pub fn default_output_path(format: &ImageFormat) -> String {
    format!("captcha.{}", format.extension())
}

/// Encode and write the image, returning its BLAKE3 hex digest.
fn write_image(captcha: &Captcha, format: &ImageFormat, path: &Path) -> Result<String> {
    let (bytes, hash) =
        captcha_gen::encode_with_hash(captcha, format).context("Failed to encode image")?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    fs::write(path, &bytes).with_context(|| format!("Failed to write image: {}", path.display()))?;
    tracing::debug!(bytes = bytes.len(), path = %path.display(), "image written");
    Ok(hash)
}
