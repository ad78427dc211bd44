//! Font-check command implementation
//!
//! Parses a font file without installing it.

use anyhow::{Context, Result};
use captcha_gen::Font;
use colored::Colorize;
use std::fs;
use std::process::ExitCode;

/// Run the font-check command
///
/// # Returns
/// Exit code: 0 when the font parses, 1 otherwise
pub fn run(path: &str, json: bool) -> Result<ExitCode> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read font file: {}", path))?;

    match Font::from_bytes(bytes) {
        Ok(font) => {
            if json {
                let output = serde_json::json!({
                    "ok": true,
                    "path": path,
                    "glyphs": font.glyph_count(),
                });
                println!("{}", serde_json::to_string(&output)?);
            } else {
                println!(
                    "{} {} ({} glyphs)",
                    "OK".green().bold(),
                    path,
                    font.glyph_count()
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            if json {
                let output = serde_json::json!({
                    "ok": false,
                    "path": path,
                    "error": e.to_string(),
                });
                println!("{}", serde_json::to_string(&output)?);
            } else {
                println!("{} {}: {}", "INVALID".red().bold(), path, e);
            }
            Ok(ExitCode::from(1))
        }
    }
}
