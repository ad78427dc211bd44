//! Error types for font loading, generation and encoding.

use thiserror::Error;

/// Errors from the font store and font parsing.
#[derive(Debug, Error)]
pub enum FontError {
    /// No font is installed in the store used for generation.
    #[error("no font loaded")]
    NotLoaded,

    /// Font bytes failed structural validation.
    #[error("font parse error: {0}")]
    Parse(#[from] ab_glyph::InvalidFont),

    /// Reading font bytes failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from image container encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Png(#[from] png::EncodingError),

    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("invalid JPEG quality {0} (expected 1..=100)")]
    InvalidQuality(u8),
}

/// Errors from challenge generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Font(#[from] FontError),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl GenerateError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// True when generation failed because no font was installed.
    pub fn is_missing_font(&self) -> bool {
        matches!(self, GenerateError::Font(FontError::NotLoaded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes_are_stable() {
        assert_eq!(FontError::NotLoaded.to_string(), "no font loaded");
        assert!(GenerateError::invalid("x")
            .to_string()
            .contains("Invalid parameter:"));
        assert!(EncodeError::InvalidQuality(0).to_string().contains("JPEG quality 0"));
    }

    #[test]
    fn test_font_error_passes_through() {
        let err = GenerateError::from(FontError::NotLoaded);
        assert!(err.is_missing_font());
        assert_eq!(err.to_string(), "no font loaded");
    }

    #[test]
    fn test_io_source_preserved() {
        let err = FontError::from(std::io::Error::other("boom"));
        assert!(err.to_string().contains("boom"));
    }
}
