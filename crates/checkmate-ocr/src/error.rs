//! Error types for text recognition

use thiserror::Error;

/// Errors raised while turning an image into text
///
/// `TextExtractor::extract` never returns these; it renders them into the
/// error sentinel instead.
#[derive(Error, Debug)]
pub enum OcrError {
    /// Bytes could not be decoded as an image, or re-encoding failed
    #[error("{0}")]
    Image(#[from] image::ImageError),

    /// Temporary file handling failed
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The tesseract binary could not be started
    #[error("Failed to run tesseract (is it installed? path='{path}'): {source}")]
    Launch {
        /// Configured binary path
        path: String,
        /// Underlying spawn error
        source: std::io::Error,
    },

    /// Tesseract ran but reported failure
    #[error("Tesseract OCR failed (exit code {code}): {stderr}")]
    Engine {
        /// Process exit code, -1 when killed by a signal
        code: i32,
        /// Captured standard error
        stderr: String,
    },

    /// A recognizer other than tesseract failed
    #[error("{0}")]
    Recognizer(String),
}
