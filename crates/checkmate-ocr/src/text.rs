//! Cleanup of recognized text and file type checks

use std::path::Path;

/// Returned when recognition produced no usable text
pub const NO_TEXT_SENTINEL: &str = "No text could be extracted from the image.";

/// Prefix of the message returned when recognition failed
pub const ERROR_SENTINEL_PREFIX: &str = "An error occurred while processing the image: ";

/// Extensions accepted as images (lowercase, without the dot)
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "tiff", "webp"];

/// Trim every line, drop blank ones and rejoin with `\n`
///
/// Returns [`NO_TEXT_SENTINEL`] when nothing is left.
pub fn clean_text(raw: &str) -> String {
    let cleaned = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    if cleaned.is_empty() {
        NO_TEXT_SENTINEL.to_string()
    } else {
        cleaned
    }
}

/// Render a failure as the error sentinel
pub fn error_sentinel(error: impl std::fmt::Display) -> String {
    format!("{}{}", ERROR_SENTINEL_PREFIX, error)
}

/// Whether a file name has an image extension (case-insensitive)
pub fn is_image_file(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
