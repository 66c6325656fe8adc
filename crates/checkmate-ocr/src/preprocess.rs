//! Image preparation before recognition

use crate::config::OcrConfig;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use tracing::debug;

/// Normalize an image for the OCR engine
///
/// Converts to RGB8, then rescales with Lanczos3 when a side is out of
/// bounds: an image with either side above `max_dimension` is shrunk by
/// `min(max/w, max/h)`, otherwise one with either side below
/// `min_dimension` is enlarged by `max(min/w, min/h)`. Aspect ratio is kept
/// and new dimensions are truncated, never below one pixel.
pub fn preprocess(image: DynamicImage, config: &OcrConfig) -> DynamicImage {
    let image = DynamicImage::ImageRgb8(image.to_rgb8());
    let (width, height) = image.dimensions();

    if width == 0 || height == 0 {
        return image;
    }

    let (w, h) = (width as f64, height as f64);
    let max = config.max_dimension as f64;
    let min = config.min_dimension as f64;

    let ratio = if width > config.max_dimension || height > config.max_dimension {
        (max / w).min(max / h)
    } else if width < config.min_dimension || height < config.min_dimension {
        (min / w).max(min / h)
    } else {
        return image;
    };

    let new_width = ((w * ratio) as u32).max(1);
    let new_height = ((h * ratio) as u32).max(1);
    debug!(
        "Resizing image from {}x{} to {}x{}",
        width, height, new_width, new_height
    );

    image.resize_exact(new_width, new_height, FilterType::Lanczos3)
}
