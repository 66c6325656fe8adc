//! Image bytes to cleaned text

use crate::config::OcrConfig;
use crate::error::OcrError;
use crate::preprocess::preprocess;
use crate::tesseract::TesseractCli;
use crate::text::{clean_text, error_sentinel};
use checkmate_domain::TextRecognizer;
use image::ImageFormat;
use tracing::{debug, warn};

/// Extracts text from uploaded images through a recognizer
///
/// The image is decoded, preprocessed and written to a temporary PNG which
/// the recognizer reads. The temporary file is removed when recognition ends.
pub struct TextExtractor<R>
where
    R: TextRecognizer,
{
    recognizer: R,
    config: OcrConfig,
}

impl TextExtractor<TesseractCli> {
    /// Extractor backed by the tesseract binary named in the config
    pub fn tesseract(config: OcrConfig) -> Self {
        let recognizer = TesseractCli::new(config.tesseract_path.clone());
        Self::new(recognizer, config)
    }
}

impl<R> TextExtractor<R>
where
    R: TextRecognizer,
    R::Error: std::fmt::Display,
{
    /// Create a new TextExtractor
    pub fn new(recognizer: R, config: OcrConfig) -> Self {
        Self { recognizer, config }
    }

    /// The recognizer in use
    pub fn recognizer(&self) -> &R {
        &self.recognizer
    }

    /// Extract cleaned text from encoded image bytes
    ///
    /// Never fails: an empty recognition yields the no-text sentinel and any
    /// error yields the error sentinel, so the result can be shown directly.
    pub fn extract(&self, bytes: &[u8]) -> String {
        match self.try_extract(bytes) {
            Ok(text) => text,
            Err(e) => {
                warn!("Text extraction failed: {}", e);
                error_sentinel(e)
            }
        }
    }

    /// Extract cleaned text, surfacing failures as errors
    pub fn try_extract(&self, bytes: &[u8]) -> Result<String, OcrError> {
        let image = image::load_from_memory(bytes)?;
        let image = preprocess(image, &self.config);

        let file = tempfile::Builder::new()
            .prefix("checkmate-ocr-")
            .suffix(".png")
            .tempfile()?;
        image.save_with_format(file.path(), ImageFormat::Png)?;

        let raw = self
            .recognizer
            .recognize(file.path(), &self.config.language)
            .map_err(|e| OcrError::Recognizer(e.to_string()))?;
        debug!("Recognized {} chars", raw.len());

        Ok(clean_text(&raw))
    }
}
