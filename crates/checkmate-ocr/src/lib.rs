//! CheckMate OCR
//!
//! Extracts text from images of assignment requirements or submissions.
//!
//! Recognition is delegated to an engine behind the `TextRecognizer` trait;
//! the default is the `tesseract` command line tool configured for mixed
//! Korean and English text. This crate prepares the image (RGB conversion
//! and resizing into a range the engine reads well) and cleans up the
//! engine's output.
//!
//! `TextExtractor::extract` never fails. Callers can tell the outcomes apart
//! by comparing against [`NO_TEXT_SENTINEL`] and [`ERROR_SENTINEL_PREFIX`].
//!
//! # Example
//!
//! ```no_run
//! use checkmate_ocr::{OcrConfig, TextExtractor};
//!
//! let bytes = std::fs::read("requirements.png").unwrap();
//! let extractor = TextExtractor::tesseract(OcrConfig::default());
//! println!("{}", extractor.extract(&bytes));
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod preprocess;
mod tesseract;
mod text;

pub use config::OcrConfig;
pub use error::OcrError;
pub use extractor::TextExtractor;
pub use preprocess::preprocess;
pub use tesseract::TesseractCli;
pub use text::{clean_text, error_sentinel, is_image_file, ERROR_SENTINEL_PREFIX, IMAGE_EXTENSIONS, NO_TEXT_SENTINEL};
