//! Configuration for text recognition

use serde::{Deserialize, Serialize};

/// Settings for the OCR engine and image preprocessing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Path to the tesseract binary; a bare name is looked up on PATH
    pub tesseract_path: String,

    /// Language hint passed to the engine
    pub language: String,

    /// Images with a side longer than this are scaled down (pixels)
    pub max_dimension: u32,

    /// Images with a side shorter than this are scaled up (pixels)
    pub min_dimension: u32,
}

impl OcrConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.tesseract_path.trim().is_empty() {
            return Err("tesseract_path must not be empty".to_string());
        }
        if self.language.trim().is_empty() {
            return Err("language must not be empty".to_string());
        }
        if self.min_dimension == 0 {
            return Err("min_dimension must be greater than 0".to_string());
        }
        if self.min_dimension >= self.max_dimension {
            return Err("min_dimension must be less than max_dimension".to_string());
        }
        Ok(())
    }
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            tesseract_path: "tesseract".to_string(),
            language: "kor+eng".to_string(),
            max_dimension: 2000,
            min_dimension: 300,
        }
    }
}
