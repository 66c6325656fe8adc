//! Recognition through the tesseract command line tool

use crate::error::OcrError;
use checkmate_domain::TextRecognizer;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Runs `tesseract <image> stdout -l <language>` for each recognition
#[derive(Debug, Clone)]
pub struct TesseractCli {
    binary: String,
}

impl TesseractCli {
    /// Use the binary at `binary`; a bare name is looked up on PATH
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Whether the binary can be started
    pub fn is_available(&self) -> bool {
        Command::new(&self.binary)
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }
}

impl Default for TesseractCli {
    fn default() -> Self {
        Self::new("tesseract")
    }
}

impl TextRecognizer for TesseractCli {
    type Error = OcrError;

    fn recognize(&self, image_path: &Path, language: &str) -> Result<String, Self::Error> {
        debug!("Running {} on {}", self.binary, image_path.display());

        let output = Command::new(&self.binary)
            .arg(image_path.as_os_str())
            .arg("stdout")
            .arg("-l")
            .arg(language)
            .output()
            .map_err(|source| OcrError::Launch {
                path: self.binary.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(OcrError::Engine {
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
