//! Loading requirement and submission text from the command line.

use crate::error::{CliError, Result};
use checkmate_domain::TextRecognizer;
use checkmate_ocr::{is_image_file, TextExtractor, ERROR_SENTINEL_PREFIX, NO_TEXT_SENTINEL};
use std::fs;
use std::path::{Path, PathBuf};

/// One of the three ways to supply text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Text given directly
    Text(String),
    /// Image read with OCR
    Image(PathBuf),
    /// Uploaded text file
    File(PathBuf),
}

impl InputSource {
    /// Pick the first source that was given.
    pub fn from_parts(text: Option<String>, image: Option<PathBuf>, file: Option<PathBuf>) -> Option<Self> {
        text.map(InputSource::Text)
            .or_else(|| image.map(InputSource::Image))
            .or_else(|| file.map(InputSource::File))
    }

    /// Load the text, failing when OCR found nothing or the file type is unsupported.
    pub fn load<R>(&self, extractor: &TextExtractor<R>) -> Result<String>
    where
        R: TextRecognizer,
        R::Error: std::fmt::Display,
    {
        match self {
            InputSource::Text(text) => Ok(text.clone()),
            InputSource::File(path) => read_text_file(path),
            InputSource::Image(path) => {
                let text = recognize_image(path, extractor)?;
                if text.starts_with(ERROR_SENTINEL_PREFIX) || text == NO_TEXT_SENTINEL {
                    return Err(CliError::Ocr(text));
                }
                Ok(text)
            }
        }
    }
}

/// Read an uploaded text file; only `.txt` is supported.
pub fn read_text_file(path: &Path) -> Result<String> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    if extension != "txt" {
        return Err(CliError::Unsupported(format!(
            "'{}': only .txt files are supported for now; other formats are not yet supported",
            path.display()
        )));
    }

    Ok(fs::read_to_string(path)?)
}

/// Run OCR on an image file and return the extractor's text as-is.
///
/// The text may be one of the OCR sentinels.
pub fn recognize_image<R>(path: &Path, extractor: &TextExtractor<R>) -> Result<String>
where
    R: TextRecognizer,
    R::Error: std::fmt::Display,
{
    let name = path.to_string_lossy();
    if !is_image_file(&name) {
        return Err(CliError::InvalidInput(format!(
            "'{}' is not an image (expected png, jpg, jpeg, gif, bmp, tiff or webp)",
            name
        )));
    }

    let bytes = fs::read(path)?;
    Ok(extractor.extract(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkmate_ocr::OcrConfig;
    use tempfile::tempdir;

    struct NoRecognizer;

    impl TextRecognizer for NoRecognizer {
        type Error = String;

        fn recognize(&self, _image_path: &Path, _language: &str) -> std::result::Result<String, String> {
            Err("recognizer should not be called".to_string())
        }
    }

    fn extractor() -> TextExtractor<NoRecognizer> {
        TextExtractor::new(NoRecognizer, OcrConfig::default())
    }

    #[test]
    fn test_text_source() {
        let source = InputSource::Text("Write 3 pages".to_string());
        assert_eq!(source.load(&extractor()).unwrap(), "Write 3 pages");
    }

    #[test]
    fn test_txt_file_is_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("requirements.TXT");
        fs::write(&path, "1. Three pages\n2. Five sources\n").unwrap();

        let text = InputSource::File(path).load(&extractor()).unwrap();
        assert_eq!(text, "1. Three pages\n2. Five sources\n");
    }

    #[test]
    fn test_other_file_types_not_yet_supported() {
        let dir = tempdir().unwrap();
        for name in ["essay.pdf", "essay.docx", "essay"] {
            let path = dir.path().join(name);
            fs::write(&path, "content").unwrap();

            match read_text_file(&path) {
                Err(CliError::Unsupported(message)) => assert!(message.contains("not yet supported")),
                other => panic!("Expected Unsupported for {}, got {:?}", name, other),
            }
        }
    }

    #[test]
    fn test_non_image_rejected_for_ocr() {
        let result = recognize_image(Path::new("notes.txt"), &extractor());
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_unreadable_image_is_ocr_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scan.png");
        fs::write(&path, b"not really a png").unwrap();

        let result = InputSource::Image(path).load(&extractor());
        assert!(matches!(result, Err(CliError::Ocr(_))));
    }

    #[test]
    fn test_from_parts_prefers_text() {
        let source = InputSource::from_parts(None, Some(PathBuf::from("a.png")), None);
        assert_eq!(source, Some(InputSource::Image(PathBuf::from("a.png"))));
        assert_eq!(InputSource::from_parts(None, None, None), None);
    }
}
