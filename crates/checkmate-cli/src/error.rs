//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Grading pipeline refused to run
    #[error("{0}")]
    Grader(#[from] checkmate_grader::GraderError),

    /// Model provider could not be set up
    #[error("{0}")]
    Llm(#[from] checkmate_llm::LlmError),

    /// Text could not be recognized in an image
    #[error("OCR failed: {0}")]
    Ocr(String),

    /// The report could not be mailed
    #[error("Email delivery failed: {0}")]
    Delivery(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Input type the CLI cannot read yet
    #[error("{0}")]
    Unsupported(String),

    /// A command needs analysis results that do not exist yet
    #[error("No analysis results yet. Run 'analyze' first.")]
    NoResults,
}
