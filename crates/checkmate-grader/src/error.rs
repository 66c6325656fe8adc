//! Error types for the grading pipeline

use thiserror::Error;

/// Errors that stop the grading pipeline before or between model calls
///
/// The extractor and analyzer never return these to their callers; they
/// convert model failures into fallback values. Only `GradingPipeline`
/// surfaces them, for conditions the user must fix.
#[derive(Error, Debug)]
pub enum GraderError {
    /// Requirement text or submission text is blank
    #[error("Missing input: {0}")]
    MissingInput(String),

    /// No model API key in the session
    #[error("API key is not configured")]
    MissingApiKey,

    /// The extractor returned an empty list
    #[error("No requirements could be extracted; check the requirement text")]
    NoRequirements,

    /// Text exceeds maximum length
    #[error("Text too long: {0} chars (max: {1})")]
    TextTooLong(usize, usize),

    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// LLM call did not finish in time
    #[error("LLM call timed out")]
    Timeout,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
