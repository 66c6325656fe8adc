//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the grading pipeline and the
//! three external services it delegates to. Infrastructure implementations
//! live in other crates.

use std::path::Path;

/// Trait for language model operations
///
/// Implemented by the infrastructure layer (checkmate-llm)
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Generate a text completion for the prompt
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;
}

/// Trait for optical character recognition
///
/// Implemented by the infrastructure layer (checkmate-ocr)
pub trait TextRecognizer {
    /// Error type for recognition
    type Error;

    /// Recognize text in the image stored at `image_path`
    ///
    /// `language` uses the engine's language hint syntax, e.g. `kor+eng`.
    fn recognize(&self, image_path: &Path, language: &str) -> Result<String, Self::Error>;
}

/// A fully rendered message ready for transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    /// Sender address
    pub from: String,

    /// Recipient address
    pub to: String,

    /// Subject line
    pub subject: String,

    /// HTML document body
    pub html_body: String,
}

/// Trait for mail delivery
///
/// Implemented by the infrastructure layer (checkmate-mailer)
pub trait MailTransport {
    /// Error type for delivery
    type Error;

    /// Hand a message to the relay
    fn deliver(&self, mail: &OutgoingMail) -> Result<(), Self::Error>;
}
