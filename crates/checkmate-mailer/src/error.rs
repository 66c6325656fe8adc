//! Error types for report delivery

use thiserror::Error;

/// Errors raised while delivering a report
///
/// `Mailer::send` never returns these; it logs them and reports `false`.
#[derive(Error, Debug)]
pub enum MailError {
    /// Sender address or password is not configured
    #[error("Sender credentials are not configured (set EMAIL_ADDRESS and EMAIL_PASSWORD)")]
    MissingCredentials,

    /// A sender or recipient address could not be parsed
    #[error("Invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The message could not be assembled
    #[error("Failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    /// Connection, TLS, authentication or relay rejection
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}
