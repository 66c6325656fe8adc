//! CheckMate Mailer
//!
//! Delivers compliance reports by email.
//!
//! The Markdown report is converted to a simple HTML page and handed to a
//! `MailTransport`. The default transport is an SMTP relay (Gmail on port
//! 587 with STARTTLS) authenticated with the sender address and app
//! password from `EMAIL_ADDRESS` and `EMAIL_PASSWORD`.
//!
//! Delivery reports success as a bool: missing credentials and every
//! transport failure come back as `false`.
//!
//! # Example
//!
//! ```no_run
//! use checkmate_mailer::{validate_email, Mailer, MailerConfig};
//!
//! let mailer = Mailer::smtp(MailerConfig::from_env());
//! let to = "student@example.com";
//! if validate_email(to) && mailer.send_report(to, "# Assignment Compliance Report") {
//!     println!("sent");
//! }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod html;
mod mailer;
mod smtp;
mod validate;

pub use config::{MailerConfig, SenderCredentials, EMAIL_ADDRESS_VAR, EMAIL_PASSWORD_VAR};
pub use error::MailError;
pub use html::{render_html, HTML_FOOTER, HTML_HEADER};
pub use mailer::{setup_instructions, Mailer, DEFAULT_SUBJECT};
pub use smtp::SmtpRelay;
pub use validate::validate_email;
