//! Report delivery with a boolean outcome

use crate::config::MailerConfig;
use crate::html::render_html;
use crate::smtp::SmtpRelay;
use checkmate_domain::{MailTransport, OutgoingMail};
use tracing::{info, warn};

/// Subject used when the caller gives none
pub const DEFAULT_SUBJECT: &str = "Assignment Compliance Report";

/// Sends reports by mail and reports success as a bool
pub struct Mailer<T>
where
    T: MailTransport,
{
    transport: T,
    config: MailerConfig,
}

impl Mailer<SmtpRelay> {
    /// Mailer that delivers through the SMTP relay in `config`
    pub fn smtp(config: MailerConfig) -> Self {
        Self::new(SmtpRelay::new(config.clone()), config)
    }
}

impl<T> Mailer<T>
where
    T: MailTransport,
    T::Error: std::fmt::Display,
{
    /// Create a new Mailer
    pub fn new(transport: T, config: MailerConfig) -> Self {
        Self { transport, config }
    }

    /// Whether sender credentials are configured
    pub fn is_configured(&self) -> bool {
        self.config.has_credentials()
    }

    /// Send a Markdown report to `recipient` as an HTML mail
    ///
    /// Returns `false` without touching the transport when sender
    /// credentials are absent, and `false` when the transport fails.
    /// Never panics or returns an error.
    pub fn send(&self, recipient: &str, report: &str, subject: &str) -> bool {
        let Some(credentials) = self.config.credentials() else {
            warn!("Mail not sent: sender credentials are not configured");
            return false;
        };

        let mail = OutgoingMail {
            from: credentials.address.clone(),
            to: recipient.to_string(),
            subject: subject.to_string(),
            html_body: render_html(report),
        };

        match self.transport.deliver(&mail) {
            Ok(()) => {
                info!("Report sent to {}", recipient);
                true
            }
            Err(e) => {
                warn!("Failed to send report to {}: {}", recipient, e);
                false
            }
        }
    }

    /// Send with [`DEFAULT_SUBJECT`]
    pub fn send_report(&self, recipient: &str, report: &str) -> bool {
        self.send(recipient, report, DEFAULT_SUBJECT)
    }
}

/// How to configure sender credentials for the Gmail relay
pub fn setup_instructions() -> &'static str {
    "To send reports by email, configure a sender account:

1. Turn on 2-Step Verification for the Gmail account.
2. Create an app password:
   Google Account -> Security -> 2-Step Verification -> App passwords
3. Add these lines to a .env file in the working directory
   (or export them in the shell):
   EMAIL_ADDRESS=your_email@gmail.com
   EMAIL_PASSWORD=your_app_password
"
}
