//! Delivery through an SMTP relay with STARTTLS

use crate::config::MailerConfig;
use crate::error::MailError;
use checkmate_domain::{MailTransport, OutgoingMail};
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::debug;

/// Sends mail through the relay in a `MailerConfig`
///
/// Each delivery opens its own authenticated session; nothing is pooled.
#[derive(Debug, Clone)]
pub struct SmtpRelay {
    config: MailerConfig,
}

impl SmtpRelay {
    /// Create a new SmtpRelay
    pub fn new(config: MailerConfig) -> Self {
        Self { config }
    }

    fn build_message(mail: &OutgoingMail) -> Result<Message, MailError> {
        let message = Message::builder()
            .from(mail.from.parse()?)
            .to(mail.to.parse()?)
            .subject(mail.subject.as_str())
            .header(ContentType::TEXT_HTML)
            .body(mail.html_body.clone())?;
        Ok(message)
    }
}

impl MailTransport for SmtpRelay {
    type Error = MailError;

    fn deliver(&self, mail: &OutgoingMail) -> Result<(), Self::Error> {
        let credentials = self
            .config
            .credentials()
            .ok_or(MailError::MissingCredentials)?;

        let message = Self::build_message(mail)?;

        let mut builder = SmtpTransport::starttls_relay(&self.config.smtp_host)?
            .port(self.config.smtp_port)
            .credentials(Credentials::new(
                credentials.address.clone(),
                credentials.password.clone(),
            ));
        if let Some(timeout) = self.config.timeout() {
            builder = builder.timeout(Some(timeout));
        }
        let transport = builder.build();

        debug!(
            "Sending mail via {}:{}",
            self.config.smtp_host, self.config.smtp_port
        );
        transport.send(&message)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mail(to: &str) -> OutgoingMail {
        OutgoingMail {
            from: "sender@example.com".to_string(),
            to: to.to_string(),
            subject: "Assignment Compliance Report".to_string(),
            html_body: "<p>report</p>".to_string(),
        }
    }

    #[test]
    fn test_message_builds() {
        assert!(SmtpRelay::build_message(&mail("student@example.com")).is_ok());
    }

    #[test]
    fn test_bad_recipient_rejected() {
        let result = SmtpRelay::build_message(&mail("not-an-email"));
        assert!(matches!(result, Err(MailError::Address(_))));
    }

    #[test]
    fn test_missing_credentials_rejected_before_connecting() {
        let relay = SmtpRelay::new(MailerConfig::default());
        let result = relay.deliver(&mail("student@example.com"));
        assert!(matches!(result, Err(MailError::MissingCredentials)));
    }
}
