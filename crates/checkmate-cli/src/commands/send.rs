//! Send command implementation.

use crate::cli::SendArgs;
use crate::commands::analyze::session_from_inputs;
use crate::context::{outcome_notice, AppContext};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use checkmate_mailer::{setup_instructions, validate_email, Mailer, SmtpRelay};

/// Execute the send command.
///
/// The recipient is checked before any model call is made.
pub async fn execute_send(args: SendArgs, ctx: &AppContext, formatter: &Formatter) -> Result<()> {
    validate_recipient(&args.to)?;

    let mut session = session_from_inputs(ctx, &args.requirements, &args.submission)?;

    let outcome = ctx.analyze(&mut session).await?;
    if let Some(notice) = outcome_notice(&outcome) {
        eprintln!("{}", formatter.warning(notice));
    }

    let report = session.report().ok_or(CliError::NoResults)?;
    deliver_report(ctx.mailer(), formatter, &args.to, &args.subject, report, args.preview).await
}

/// Reject an empty or malformed recipient address.
pub fn validate_recipient(to: &str) -> Result<()> {
    if to.trim().is_empty() {
        return Err(CliError::InvalidInput("Enter a recipient email address".to_string()));
    }
    if !validate_email(to) {
        return Err(CliError::InvalidInput(format!("'{}' is not a valid email address", to)));
    }
    Ok(())
}

/// Preview or send a report.
///
/// The SMTP session blocks, so delivery runs via `spawn_blocking`.
pub async fn deliver_report(
    mailer: Mailer<SmtpRelay>,
    formatter: &Formatter,
    to: &str,
    subject: &str,
    report: &str,
    preview: bool,
) -> Result<()> {
    if preview {
        println!("Subject: {}", subject);
        println!("To: {}", to);
        println!();
        println!("{}", report);
        return Ok(());
    }

    if !mailer.is_configured() {
        eprintln!("{}", formatter.warning("Email sending is not configured."));
        eprintln!("{}", setup_instructions());
        return Err(CliError::Delivery("sender credentials are not configured".to_string()));
    }

    let recipient = to.to_string();
    let body = report.to_string();
    let subject = subject.to_string();
    let sent = tokio::task::spawn_blocking(move || mailer.send(&recipient, &body, &subject))
        .await
        .map_err(|e| CliError::Delivery(format!("mail task failed: {}", e)))?;

    if sent {
        println!("{}", formatter.success(&format!("Report sent to {}", to)));
        Ok(())
    } else {
        Err(CliError::Delivery("check the mail settings and try again".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use checkmate_mailer::MailerConfig;

    #[test]
    fn test_validate_recipient() {
        assert!(validate_recipient("student@example.com").is_ok());
        assert!(matches!(validate_recipient(""), Err(CliError::InvalidInput(_))));
        assert!(matches!(validate_recipient("not-an-email"), Err(CliError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_unconfigured_mailer_fails_without_sending() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let mailer = Mailer::smtp(MailerConfig::default());

        let result =
            deliver_report(mailer, &formatter, "student@example.com", "Subject", "report", false).await;
        assert!(matches!(result, Err(CliError::Delivery(_))));
    }

    #[tokio::test]
    async fn test_relay_failure_reported_from_worker() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let mut config = MailerConfig::default();
        config.smtp_host = "127.0.0.1".to_string();
        config.smtp_port = 1;
        config.timeout_secs = Some(1);
        let config = config.with_credentials("me@example.com", "app-password");
        let mailer = Mailer::smtp(config);

        let result =
            deliver_report(mailer, &formatter, "student@example.com", "Subject", "report", false).await;
        assert!(matches!(result, Err(CliError::Delivery(_))));
    }

    #[tokio::test]
    async fn test_preview_does_not_need_credentials() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let mailer = Mailer::smtp(MailerConfig::default());

        let result =
            deliver_report(mailer, &formatter, "student@example.com", "Subject", "report", true).await;
        assert!(result.is_ok());
    }
}
