//! Configuration for the SMTP relay

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Environment variable holding the sender address
pub const EMAIL_ADDRESS_VAR: &str = "EMAIL_ADDRESS";

/// Environment variable holding the sender app password
pub const EMAIL_PASSWORD_VAR: &str = "EMAIL_PASSWORD";

/// Sender address and app password
#[derive(Clone, PartialEq, Eq)]
pub struct SenderCredentials {
    /// Address used as `From` and as the SMTP login
    pub address: String,

    /// App password for the SMTP login
    pub password: String,
}

impl fmt::Debug for SenderCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SenderCredentials")
            .field("address", &self.address)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Settings for the mail relay
///
/// Credentials never come from a config file; they are read from the
/// environment with [`MailerConfig::with_env_credentials`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MailerConfig {
    /// Relay host
    pub smtp_host: String,

    /// Relay port; the session is upgraded with STARTTLS
    pub smtp_port: u16,

    /// Connection timeout (seconds); lettre's default if unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    #[serde(skip)]
    credentials: Option<SenderCredentials>,
}

impl MailerConfig {
    /// Default relay settings with credentials from the environment
    pub fn from_env() -> Self {
        Self::default().with_env_credentials()
    }

    /// Replace the credentials with `EMAIL_ADDRESS` / `EMAIL_PASSWORD`
    ///
    /// Either variable unset or blank leaves the config without credentials.
    pub fn with_env_credentials(self) -> Self {
        let address = std::env::var(EMAIL_ADDRESS_VAR).unwrap_or_default();
        let password = std::env::var(EMAIL_PASSWORD_VAR).unwrap_or_default();
        self.with_credentials(address, password)
    }

    /// Set the credentials explicitly; blank values clear them
    pub fn with_credentials(mut self, address: impl Into<String>, password: impl Into<String>) -> Self {
        let address = address.into();
        let password = password.into();
        self.credentials = if address.trim().is_empty() || password.is_empty() {
            None
        } else {
            Some(SenderCredentials {
                address: address.trim().to_string(),
                password,
            })
        };
        self
    }

    /// Configured credentials, if both parts are present
    pub fn credentials(&self) -> Option<&SenderCredentials> {
        self.credentials.as_ref()
    }

    /// Whether delivery can be attempted
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Get the connection timeout as a Duration, if one is set
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.smtp_host.trim().is_empty() {
            return Err("smtp_host must not be empty".to_string());
        }
        if self.smtp_port == 0 {
            return Err("smtp_port must be greater than 0".to_string());
        }
        if self.timeout_secs == Some(0) {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for MailerConfig {
    fn default() -> Self {
        Self {
            smtp_host: "smtp.gmail.com".to_string(),
            smtp_port: 587,
            timeout_secs: None,
            credentials: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_relay() {
        let config = MailerConfig::default();
        assert_eq!(config.smtp_host, "smtp.gmail.com");
        assert_eq!(config.smtp_port, 587);
        assert!(!config.has_credentials());
        assert_eq!(config.timeout(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_credentials_are_absent() {
        assert!(!MailerConfig::default().with_credentials("", "pw").has_credentials());
        assert!(!MailerConfig::default().with_credentials("me@example.com", "").has_credentials());
        assert!(MailerConfig::default().with_credentials("me@example.com", "pw").has_credentials());
    }

    #[test]
    fn test_password_is_redacted() {
        let config = MailerConfig::default().with_credentials("me@example.com", "hunter2");
        let debug = format!("{:?}", config);
        assert!(debug.contains("me@example.com"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_invalid_port() {
        let config = MailerConfig {
            smtp_port: 0,
            ..MailerConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
