//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use checkmate_grader::GraderConfig;
use checkmate_llm::gemini::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use checkmate_mailer::MailerConfig;
use checkmate_ocr::OcrConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// CLI configuration.
///
/// Secrets are not stored here: the API key comes from `--api-key` or
/// `GOOGLE_API_KEY`, mail credentials from `EMAIL_ADDRESS` and
/// `EMAIL_PASSWORD`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Model connection settings
    #[serde(default)]
    pub model: ModelSettings,

    /// Display settings
    #[serde(default)]
    pub settings: Settings,

    /// Grading pipeline settings
    #[serde(default)]
    pub grader: GraderConfig,

    /// OCR settings
    #[serde(default)]
    pub ocr: OcrConfig,

    /// Mail relay settings
    #[serde(default)]
    pub smtp: MailerConfig,
}

/// Generative model connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSettings {
    /// API endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// HTTP request timeout (seconds); the client default if unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Command history size
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl CliConfig {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        Ok(checkmate_dir()?.join("config.toml"))
    }

    /// Load configuration from `path`, or from the default path.
    ///
    /// A missing file yields the default configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_path()?,
        };

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let config: CliConfig = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path()?)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        if self.model.model.trim().is_empty() {
            return Err(CliError::Config("model must not be empty".into()));
        }
        if self.model.timeout_secs == Some(0) {
            return Err(CliError::Config("model timeout_secs must be greater than 0".into()));
        }
        self.grader
            .validate()
            .map_err(|e| CliError::Config(format!("grader: {}", e)))?;
        self.ocr
            .validate()
            .map_err(|e| CliError::Config(format!("ocr: {}", e)))?;
        self.smtp
            .validate()
            .map_err(|e| CliError::Config(format!("smtp: {}", e)))?;
        Ok(())
    }
}

impl ModelSettings {
    /// Get the request timeout as a Duration, if one is set
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            timeout_secs: None,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            history_size: 1000,
        }
    }
}

/// `~/.checkmate`
pub fn checkmate_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    Ok(home.join(".checkmate"))
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_history_size() -> usize {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.model.model, "gemini-2.0-flash-exp");
        assert_eq!(config.ocr.language, "kor+eng");
        assert_eq!(config.smtp.smtp_port, 587);
        assert!(config.settings.color);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_gives_default() {
        let dir = tempdir().unwrap();
        let config = CliConfig::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config.settings.format, OutputFormat::Table);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = CliConfig::default();
        config.model.model = "gemini-1.5-pro".to_string();
        config.settings.format = OutputFormat::Json;
        config.grader.unwrap_code_fences = true;
        config.save_to(&path).unwrap();

        let loaded = CliConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded.model.model, "gemini-1.5-pro");
        assert_eq!(loaded.settings.format, OutputFormat::Json);
        assert!(loaded.grader.unwrap_code_fences);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ocr]\nlanguage = \"eng\"\n").unwrap();

        let config = CliConfig::load(Some(&path)).unwrap();
        assert_eq!(config.ocr.language, "eng");
        assert_eq!(config.ocr.max_dimension, 2000);
        assert_eq!(config.model.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.model.timeout(), None);
        assert_eq!(config.grader.max_text_length, None);
    }

    #[test]
    fn test_model_timeout_is_opt_in() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[model]\ntimeout_secs = 45\n").unwrap();

        let config = CliConfig::load(Some(&path)).unwrap();
        assert_eq!(config.model.timeout(), Some(Duration::from_secs(45)));

        let mut config = CliConfig::default();
        config.model.timeout_secs = Some(0);
        assert!(matches!(config.validate(), Err(CliError::Config(_))));
    }

    #[test]
    fn test_invalid_section_rejected() {
        let mut config = CliConfig::default();
        config.grader.max_text_length = Some(0);
        assert!(matches!(config.validate(), Err(CliError::Config(_))));
    }
}
