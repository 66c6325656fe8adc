//! Configuration for the grader

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for requirement extraction and compliance analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraderConfig {
    /// Maximum length of either input text (characters); unlimited if unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_text_length: Option<usize>,

    /// Maximum time for a single model call (seconds); unbounded if unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llm_timeout_secs: Option<u64>,

    /// Unwrap a Markdown code fence around the model's JSON before parsing
    pub unwrap_code_fences: bool,
}

impl GraderConfig {
    /// Get the model call timeout as a Duration, if one is set
    pub fn llm_timeout(&self) -> Option<Duration> {
        self.llm_timeout_secs.map(Duration::from_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_text_length == Some(0) {
            return Err("max_text_length must be greater than 0".to_string());
        }
        if self.llm_timeout_secs == Some(0) {
            return Err("llm_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for GraderConfig {
    fn default() -> Self {
        Self {
            max_text_length: None,
            llm_timeout_secs: None,
            unwrap_code_fences: false,
        }
    }
}
