//! Shared state for command execution.

use crate::config::CliConfig;
use crate::error::{CliError, Result};
use checkmate_domain::Session;
use checkmate_grader::{AnalysisOutcome, GraderError, GradingPipeline};
use checkmate_llm::GeminiProvider;
use checkmate_mailer::{Mailer, SmtpRelay};
use checkmate_ocr::{TesseractCli, TextExtractor};
use tracing::warn;

/// Configuration plus the API key resolved from the command line or environment.
pub struct AppContext {
    /// Loaded configuration
    pub config: CliConfig,
    api_key: Option<String>,
}

impl AppContext {
    /// Create a new context; a blank key counts as absent.
    pub fn new(config: CliConfig, api_key: Option<String>) -> Self {
        let api_key = api_key.filter(|key| !key.trim().is_empty());
        Self { config, api_key }
    }

    /// The configured API key.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// A fresh session carrying the API key.
    pub fn new_session(&self) -> Session {
        let mut session = Session::new();
        if let Some(key) = &self.api_key {
            session.set_api_key(key.clone());
        }
        session
    }

    /// OCR extractor backed by tesseract.
    pub fn text_extractor(&self) -> TextExtractor<TesseractCli> {
        TextExtractor::tesseract(self.config.ocr.clone())
    }

    /// Mailer with credentials from the environment.
    pub fn mailer(&self) -> Mailer<SmtpRelay> {
        Mailer::smtp(self.config.smtp.clone().with_env_credentials())
    }

    /// Grading pipeline for the model in the configuration.
    pub fn pipeline(&self, api_key: &str) -> Result<GradingPipeline<GeminiProvider>> {
        let model = &self.config.model;
        let provider = GeminiProvider::with_settings(
            model.endpoint.clone(),
            model.model.clone(),
            api_key,
            model.timeout(),
        )?;
        Ok(GradingPipeline::new(provider, self.config.grader.clone()))
    }

    /// Grade the session's inputs, storing the results in the session.
    ///
    /// Checks inputs before the API key so the messages come in the
    /// order a user would fix them.
    pub async fn analyze(&self, session: &mut Session) -> Result<AnalysisOutcome> {
        if !session.has_inputs() {
            return Err(GraderError::MissingInput(
                "enter both the requirements and the submission".to_string(),
            )
            .into());
        }
        let api_key = session
            .api_key()
            .map(str::to_string)
            .ok_or(CliError::Grader(GraderError::MissingApiKey))?;

        let outcome = self.pipeline(&api_key)?.run(session).await?;
        match &outcome {
            AnalysisOutcome::Graded(_) => {}
            AnalysisOutcome::Unparsed(_) => {
                warn!("Model answer was not valid JSON; placeholder scores were used")
            }
            AnalysisOutcome::Unreachable(_) => warn!("Model could not be reached during analysis"),
        }
        Ok(outcome)
    }
}

/// Human-readable note for a degraded outcome, if any.
pub fn outcome_notice(outcome: &AnalysisOutcome) -> Option<&'static str> {
    match outcome {
        AnalysisOutcome::Graded(_) => None,
        AnalysisOutcome::Unparsed(_) => {
            Some("The model's answer could not be parsed; scores below are placeholders.")
        }
        AnalysisOutcome::Unreachable(_) => {
            Some("The model could not be reached during analysis; results are empty.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkmate_domain::AnalysisResult;

    #[test]
    fn test_blank_api_key_is_absent() {
        let ctx = AppContext::new(CliConfig::default(), Some("  ".to_string()));
        assert!(ctx.api_key().is_none());
        assert!(ctx.new_session().api_key().is_none());
    }

    #[test]
    fn test_session_carries_key() {
        let ctx = AppContext::new(CliConfig::default(), Some("key".to_string()));
        assert_eq!(ctx.new_session().api_key(), Some("key"));
    }

    #[tokio::test]
    async fn test_analyze_requires_inputs_first() {
        let ctx = AppContext::new(CliConfig::default(), None);
        let mut session = ctx.new_session();

        let result = ctx.analyze(&mut session).await;
        assert!(matches!(result, Err(CliError::Grader(GraderError::MissingInput(_)))));
    }

    #[tokio::test]
    async fn test_analyze_requires_api_key() {
        let ctx = AppContext::new(CliConfig::default(), None);
        let mut session = ctx.new_session();
        session.set_requirements_text("1. Three pages");
        session.set_submission_text("My essay");

        let result = ctx.analyze(&mut session).await;
        assert!(matches!(result, Err(CliError::Grader(GraderError::MissingApiKey))));
    }

    #[test]
    fn test_outcome_notices() {
        assert!(outcome_notice(&AnalysisOutcome::Graded(AnalysisResult::default())).is_none());
        assert!(outcome_notice(&AnalysisOutcome::Unparsed(AnalysisResult::default())).is_some());
        assert!(outcome_notice(&AnalysisOutcome::Unreachable(AnalysisResult::default())).is_some());
    }
}
