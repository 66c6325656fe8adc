//! The full grading run over a session

use crate::analyzer::ComplianceAnalyzer;
use crate::config::GraderConfig;
use crate::error::GraderError;
use crate::report::format_report;
use crate::requirements::RequirementExtractor;
use crate::types::AnalysisOutcome;
use checkmate_domain::{LlmProvider, Session};
use std::sync::Arc;
use tracing::info;

/// Extract, analyze and report, storing every output in the session
pub struct GradingPipeline<L>
where
    L: LlmProvider,
{
    extractor: RequirementExtractor<L>,
    analyzer: ComplianceAnalyzer<L>,
    config: GraderConfig,
}

impl<L> GradingPipeline<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create a pipeline whose stages share one provider
    pub fn new(llm_provider: L, config: GraderConfig) -> Self {
        let llm_provider = Arc::new(llm_provider);
        Self {
            extractor: RequirementExtractor::from_shared(Arc::clone(&llm_provider), config.clone()),
            analyzer: ComplianceAnalyzer::from_shared(llm_provider, config.clone()),
            config,
        }
    }

    /// The requirement extraction stage
    pub fn extractor(&self) -> &RequirementExtractor<L> {
        &self.extractor
    }

    /// The compliance analysis stage
    pub fn analyzer(&self) -> &ComplianceAnalyzer<L> {
        &self.analyzer
    }

    /// Run a full analysis over the session's inputs
    ///
    /// Refuses, before any model call, when an input is blank, longer than
    /// a configured `max_text_length`, or the session has no API key. Refuses after extraction when no
    /// requirements came back. Otherwise stores the requirements, the
    /// result and its report in the session and returns the tagged outcome.
    pub async fn run(&self, session: &mut Session) -> Result<AnalysisOutcome, GraderError> {
        if session.requirements_text().trim().is_empty() {
            return Err(GraderError::MissingInput("requirement text is empty".to_string()));
        }
        if session.submission_text().trim().is_empty() {
            return Err(GraderError::MissingInput("submission text is empty".to_string()));
        }
        self.check_length(session.requirements_text())?;
        self.check_length(session.submission_text())?;

        if session.api_key().is_none() {
            return Err(GraderError::MissingApiKey);
        }

        info!("Session {}: extracting requirements", session.id());
        let requirements = self.extractor.extract(session.requirements_text()).await;
        if requirements.is_empty() {
            return Err(GraderError::NoRequirements);
        }

        info!(
            "Session {}: analyzing submission against {} requirements",
            session.id(),
            requirements.len()
        );
        let outcome = self
            .analyzer
            .assess(&requirements, session.submission_text())
            .await;

        let report = format_report(outcome.result());
        session.record_analysis(requirements, outcome.result().clone(), report);

        info!("Session {}: analysis complete ({})", session.id(), outcome.label());
        Ok(outcome)
    }

    fn check_length(&self, text: &str) -> Result<(), GraderError> {
        let Some(max) = self.config.max_text_length else {
            return Ok(());
        };
        let length = text.chars().count();
        if length > max {
            return Err(GraderError::TextTooLong(length, max));
        }
        Ok(())
    }
}
