//! Compliance analysis: grade a submission against a requirement list

use crate::config::GraderConfig;
use crate::fallback::{call_failure_result, parse_failure_result};
use crate::invoke::call_llm;
use crate::parser::parse_analysis;
use crate::prompt::AnalysisPrompt;
use crate::types::AnalysisOutcome;
use checkmate_domain::{AnalysisResult, LlmProvider, RequirementList};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Grades a submission through the model
///
/// Always yields a structurally valid `AnalysisResult`:
/// 1. the model's JSON object, read verbatim
/// 2. a placeholder scored 70 per requirement if the answer is not JSON
/// 3. a zero-valued result if the model cannot be reached
pub struct ComplianceAnalyzer<L>
where
    L: LlmProvider,
{
    llm_provider: Arc<L>,
    config: GraderConfig,
}

impl<L> ComplianceAnalyzer<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create a new ComplianceAnalyzer
    pub fn new(llm_provider: L, config: GraderConfig) -> Self {
        Self::from_shared(Arc::new(llm_provider), config)
    }

    /// Create an analyzer over a provider shared with other stages
    pub fn from_shared(llm_provider: Arc<L>, config: GraderConfig) -> Self {
        Self {
            llm_provider,
            config,
        }
    }

    /// Analyze a submission, returning only the result
    pub async fn analyze(&self, requirements: &RequirementList, submission: &str) -> AnalysisResult {
        self.assess(requirements, submission).await.into_result()
    }

    /// Analyze a submission and report which tier produced the result
    pub async fn assess(&self, requirements: &RequirementList, submission: &str) -> AnalysisOutcome {
        let prompt = AnalysisPrompt::new(requirements, submission).build();
        debug!("Analysis prompt length: {} chars", prompt.len());

        let response = match call_llm(&self.llm_provider, prompt, self.config.llm_timeout()).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Compliance analysis failed: {}", e);
                return AnalysisOutcome::Unreachable(call_failure_result());
            }
        };

        debug!("Analysis response length: {} chars", response.len());

        match parse_analysis(&response, self.config.unwrap_code_fences) {
            Some(result) => {
                info!(
                    "Analysis graded: overall {}, {} entries",
                    result.overall_score,
                    result.requirements_analysis.len()
                );
                AnalysisOutcome::Graded(result)
            }
            None => {
                warn!("Analysis response was not a JSON object; using placeholder scores");
                AnalysisOutcome::Unparsed(parse_failure_result(requirements))
            }
        }
    }
}
