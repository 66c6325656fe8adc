//! Requirement extraction: free-form requirement text to a requirement list

use crate::config::GraderConfig;
use crate::invoke::call_llm;
use crate::parser::{parse_requirements, RequirementParse};
use crate::prompt::RequirementPrompt;
use crate::types::RequirementOutcome;
use checkmate_domain::{LlmProvider, RequirementList};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Turns raw requirement text into an ordered list of requirements
pub struct RequirementExtractor<L>
where
    L: LlmProvider,
{
    llm_provider: Arc<L>,
    config: GraderConfig,
}

impl<L> RequirementExtractor<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create a new RequirementExtractor
    pub fn new(llm_provider: L, config: GraderConfig) -> Self {
        Self::from_shared(Arc::new(llm_provider), config)
    }

    /// Create an extractor over a provider shared with other stages
    pub fn from_shared(llm_provider: Arc<L>, config: GraderConfig) -> Self {
        Self {
            llm_provider,
            config,
        }
    }

    /// Extract requirements from text
    ///
    /// An empty list means the model could not be reached.
    pub async fn extract(&self, raw_text: &str) -> RequirementList {
        self.extract_with_source(raw_text).await.into_requirements()
    }

    /// Extract requirements and report which parsing tier produced them
    pub async fn extract_with_source(&self, raw_text: &str) -> RequirementOutcome {
        let prompt = RequirementPrompt::new(raw_text).build();
        debug!("Requirement prompt length: {} chars", prompt.len());

        let response = match call_llm(&self.llm_provider, prompt, self.config.llm_timeout()).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Requirement extraction failed: {}", e);
                return RequirementOutcome::Failed;
            }
        };

        debug!("Requirement response length: {} chars", response.len());

        match parse_requirements(&response, self.config.unwrap_code_fences) {
            RequirementParse::Json(items) => {
                info!("Extracted {} requirements from JSON", items.len());
                RequirementOutcome::Parsed(items.into())
            }
            RequirementParse::Lines(items) => {
                info!("Response was not a JSON array; split into {} lines", items.len());
                RequirementOutcome::Heuristic(items.into())
            }
        }
    }
}
