//! Session context - per-user state for one grading session

use crate::{AnalysisResult, RequirementList};
use std::fmt;

/// Unique identifier for a session based on UUIDv7
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionId(u128);

impl SessionId {
    /// Generate a new UUIDv7-based SessionId
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// Everything a single user has entered and produced
///
/// Passed explicitly to each pipeline stage. Lives only as long as the
/// owning process or REPL; nothing is written to disk.
///
/// Changing either input clears the derived state (requirements, result,
/// report) so a stale report can never be sent for new inputs.
#[derive(Debug, Clone, Default)]
pub struct Session {
    id: SessionId,
    api_key: Option<String>,
    requirements_text: String,
    submission_text: String,
    requirements: Option<RequirementList>,
    analysis: Option<AnalysisResult>,
    report: Option<String>,
}

impl Session {
    /// Start an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session with an API key already supplied
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        let mut session = Self::new();
        session.set_api_key(api_key);
        session
    }

    /// Session identifier
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Store the model API key; blank keys are treated as absent
    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        let key = api_key.into();
        self.api_key = if key.trim().is_empty() { None } else { Some(key) };
    }

    /// The model API key, if one was supplied
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Replace the raw requirement text
    pub fn set_requirements_text(&mut self, text: impl Into<String>) {
        self.requirements_text = text.into();
        self.clear_results();
    }

    /// Raw requirement text as entered
    pub fn requirements_text(&self) -> &str {
        &self.requirements_text
    }

    /// Replace the submission text
    pub fn set_submission_text(&mut self, text: impl Into<String>) {
        self.submission_text = text.into();
        self.clear_results();
    }

    /// Submission text as entered
    pub fn submission_text(&self) -> &str {
        &self.submission_text
    }

    /// True when both inputs contain non-whitespace text
    pub fn has_inputs(&self) -> bool {
        !self.requirements_text.trim().is_empty() && !self.submission_text.trim().is_empty()
    }

    /// Record the output of one completed analysis run
    pub fn record_analysis(
        &mut self,
        requirements: RequirementList,
        analysis: AnalysisResult,
        report: String,
    ) {
        self.requirements = Some(requirements);
        self.analysis = Some(analysis);
        self.report = Some(report);
    }

    /// Requirements extracted by the last run
    pub fn requirements(&self) -> Option<&RequirementList> {
        self.requirements.as_ref()
    }

    /// Analysis result of the last run
    pub fn analysis(&self) -> Option<&AnalysisResult> {
        self.analysis.as_ref()
    }

    /// Report of the last run
    pub fn report(&self) -> Option<&str> {
        self.report.as_deref()
    }

    /// Drop everything derived from the inputs
    pub fn clear_results(&mut self) {
        self.requirements = None;
        self.analysis = None;
        self.report = None;
    }

    /// Drop inputs and derived state; keeps the id and API key
    pub fn reset(&mut self) {
        self.requirements_text.clear();
        self.submission_text.clear();
        self.clear_results();
    }
}
