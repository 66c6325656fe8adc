//! Deterministic placeholder results for degraded analysis runs

use checkmate_domain::{AnalysisResult, RequirementAnalysis, RequirementList};

/// Score assigned everywhere when the model's answer could not be parsed
pub const PARSE_FAILURE_SCORE: i64 = 70;

const PARSE_FAILURE_FEEDBACK: &str = "Meets the basic requirement.";
const PARSE_FAILURE_SUGGESTION: &str = "Add more specific content.";
const PARSE_FAILURE_GENERAL: &str =
    "The submission generally meets the requirements, but there is room for improvement.";
const PARSE_FAILURE_IMPROVEMENTS: [&str; 2] =
    ["Add more concrete examples.", "Improve the logical structure."];

const CALL_FAILURE_GENERAL: &str = "An error occurred during analysis.";

/// Result used when the model answered but not with a JSON object
///
/// One satisfied entry per requirement, each scored [`PARSE_FAILURE_SCORE`].
pub fn parse_failure_result(requirements: &RequirementList) -> AnalysisResult {
    AnalysisResult {
        overall_score: PARSE_FAILURE_SCORE,
        requirements_analysis: requirements
            .iter()
            .map(|req| RequirementAnalysis {
                requirement: req.clone(),
                satisfied: true,
                score: PARSE_FAILURE_SCORE,
                feedback: PARSE_FAILURE_FEEDBACK.to_string(),
                suggestions: vec![PARSE_FAILURE_SUGGESTION.to_string()],
            })
            .collect(),
        general_feedback: PARSE_FAILURE_GENERAL.to_string(),
        improvement_suggestions: PARSE_FAILURE_IMPROVEMENTS
            .iter()
            .map(|s| s.to_string())
            .collect(),
    }
}

/// Result used when the model could not be reached at all
pub fn call_failure_result() -> AnalysisResult {
    AnalysisResult {
        overall_score: 0,
        requirements_analysis: Vec::new(),
        general_feedback: CALL_FAILURE_GENERAL.to_string(),
        improvement_suggestions: Vec::new(),
    }
}
