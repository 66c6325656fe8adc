//! Analysis result - the grader's judgment of a submission

use serde::{Deserialize, Serialize};

/// Judgment for a single requirement
///
/// `requirement` is whatever text the grader echoed back, which may differ
/// from the extracted requirement it corresponds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementAnalysis {
    /// Requirement text as reported by the grader
    pub requirement: String,

    /// Whether the submission satisfies the requirement
    pub satisfied: bool,

    /// Score, nominally 0-100
    pub score: i64,

    /// Free-form feedback for this requirement
    pub feedback: String,

    /// Suggestions for this requirement, possibly empty
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// Aggregate result of one analysis run
///
/// `requirements_analysis` ideally has one entry per extracted requirement,
/// but the grader may omit or add entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Overall score, nominally 0-100
    pub overall_score: i64,

    /// Per-requirement judgments
    #[serde(default)]
    pub requirements_analysis: Vec<RequirementAnalysis>,

    /// Free-form feedback on the whole submission
    pub general_feedback: String,

    /// Suggestions for the whole submission
    #[serde(default)]
    pub improvement_suggestions: Vec<String>,
}

impl AnalysisResult {
    /// Number of entries marked satisfied
    pub fn satisfied_count(&self) -> usize {
        self.requirements_analysis
            .iter()
            .filter(|a| a.satisfied)
            .count()
    }

    /// Sum of the per-requirement scores
    pub fn total_item_score(&self) -> i64 {
        self.requirements_analysis.iter().map(|a| a.score).sum()
    }
}
