//! Headline metrics for the results view

use checkmate_domain::{AnalysisResult, RequirementList};
use serde::Serialize;

/// Qualitative band for an overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    /// 80 and above
    Excellent,
    /// 60 to 79
    Fair,
    /// Below 60
    NeedsImprovement,
}

impl ScoreBand {
    /// Band for a score
    pub fn from_score(score: i64) -> Self {
        if score >= 80 {
            ScoreBand::Excellent
        } else if score >= 60 {
            ScoreBand::Fair
        } else {
            ScoreBand::NeedsImprovement
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Fair => "Fair",
            ScoreBand::NeedsImprovement => "Needs improvement",
        }
    }
}

/// Metrics shown above the detailed results
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultSummary {
    /// Overall score as reported
    pub overall_score: i64,

    /// Band of the overall score
    pub band: ScoreBand,

    /// Entries marked satisfied
    pub satisfied: usize,

    /// Requirements that were extracted (the denominator)
    pub total_requirements: usize,

    /// `satisfied / total_requirements` as a percentage; 0 with no requirements
    pub satisfied_percent: f64,

    /// Mean per-entry score; 0 with no entries
    pub average_score: f64,
}

impl ResultSummary {
    /// Compute the summary for a result and the requirements it was graded against
    ///
    /// The satisfied ratio is taken over the extracted requirements, not the
    /// grader's entries, since the grader may add or drop entries.
    pub fn new(result: &AnalysisResult, requirements: &RequirementList) -> Self {
        let satisfied = result.satisfied_count();
        let total_requirements = requirements.len();

        let satisfied_percent = if total_requirements == 0 {
            0.0
        } else {
            satisfied as f64 / total_requirements as f64 * 100.0
        };

        let entries = result.requirements_analysis.len().max(1);
        let average_score = result.total_item_score() as f64 / entries as f64;

        Self {
            overall_score: result.overall_score,
            band: ScoreBand::from_score(result.overall_score),
            satisfied,
            total_requirements,
            satisfied_percent,
            average_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkmate_domain::RequirementAnalysis;

    fn entry(satisfied: bool, score: i64) -> RequirementAnalysis {
        RequirementAnalysis {
            requirement: "r".to_string(),
            satisfied,
            score,
            feedback: String::new(),
            suggestions: vec![],
        }
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(80), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(79), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(60), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(59), ScoreBand::NeedsImprovement);
        assert_eq!(ScoreBand::from_score(-3), ScoreBand::NeedsImprovement);
    }

    #[test]
    fn test_summary_metrics() {
        let result = AnalysisResult {
            overall_score: 65,
            requirements_analysis: vec![entry(true, 90), entry(false, 30), entry(true, 75)],
            general_feedback: String::new(),
            improvement_suggestions: vec![],
        };
        let requirements = RequirementList::new(vec!["a".into(), "b".into(), "c".into(), "d".into()]);
        let summary = ResultSummary::new(&result, &requirements);

        assert_eq!(summary.band, ScoreBand::Fair);
        assert_eq!(summary.satisfied, 2);
        assert_eq!(summary.total_requirements, 4);
        assert!((summary.satisfied_percent - 50.0).abs() < f64::EPSILON);
        assert!((summary.average_score - 65.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_summary_with_nothing() {
        let summary = ResultSummary::new(&AnalysisResult::default(), &RequirementList::default());
        assert_eq!(summary.satisfied_percent, 0.0);
        assert_eq!(summary.average_score, 0.0);
        assert_eq!(summary.band, ScoreBand::NeedsImprovement);
    }
}
