//! Outcome types that record which parsing tier produced a value

use checkmate_domain::{AnalysisResult, RequirementList};

/// Result of requirement extraction, tagged with how it was obtained
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequirementOutcome {
    /// The model returned a JSON array
    Parsed(RequirementList),

    /// The model answered in free text; lines were split heuristically
    Heuristic(RequirementList),

    /// The model could not be reached
    Failed,
}

impl RequirementOutcome {
    /// The extracted list; empty when the call failed
    pub fn into_requirements(self) -> RequirementList {
        match self {
            RequirementOutcome::Parsed(list) | RequirementOutcome::Heuristic(list) => list,
            RequirementOutcome::Failed => RequirementList::default(),
        }
    }

    /// Short label for logs and CLI output
    pub fn label(&self) -> &'static str {
        match self {
            RequirementOutcome::Parsed(_) => "parsed",
            RequirementOutcome::Heuristic(_) => "heuristic",
            RequirementOutcome::Failed => "failed",
        }
    }
}

/// Result of compliance analysis, tagged with how it was obtained
///
/// Every variant carries a structurally valid `AnalysisResult`; the variant
/// says how much to trust it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    /// The model's JSON object, read verbatim
    Graded(AnalysisResult),

    /// The model answered but not in parseable form; placeholder scores
    Unparsed(AnalysisResult),

    /// The model could not be reached; zero-valued result
    Unreachable(AnalysisResult),
}

impl AnalysisOutcome {
    /// Borrow the carried result
    pub fn result(&self) -> &AnalysisResult {
        match self {
            AnalysisOutcome::Graded(r) | AnalysisOutcome::Unparsed(r) | AnalysisOutcome::Unreachable(r) => r,
        }
    }

    /// Take the carried result
    pub fn into_result(self) -> AnalysisResult {
        match self {
            AnalysisOutcome::Graded(r) | AnalysisOutcome::Unparsed(r) | AnalysisOutcome::Unreachable(r) => r,
        }
    }

    /// True only for a result read from the model's own JSON
    pub fn is_graded(&self) -> bool {
        matches!(self, AnalysisOutcome::Graded(_))
    }

    /// Short label for logs and CLI output
    pub fn label(&self) -> &'static str {
        match self {
            AnalysisOutcome::Graded(_) => "graded",
            AnalysisOutcome::Unparsed(_) => "unparsed",
            AnalysisOutcome::Unreachable(_) => "unreachable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_extraction_is_empty() {
        assert!(RequirementOutcome::Failed.into_requirements().is_empty());
    }

    #[test]
    fn test_outcome_labels() {
        let list = RequirementList::new(vec!["a".to_string()]);
        assert_eq!(RequirementOutcome::Parsed(list.clone()).label(), "parsed");
        assert_eq!(RequirementOutcome::Heuristic(list).label(), "heuristic");
        assert_eq!(AnalysisOutcome::Unreachable(AnalysisResult::default()).label(), "unreachable");
    }

    #[test]
    fn test_analysis_outcome_accessors() {
        let result = AnalysisResult {
            overall_score: 42,
            ..AnalysisResult::default()
        };
        let outcome = AnalysisOutcome::Unparsed(result.clone());
        assert!(!outcome.is_graded());
        assert_eq!(outcome.result(), &result);
        assert_eq!(outcome.into_result(), result);
    }
}
