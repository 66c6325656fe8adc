//! Markdown report rendering for an analysis result

use checkmate_domain::{AnalysisResult, RequirementAnalysis};

/// Title line of every report
pub const REPORT_TITLE: &str = "# Assignment Compliance Report";

/// Render an analysis result as a Markdown report
///
/// Pure and total: the same result always yields the same text, and an
/// empty analysis list still produces every section heading.
///
/// # Examples
///
/// ```
/// use checkmate_domain::AnalysisResult;
/// use checkmate_grader::format_report;
///
/// let report = format_report(&AnalysisResult::default());
/// assert!(report.starts_with("# Assignment Compliance Report"));
/// assert!(!report.contains("### "));
/// ```
pub fn format_report(result: &AnalysisResult) -> String {
    let mut report = String::new();

    report.push_str(REPORT_TITLE);
    report.push_str("\n\n");
    report.push_str(&format!("## 📊 Overall Score: {}/100\n\n", result.overall_score));
    report.push_str("## 📋 Requirement Analysis\n");

    for (i, analysis) in result.requirements_analysis.iter().enumerate() {
        push_item(&mut report, i + 1, analysis);
    }

    report.push_str("\n## 💡 General Feedback\n");
    report.push_str(&result.general_feedback);
    report.push_str("\n\n## 🔧 Improvement Suggestions\n");

    for suggestion in &result.improvement_suggestions {
        report.push_str(&format!("- {}\n", suggestion));
    }

    report
}

/// Status text shown for an entry
pub fn status_label(satisfied: bool) -> &'static str {
    if satisfied {
        "✅ Satisfied"
    } else {
        "❌ Not satisfied"
    }
}

fn push_item(report: &mut String, number: usize, analysis: &RequirementAnalysis) {
    report.push_str(&format!("\n### {}. {}\n", number, analysis.requirement));
    report.push_str(&format!("- **Status**: {}\n", status_label(analysis.satisfied)));
    report.push_str(&format!("- **Score**: {}/100\n", analysis.score));
    report.push_str(&format!("- **Feedback**: {}\n", analysis.feedback));
    report.push_str("- **Suggestions**:\n");
    for suggestion in &analysis.suggestions {
        report.push_str(&format!("  - {}\n", suggestion));
    }
}
