//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use checkmate_domain::{AnalysisResult, RequirementList};
use checkmate_grader::{status_label, ResultSummary, ScoreBand};
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// The selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format an extracted requirement list.
    pub fn format_requirements(&self, requirements: &RequirementList) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(requirements)?),
            OutputFormat::Quiet => Ok(requirements.as_slice().join("\n")),
            OutputFormat::Table => {
                if requirements.is_empty() {
                    return Ok(self.colorize("No requirements found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["#", "Requirement"]);
                for (i, requirement) in requirements.iter().enumerate() {
                    builder.push_record([(i + 1).to_string(), requirement.clone()]);
                }
                Ok(self.styled(builder))
            }
        }
    }

    /// Format the results view: headline metrics, per-requirement table and feedback.
    pub fn format_results(&self, result: &AnalysisResult, requirements: &RequirementList) -> Result<String> {
        let summary = ResultSummary::new(result, requirements);

        match self.format {
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "summary": summary,
                    "analysis": result,
                });
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Quiet => Ok(result.overall_score.to_string()),
            OutputFormat::Table => Ok(self.format_results_table(result, &summary)),
        }
    }

    fn format_results_table(&self, result: &AnalysisResult, summary: &ResultSummary) -> String {
        let mut out = String::new();

        let band_color = match summary.band {
            ScoreBand::Excellent => "green",
            ScoreBand::Fair => "yellow",
            ScoreBand::NeedsImprovement => "red",
        };
        out.push_str(&format!(
            "Overall score:         {}/100 ({})\n",
            summary.overall_score,
            self.colorize(summary.band.label(), band_color)
        ));
        out.push_str(&format!(
            "Requirements met:      {}/{} ({:.1}%)\n",
            summary.satisfied, summary.total_requirements, summary.satisfied_percent
        ));
        out.push_str(&format!("Average item score:    {:.1}/100\n\n", summary.average_score));

        if result.requirements_analysis.is_empty() {
            out.push_str(&self.colorize("No per-requirement analysis available.", "yellow"));
            out.push('\n');
        } else {
            let mut builder = Builder::default();
            builder.push_record(["#", "Requirement", "Status", "Score", "Feedback", "Suggestions"]);
            for (i, analysis) in result.requirements_analysis.iter().enumerate() {
                builder.push_record([
                    (i + 1).to_string(),
                    analysis.requirement.clone(),
                    status_label(analysis.satisfied).to_string(),
                    format!("{}/100", analysis.score),
                    analysis.feedback.clone(),
                    analysis.suggestions.join("\n"),
                ]);
            }
            out.push_str(&self.styled(builder));
            out.push('\n');
        }

        out.push_str(&format!("\n{}\n", self.colorize("General feedback", "cyan")));
        out.push_str(&result.general_feedback);
        out.push('\n');

        out.push_str(&format!("\n{}\n", self.colorize("Improvement suggestions", "cyan")));
        if result.improvement_suggestions.is_empty() {
            out.push_str(&self.info("No specific improvement suggestions."));
            out.push('\n');
        } else {
            for suggestion in &result.improvement_suggestions {
                out.push_str(&format!("• {}\n", suggestion));
            }
        }

        out
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn styled(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
