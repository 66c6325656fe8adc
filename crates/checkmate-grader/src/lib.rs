//! CheckMate Grader
//!
//! Grades an assignment submission against its requirements using an LLM.
//!
//! # Overview
//!
//! The grader turns free-form requirement text into a requirement list,
//! asks the model to judge a submission against that list, and renders the
//! judgment as a Markdown report. The model is a black box behind the
//! `LlmProvider` trait; everything it returns is parsed tolerantly.
//!
//! # Architecture
//!
//! ```text
//! Requirement text → RequirementExtractor → LLM → RequirementList
//! RequirementList + Submission → ComplianceAnalyzer → LLM → AnalysisResult
//! AnalysisResult → format_report → Markdown
//! ```
//!
//! # Degraded results
//!
//! Neither stage returns an error. Extraction yields an empty list when the
//! model is unreachable. Analysis yields one of three tagged outcomes:
//! `Graded` (the model's JSON), `Unparsed` (placeholder scores of 70) or
//! `Unreachable` (a zero-valued result).
//!
//! # Example Usage
//!
//! ```no_run
//! use checkmate_domain::Session;
//! use checkmate_grader::{GraderConfig, GradingPipeline};
//! use checkmate_llm::GeminiProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = GeminiProvider::new("api-key")?;
//! let pipeline = GradingPipeline::new(llm, GraderConfig::default());
//!
//! let mut session = Session::with_api_key("api-key");
//! session.set_requirements_text("1. At least 3 pages\n2. Cite 5 sources");
//! session.set_submission_text("My essay...");
//!
//! let outcome = pipeline.run(&mut session).await?;
//! println!("Overall: {}", outcome.result().overall_score);
//! println!("{}", session.report().unwrap_or_default());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod analyzer;
mod config;
mod error;
pub mod fallback;
mod invoke;
pub mod parser;
mod pipeline;
mod prompt;
mod report;
mod requirements;
mod summary;
mod types;

#[cfg(test)]
mod tests;

pub use analyzer::ComplianceAnalyzer;
pub use config::GraderConfig;
pub use error::GraderError;
pub use pipeline::GradingPipeline;
pub use prompt::{AnalysisPrompt, RequirementPrompt};
pub use report::{format_report, status_label, REPORT_TITLE};
pub use requirements::RequirementExtractor;
pub use summary::{ResultSummary, ScoreBand};
pub use types::{AnalysisOutcome, RequirementOutcome};
