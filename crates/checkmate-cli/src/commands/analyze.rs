//! Analyze command implementation.

use crate::cli::{AnalyzeArgs, RequirementsInput, SubmissionInput};
use crate::config::OutputFormat;
use crate::context::{outcome_notice, AppContext};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use checkmate_domain::Session;
use checkmate_grader::AnalysisOutcome;
use std::fs;

/// Execute the analyze command.
pub async fn execute_analyze(args: AnalyzeArgs, ctx: &AppContext, formatter: &Formatter) -> Result<()> {
    let mut session = session_from_inputs(ctx, &args.requirements, &args.submission)?;
    let outcome = ctx.analyze(&mut session).await?;
    print_results(&session, Some(&outcome), formatter)?;

    if formatter.format() == OutputFormat::Table {
        if let Some(report) = session.report() {
            println!();
            println!("{}", report);
        }
    }

    if let Some(path) = args.output {
        let report = session.report().ok_or(CliError::NoResults)?;
        fs::write(&path, report)?;
        eprintln!("{}", formatter.success(&format!("Report written to {}", path.display())));
    }

    Ok(())
}

/// Build a session from the command line input sources.
pub fn session_from_inputs(
    ctx: &AppContext,
    requirements: &RequirementsInput,
    submission: &SubmissionInput,
) -> Result<Session> {
    let extractor = ctx.text_extractor();
    let mut session = ctx.new_session();

    if let Some(source) = requirements.source() {
        session.set_requirements_text(source.load(&extractor)?);
    }
    if let Some(source) = submission.source() {
        session.set_submission_text(source.load(&extractor)?);
    }
    Ok(session)
}

/// Print the results view for the session's last analysis.
pub fn print_results(session: &Session, outcome: Option<&AnalysisOutcome>, formatter: &Formatter) -> Result<()> {
    let (Some(result), Some(requirements)) = (session.analysis(), session.requirements()) else {
        return Err(CliError::NoResults);
    };

    if let Some(notice) = outcome.and_then(outcome_notice) {
        eprintln!("{}", formatter.warning(notice));
    }

    println!("{}", formatter.format_results(result, requirements)?);
    Ok(())
}
