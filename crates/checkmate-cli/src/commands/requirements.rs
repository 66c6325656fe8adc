//! Requirements command implementation.

use crate::cli::RequirementsArgs;
use crate::context::AppContext;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use checkmate_grader::{GraderError, RequirementOutcome};

/// Execute the requirements command.
pub async fn execute_requirements(
    args: RequirementsArgs,
    ctx: &AppContext,
    formatter: &Formatter,
) -> Result<()> {
    let source = args
        .requirements
        .source()
        .ok_or_else(|| CliError::InvalidInput("No requirement text given".to_string()))?;
    let text = source.load(&ctx.text_extractor())?;
    if text.trim().is_empty() {
        return Err(GraderError::MissingInput("requirement text is empty".to_string()).into());
    }

    let api_key = ctx.api_key().ok_or(CliError::Grader(GraderError::MissingApiKey))?;
    let pipeline = ctx.pipeline(api_key)?;

    let outcome = pipeline.extractor().extract_with_source(&text).await;
    if let RequirementOutcome::Heuristic(_) = outcome {
        eprintln!(
            "{}",
            formatter.warning("The model did not answer with a JSON list; lines were split heuristically.")
        );
    }

    let requirements = outcome.into_requirements();
    if requirements.is_empty() {
        return Err(GraderError::NoRequirements.into());
    }

    println!("{}", formatter.format_requirements(&requirements)?);
    Ok(())
}
