//! CLI command definitions and argument parsing.

use crate::input::InputSource;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// CheckMate - Grade an assignment submission against its requirements.
#[derive(Debug, Parser)]
#[command(name = "checkmate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Generative model API key
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (scores and bare lists only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract text from an image with OCR
    Ocr(OcrArgs),

    /// Extract the requirement list from requirement text
    Requirements(RequirementsArgs),

    /// Grade a submission and print the results and report
    Analyze(AnalyzeArgs),

    /// Grade a submission and email the report
    Send(SendArgs),

    /// Enter interactive session mode
    Repl,
}

/// Arguments for the ocr command.
#[derive(Debug, Parser)]
pub struct OcrArgs {
    /// Image file (png, jpg, jpeg, gif, bmp, tiff, webp)
    pub image: PathBuf,
}

/// Where the requirement text comes from.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct RequirementsInput {
    /// Requirement text
    #[arg(id = "requirements-text", long = "requirements-text", value_name = "TEXT")]
    pub text: Option<String>,

    /// Image of the requirements, read with OCR
    #[arg(id = "requirements-image", long = "requirements-image", value_name = "PATH")]
    pub image: Option<PathBuf>,

    /// Text file with the requirements (.txt only)
    #[arg(id = "requirements-file", long = "requirements-file", value_name = "PATH")]
    pub file: Option<PathBuf>,
}

/// Where the submission text comes from.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct SubmissionInput {
    /// Submission text
    #[arg(id = "submission-text", long = "submission-text", value_name = "TEXT")]
    pub text: Option<String>,

    /// Image of the submission, read with OCR
    #[arg(id = "submission-image", long = "submission-image", value_name = "PATH")]
    pub image: Option<PathBuf>,

    /// Text file with the submission (.txt only)
    #[arg(id = "submission-file", long = "submission-file", value_name = "PATH")]
    pub file: Option<PathBuf>,
}

/// Arguments for the requirements command.
#[derive(Debug, Parser)]
pub struct RequirementsArgs {
    #[command(flatten)]
    pub requirements: RequirementsInput,
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub requirements: RequirementsInput,

    #[command(flatten)]
    pub submission: SubmissionInput,

    /// Also write the Markdown report to this file
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the send command.
#[derive(Debug, Parser)]
pub struct SendArgs {
    /// Recipient email address
    pub to: String,

    #[command(flatten)]
    pub requirements: RequirementsInput,

    #[command(flatten)]
    pub submission: SubmissionInput,

    /// Email subject
    #[arg(short, long, default_value = checkmate_mailer::DEFAULT_SUBJECT)]
    pub subject: String,

    /// Print the email instead of sending it
    #[arg(long)]
    pub preview: bool,
}

impl RequirementsInput {
    /// The selected source.
    pub fn source(&self) -> Option<InputSource> {
        InputSource::from_parts(self.text.clone(), self.image.clone(), self.file.clone())
    }
}

impl SubmissionInput {
    /// The selected source.
    pub fn source(&self) -> Option<InputSource> {
        InputSource::from_parts(self.text.clone(), self.image.clone(), self.file.clone())
    }
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_repl() {
        let cli = Cli::try_parse_from(["checkmate"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_analyze_command() {
        let cli = Cli::try_parse_from([
            "checkmate",
            "analyze",
            "--requirements-text",
            "1. Three pages",
            "--submission-file",
            "essay.txt",
            "--format",
            "json",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Analyze(args)) => {
                assert_eq!(
                    args.requirements.source(),
                    Some(InputSource::Text("1. Three pages".to_string()))
                );
                assert_eq!(
                    args.submission.source(),
                    Some(InputSource::File(PathBuf::from("essay.txt")))
                );
            }
            _ => panic!("Expected Analyze command"),
        }
        assert!(matches!(cli.format, Some(CliFormat::Json)));
    }

    #[test]
    fn test_two_sources_for_one_side_rejected() {
        let result = Cli::try_parse_from([
            "checkmate",
            "requirements",
            "--requirements-text",
            "a",
            "--requirements-file",
            "b.txt",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_source_rejected() {
        let result = Cli::try_parse_from(["checkmate", "analyze", "--requirements-text", "a"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_send_defaults() {
        let cli = Cli::try_parse_from([
            "checkmate",
            "send",
            "student@example.com",
            "--requirements-text",
            "a",
            "--submission-text",
            "b",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Send(args)) => {
                assert_eq!(args.to, "student@example.com");
                assert_eq!(args.subject, "Assignment Compliance Report");
                assert!(!args.preview);
            }
            _ => panic!("Expected Send command"),
        }
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::try_parse_from(["checkmate", "-vv", "repl"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
