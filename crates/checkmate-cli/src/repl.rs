//! Interactive REPL (Read-Eval-Print Loop) mode.
//!
//! The REPL keeps one `Session` for its lifetime: inputs are entered with
//! `req` and `sub`, `analyze` fills in the results, and `results`, `report`
//! and `send` read them back. Changing an input drops earlier results.

use crate::commands;
use crate::config::checkmate_dir;
use crate::context::{outcome_notice, AppContext};
use crate::error::{CliError, Result};
use crate::input::InputSource;
use crate::output::Formatter;
use checkmate_domain::Session;
use checkmate_mailer::DEFAULT_SUBJECT;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Run the interactive REPL.
pub async fn run_repl(ctx: &AppContext, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.info("CheckMate REPL - Type 'help' for commands, 'exit' to quit"));
    if ctx.api_key().is_none() {
        println!("{}", formatter.warning("No API key configured. Use 'key <api-key>' or set GOOGLE_API_KEY."));
    }
    println!();

    let editor_config = rustyline::Config::builder()
        .max_history_size(ctx.config.settings.history_size)
        .map_err(|e| CliError::Config(format!("Invalid history size: {}", e)))?
        .build();
    let mut editor = DefaultEditor::with_config(editor_config).map_err(|e| {
        CliError::Io(std::io::Error::other(format!("Failed to initialize editor: {}", e)))
    })?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    let mut session = ctx.new_session();

    loop {
        let prompt = if session.analysis().is_some() {
            "checkmate (graded)> "
        } else {
            "checkmate> "
        };

        match editor.readline(prompt) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(cmd) => {
                        if let Err(e) = execute_repl_command(cmd, &mut session, ctx, formatter).await {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug, PartialEq, Eq)]
enum ReplCommand {
    Exit,
    Help,
    Requirements(InputSource),
    Submission(InputSource),
    Key(String),
    Analyze,
    Results,
    Report,
    Send { to: String, subject: String, preview: bool },
    Status,
    Clear,
}

/// Parse a REPL command line.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "req" | "requirements" => parse_input(rest, "req").map(ReplCommand::Requirements),
        "sub" | "submission" => parse_input(rest, "sub").map(ReplCommand::Submission),
        "key" => {
            if rest.is_empty() {
                return Err(CliError::InvalidInput("Usage: key <api-key>".to_string()));
            }
            Ok(ReplCommand::Key(rest.to_string()))
        }
        "analyze" => Ok(ReplCommand::Analyze),
        "results" => Ok(ReplCommand::Results),
        "report" => Ok(ReplCommand::Report),
        "send" | "preview" => parse_send(rest, command == "preview"),
        "status" => Ok(ReplCommand::Status),
        "clear" => Ok(ReplCommand::Clear),
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            command
        ))),
    }
}

/// `<text>`, `file <path>` or `image <path>`; `\n` in text is a line break.
fn parse_input(rest: &str, command: &str) -> Result<InputSource> {
    if rest.is_empty() {
        return Err(CliError::InvalidInput(format!(
            "Usage: {0} <text> | {0} file <path.txt> | {0} image <path>",
            command
        )));
    }

    match rest.split_once(char::is_whitespace) {
        Some(("file", path)) => Ok(InputSource::File(PathBuf::from(path.trim()))),
        Some(("image", path)) => Ok(InputSource::Image(PathBuf::from(path.trim()))),
        _ => Ok(InputSource::Text(rest.replace("\\n", "\n"))),
    }
}

fn parse_send(rest: &str, preview: bool) -> Result<ReplCommand> {
    let (to, subject) = match rest.split_once(char::is_whitespace) {
        Some((to, subject)) => (to, subject.trim()),
        None => (rest, ""),
    };

    if to.is_empty() {
        return Err(CliError::InvalidInput("Usage: send <email> [subject]".to_string()));
    }

    let subject = if subject.is_empty() { DEFAULT_SUBJECT } else { subject };
    Ok(ReplCommand::Send {
        to: to.to_string(),
        subject: subject.to_string(),
        preview,
    })
}

/// Execute a REPL command.
async fn execute_repl_command(
    cmd: ReplCommand,
    session: &mut Session,
    ctx: &AppContext,
    formatter: &Formatter,
) -> Result<()> {
    match cmd {
        ReplCommand::Requirements(source) => {
            let text = source.load(&ctx.text_extractor())?;
            println!("{}", formatter.success(&format!("Requirements set ({} chars)", text.chars().count())));
            session.set_requirements_text(text);
        }
        ReplCommand::Submission(source) => {
            let text = source.load(&ctx.text_extractor())?;
            println!("{}", formatter.success(&format!("Submission set ({} chars)", text.chars().count())));
            session.set_submission_text(text);
        }
        ReplCommand::Key(key) => {
            session.set_api_key(key);
            if session.api_key().is_some() {
                println!("{}", formatter.success("API key set for this session"));
            }
        }
        ReplCommand::Analyze => {
            println!("{}", formatter.info("Analyzing..."));
            let outcome = ctx.analyze(session).await?;
            println!("{}", formatter.success("Analysis complete. Use 'results' or 'report' to view it."));
            if let Some(notice) = outcome_notice(&outcome) {
                eprintln!("{}", formatter.warning(notice));
            }
        }
        ReplCommand::Results => {
            commands::print_results(session, None, formatter)?;
        }
        ReplCommand::Report => {
            let report = session.report().ok_or(CliError::NoResults)?;
            println!("{}", report);
        }
        ReplCommand::Send { to, subject, preview } => {
            let report = session.report().ok_or(CliError::NoResults)?;
            commands::validate_recipient(&to)?;
            commands::deliver_report(ctx.mailer(), formatter, &to, &subject, report, preview).await?;
        }
        ReplCommand::Status => print_status(session, ctx),
        ReplCommand::Clear => {
            session.reset();
            println!("{}", formatter.success("Inputs and results cleared"));
        }
        ReplCommand::Exit | ReplCommand::Help => {}
    }

    Ok(())
}

fn print_status(session: &Session, ctx: &AppContext) {
    let yes_no = |flag: bool| if flag { "yes" } else { "no" };

    println!("Session:      {}", session.id());
    println!("API key:      {}", yes_no(session.api_key().is_some()));
    println!("Email ready:  {}", yes_no(ctx.mailer().is_configured()));
    println!("Requirements: {} chars", session.requirements_text().chars().count());
    println!("Submission:   {} chars", session.submission_text().chars().count());
    match session.analysis() {
        Some(result) => println!("Results:      overall score {}/100", result.overall_score),
        None => println!("Results:      none"),
    }
}

fn get_history_path() -> Result<PathBuf> {
    let dir = checkmate_dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  req <text>                     - Set requirement text (\\n for line breaks)");
    println!("  req file <path.txt>            - Load requirements from a text file");
    println!("  req image <path>               - Load requirements from an image (OCR)");
    println!("  sub <text> | file | image      - Set the submission the same way");
    println!("  key <api-key>                  - Set the model API key for this session");
    println!("  analyze                        - Grade the submission");
    println!("  results                        - Show scores and per-requirement analysis");
    println!("  report                         - Show the Markdown report");
    println!("  send <email> [subject]         - Email the report");
    println!("  preview <email> [subject]      - Show the email without sending");
    println!("  status                         - Show session state");
    println!("  clear                          - Clear inputs and results");
    println!("  help, ?                        - Show this help");
    println!("  exit, quit, q                  - Exit REPL");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_repl_command("exit").unwrap(), ReplCommand::Exit);
        assert_eq!(parse_repl_command("?").unwrap(), ReplCommand::Help);
        assert_eq!(parse_repl_command("analyze").unwrap(), ReplCommand::Analyze);
        assert_eq!(parse_repl_command("status").unwrap(), ReplCommand::Status);
    }

    #[test]
    fn test_parse_text_input_keeps_spacing() {
        let cmd = parse_repl_command("req 1. Three pages\\n2.  Five sources").unwrap();
        assert_eq!(
            cmd,
            ReplCommand::Requirements(InputSource::Text("1. Three pages\n2.  Five sources".to_string()))
        );
    }

    #[test]
    fn test_parse_file_and_image_inputs() {
        assert_eq!(
            parse_repl_command("sub file essay.txt").unwrap(),
            ReplCommand::Submission(InputSource::File(PathBuf::from("essay.txt")))
        );
        assert_eq!(
            parse_repl_command("req image scan.png").unwrap(),
            ReplCommand::Requirements(InputSource::Image(PathBuf::from("scan.png")))
        );
    }

    #[test]
    fn test_parse_send() {
        assert_eq!(
            parse_repl_command("send a@b.co").unwrap(),
            ReplCommand::Send {
                to: "a@b.co".to_string(),
                subject: DEFAULT_SUBJECT.to_string(),
                preview: false,
            }
        );
        assert_eq!(
            parse_repl_command("preview a@b.co Essay feedback").unwrap(),
            ReplCommand::Send {
                to: "a@b.co".to_string(),
                subject: "Essay feedback".to_string(),
                preview: true,
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_repl_command("req").is_err());
        assert!(parse_repl_command("send").is_err());
        assert!(parse_repl_command("key").is_err());
        assert!(parse_repl_command("frobnicate").is_err());
    }

    #[tokio::test]
    async fn test_results_before_analysis() {
        let ctx = AppContext::new(crate::config::CliConfig::default(), None);
        let formatter = Formatter::new(crate::config::OutputFormat::Quiet, false);
        let mut session = ctx.new_session();

        let result = execute_repl_command(ReplCommand::Report, &mut session, &ctx, &formatter).await;
        assert!(matches!(result, Err(CliError::NoResults)));
    }

    #[tokio::test]
    async fn test_setting_input_clears_results() {
        let ctx = AppContext::new(crate::config::CliConfig::default(), None);
        let formatter = Formatter::new(crate::config::OutputFormat::Quiet, false);
        let mut session = ctx.new_session();
        session.record_analysis(Default::default(), Default::default(), "report".to_string());

        execute_repl_command(
            ReplCommand::Submission(InputSource::Text("new essay".to_string())),
            &mut session,
            &ctx,
            &formatter,
        )
        .await
        .unwrap();

        assert!(session.report().is_none());
        assert_eq!(session.submission_text(), "new essay");
    }
}
