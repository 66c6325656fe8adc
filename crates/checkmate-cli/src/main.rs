//! CheckMate CLI - Command-line interface for assignment compliance grading.

use checkmate_cli::commands;
use checkmate_cli::repl;
use checkmate_cli::{AppContext, Cli, CliConfig, Command, Formatter};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Pick up GOOGLE_API_KEY and mail credentials from .env before clap reads the environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

/// Load `~/.checkmate/config.toml`, writing the defaults there on first run.
fn load_default_config() -> CliConfig {
    match CliConfig::default_path() {
        Ok(path) if !path.exists() => {
            let cfg = CliConfig::default();
            cfg.save_to(&path).ok();
            cfg
        }
        _ => CliConfig::load(None).unwrap_or_else(|e| {
            warn!("Ignoring unreadable config file: {}", e);
            CliConfig::default()
        }),
    }
}

async fn run(cli: Cli) -> checkmate_cli::Result<()> {
    let config = match cli.config.as_deref() {
        Some(path) => CliConfig::load(Some(path))?,
        None => load_default_config(),
    };
    config.validate()?;

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let ctx = AppContext::new(config, cli.api_key);

    match cli.command {
        None | Some(Command::Repl) => {
            repl::run_repl(&ctx, &formatter).await?;
        }
        Some(Command::Ocr(args)) => {
            commands::execute_ocr(args, &ctx, &formatter).await?;
        }
        Some(Command::Requirements(args)) => {
            commands::execute_requirements(args, &ctx, &formatter).await?;
        }
        Some(Command::Analyze(args)) => {
            commands::execute_analyze(args, &ctx, &formatter).await?;
        }
        Some(Command::Send(args)) => {
            commands::execute_send(args, &ctx, &formatter).await?;
        }
    }

    Ok(())
}
