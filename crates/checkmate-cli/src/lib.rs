//! CheckMate CLI library.
//!
//! This library provides the core functionality for the CheckMate command-line interface,
//! including configuration management, input loading, command execution, and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod input;
pub mod output;
pub mod repl;

pub use cli::{Cli, Command};
pub use config::CliConfig;
pub use context::AppContext;
pub use error::{CliError, Result};
pub use output::Formatter;
