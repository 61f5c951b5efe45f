//! CLI interface module
//!
//! This module provides command-line interface functionality for newslens.

pub mod commands;

use crate::cli::{Commands, ConfigCommands};
use crate::errors::NewsLensError;
use crate::runtime::lifetime::startup::prepare_startup;
use commands::{analyze_document, config_generate, show_history, show_stats, summarize_document};
use std::fmt;

#[derive(Debug)]
pub enum CliError {
    StorageError(String),
    ParseError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::StorageError(msg) => format!("Storage error: {}", msg),
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::StorageError(msg) => {
                format!("{} {}", "Storage error:".red().bold(), msg.white())
            }
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<NewsLensError> for CliError {
    fn from(err: NewsLensError) -> Self {
        match err {
            NewsLensError::DatabaseConfig(_)
            | NewsLensError::DatabaseConnection(_)
            | NewsLensError::DatabaseOperation(_) => CliError::StorageError(err.to_string()),
            NewsLensError::Validation(_) => CliError::ParseError(err.message().to_string()),
            _ => CliError::CommandError(err.to_string()),
        }
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands) -> Result<(), CliError> {
    // Generate doesn't need a DB connection
    if let Commands::Config {
        action: ConfigCommands::Generate { output_path, force },
    } = cmd
    {
        return config_generate(output_path, force).await;
    }

    let context = prepare_startup().await;

    match cmd {
        Commands::Summarize { document } => {
            summarize_document(&context.analysis_service, document).await
        }

        Commands::Analyze {
            document,
            channel,
            no_save,
        } => analyze_document(&context.analysis_service, document, channel, !no_save).await,

        Commands::History { limit } => show_history(&context.analysis_service, limit).await,

        Commands::Stats => show_stats(&context.statistics_service).await,

        Commands::Serve => unreachable!("server mode handled in main"),

        Commands::Config { .. } => unreachable!("handled above"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_newslens_error() {
        assert!(matches!(
            CliError::from(NewsLensError::database_operation("locked")),
            CliError::StorageError(_)
        ));
        let err = CliError::from(NewsLensError::validation("Either text or url must be provided"));
        assert_eq!(
            err.format_simple(),
            "Parse error: Either text or url must be provided"
        );
    }
}
