//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for newslens using clap's derive macros.

use clap::{Args, Parser, Subcommand};

/// newslens - news summarization and sentiment statistics
#[derive(Parser)]
#[command(name = "newslens")]
#[command(version)]
#[command(about = "Extractive summaries, sentiment and keywords for news articles", long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, short = 'c', global = true, default_value = "config.toml")]
    pub config: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Text typed on the command line or a page to fetch
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = true)]
pub struct DocumentArgs {
    /// Document text (wins over --url)
    #[arg(long)]
    pub text: Option<String>,

    /// Page whose <p> text is analyzed
    #[arg(long)]
    pub url: Option<String>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Quick LSA summary, never saved
    Summarize {
        #[command(flatten)]
        document: DocumentArgs,
    },

    /// Full analysis: country, sentiment, keywords and summary
    Analyze {
        #[command(flatten)]
        document: DocumentArgs,

        /// Channel the article came from
        #[arg(long)]
        channel: Option<String>,

        /// Do not save the result
        #[arg(long)]
        no_save: bool,
    },

    /// List saved analyses, newest first
    History {
        /// Show at most this many records
        #[arg(long, short = 'n')]
        limit: Option<u64>,
    },

    /// Monthly sentiment counts
    Stats,

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output file path (default: config.example.toml)
        output_path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
