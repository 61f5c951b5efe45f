//! Mode routing
//!
//! This module provides unified entry points for the two execution modes:
//! - Server mode (HTTP server)
//! - CLI mode (one-shot commands)

#[cfg(feature = "server")]
pub mod server;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "server")]
pub use server::{configure_routes, run_server};

#[cfg(feature = "cli")]
pub use cli::run_cli;

use crate::cli::Commands;

/// Mode detection result
#[derive(Debug, PartialEq)]
pub enum Mode {
    #[cfg(feature = "server")]
    Server,
    #[cfg(feature = "cli")]
    Cli,
    Unknown,
}

/// Decide the mode from the parsed subcommand
///
/// No subcommand or `serve` runs the server; anything else is a CLI command.
pub fn detect_mode(command: Option<&Commands>) -> Mode {
    match command {
        None | Some(Commands::Serve) => {
            #[cfg(feature = "server")]
            return Mode::Server;
            #[cfg(not(feature = "server"))]
            return Mode::Unknown;
        }
        Some(_) => {
            #[cfg(feature = "cli")]
            return Mode::Cli;
            #[cfg(not(feature = "cli"))]
            return Mode::Unknown;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_mode() {
        assert_eq!(detect_mode(None), Mode::Server);
        assert_eq!(detect_mode(Some(&Commands::Serve)), Mode::Server);
        assert_eq!(detect_mode(Some(&Commands::Stats)), Mode::Cli);
    }
}
