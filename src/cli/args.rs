//! CLI argument definitions using clap
//!
//! Commands:
//! - rosterdb serve [--config <path>] [--host <host>] [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// rosterdb - in-memory student/course enrollment store with a REST API
#[derive(Parser, Debug)]
#[command(name = "rosterdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file (used only if it exists)
        #[arg(long, default_value = "./rosterdb.json")]
        config: PathBuf,

        /// Override the configured host
        #[arg(long)]
        host: Option<String>,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::parse_from(["rosterdb", "serve"]);
        let Command::Serve { config, host, port } = cli.command;
        assert_eq!(config, PathBuf::from("./rosterdb.json"));
        assert!(host.is_none());
        assert!(port.is_none());
    }

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::parse_from(["rosterdb", "serve", "--host", "127.0.0.1", "--port", "8080"]);
        let Command::Serve { host, port, .. } = cli.command;
        assert_eq!(host.as_deref(), Some("127.0.0.1"));
        assert_eq!(port, Some(8080));
    }
}
