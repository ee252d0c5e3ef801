//! CLI module for rosterdb
//!
//! Provides the command-line interface:
//! - serve: boot the HTTP server over a fresh seeded store

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command};
pub use errors::{CliError, CliResult};
