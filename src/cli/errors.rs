//! CLI-specific error types
//!
//! All CLI errors are fatal: they are printed to stderr and the process
//! exits non-zero.

use thiserror::Error;

use crate::rest_api::config::ConfigError;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file error
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Runtime or server I/O error
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
