//! CLI command implementations
//!
//! The serve command resolves configuration (file, then flag overrides),
//! initializes logging, and runs the HTTP server on a tokio runtime until
//! shutdown.

use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::rest_api::{ApiServer, ServerConfig};

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Parse arguments and dispatch
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Execute a single CLI command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { config, host, port } => serve(&config, host, port),
    }
}

fn serve(config_path: &Path, host: Option<String>, port: Option<u16>) -> CliResult<()> {
    init_tracing();

    let mut config = load_config(config_path)?;
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    let server = ApiServer::with_config(config);
    tracing::info!(addr = %server.socket_addr(), "starting rosterdb with seeded demo data");

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.start())?;
    Ok(())
}

/// Load the config file if present; a missing file means defaults
fn load_config(path: &Path) -> CliResult<ServerConfig> {
    if path.exists() {
        Ok(ServerConfig::load(path)?)
    } else {
        Ok(ServerConfig::default())
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("rosterdb=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_file_falls_back_to_defaults() {
        let config = load_config(Path::new("/nonexistent/rosterdb.json")).unwrap();
        assert_eq!(config.socket_addr(), "0.0.0.0:3000");
    }
}
