//! `reddot serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use reddot_config::{CliSettings, Config};
use reddot_server::{run_server, server_config_from_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover reddot.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Database URL (overrides config).
    #[arg(long)]
    database: Option<String>,

    /// Enable verbose output (request logs at info level).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            database_url: self.database,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!("Database: {}", config.database_resolved.url));
        match &config.site.base_url {
            Some(url) => output.info(&format!("Base URL: {url}")),
            None => output.info("Base URL: derived from request headers"),
        }

        let server_config = server_config_from_config(&config, version.to_owned(), self.verbose);
        run_server(server_config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}
