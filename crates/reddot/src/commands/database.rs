//! Shared database selection arguments.

use std::path::PathBuf;

use clap::Args;
use reddot_config::{CliSettings, Config};
use reddot_content::SqliteStore;

use crate::error::CliError;

/// Where to find the content database.
#[derive(Args)]
pub(crate) struct DatabaseArgs {
    /// Path to configuration file (default: auto-discover reddot.toml).
    #[arg(short, long)]
    pub(crate) config: Option<PathBuf>,

    /// Database URL (overrides config).
    #[arg(long)]
    pub(crate) database: Option<String>,
}

impl DatabaseArgs {
    /// Load config and open the store it points at.
    pub(crate) async fn open(self) -> Result<SqliteStore, CliError> {
        let cli_settings = CliSettings {
            database_url: self.database,
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        Ok(SqliteStore::connect(&config.database_resolved.url).await?)
    }
}
