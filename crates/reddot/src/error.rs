//! CLI error types.

use reddot_config::ConfigError;
use reddot_content::ContentError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Content(#[from] ContentError),

    #[error("{0}")]
    Server(String),

    #[error("{0}")]
    Validation(String),
}
