//! `reddot render` command implementation.

use std::io::{Read, Write};
use std::path::PathBuf;

use clap::Args;
use reddot_config::Config;
use reddot_markdown::{MarkdownRenderer, Theme};

use crate::error::CliError;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown file to render (default: read stdin).
    file: Option<PathBuf>,

    /// Path to configuration file for theme classes (default: auto-discover reddot.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emit elements without class attributes.
    #[arg(long)]
    unstyled: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or the config is invalid.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let markdown = match &self.file {
            Some(path) => std::fs::read_to_string(path)?,
            None => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };

        let theme = if self.unstyled {
            Theme::unstyled()
        } else {
            Config::load(self.config.as_deref(), None)?.markdown.theme
        };

        let html = MarkdownRenderer::with_theme(&theme).render(markdown.as_str());
        tracing::debug!(bytes = html.len(), "Rendered fragment");

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(html.as_bytes())?;
        stdout.write_all(b"\n")?;
        Ok(())
    }
}
