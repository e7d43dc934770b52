//! Public HTTP API for the Red Dot Studio content engine.
//!
//! This crate provides an axum server exposing read-only JSON endpoints
//! for the studio website:
//! - Published blog posts, with bodies rendered to HTML
//! - schema.org structured data and a sitemap for search engines
//! - Visible portfolio projects
//!
//! # Quick Start
//!
//! ```ignore
//! use reddot_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         database_url: "sqlite://reddot.db".to_owned(),
//!         version: "1.0.0".to_owned(),
//!         ..Default::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum router (reddot-server)
//!                        │
//!                        ├─► /api/blogs, /api/projects ──► ContentStore (SQLite)
//!                        │
//!                        └─► /api/blogs/{slug} ──► MarkdownRenderer
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use reddot_content::SqliteStore;
use reddot_markdown::{MarkdownRenderer, Theme};
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// `SQLite` database URL.
    pub database_url: String,
    /// Organization name used in structured data.
    pub site_name: String,
    /// Public base URL for sitemap links.
    pub base_url: Option<String>,
    /// Markdown classes for rendered post bodies.
    pub theme: Theme,
    /// Enable verbose output.
    pub verbose: bool,
    /// Application version (reported by the health check).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 3001,
            database_url: "sqlite://reddot.db".to_owned(),
            site_name: reddot_content::DEFAULT_AUTHOR.to_owned(),
            base_url: None,
            theme: Theme::default(),
            verbose: false,
            version: String::new(),
        }
    }
}

/// Run the server.
///
/// # Arguments
///
/// * `config` - Server configuration
///
/// # Errors
///
/// Returns an error if the database cannot be opened or the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = SqliteStore::connect(&config.database_url).await?;

    let state = Arc::new(AppState {
        site_name: config.site_name,
        base_url: config.base_url,
        version: config.version,
        ..AppState::new(store, MarkdownRenderer::with_theme(&config.theme))
    });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, verbose = config.verbose, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C, shutdown signal disabled");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from `reddot.toml` configuration.
///
/// # Arguments
///
/// * `config` - Loaded configuration
/// * `version` - Application version
/// * `verbose` - Enable verbose output
#[must_use]
pub fn server_config_from_config(
    config: &reddot_config::Config,
    version: String,
    verbose: bool,
) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        database_url: config.database_resolved.url.clone(),
        site_name: config.site.name.clone(),
        base_url: config.site.base_url.clone(),
        theme: config.markdown.theme.clone(),
        verbose,
        version,
    }
}
