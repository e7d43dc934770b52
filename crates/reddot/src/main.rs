//! Red Dot Studio content engine CLI.
//!
//! Provides commands for:
//! - `render`: Convert Markdown to the site's HTML fragment
//! - `import`: Add a blog post from a Markdown file
//! - `post`: Edit, publish, unpublish, list and delete posts
//! - `project`: Add, show, hide, list and delete portfolio projects
//! - `serve`: Start the public API server

mod commands;
mod error;
mod output;

use std::future::Future;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ImportArgs, PostCommand, ProjectCommand, RenderArgs, ServeArgs};
use error::CliError;
use output::Output;

/// Application version from Cargo.toml.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Red Dot Studio content engine.
#[derive(Parser)]
#[command(name = "reddot", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render Markdown to HTML.
    Render(RenderArgs),
    /// Import a Markdown file as a blog post.
    Import(ImportArgs),
    /// Manage blog posts.
    #[command(subcommand)]
    Post(PostCommand),
    /// Manage portfolio projects.
    #[command(subcommand)]
    Project(ProjectCommand),
    /// Start the API server.
    Serve(ServeArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = matches!(&cli.command, Commands::Serve(args) if args.verbose);

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Import(args) => block_on(args.execute()),
        Commands::Post(cmd) => block_on(cmd.execute()),
        Commands::Project(cmd) => block_on(cmd.execute()),
        Commands::Serve(args) => block_on(args.execute(VERSION)),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

/// Run an async command on a fresh multi-threaded runtime.
fn block_on<F>(future: F) -> Result<(), CliError>
where
    F: Future<Output = Result<(), CliError>>,
{
    tokio::runtime::Runtime::new()?.block_on(future)
}
