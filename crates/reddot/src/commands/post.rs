//! `reddot post` subcommands for managing existing blog posts.

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Subcommand};
use reddot_content::{BlogPost, ContentStore};

use super::database::DatabaseArgs;

use crate::error::CliError;
use crate::output::Output;

/// Post management commands.
#[derive(Subcommand)]
pub(crate) enum PostCommand {
    /// List every post, drafts included.
    List(DatabaseArgs),
    /// Replace a post's Markdown body from a file.
    Edit(EditArgs),
    /// Make a post public.
    Publish(SlugArgs),
    /// Turn a post back into a draft.
    Unpublish(SlugArgs),
    /// Delete a post.
    Delete(SlugArgs),
}

/// A post addressed by slug.
#[derive(Args)]
pub(crate) struct SlugArgs {
    /// Post slug.
    slug: String,

    #[command(flatten)]
    database: DatabaseArgs,
}

/// Arguments for `post edit`.
#[derive(Args)]
pub(crate) struct EditArgs {
    /// Post slug.
    slug: String,

    /// Markdown file with the new body.
    file: PathBuf,

    #[command(flatten)]
    database: DatabaseArgs,
}

impl PostCommand {
    /// Execute the post subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be opened or the post does not exist.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        match self {
            Self::List(database) => {
                let posts = database.open().await?.all_posts().await?;
                let mut stdout = std::io::stdout().lock();
                for post in &posts {
                    writeln!(stdout, "{}", post_row(post))?;
                }
            }
            Self::Edit(args) => {
                let content = std::fs::read_to_string(&args.file)?;
                if content.trim().is_empty() {
                    return Err(CliError::Validation(format!(
                        "{} is empty",
                        args.file.display()
                    )));
                }
                let store = args.database.open().await?;
                let post = store.update_post_content(&args.slug, content).await?;
                output.success(&format!("Updated /blog/{}", post.slug));
            }
            Self::Publish(args) => {
                let store = args.database.open().await?;
                let post = store.set_post_published(&args.slug, true).await?;
                output.success(&format!("Published /blog/{}", post.slug));
            }
            Self::Unpublish(args) => {
                let store = args.database.open().await?;
                let post = store.set_post_published(&args.slug, false).await?;
                output.warning(&format!("/blog/{} is now a draft", post.slug));
            }
            Self::Delete(args) => {
                let store = args.database.open().await?;
                store.delete_post(&args.slug).await?;
                output.success(&format!("Deleted /blog/{}", args.slug));
            }
        }
        Ok(())
    }
}

fn post_row(post: &BlogPost) -> String {
    let state = if post.published { "published" } else { "draft" };
    format!(
        "{}\t{}\t{state}\t{}",
        post.slug,
        post.created_at.format("%Y-%m-%d"),
        post.title
    )
}
