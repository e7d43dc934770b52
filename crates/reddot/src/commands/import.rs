//! `reddot import` command implementation.

use std::path::PathBuf;

use clap::Args;
use reddot_content::{ContentStore, NewPost};

use super::database::DatabaseArgs;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the import command.
#[derive(Args)]
pub(crate) struct ImportArgs {
    /// Markdown file with the post body.
    file: PathBuf,

    /// Post title.
    #[arg(short, long)]
    title: String,

    /// URL slug (default: derived from the title).
    #[arg(short, long)]
    slug: Option<String>,

    /// Short summary shown in listings.
    #[arg(short, long)]
    excerpt: Option<String>,

    /// Author name (default: the studio).
    #[arg(short, long)]
    author: Option<String>,

    /// Tag to attach (repeatable).
    #[arg(long = "tag")]
    tags: Vec<String>,

    /// Publish immediately instead of saving a draft.
    #[arg(long)]
    publish: bool,

    #[command(flatten)]
    database: DatabaseArgs,
}

impl ImportArgs {
    /// Execute the import command.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is unreadable or the post is rejected.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let content = std::fs::read_to_string(&self.file)?;
        if content.trim().is_empty() {
            return Err(CliError::Validation(format!(
                "{} is empty",
                self.file.display()
            )));
        }

        let store = self.database.open().await?;

        let post = store
            .insert_post(NewPost {
                title: self.title,
                slug: self.slug,
                excerpt: self.excerpt,
                content,
                author: self.author,
                tags: self.tags,
                published: self.publish,
                ..Default::default()
            })
            .await?;

        output.success(&format!("Imported \"{}\" as /blog/{}", post.title, post.slug));
        if !post.published {
            output.warning("Saved as draft (use --publish to make it public)");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use reddot_content::SqliteStore;

    use super::*;
    use crate::commands::database::testing::database_in;

    fn args(dir: &std::path::Path, file: PathBuf) -> ImportArgs {
        ImportArgs {
            file,
            title: "Launch Notes".to_owned(),
            slug: None,
            excerpt: Some("What shipped".to_owned()),
            author: None,
            tags: vec!["news".to_owned()],
            publish: true,
            database: database_in(dir),
        }
    }

    #[tokio::test]
    async fn test_import_inserts_published_post() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("post.md");
        std::fs::write(&file, "# Launch\n\nWe shipped.").unwrap();

        args(dir.path(), file).execute().await.unwrap();

        let url = format!("sqlite://{}", dir.path().join("content.db").display());
        let store = SqliteStore::connect(&url).await.unwrap();
        let post = store.published_post("launch-notes").await.unwrap().unwrap();
        assert_eq!(post.content, "# Launch\n\nWe shipped.");
        assert_eq!(post.tags, vec!["news"]);
        assert_eq!(post.excerpt.as_deref(), Some("What shipped"));
    }

    #[tokio::test]
    async fn test_import_rejects_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("empty.md");
        std::fs::write(&file, "  \n").unwrap();

        let err = args(dir.path(), file).execute().await.unwrap_err();

        assert!(matches!(err, CliError::Validation(_)));
    }
}
