//! `reddot project` subcommands for the portfolio.

use std::io::Write;

use clap::{Args, Subcommand};
use reddot_content::{ContentStore, NewProject, Project};

use super::database::DatabaseArgs;

use crate::error::CliError;
use crate::output::Output;

/// Project management commands.
#[derive(Subcommand)]
pub(crate) enum ProjectCommand {
    /// Add a portfolio project.
    Add(AddArgs),
    /// List every project, hidden ones included.
    List(DatabaseArgs),
    /// Make a project visible.
    Show(IdArgs),
    /// Hide a project from the portfolio.
    Hide(IdArgs),
    /// Delete a project.
    Delete(IdArgs),
}

/// Arguments for `project add`.
#[derive(Args)]
pub(crate) struct AddArgs {
    /// Project title.
    title: String,

    /// Category label, e.g. "Web App".
    #[arg(long)]
    category: Option<String>,

    /// One-paragraph description.
    #[arg(short, long)]
    description: Option<String>,

    /// Cover image URL.
    #[arg(long)]
    image_url: Option<String>,

    /// Source repository URL.
    #[arg(long)]
    github_url: Option<String>,

    /// Live site URL.
    #[arg(long)]
    live_url: Option<String>,

    /// Year shown on the card.
    #[arg(long)]
    year: Option<String>,

    /// Tag to attach (repeatable).
    #[arg(long = "tag")]
    tags: Vec<String>,

    /// Ascending display position.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    sort_order: i64,

    /// Save the project hidden.
    #[arg(long)]
    hidden: bool,

    #[command(flatten)]
    database: DatabaseArgs,
}

/// A project addressed by id.
#[derive(Args)]
pub(crate) struct IdArgs {
    /// Project id.
    id: i64,

    #[command(flatten)]
    database: DatabaseArgs,
}

impl ProjectCommand {
    /// Execute the project subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be opened, the payload is
    /// rejected or the project does not exist.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        match self {
            Self::Add(args) => {
                let store = args.database.open().await?;
                let project = store
                    .insert_project(NewProject {
                        title: args.title,
                        category: args.category,
                        description: args.description,
                        image_url: args.image_url,
                        github_url: args.github_url,
                        live_url: args.live_url,
                        year: args.year,
                        tags: args.tags,
                        sort_order: args.sort_order,
                        visible: !args.hidden,
                    })
                    .await?;
                output.success(&format!("Added \"{}\" as project #{}", project.title, project.id));
                if !project.visible {
                    output.warning(&format!(
                        "Saved hidden (use `reddot project show {}` to publish it)",
                        project.id
                    ));
                }
            }
            Self::List(database) => {
                let projects = database.open().await?.all_projects().await?;
                let mut stdout = std::io::stdout().lock();
                for project in &projects {
                    writeln!(stdout, "{}", project_row(project))?;
                }
            }
            Self::Show(args) => {
                let store = args.database.open().await?;
                let project = store.set_project_visible(args.id, true).await?;
                output.success(&format!("Project #{} is visible", project.id));
            }
            Self::Hide(args) => {
                let store = args.database.open().await?;
                let project = store.set_project_visible(args.id, false).await?;
                output.warning(&format!("Project #{} is hidden", project.id));
            }
            Self::Delete(args) => {
                let store = args.database.open().await?;
                store.delete_project(args.id).await?;
                output.success(&format!("Deleted project #{}", args.id));
            }
        }
        Ok(())
    }
}

fn project_row(project: &Project) -> String {
    let state = if project.visible { "visible" } else { "hidden" };
    format!(
        "{}\t{}\t{state}\t{}",
        project.id, project.sort_order, project.title
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use reddot_content::SqliteStore;

    use super::*;
    use crate::commands::database::testing::database_in;

    fn add_args(dir: &std::path::Path, title: &str) -> AddArgs {
        AddArgs {
            title: title.to_owned(),
            category: Some("Web App".to_owned()),
            description: Some("Booking flow".to_owned()),
            image_url: None,
            github_url: None,
            live_url: Some("https://example.com".to_owned()),
            year: Some("2024".to_owned()),
            tags: vec!["rust".to_owned()],
            sort_order: 2,
            hidden: false,
            database: database_in(dir),
        }
    }

    async fn open(dir: &std::path::Path) -> SqliteStore {
        let url = format!("sqlite://{}", dir.join("content.db").display());
        SqliteStore::connect(&url).await.unwrap()
    }

    fn id_args(dir: &std::path::Path, id: i64) -> IdArgs {
        IdArgs {
            id,
            database: database_in(dir),
        }
    }

    #[tokio::test]
    async fn test_add_inserts_visible_project() {
        let dir = tempfile::tempdir().unwrap();

        ProjectCommand::Add(add_args(dir.path(), "Atelier"))
            .execute()
            .await
            .unwrap();

        let projects = open(dir.path()).await.visible_projects().await.unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].title, "Atelier");
        assert_eq!(projects[0].category.as_deref(), Some("Web App"));
        assert_eq!(projects[0].tags, vec!["rust"]);
        assert_eq!(projects[0].sort_order, 2);
    }

    #[tokio::test]
    async fn test_add_hidden_then_show() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = add_args(dir.path(), "Atelier");
        args.hidden = true;
        ProjectCommand::Add(args).execute().await.unwrap();
        let store = open(dir.path()).await;
        assert!(store.visible_projects().await.unwrap().is_empty());

        let id = store.all_projects().await.unwrap()[0].id;
        ProjectCommand::Show(id_args(dir.path(), id))
            .execute()
            .await
            .unwrap();

        assert_eq!(store.visible_projects().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_add_rejects_blank_title() {
        let dir = tempfile::tempdir().unwrap();

        let err = ProjectCommand::Add(add_args(dir.path(), "  "))
            .execute()
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CliError::Content(reddot_content::ContentError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_hide_and_delete() {
        let dir = tempfile::tempdir().unwrap();
        ProjectCommand::Add(add_args(dir.path(), "Atelier"))
            .execute()
            .await
            .unwrap();
        let store = open(dir.path()).await;
        let id = store.all_projects().await.unwrap()[0].id;

        ProjectCommand::Hide(id_args(dir.path(), id))
            .execute()
            .await
            .unwrap();
        assert!(store.visible_projects().await.unwrap().is_empty());

        ProjectCommand::Delete(id_args(dir.path(), id))
            .execute()
            .await
            .unwrap();
        assert!(store.all_projects().await.unwrap().is_empty());

        let err = ProjectCommand::Delete(id_args(dir.path(), id))
            .execute()
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CliError::Content(reddot_content::ContentError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_project_row() {
        let dir = tempfile::tempdir().unwrap();
        ProjectCommand::Add(add_args(dir.path(), "Atelier"))
            .execute()
            .await
            .unwrap();
        let project = &open(dir.path()).await.all_projects().await.unwrap()[0];

        assert_eq!(project_row(project), format!("{}\t2\tvisible\tAtelier", project.id));
    }
}
