//! `SQLite` content store.
//!
//! Tags are stored as JSON array text. Timestamps are written as RFC 3339
//! UTC strings, so lexical order matches chronological order.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::model::{BlogPost, NewPost, NewProject, PostSummary, Project, SitemapEntry};
use crate::store::{
    ContentError, ContentStore, post_not_found, project_not_found, validate_new_post,
    validate_new_project,
};

const SCHEMA: &str = r"
CREATE TABLE IF NOT EXISTS blog_posts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    slug TEXT NOT NULL UNIQUE,
    excerpt TEXT,
    content TEXT NOT NULL DEFAULT '',
    cover_image TEXT,
    author TEXT NOT NULL DEFAULT 'Red Dot Studio',
    tags TEXT NOT NULL DEFAULT '[]',
    published INTEGER NOT NULL DEFAULT 0,
    meta_title TEXT,
    meta_description TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_blog_posts_published ON blog_posts (published, created_at);
CREATE TABLE IF NOT EXISTS portfolio_projects (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    category TEXT,
    description TEXT,
    image_url TEXT,
    github_url TEXT,
    live_url TEXT,
    year TEXT,
    tags TEXT NOT NULL DEFAULT '[]',
    sort_order INTEGER NOT NULL DEFAULT 0,
    visible INTEGER NOT NULL DEFAULT 1,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
";

const POST_COLUMNS: &str = "id, title, slug, excerpt, content, cover_image, author, tags, \
     published, meta_title, meta_description, created_at, updated_at";

const PROJECT_COLUMNS: &str = "id, title, category, description, image_url, github_url, \
     live_url, year, tags, sort_order, visible, created_at, updated_at";

#[derive(sqlx::FromRow)]
struct PostRow {
    id: i64,
    title: String,
    slug: String,
    excerpt: Option<String>,
    content: String,
    cover_image: Option<String>,
    author: String,
    tags: Option<String>,
    published: bool,
    meta_title: Option<String>,
    meta_description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct SummaryRow {
    id: i64,
    title: String,
    slug: String,
    excerpt: Option<String>,
    cover_image: Option<String>,
    author: String,
    tags: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct ProjectRow {
    id: i64,
    title: String,
    category: Option<String>,
    description: Option<String>,
    image_url: Option<String>,
    github_url: Option<String>,
    live_url: Option<String>,
    year: Option<String>,
    tags: Option<String>,
    sort_order: i64,
    visible: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Decode a JSON tag column. NULL and blank values mean no tags.
fn decode_tags(raw: Option<&str>) -> Result<Vec<String>, serde_json::Error> {
    match raw.map(str::trim) {
        None | Some("") => Ok(Vec::new()),
        Some(json) => serde_json::from_str(json),
    }
}

impl TryFrom<PostRow> for BlogPost {
    type Error = serde_json::Error;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Self {
            tags: decode_tags(row.tags.as_deref())?,
            id: row.id,
            title: row.title,
            slug: row.slug,
            excerpt: row.excerpt,
            content: row.content,
            cover_image: row.cover_image,
            author: row.author,
            published: row.published,
            meta_title: row.meta_title,
            meta_description: row.meta_description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl TryFrom<SummaryRow> for PostSummary {
    type Error = serde_json::Error;

    fn try_from(row: SummaryRow) -> Result<Self, Self::Error> {
        Ok(Self {
            tags: decode_tags(row.tags.as_deref())?,
            id: row.id,
            title: row.title,
            slug: row.slug,
            excerpt: row.excerpt,
            cover_image: row.cover_image,
            author: row.author,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl TryFrom<ProjectRow> for Project {
    type Error = serde_json::Error;

    fn try_from(row: ProjectRow) -> Result<Self, Self::Error> {
        Ok(Self {
            tags: decode_tags(row.tags.as_deref())?,
            id: row.id,
            title: row.title,
            category: row.category,
            description: row.description,
            image_url: row.image_url,
            github_url: row.github_url,
            live_url: row.live_url,
            year: row.year,
            sort_order: row.sort_order,
            visible: row.visible,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Map a unique constraint failure on insert to [`ContentError::Conflict`].
fn conflict_or_database(err: sqlx::Error, slug: &str) -> ContentError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => ContentError::Conflict {
            slug: slug.to_owned(),
        },
        _ => ContentError::Database(err),
    }
}

/// Content store backed by a `SQLite` connection pool.
#[derive(Clone, Debug)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open the database at `url`, creating the file and schema if missing.
    ///
    /// In-memory URLs get a single never-recycled connection, since every
    /// new connection would see an empty database.
    pub async fn connect(url: &str) -> Result<Self, ContentError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        let pool_options = if url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_options.connect_with(options).await?;
        let store = Self { pool };
        store.migrate().await?;

        tracing::info!(url, "Opened content database");
        Ok(store)
    }

    /// Open a private in-memory database.
    pub async fn in_memory() -> Result<Self, ContentError> {
        Self::connect("sqlite::memory:").await
    }

    /// Underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn migrate(&self) -> Result<(), ContentError> {
        sqlx::raw_sql(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }

    async fn post_by_id(&self, id: i64) -> Result<BlogPost, ContentError> {
        let row: PostRow =
            sqlx::query_as(&format!("SELECT {POST_COLUMNS} FROM blog_posts WHERE id = ?"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?
                .ok_or_else(|| ContentError::NotFound(format!("post #{id}")))?;
        Ok(row.try_into()?)
    }

    async fn post_by_slug(&self, slug: &str) -> Result<BlogPost, ContentError> {
        let row: PostRow =
            sqlx::query_as(&format!("SELECT {POST_COLUMNS} FROM blog_posts WHERE slug = ?"))
                .bind(slug)
                .fetch_optional(&self.pool)
                .await?
                .ok_or_else(|| post_not_found(slug))?;
        Ok(row.try_into()?)
    }

    async fn project_by_id(&self, id: i64) -> Result<Project, ContentError> {
        let row: ProjectRow = sqlx::query_as(&format!(
            "SELECT {PROJECT_COLUMNS} FROM portfolio_projects WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| project_not_found(id))?;
        Ok(row.try_into()?)
    }
}

impl ContentStore for SqliteStore {
    async fn published_posts(&self) -> Result<Vec<PostSummary>, ContentError> {
        let rows: Vec<SummaryRow> = sqlx::query_as(
            "SELECT id, title, slug, excerpt, cover_image, author, tags, created_at, updated_at \
             FROM blog_posts WHERE published = 1 ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| PostSummary::try_from(row).map_err(ContentError::from))
            .collect()
    }

    async fn published_post(&self, slug: &str) -> Result<Option<BlogPost>, ContentError> {
        let row: Option<PostRow> = sqlx::query_as(&format!(
            "SELECT {POST_COLUMNS} FROM blog_posts WHERE slug = ? AND published = 1"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(BlogPost::try_from).transpose()?)
    }

    async fn visible_projects(&self) -> Result<Vec<Project>, ContentError> {
        let rows: Vec<ProjectRow> = sqlx::query_as(&format!(
            "SELECT {PROJECT_COLUMNS} FROM portfolio_projects WHERE visible = 1 \
             ORDER BY sort_order ASC, created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| Project::try_from(row).map_err(ContentError::from))
            .collect()
    }

    async fn sitemap_entries(&self) -> Result<Vec<SitemapEntry>, ContentError> {
        let rows: Vec<(String, DateTime<Utc>)> = sqlx::query_as(
            "SELECT slug, updated_at FROM blog_posts WHERE published = 1 \
             ORDER BY updated_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(slug, updated_at)| SitemapEntry { slug, updated_at })
            .collect())
    }

    async fn insert_post(&self, post: NewPost) -> Result<BlogPost, ContentError> {
        let slug = validate_new_post(&post)?;
        let tags = serde_json::to_string(&post.tags)?;
        let author = post
            .author
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| crate::DEFAULT_AUTHOR.to_owned());
        let now = Utc::now();

        let result = sqlx::query(
            "INSERT INTO blog_posts (title, slug, excerpt, content, cover_image, author, tags, \
             published, meta_title, meta_description, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(post.title.trim())
        .bind(&slug)
        .bind(post.excerpt)
        .bind(post.content)
        .bind(post.cover_image)
        .bind(author)
        .bind(tags)
        .bind(post.published)
        .bind(post.meta_title)
        .bind(post.meta_description)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| conflict_or_database(e, &slug))?;

        tracing::debug!(slug = %slug, published = post.published, "Inserted blog post");
        self.post_by_id(result.last_insert_rowid()).await
    }

    async fn insert_project(&self, project: NewProject) -> Result<Project, ContentError> {
        validate_new_project(&project)?;
        let tags = serde_json::to_string(&project.tags)?;
        let now = Utc::now();

        let result = sqlx::query(
            "INSERT INTO portfolio_projects (title, category, description, image_url, \
             github_url, live_url, year, tags, sort_order, visible, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(project.title.trim())
        .bind(project.category)
        .bind(project.description)
        .bind(project.image_url)
        .bind(project.github_url)
        .bind(project.live_url)
        .bind(project.year)
        .bind(tags)
        .bind(project.sort_order)
        .bind(project.visible)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        tracing::debug!(title = %project.title, "Inserted project");
        self.project_by_id(result.last_insert_rowid()).await
    }

    async fn all_posts(&self) -> Result<Vec<BlogPost>, ContentError> {
        let rows: Vec<PostRow> = sqlx::query_as(&format!(
            "SELECT {POST_COLUMNS} FROM blog_posts ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| BlogPost::try_from(row).map_err(ContentError::from))
            .collect()
    }

    async fn all_projects(&self) -> Result<Vec<Project>, ContentError> {
        let rows: Vec<ProjectRow> = sqlx::query_as(&format!(
            "SELECT {PROJECT_COLUMNS} FROM portfolio_projects \
             ORDER BY sort_order ASC, created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| Project::try_from(row).map_err(ContentError::from))
            .collect()
    }

    async fn update_post_content(
        &self,
        slug: &str,
        content: String,
    ) -> Result<BlogPost, ContentError> {
        let result = sqlx::query("UPDATE blog_posts SET content = ?, updated_at = ? WHERE slug = ?")
            .bind(content)
            .bind(Utc::now())
            .bind(slug)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(post_not_found(slug));
        }

        tracing::debug!(slug, "Updated blog post content");
        self.post_by_slug(slug).await
    }

    async fn set_post_published(
        &self,
        slug: &str,
        published: bool,
    ) -> Result<BlogPost, ContentError> {
        let result =
            sqlx::query("UPDATE blog_posts SET published = ?, updated_at = ? WHERE slug = ?")
                .bind(published)
                .bind(Utc::now())
                .bind(slug)
                .execute(&self.pool)
                .await?;
        if result.rows_affected() == 0 {
            return Err(post_not_found(slug));
        }

        tracing::debug!(slug, published, "Changed blog post visibility");
        self.post_by_slug(slug).await
    }

    async fn delete_post(&self, slug: &str) -> Result<(), ContentError> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE slug = ?")
            .bind(slug)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(post_not_found(slug));
        }

        tracing::debug!(slug, "Deleted blog post");
        Ok(())
    }

    async fn set_project_visible(&self, id: i64, visible: bool) -> Result<Project, ContentError> {
        let result =
            sqlx::query("UPDATE portfolio_projects SET visible = ?, updated_at = ? WHERE id = ?")
                .bind(visible)
                .bind(Utc::now())
                .bind(id)
                .execute(&self.pool)
                .await?;
        if result.rows_affected() == 0 {
            return Err(project_not_found(id));
        }

        tracing::debug!(id, visible, "Changed project visibility");
        self.project_by_id(id).await
    }

    async fn delete_project(&self, id: i64) -> Result<(), ContentError> {
        let result = sqlx::query("DELETE FROM portfolio_projects WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(project_not_found(id));
        }

        tracing::debug!(id, "Deleted project");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn post(title: &str, published: bool) -> NewPost {
        NewPost {
            title: title.to_owned(),
            content: format!("# {title}"),
            published,
            ..Default::default()
        }
    }

    fn project(title: &str, sort_order: i64, visible: bool) -> NewProject {
        NewProject {
            title: title.to_owned(),
            sort_order,
            visible,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_insert_post_defaults() {
        let store = SqliteStore::in_memory().await.unwrap();

        let created = store
            .insert_post(NewPost {
                tags: vec!["design".to_owned(), "brand".to_owned()],
                ..post("Hello World", true)
            })
            .await
            .unwrap();

        assert_eq!(created.slug, "hello-world");
        assert_eq!(created.author, crate::DEFAULT_AUTHOR);
        assert_eq!(created.tags, vec!["design", "brand"]);
        assert!(created.published);
        assert_eq!(created.created_at, created.updated_at);
    }

    #[tokio::test]
    async fn test_insert_post_duplicate_slug_conflicts() {
        let store = SqliteStore::in_memory().await.unwrap();
        store.insert_post(post("Same Title", true)).await.unwrap();

        let err = store
            .insert_post(post("Same  Title!", false))
            .await
            .unwrap_err();

        assert!(
            matches!(&err, ContentError::Conflict { slug } if slug == "same-title"),
            "Expected Conflict, got {err:?}"
        );
    }

    #[tokio::test]
    async fn test_insert_post_rejects_empty_title() {
        let store = SqliteStore::in_memory().await.unwrap();
        let err = store.insert_post(post("   ", true)).await.unwrap_err();
        assert!(matches!(err, ContentError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_published_posts_excludes_drafts_newest_first() {
        let store = SqliteStore::in_memory().await.unwrap();
        store.insert_post(post("First", true)).await.unwrap();
        store.insert_post(post("Draft", false)).await.unwrap();
        store.insert_post(post("Second", true)).await.unwrap();

        let slugs: Vec<_> = store
            .published_posts()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.slug)
            .collect();

        assert_eq!(slugs, vec!["second", "first"]);
    }

    #[tokio::test]
    async fn test_published_post_hides_drafts() {
        let store = SqliteStore::in_memory().await.unwrap();
        store.insert_post(post("Visible", true)).await.unwrap();
        store.insert_post(post("Hidden", false)).await.unwrap();

        let found = store.published_post("visible").await.unwrap().unwrap();
        assert_eq!(found.content, "# Visible");
        assert!(store.published_post("hidden").await.unwrap().is_none());
        assert!(store.published_post("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_visible_projects_sorted() {
        let store = SqliteStore::in_memory().await.unwrap();
        store.insert_project(project("Late", 2, true)).await.unwrap();
        store.insert_project(project("Hidden", 0, false)).await.unwrap();
        store.insert_project(project("Early", 1, true)).await.unwrap();

        let titles: Vec<_> = store
            .visible_projects()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();

        assert_eq!(titles, vec!["Early", "Late"]);
    }

    #[tokio::test]
    async fn test_sitemap_entries_only_published() {
        let store = SqliteStore::in_memory().await.unwrap();
        store.insert_post(post("One", true)).await.unwrap();
        store.insert_post(post("Two", false)).await.unwrap();

        let entries = store.sitemap_entries().await.unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].slug, "one");
    }

    #[tokio::test]
    async fn test_null_tags_decode_empty() {
        let store = SqliteStore::in_memory().await.unwrap();
        let created = store.insert_post(post("Tagged", true)).await.unwrap();
        sqlx::query("UPDATE blog_posts SET tags = NULL WHERE id = ?")
            .bind(created.id)
            .execute(store.pool())
            .await
            .unwrap();

        let found = store.published_post("tagged").await.unwrap().unwrap();
        assert!(found.tags.is_empty());
    }

    #[tokio::test]
    async fn test_connect_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("content.db").display());

        let store = SqliteStore::connect(&url).await.unwrap();
        store.insert_post(post("Persisted", true)).await.unwrap();
        drop(store);

        let reopened = SqliteStore::connect(&url).await.unwrap();
        assert_eq!(reopened.published_posts().await.unwrap().len(), 1);
    }

    async fn backdate_post(store: &SqliteStore, slug: &str) -> DateTime<Utc> {
        let old = DateTime::parse_from_rfc3339("2020-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        sqlx::query("UPDATE blog_posts SET created_at = ?, updated_at = ? WHERE slug = ?")
            .bind(old)
            .bind(old)
            .bind(slug)
            .execute(store.pool())
            .await
            .unwrap();
        old
    }

    #[tokio::test]
    async fn test_set_post_published_makes_draft_public() {
        let store = SqliteStore::in_memory().await.unwrap();
        store.insert_post(post("Pending", false)).await.unwrap();
        let old = backdate_post(&store, "pending").await;

        let updated = store.set_post_published("pending", true).await.unwrap();

        assert!(updated.published);
        assert!(updated.updated_at > old);
        assert_eq!(updated.created_at, old);
        assert!(store.published_post("pending").await.unwrap().is_some());

        let hidden = store.set_post_published("pending", false).await.unwrap();
        assert!(!hidden.published);
        assert!(store.published_post("pending").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_post_content() {
        let store = SqliteStore::in_memory().await.unwrap();
        store.insert_post(post("Notes", true)).await.unwrap();
        let old = backdate_post(&store, "notes").await;

        let updated = store
            .update_post_content("notes", "# Revised".to_owned())
            .await
            .unwrap();

        assert_eq!(updated.content, "# Revised");
        assert!(updated.updated_at > old);
        let entries = store.sitemap_entries().await.unwrap();
        assert_eq!(entries[0].updated_at, updated.updated_at);
    }

    #[tokio::test]
    async fn test_post_lifecycle_missing_slug_is_not_found() {
        let store = SqliteStore::in_memory().await.unwrap();

        let err = store.set_post_published("ghost", true).await.unwrap_err();
        assert!(matches!(err, ContentError::NotFound(_)), "got {err:?}");
        let err = store
            .update_post_content("ghost", String::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ContentError::NotFound(_)), "got {err:?}");
        let err = store.delete_post("ghost").await.unwrap_err();
        assert!(matches!(err, ContentError::NotFound(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_delete_post() {
        let store = SqliteStore::in_memory().await.unwrap();
        store.insert_post(post("Gone", true)).await.unwrap();

        store.delete_post("gone").await.unwrap();

        assert!(store.all_posts().await.unwrap().is_empty());
        // The slug is free again
        store.insert_post(post("Gone", true)).await.unwrap();
    }

    #[tokio::test]
    async fn test_all_posts_includes_drafts() {
        let store = SqliteStore::in_memory().await.unwrap();
        store.insert_post(post("Live", true)).await.unwrap();
        store.insert_post(post("Draft", false)).await.unwrap();

        let slugs: Vec<_> = store
            .all_posts()
            .await
            .unwrap()
            .into_iter()
            .map(|p| (p.slug, p.published))
            .collect();

        assert_eq!(
            slugs,
            vec![("draft".to_owned(), false), ("live".to_owned(), true)]
        );
    }

    #[tokio::test]
    async fn test_set_project_visible_and_delete() {
        let store = SqliteStore::in_memory().await.unwrap();
        let hidden = store
            .insert_project(project("Hidden", 0, false))
            .await
            .unwrap();
        assert!(store.visible_projects().await.unwrap().is_empty());
        assert_eq!(store.all_projects().await.unwrap().len(), 1);

        let shown = store.set_project_visible(hidden.id, true).await.unwrap();
        assert!(shown.visible);
        assert!(shown.updated_at >= hidden.updated_at);
        assert_eq!(store.visible_projects().await.unwrap().len(), 1);

        store.delete_project(hidden.id).await.unwrap();
        assert!(store.all_projects().await.unwrap().is_empty());

        let err = store.set_project_visible(hidden.id, true).await.unwrap_err();
        assert!(matches!(err, ContentError::NotFound(_)), "got {err:?}");
        let err = store.delete_project(hidden.id).await.unwrap_err();
        assert!(matches!(err, ContentError::NotFound(_)), "got {err:?}");
    }

    #[test]
    fn test_decode_tags() {
        assert!(decode_tags(None).unwrap().is_empty());
        assert!(decode_tags(Some("  ")).unwrap().is_empty());
        assert_eq!(decode_tags(Some(r#"["a","b"]"#)).unwrap(), vec!["a", "b"]);
        assert!(decode_tags(Some("not json")).is_err());
    }
}
