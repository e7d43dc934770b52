//! Content store trait and error types.

use std::future::Future;

use crate::model::{BlogPost, NewPost, NewProject, PostSummary, Project, SitemapEntry};

/// Content store error.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// Record does not exist.
    #[error("Not found: {0}")]
    NotFound(String),
    /// A post with this slug already exists.
    #[error("Slug already exists: {slug}")]
    Conflict {
        /// The conflicting slug.
        slug: String,
    },
    /// Rejected payload.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Database driver error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    /// Tag list (de)serialization error.
    #[error("Encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Storage for blog posts and portfolio projects.
///
/// The `published_*`, `visible_projects` and `sitemap_entries` reads only
/// return public content. `all_posts` and `all_projects` include drafts and
/// hidden projects for authoring tools. Implementations must be shareable
/// across request handlers.
pub trait ContentStore: Send + Sync {
    /// Published posts, newest `created_at` first.
    fn published_posts(&self) -> impl Future<Output = Result<Vec<PostSummary>, ContentError>> + Send;

    /// A published post by slug. Drafts are reported as `None`.
    fn published_post(
        &self,
        slug: &str,
    ) -> impl Future<Output = Result<Option<BlogPost>, ContentError>> + Send;

    /// Visible projects by ascending `sort_order`, then newest first.
    fn visible_projects(&self) -> impl Future<Output = Result<Vec<Project>, ContentError>> + Send;

    /// Slugs and modification times of published posts, most recently updated first.
    fn sitemap_entries(
        &self,
    ) -> impl Future<Output = Result<Vec<SitemapEntry>, ContentError>> + Send;

    /// Create a post.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Conflict`] if the resolved slug is taken and
    /// [`ContentError::InvalidInput`] if the title or slug is empty.
    fn insert_post(
        &self,
        post: NewPost,
    ) -> impl Future<Output = Result<BlogPost, ContentError>> + Send;

    /// Create a project.
    fn insert_project(
        &self,
        project: NewProject,
    ) -> impl Future<Output = Result<Project, ContentError>> + Send;

    /// Every post including drafts, newest `created_at` first.
    fn all_posts(&self) -> impl Future<Output = Result<Vec<BlogPost>, ContentError>> + Send;

    /// Every project including hidden ones, in display order.
    fn all_projects(&self) -> impl Future<Output = Result<Vec<Project>, ContentError>> + Send;

    /// Replace a post's Markdown body and bump `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::NotFound`] if no post has this slug.
    fn update_post_content(
        &self,
        slug: &str,
        content: String,
    ) -> impl Future<Output = Result<BlogPost, ContentError>> + Send;

    /// Publish or unpublish a post and bump `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::NotFound`] if no post has this slug.
    fn set_post_published(
        &self,
        slug: &str,
        published: bool,
    ) -> impl Future<Output = Result<BlogPost, ContentError>> + Send;

    /// Delete a post.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::NotFound`] if no post has this slug.
    fn delete_post(&self, slug: &str) -> impl Future<Output = Result<(), ContentError>> + Send;

    /// Show or hide a project and bump `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::NotFound`] if no project has this id.
    fn set_project_visible(
        &self,
        id: i64,
        visible: bool,
    ) -> impl Future<Output = Result<Project, ContentError>> + Send;

    /// Delete a project.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::NotFound`] if no project has this id.
    fn delete_project(&self, id: i64) -> impl Future<Output = Result<(), ContentError>> + Send;
}

pub(crate) fn post_not_found(slug: &str) -> ContentError {
    ContentError::NotFound(format!("post {slug:?}"))
}

pub(crate) fn project_not_found(id: i64) -> ContentError {
    ContentError::NotFound(format!("project #{id}"))
}

/// Validate a post payload and return the slug to store.
pub(crate) fn validate_new_post(post: &NewPost) -> Result<String, ContentError> {
    if post.title.trim().is_empty() {
        return Err(ContentError::InvalidInput("title cannot be empty".to_owned()));
    }
    let slug = post.resolved_slug();
    if slug.is_empty() {
        return Err(ContentError::InvalidInput(format!(
            "cannot derive a slug from {:?}",
            post.slug.as_deref().unwrap_or(&post.title)
        )));
    }
    Ok(slug)
}

/// Validate a project payload.
pub(crate) fn validate_new_project(project: &NewProject) -> Result<(), ContentError> {
    if project.title.trim().is_empty() {
        return Err(ContentError::InvalidInput("title cannot be empty".to_owned()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_new_post_empty_title() {
        let err = validate_new_post(&NewPost::default()).unwrap_err();
        assert!(matches!(err, ContentError::InvalidInput(_)));
    }

    #[test]
    fn test_validate_new_post_symbol_title() {
        let post = NewPost {
            title: "???".to_owned(),
            ..Default::default()
        };
        let err = validate_new_post(&post).unwrap_err();
        assert!(err.to_string().contains("cannot derive a slug"));
    }

    #[test]
    fn test_validate_new_post_ok() {
        let post = NewPost {
            title: "Studio News".to_owned(),
            ..Default::default()
        };
        assert_eq!(validate_new_post(&post).unwrap(), "studio-news");
    }

    #[test]
    fn test_validate_new_project_empty_title() {
        assert!(validate_new_project(&NewProject::default()).is_err());
    }

    #[test]
    fn test_conflict_display() {
        let err = ContentError::Conflict {
            slug: "hello".to_owned(),
        };
        assert_eq!(err.to_string(), "Slug already exists: hello");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ContentError>();
    }
}
