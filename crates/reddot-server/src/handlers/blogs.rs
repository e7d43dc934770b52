//! Blog post endpoints.
//!
//! Serves the published post listing, single posts with their rendered
//! HTML body, and schema.org `BlogPosting` structured data.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use chrono::{DateTime, Utc};
use reddot_content::{BlogPost, ContentStore, PostSummary};
use serde::Serialize;

use crate::error::ServerError;
use crate::state::AppState;

/// Response for GET /api/blogs/{slug}.
#[derive(Serialize)]
pub(crate) struct PostResponse {
    #[serde(flatten)]
    post: BlogPost,
    /// Rendered HTML fragment of `post.content`.
    content_html: String,
}

/// schema.org `BlogPosting` document.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BlogPosting {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    headline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    author: Organization,
    date_published: DateTime<Utc>,
    date_modified: DateTime<Utc>,
    publisher: Organization,
}

#[derive(Serialize)]
pub(crate) struct Organization {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: String,
}

impl Organization {
    fn new(name: impl Into<String>) -> Self {
        Self {
            kind: "Organization",
            name: name.into(),
        }
    }
}

/// First non-blank value, cloned.
fn first_present(candidates: &[Option<&str>]) -> Option<String> {
    candidates
        .iter()
        .flatten()
        .find(|s| !s.trim().is_empty())
        .map(|s| (*s).to_owned())
}

impl BlogPosting {
    fn from_post(post: BlogPost, site_name: &str) -> Self {
        let headline = first_present(&[post.meta_title.as_deref()]).unwrap_or(post.title);
        let description =
            first_present(&[post.meta_description.as_deref(), post.excerpt.as_deref()]);
        let author = first_present(&[Some(post.author.as_str())])
            .unwrap_or_else(|| site_name.to_owned());

        Self {
            context: "https://schema.org",
            kind: "BlogPosting",
            headline,
            description,
            image: post.cover_image,
            author: Organization::new(author),
            date_published: post.created_at,
            date_modified: post.updated_at,
            publisher: Organization::new(site_name),
        }
    }
}

/// Handle GET /api/blogs.
pub(crate) async fn list_posts<S: ContentStore>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<PostSummary>>, ServerError> {
    Ok(Json(state.store.published_posts().await?))
}

/// Handle GET /api/blogs/{slug}.
pub(crate) async fn get_post<S: ContentStore>(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<PostResponse>, ServerError> {
    let post = find_post(&state, slug).await?;
    let content_html = state.renderer.render(post.content.as_str());

    Ok(Json(PostResponse { post, content_html }))
}

/// Handle GET /api/blogs/{slug}/jsonld.
pub(crate) async fn get_post_jsonld<S: ContentStore>(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<BlogPosting>, ServerError> {
    let post = find_post(&state, slug).await?;
    Ok(Json(BlogPosting::from_post(post, &state.site_name)))
}

async fn find_post<S: ContentStore>(
    state: &AppState<S>,
    slug: String,
) -> Result<BlogPost, ServerError> {
    state
        .store
        .published_post(&slug)
        .await?
        .ok_or(ServerError::PostNotFound(slug))
}
