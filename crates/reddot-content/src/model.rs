//! Content types served by the public API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author recorded when a post is created without one.
pub const DEFAULT_AUTHOR: &str = "Red Dot Studio";

/// A blog post with its Markdown body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    /// Markdown source.
    pub content: String,
    pub cover_image: Option<String>,
    pub author: String,
    pub tags: Vec<String>,
    pub published: bool,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing projection of a post, without the body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PostSummary {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    pub author: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&BlogPost> for PostSummary {
    fn from(post: &BlogPost) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            slug: post.slug.clone(),
            excerpt: post.excerpt.clone(),
            cover_image: post.cover_image.clone(),
            author: post.author.clone(),
            tags: post.tags.clone(),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// A portfolio project.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub year: Option<String>,
    pub tags: Vec<String>,
    /// Ascending display order.
    pub sort_order: i64,
    pub visible: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Sitemap row for a published post.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SitemapEntry {
    pub slug: String,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a blog post.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewPost {
    pub title: String,
    /// Explicit slug. Derived from the title when `None`.
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: String,
    pub cover_image: Option<String>,
    /// Defaults to [`DEFAULT_AUTHOR`].
    pub author: Option<String>,
    pub tags: Vec<String>,
    pub published: bool,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

/// Payload for creating a portfolio project.
#[derive(Clone, Debug, Deserialize)]
pub struct NewProject {
    pub title: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub year: Option<String>,
    pub tags: Vec<String>,
    pub sort_order: i64,
    pub visible: bool,
}

impl Default for NewProject {
    fn default() -> Self {
        Self {
            title: String::new(),
            category: None,
            description: None,
            image_url: None,
            github_url: None,
            live_url: None,
            year: None,
            tags: Vec::new(),
            sort_order: 0,
            visible: true,
        }
    }
}

impl NewPost {
    /// Resolve the slug to store: the explicit one, or one derived from the title.
    pub(crate) fn resolved_slug(&self) -> String {
        match self.slug.as_deref().map(str::trim) {
            Some(slug) if !slug.is_empty() => crate::generate_slug(slug),
            _ => crate::generate_slug(&self.title),
        }
    }
}
