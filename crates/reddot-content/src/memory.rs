//! In-memory content store for testing.
//!
//! Provides [`MemoryStore`] for exercising handlers without a database.

use std::sync::RwLock;

use chrono::{DateTime, Utc};

use crate::model::{BlogPost, NewPost, NewProject, PostSummary, Project, SitemapEntry};
use crate::store::{
    ContentError, ContentStore, post_not_found, project_not_found, validate_new_post,
    validate_new_project,
};

/// In-memory content store.
///
/// Use the builder methods to seed test data:
///
/// ```ignore
/// use reddot_content::{MemoryStore, NewPost};
///
/// let store = MemoryStore::new().with_post(NewPost {
///     title: "Hello".to_owned(),
///     published: true,
///     ..Default::default()
/// });
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    posts: RwLock<Vec<BlogPost>>,
    projects: RwLock<Vec<Project>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a post, stamped with the current time.
    ///
    /// # Panics
    ///
    /// Panics if the post is rejected by validation.
    #[must_use]
    pub fn with_post(self, post: NewPost) -> Self {
        self.with_post_at(post, Utc::now())
    }

    /// Add a post with fixed creation and update times.
    ///
    /// # Panics
    ///
    /// Panics if the post is rejected by validation or the lock is poisoned.
    #[must_use]
    pub fn with_post_at(self, post: NewPost, at: DateTime<Utc>) -> Self {
        self.store_post(post, at)
            .unwrap_or_else(|e| panic!("invalid seed post: {e}"));
        self
    }

    /// Add a project, stamped with the current time.
    ///
    /// # Panics
    ///
    /// Panics if the project is rejected by validation or the lock is poisoned.
    #[must_use]
    pub fn with_project(self, project: NewProject) -> Self {
        self.store_project(project, Utc::now())
            .unwrap_or_else(|e| panic!("invalid seed project: {e}"));
        self
    }

    fn store_post(&self, post: NewPost, at: DateTime<Utc>) -> Result<BlogPost, ContentError> {
        let slug = validate_new_post(&post)?;
        let mut posts = self.posts.write().unwrap();
        if posts.iter().any(|p| p.slug == slug) {
            return Err(ContentError::Conflict { slug });
        }

        let stored = BlogPost {
            id: next_id(posts.iter().map(|p| p.id)),
            title: post.title.trim().to_owned(),
            slug,
            excerpt: post.excerpt,
            content: post.content,
            cover_image: post.cover_image,
            author: post
                .author
                .filter(|a| !a.trim().is_empty())
                .unwrap_or_else(|| crate::DEFAULT_AUTHOR.to_owned()),
            tags: post.tags,
            published: post.published,
            meta_title: post.meta_title,
            meta_description: post.meta_description,
            created_at: at,
            updated_at: at,
        };
        posts.push(stored.clone());
        Ok(stored)
    }

    fn store_project(
        &self,
        project: NewProject,
        at: DateTime<Utc>,
    ) -> Result<Project, ContentError> {
        validate_new_project(&project)?;
        let mut projects = self.projects.write().unwrap();

        let stored = Project {
            id: next_id(projects.iter().map(|p| p.id)),
            title: project.title.trim().to_owned(),
            category: project.category,
            description: project.description,
            image_url: project.image_url,
            github_url: project.github_url,
            live_url: project.live_url,
            year: project.year,
            tags: project.tags,
            sort_order: project.sort_order,
            visible: project.visible,
            created_at: at,
            updated_at: at,
        };
        projects.push(stored.clone());
        Ok(stored)
    }
}

fn next_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().unwrap_or(0) + 1
}

impl ContentStore for MemoryStore {
    async fn published_posts(&self) -> Result<Vec<PostSummary>, ContentError> {
        let posts = self.posts.read().unwrap();
        let mut published: Vec<&BlogPost> = posts.iter().filter(|p| p.published).collect();
        published.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(published.into_iter().map(PostSummary::from).collect())
    }

    async fn published_post(&self, slug: &str) -> Result<Option<BlogPost>, ContentError> {
        let posts = self.posts.read().unwrap();
        Ok(posts
            .iter()
            .find(|p| p.published && p.slug == slug)
            .cloned())
    }

    async fn visible_projects(&self) -> Result<Vec<Project>, ContentError> {
        let projects = self.projects.read().unwrap();
        let mut visible: Vec<Project> = projects.iter().filter(|p| p.visible).cloned().collect();
        sort_projects(&mut visible);
        Ok(visible)
    }

    async fn sitemap_entries(&self) -> Result<Vec<SitemapEntry>, ContentError> {
        let posts = self.posts.read().unwrap();
        let mut published: Vec<&BlogPost> = posts.iter().filter(|p| p.published).collect();
        published.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(b.id.cmp(&a.id)));
        Ok(published
            .into_iter()
            .map(|p| SitemapEntry {
                slug: p.slug.clone(),
                updated_at: p.updated_at,
            })
            .collect())
    }

    async fn insert_post(&self, post: NewPost) -> Result<BlogPost, ContentError> {
        self.store_post(post, Utc::now())
    }

    async fn insert_project(&self, project: NewProject) -> Result<Project, ContentError> {
        self.store_project(project, Utc::now())
    }

    async fn all_posts(&self) -> Result<Vec<BlogPost>, ContentError> {
        let mut posts = self.posts.read().unwrap().clone();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(posts)
    }

    async fn all_projects(&self) -> Result<Vec<Project>, ContentError> {
        let mut projects = self.projects.read().unwrap().clone();
        sort_projects(&mut projects);
        Ok(projects)
    }

    async fn update_post_content(
        &self,
        slug: &str,
        content: String,
    ) -> Result<BlogPost, ContentError> {
        self.modify_post(slug, |post| post.content = content)
    }

    async fn set_post_published(
        &self,
        slug: &str,
        published: bool,
    ) -> Result<BlogPost, ContentError> {
        self.modify_post(slug, |post| post.published = published)
    }

    async fn delete_post(&self, slug: &str) -> Result<(), ContentError> {
        let mut posts = self.posts.write().unwrap();
        let index = posts
            .iter()
            .position(|p| p.slug == slug)
            .ok_or_else(|| post_not_found(slug))?;
        posts.remove(index);
        Ok(())
    }

    async fn set_project_visible(&self, id: i64, visible: bool) -> Result<Project, ContentError> {
        let mut projects = self.projects.write().unwrap();
        let project = projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| project_not_found(id))?;
        project.visible = visible;
        project.updated_at = Utc::now();
        Ok(project.clone())
    }

    async fn delete_project(&self, id: i64) -> Result<(), ContentError> {
        let mut projects = self.projects.write().unwrap();
        let index = projects
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| project_not_found(id))?;
        projects.remove(index);
        Ok(())
    }
}

impl MemoryStore {
    /// Apply `change` to the post with `slug` and bump its `updated_at`.
    fn modify_post(
        &self,
        slug: &str,
        change: impl FnOnce(&mut BlogPost),
    ) -> Result<BlogPost, ContentError> {
        let mut posts = self.posts.write().unwrap();
        let post = posts
            .iter_mut()
            .find(|p| p.slug == slug)
            .ok_or_else(|| post_not_found(slug))?;
        change(post);
        post.updated_at = Utc::now();
        Ok(post.clone())
    }
}

fn sort_projects(projects: &mut [Project]) {
    projects.sort_by(|a, b| {
        a.sort_order
            .cmp(&b.sort_order)
            .then(b.created_at.cmp(&a.created_at))
            .then(b.id.cmp(&a.id))
    });
}
