//! Blog post and portfolio project storage for the Red Dot Studio content engine.
//!
//! The public API only ever exposes published posts and visible projects.
//! Storage is abstracted behind the [`ContentStore`] trait:
//!
//! - [`SqliteStore`] persists content in a `SQLite` database
//! - [`MemoryStore`] keeps content in memory for tests (behind the `mock` feature)
//!
//! # Example
//!
//! ```ignore
//! use reddot_content::{ContentStore, NewPost, SqliteStore};
//!
//! let store = SqliteStore::connect("sqlite://reddot.db").await?;
//! store
//!     .insert_post(NewPost {
//!         title: "Hello World".to_owned(),
//!         content: "# Hello".to_owned(),
//!         published: true,
//!         ..Default::default()
//!     })
//!     .await?;
//! let posts = store.published_posts().await?;
//! ```

#[cfg(any(test, feature = "mock"))]
mod memory;
mod model;
mod slug;
mod sqlite;
mod store;

#[cfg(any(test, feature = "mock"))]
pub use memory::MemoryStore;
pub use model::{
    BlogPost, DEFAULT_AUTHOR, NewPost, NewProject, PostSummary, Project, SitemapEntry,
};
pub use slug::generate_slug;
pub use sqlite::SqliteStore;
pub use store::{ContentError, ContentStore};
