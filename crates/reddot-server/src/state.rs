//! Application state.
//!
//! Shared state for all request handlers.

use reddot_content::ContentStore;
use reddot_markdown::MarkdownRenderer;

/// Application state shared across all handlers.
pub(crate) struct AppState<S> {
    /// Content backend.
    pub(crate) store: S,
    /// Renderer for post bodies, configured with the site theme.
    pub(crate) renderer: MarkdownRenderer,
    /// Organization name for JSON-LD author and publisher.
    pub(crate) site_name: String,
    /// Public base URL for sitemap links (`None` derives it from request headers).
    pub(crate) base_url: Option<String>,
    /// Application version reported by the health check.
    pub(crate) version: String,
}

impl<S: ContentStore> AppState<S> {
    pub(crate) fn new(store: S, renderer: MarkdownRenderer) -> Self {
        Self {
            store,
            renderer,
            site_name: reddot_content::DEFAULT_AUTHOR.to_owned(),
            base_url: None,
            version: String::new(),
        }
    }
}
