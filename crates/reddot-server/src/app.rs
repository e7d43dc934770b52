//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use reddot_content::ContentStore;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub(crate) fn create_router<S>(state: Arc<AppState<S>>) -> Router
where
    S: ContentStore + 'static,
{
    Router::new()
        .route("/api/health", get(handlers::health::get_health::<S>))
        .route("/api/blogs", get(handlers::blogs::list_posts::<S>))
        .route("/api/blogs/{slug}", get(handlers::blogs::get_post::<S>))
        .route("/api/blogs/{slug}/jsonld", get(handlers::blogs::get_post_jsonld::<S>))
        .route("/api/projects", get(handlers::projects::list_projects::<S>))
        .route("/api/sitemap.xml", get(handlers::sitemap::get_sitemap::<S>))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(security::cors_layer())
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}
