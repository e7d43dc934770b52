//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use reddot_content::ContentError;
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// No published post with the given slug.
    #[error("Blog post not found: {0}")]
    PostNotFound(String),

    /// Content store failure.
    #[error("{0}")]
    Content(#[from] ContentError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::PostNotFound(_) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Blog post not found"}),
            ),
            Self::Content(ContentError::NotFound(what)) => (
                StatusCode::NOT_FOUND,
                json!({"error": format!("Not found: {what}")}),
            ),
            Self::Content(ContentError::Conflict { slug }) => (
                StatusCode::CONFLICT,
                json!({"error": "Slug already exists", "slug": slug}),
            ),
            Self::Content(ContentError::InvalidInput(message)) => {
                (StatusCode::BAD_REQUEST, json!({"error": message}))
            }
            Self::Content(e) => {
                tracing::error!(error = %e, "Content store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": "Internal server error"}),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
