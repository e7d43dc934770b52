//! Health check endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use reddot_content::ContentStore;
use serde::Serialize;

use crate::state::AppState;

/// Response for GET /api/health.
#[derive(Serialize)]
pub(crate) struct HealthResponse {
    status: &'static str,
    version: String,
}

/// Handle GET /api/health.
pub(crate) async fn get_health<S: ContentStore>(
    State(state): State<Arc<AppState<S>>>,
) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: state.version.clone(),
    })
}
