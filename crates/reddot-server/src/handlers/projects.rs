//! Portfolio projects endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use reddot_content::{ContentStore, Project};

use crate::error::ServerError;
use crate::state::AppState;

/// Handle GET /api/projects.
pub(crate) async fn list_projects<S: ContentStore>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<Project>>, ServerError> {
    Ok(Json(state.store.visible_projects().await?))
}
