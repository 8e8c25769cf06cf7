use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub was_cached: bool,
    pub candidates: usize,
    pub jobs: usize,
    pub edges: usize,
}

/// POST /api/v1/admin/reload
///
/// Drops the cached tables for the configured paths and reads them again.
pub async fn handle_reload(
    State(state): State<AppState>,
) -> Result<Json<ReloadResponse>, AppError> {
    let was_cached = state.cache.invalidate(&state.config.data_paths);
    info!(was_cached, "Dataset cache invalidated");

    let dataset = state.dataset().await?;
    Ok(Json(ReloadResponse {
        was_cached,
        candidates: dataset.candidates.len(),
        jobs: dataset.jobs.len(),
        edges: dataset.edges.len(),
    }))
}
