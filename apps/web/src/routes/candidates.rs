//! JSON API over the same lookups the search page uses.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::lookup::{
    find_profile, recommend, CandidateProfile, ProfileLookup, RecommendationList,
    RecommendationLookup,
};
use crate::state::AppState;

/// GET /api/v1/candidates/:id
pub async fn handle_get_candidate(
    State(state): State<AppState>,
    Path(candidate_id): Path<u64>,
) -> Result<Json<CandidateProfile>, AppError> {
    let dataset = state.dataset().await?;
    match find_profile(candidate_id, &dataset.candidates) {
        ProfileLookup::Found(profile) => Ok(Json(profile)),
        ProfileLookup::NotFound => Err(AppError::NotFound(format!(
            "Candidate {candidate_id} not found"
        ))),
    }
}

/// GET /api/v1/candidates/:id/recommendations
///
/// Ranked job list, highest hybrid score first.
pub async fn handle_get_recommendations(
    State(state): State<AppState>,
    Path(candidate_id): Path<u64>,
) -> Result<Json<RecommendationList>, AppError> {
    let dataset = state.dataset().await?;
    match recommend(candidate_id, &dataset.jobs, &dataset.edges)? {
        RecommendationLookup::Found(list) => Ok(Json(list)),
        RecommendationLookup::NoRecommendations => Err(AppError::NotFound(format!(
            "No recommendations for candidate {candidate_id}"
        ))),
    }
}
