use std::num::IntErrorKind;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::locale;
use crate::lookup::{find_profile, recommend};
use crate::render::{render_page, PageBody, SearchResults};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    /// Kept as text so malformed input renders a notice instead of a bare 400.
    pub candidate_id: Option<String>,
}

/// GET /
///
/// Renders the search form. When the form was submitted, also renders the
/// candidate's profile and ranked recommendations underneath it.
pub async fn handle_search_page(
    State(state): State<AppState>,
    Query(form): Query<SearchForm>,
) -> (StatusCode, Html<String>) {
    let Some(raw) = form
        .candidate_id
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
    else {
        return (StatusCode::OK, Html(render_page(None, &PageBody::Empty)));
    };

    let (input, body) = match parse_candidate_id(raw) {
        Ok(candidate_id) => (Some(candidate_id), search(&state, candidate_id).await),
        Err(err) => (None, PageBody::Failed(err)),
    };

    let status = match &body {
        PageBody::Failed(err)
        | PageBody::Results(SearchResults {
            recommendations: Err(err),
            ..
        }) => {
            err.report();
            err.status_code()
        }
        _ => StatusCode::OK,
    };

    (status, Html(render_page(input, &body)))
}

async fn search(state: &AppState, candidate_id: u64) -> PageBody {
    info!(candidate_id, "Candidate search submitted");

    let dataset = match state.dataset().await {
        Ok(dataset) => dataset,
        Err(err) => return PageBody::Failed(err),
    };

    PageBody::Results(SearchResults {
        candidate_id,
        profile: find_profile(candidate_id, &dataset.candidates),
        recommendations: recommend(candidate_id, &dataset.jobs, &dataset.edges),
    })
}

/// The validation message is the notice shown on the page.
pub fn parse_candidate_id(raw: &str) -> Result<u64, AppError> {
    raw.parse::<u64>().map_err(|err| {
        let message = match err.kind() {
            IntErrorKind::PosOverflow => locale::CANDIDATE_ID_TOO_LARGE,
            _ => locale::INVALID_INPUT,
        };
        AppError::Validation(message.to_string())
    })
}
