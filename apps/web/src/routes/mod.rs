pub mod admin;
pub mod candidates;
pub mod health;
pub mod search;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(search::handle_search_page))
        .route("/health", get(health::health_handler))
        .route("/api/v1/candidates/:id", get(candidates::handle_get_candidate))
        .route(
            "/api/v1/candidates/:id/recommendations",
            get(candidates::handle_get_recommendations),
        )
        .route("/api/v1/admin/reload", post(admin::handle_reload))
        .with_state(state)
}
