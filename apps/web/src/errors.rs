use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so JSON handlers can return `Result<T, AppError>`;
/// the HTML page renders the same variants as inline notices instead.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Data file not found: {}", .path.display())]
    MissingInput {
        path: PathBuf,
        expected: Vec<PathBuf>,
    },

    #[error(
        "Candidate {candidate_id} references job position {job_position}, \
         but the job table only has {job_count} rows"
    )]
    InvalidReference {
        candidate_id: u64,
        job_position: i64,
        job_count: usize,
    },

    #[error("Unexpected error: {0:#}")]
    Unexpected(#[from] anyhow::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::MissingInput { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::InvalidReference { .. } | AppError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::MissingInput { .. } => "MISSING_INPUT",
            AppError::InvalidReference { .. } => "INVALID_REFERENCE",
            AppError::Unexpected(_) => "UNEXPECTED_ERROR",
        }
    }

    /// Writes the error to the operator log. Unexpected errors get the full chain.
    pub fn report(&self) {
        match self {
            AppError::NotFound(_) | AppError::Validation(_) => {
                tracing::debug!("{self}");
            }
            AppError::MissingInput { path, expected } => {
                tracing::error!(path = %path.display(), ?expected, "Data file not found");
            }
            AppError::InvalidReference { .. } => {
                tracing::error!("{self}");
            }
            AppError::Unexpected(e) => {
                tracing::error!("Unexpected error: {e:?}");
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.report();

        let status = self.status_code();
        let mut error = json!({
            "code": self.code(),
            "message": self.to_string(),
        });
        if let AppError::MissingInput { expected, .. } = &self {
            error["expected_paths"] = json!(expected);
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}
