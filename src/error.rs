use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Request payload missing, empty or otherwise unusable
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Failure while aggregating popularity, vectorizing or ranking
    #[error("Computation error: {0}")]
    Computation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Genre catalog could not be loaded at startup
    #[error("Catalog error: {0}")]
    Catalog(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Computation(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Catalog(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        if status.is_server_error() {
            tracing::error!(status = %status, error = %message, "Request failed");
        }

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
