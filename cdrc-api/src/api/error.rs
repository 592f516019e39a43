use crate::application::ApplicationError;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error as ThisError;
use tracing::error;

/// The only message clients ever see for a failed request; details stay in the log.
const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

#[derive(Debug, ThisError)]
pub enum ApiError {
    #[error("application error: {0}")]
    Application(#[from] ApplicationError),
}

#[derive(Debug, Clone, Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Application(err) => {
                error!(kind = err.kind(), "request failed: {err}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = ErrorResponse {
            error: INTERNAL_ERROR_MESSAGE.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
