use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::generator::GenerationError;

#[derive(Debug)]
pub enum AppError {
    Generation(GenerationError),
    Internal(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Generation(err) => write!(f, "{err}"),
            AppError::Internal(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for AppError {}

/// Every failure surfaces as a 500 carrying the error's description.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Generation(err) => tracing::error!("Generation failed: {err}"),
            AppError::Internal(msg) => tracing::error!("Internal error: {msg}"),
        }

        let body = json!({ "error": self.to_string() });
        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}

impl From<GenerationError> for AppError {
    fn from(err: GenerationError) -> Self {
        AppError::Generation(err)
    }
}
