//! Error types for ATS API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use resume_extract::ExtractError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No file uploaded")]
    MissingFile,

    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::MissingFile => (StatusCode::BAD_REQUEST, "No file uploaded".to_string()),
            ApiError::InvalidUpload(msg) => {
                (StatusCode::BAD_REQUEST, format!("Invalid upload: {}", msg))
            }
            ApiError::Extract(e) if e.is_unsupported_type() => (
                StatusCode::BAD_REQUEST,
                "Only PDF and JPG files are allowed!".to_string(),
            ),
            ApiError::Extract(e) => {
                tracing::error!("Error processing file: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error processing file".to_string(),
                )
            }
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
