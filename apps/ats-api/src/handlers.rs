//! HTTP handlers for ATS API

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    routing::{get, post},
    Json, Router,
};
use sha2::{Digest, Sha256};
use shared_types::DocumentPayload;
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{HealthResponse, UploadResponse};
use crate::state::AppState;

/// 10MB upload limit, matching the MIME allow-list enforced below
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/upload", post(upload))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "ATS Checker API is running".to_string(),
    })
}

/// Analyze an uploaded resume (PDF or JPEG)
pub async fn upload(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::InvalidUpload(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name != "resume" && name != "file" {
            continue;
        }

        let filename = field
            .file_name()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        let content_type = field.content_type().map(|s| s.to_string());

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::InvalidUpload(e.to_string()))?;

        let kind =
            resume_extract::ResumeExtractor::resolve_kind(content_type.as_deref(), &filename)?;

        let document_hash = hex::encode(Sha256::digest(&data));
        tracing::info!(
            "Received upload: '{}' ({}, {} bytes, sha256 {})",
            filename,
            kind,
            data.len(),
            document_hash
        );

        let payload = DocumentPayload::new(kind, data.to_vec());
        let text = state
            .extractor
            .extract_with_timeout(payload, state.ocr_timeout)
            .await?;

        let analysis = state.engine.analyze(&text);

        tracing::info!(
            "Analyzed '{}': score {} ({})",
            filename,
            analysis.score,
            analysis.status
        );

        return Ok(Json(UploadResponse {
            success: true,
            analysis,
            original_name: filename,
        }));
    }

    Err(ApiError::MissingFile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::util::ServiceExt;

    fn test_app() -> Router {
        let state = Arc::new(AppState::new().expect("state builds without env overrides"));
        router().with_state(state)
    }

    fn multipart_body(field: &str, filename: &str, content_type: &str, data: &str) -> (String, String) {
        let boundary = "test-boundary-7MA4YWxkTrZu0gW";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
             Content-Type: {content_type}\r\n\r\n\
             {data}\r\n\
             --{boundary}--\r\n"
        );
        (
            format!("multipart/form-data; boundary={boundary}"),
            body,
        )
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "OK");
    }

    #[tokio::test]
    async fn test_upload_without_file_is_rejected() {
        let (content_type, body) =
            multipart_body("unrelated", "notes.txt", "text/plain", "hello");

        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/upload")
                    .header("content-type", content_type)
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "No file uploaded");
    }

    #[tokio::test]
    async fn test_upload_unsupported_type_is_rejected() {
        let (content_type, body) =
            multipart_body("resume", "resume.docx", "text/plain", "my resume");

        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/upload")
                    .header("content-type", content_type)
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Only PDF and JPG files are allowed!");
    }

    #[tokio::test]
    async fn test_upload_corrupt_pdf_is_a_processing_error() {
        let (content_type, body) = multipart_body(
            "resume",
            "resume.pdf",
            "application/pdf",
            "this is not a pdf",
        );

        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/upload")
                    .header("content-type", content_type)
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Error processing file");
    }

    #[tokio::test]
    async fn test_upload_corrupt_jpeg_is_a_processing_error() {
        let (content_type, body) =
            multipart_body("file", "scan.jpg", "image/jpeg", "not an image");

        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/upload")
                    .header("content-type", content_type)
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
