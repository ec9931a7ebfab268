//! Data models for ATS API

use serde::Serialize;
use shared_types::Analysis;

/// Successful analysis response
#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub analysis: Analysis,
    #[serde(rename = "originalName")]
    pub original_name: String,
}

/// Liveness response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}
