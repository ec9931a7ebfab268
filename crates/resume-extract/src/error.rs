//! Error types for resume text extraction

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported document type: {0}")]
    UnsupportedType(String),

    #[error("Failed to parse PDF: {0}")]
    Pdf(String),

    #[error("PDF is password-protected")]
    PasswordProtected,

    #[error("Unreadable image: {0}")]
    InvalidImage(String),

    #[error("OCR failed: {0}")]
    Ocr(String),

    #[error("OCR engine not available: {0}")]
    OcrUnavailable(String),

    #[error("Extraction timed out after {0}s")]
    Timeout(u64),

    #[error("Extraction task failed: {0}")]
    Task(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ExtractError {
    /// True when the failure is the caller declaring a type outside the
    /// supported set, as opposed to the document itself being unreadable.
    pub fn is_unsupported_type(&self) -> bool {
        matches!(self, ExtractError::UnsupportedType(_))
    }
}
