//! Resume text extraction
//!
//! Converts an uploaded document (PDF or JPEG) into plain text for scoring.
//! Two strategies behind one contract:
//! - PDF: text-layer extraction via pdf-extract, with a lopdf preflight
//! - JPEG: Tesseract OCR over the decoded raster
//!
//! Dispatch is by declared type only; the extractor never sniffs content.
//! OCR latency is unbounded, so servers should call `extract_with_timeout`
//! rather than blocking an async worker on `extract`.

pub mod error;
mod ocr;
mod pdf;

use shared_types::{DocumentKind, DocumentPayload};

pub use error::ExtractError;
pub use ocr::{tesseract_available, OcrConfig};

/// Type-dispatched document-to-text extractor.
#[derive(Debug, Clone, Default)]
pub struct ResumeExtractor {
    ocr: OcrConfig,
}

impl ResumeExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ocr_config(ocr: OcrConfig) -> Self {
        Self { ocr }
    }

    /// Resolve a declared MIME type (with filename-extension fallback) to a
    /// document kind, or fail with the unsupported-type error the caller
    /// surfaces as a user-visible rejection.
    pub fn resolve_kind(
        content_type: Option<&str>,
        filename: &str,
    ) -> Result<DocumentKind, ExtractError> {
        content_type
            .and_then(DocumentKind::from_mime)
            .or_else(|| DocumentKind::from_extension(filename))
            .ok_or_else(|| {
                ExtractError::UnsupportedType(
                    content_type.unwrap_or("unknown").to_string(),
                )
            })
    }

    /// Extract plain text from a document payload.
    ///
    /// Blocking: PDF extraction is CPU-bound and OCR can take seconds.
    pub fn extract(&self, payload: &DocumentPayload) -> Result<String, ExtractError> {
        match payload.kind {
            DocumentKind::Pdf => pdf::extract_pdf_text(&payload.bytes),
            DocumentKind::Jpeg => ocr::recognize(&payload.bytes, &self.ocr),
        }
    }

    /// Extract with a deadline, off the async path.
    ///
    /// Runs the blocking extraction on a worker thread; when the deadline
    /// expires the partial output is discarded and a timeout error is
    /// returned. There is no partial analysis result.
    #[cfg(feature = "server")]
    pub async fn extract_with_timeout(
        &self,
        payload: DocumentPayload,
        timeout: std::time::Duration,
    ) -> Result<String, ExtractError> {
        let extractor = self.clone();
        let work =
            tokio::task::spawn_blocking(move || extractor.extract(&payload));

        match tokio::time::timeout(timeout, work).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_error)) => Err(ExtractError::Task(join_error.to_string())),
            Err(_) => Err(ExtractError::Timeout(timeout.as_secs())),
        }
    }
}
