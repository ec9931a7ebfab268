//! PDF text-layer extraction
//!
//! Reads the byte stream as a PDF and concatenates the text layer of all
//! pages in page order. A scanned PDF with no text layer yields an empty
//! string rather than an error; there is no OCR fallback for PDFs.

use lopdf::Document;
use pdf_extract::extract_text_from_mem;

use crate::error::ExtractError;

/// Extract the text layer from PDF bytes.
pub(crate) fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractError> {
    // Structural preflight: reject corrupt and encrypted documents with a
    // typed error before handing the bytes to the text extractor.
    let doc = Document::load_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))?;
    if doc.is_encrypted() {
        return Err(ExtractError::PasswordProtected);
    }
    let page_count = doc.get_pages().len();
    drop(doc);

    let text = match extract_text_from_mem(bytes) {
        Ok(text) => text,
        Err(e) => {
            let message = e.to_string();
            let lowered = message.to_lowercase();
            if lowered.contains("encrypted") || lowered.contains("password") {
                return Err(ExtractError::PasswordProtected);
            }
            return Err(ExtractError::Pdf(message));
        }
    };

    tracing::debug!(
        pages = page_count,
        chars = text.len(),
        "extracted PDF text layer"
    );

    Ok(text)
}
