//! Tesseract OCR over raster images
//!
//! Decodes the uploaded image, writes it into a scoped temp directory and
//! shells out to the `tesseract` binary with the English language model.
//! Recognition output passes through unchanged; confidence is not surfaced
//! or thresholded, and empty or garbled text is a valid result.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

use crate::error::ExtractError;

/// OCR engine configuration.
#[derive(Debug, Clone)]
pub struct OcrConfig {
    /// Tesseract language model (e.g. "eng")
    pub language: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            language: "eng".to_string(),
        }
    }
}

/// Check whether the tesseract binary is on PATH.
pub fn tesseract_available() -> bool {
    Command::new("tesseract")
        .arg("--version")
        .output()
        .is_ok()
}

/// Recognize text in image bytes.
pub(crate) fn recognize(bytes: &[u8], config: &OcrConfig) -> Result<String, ExtractError> {
    // Decode first so corrupt uploads fail with a typed error instead of
    // a tesseract stderr dump.
    let decoded =
        image::load_from_memory(bytes).map_err(|e| ExtractError::InvalidImage(e.to_string()))?;

    let temp_dir = TempDir::new()?;
    let input_path = temp_dir.path().join("resume.png");
    decoded
        .save(&input_path)
        .map_err(|e| ExtractError::InvalidImage(e.to_string()))?;

    let text = run_tesseract(&input_path, config)?;

    tracing::debug!(chars = text.len(), "OCR recognition complete");

    Ok(text)
}

fn run_tesseract(image_path: &Path, config: &OcrConfig) -> Result<String, ExtractError> {
    let output = Command::new("tesseract")
        .arg(image_path)
        .arg("stdout")
        .args(["-l", &config.language])
        .args(["--oem", "3"])
        .args(["--psm", "3"])
        .output();

    match output {
        Ok(output) => {
            if output.status.success() {
                Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
            } else {
                let stderr = String::from_utf8_lossy(&output.stderr);
                Err(ExtractError::Ocr(format!("tesseract failed: {}", stderr)))
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(ExtractError::OcrUnavailable(
            "tesseract not found (install tesseract-ocr)".to_string(),
        )),
        Err(e) => Err(ExtractError::Io(e)),
    }
}
