//! Application state for ATS API

use std::time::Duration;

use anyhow::{Context, Result};
use ats_engine::{AtsEngine, RuleSet, RuleSetConfig};
use resume_extract::{OcrConfig, ResumeExtractor};

const DEFAULT_OCR_TIMEOUT_SECS: u64 = 30;

pub struct AppState {
    pub engine: AtsEngine,
    pub extractor: ResumeExtractor,
    pub ocr_timeout: Duration,
}

impl AppState {
    pub fn new() -> Result<Self> {
        // Rule table: built-in reference table unless a JSON override is given
        let engine = match std::env::var("ATS_RULES_PATH") {
            Ok(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read rule table: {}", path))?;
                let config: RuleSetConfig = serde_json::from_str(&raw)
                    .with_context(|| format!("Invalid rule table JSON: {}", path))?;
                let rule_set = RuleSet::compile(config)?;
                tracing::info!(
                    "Loaded rule table from {} ({} rules, {} issue rules)",
                    path,
                    rule_set.rules.len(),
                    rule_set.issues.len()
                );
                AtsEngine::with_rules(rule_set)
            }
            Err(_) => AtsEngine::new(),
        };

        let language = std::env::var("OCR_LANGUAGE").unwrap_or_else(|_| "eng".to_string());
        let extractor = ResumeExtractor::with_ocr_config(OcrConfig { language });

        if !resume_extract::tesseract_available() {
            tracing::warn!("tesseract not found on PATH; JPEG uploads will fail");
        }

        let ocr_timeout = std::env::var("OCR_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_OCR_TIMEOUT_SECS));

        Ok(Self {
            engine,
            extractor,
            ocr_timeout,
        })
    }
}
