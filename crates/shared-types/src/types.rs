use serde::{Deserialize, Serialize};

/// Supported resume document types.
///
/// Dispatch is by declared type only. A JPEG uploaded with a `.pdf`
/// extension is the caller's error, not ours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Jpeg,
}

impl DocumentKind {
    /// Resolve a declared MIME type to a document kind.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.to_ascii_lowercase().as_str() {
            "application/pdf" => Some(DocumentKind::Pdf),
            "image/jpeg" | "image/jpg" => Some(DocumentKind::Jpeg),
            _ => None,
        }
    }

    /// Resolve a filename extension to a document kind.
    pub fn from_extension(filename: &str) -> Option<Self> {
        let ext = filename.rsplit_once('.')?.1.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "jpg" | "jpeg" => Some(DocumentKind::Jpeg),
            _ => None,
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentKind::Pdf => write!(f, "pdf"),
            DocumentKind::Jpeg => write!(f, "jpeg"),
        }
    }
}

/// An uploaded document held in memory for the duration of one extraction.
#[derive(Debug, Clone)]
pub struct DocumentPayload {
    pub kind: DocumentKind,
    pub bytes: Vec<u8>,
}

impl DocumentPayload {
    pub fn new(kind: DocumentKind, bytes: Vec<u8>) -> Self {
        Self { kind, bytes }
    }
}

/// Qualitative verdict over an ATS score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AtsStatus {
    #[serde(rename = "Good Resume")]
    Good,
    #[serde(rename = "Average Resume")]
    Average,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl AtsStatus {
    /// Map a clamped score to its status band. Boundary values (exactly 80,
    /// exactly 60) belong to the higher band.
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            AtsStatus::Good
        } else if score >= 60 {
            AtsStatus::Average
        } else {
            AtsStatus::NeedsImprovement
        }
    }

    pub fn color(&self) -> StatusColor {
        match self {
            AtsStatus::Good => StatusColor::Green,
            AtsStatus::Average => StatusColor::Orange,
            AtsStatus::NeedsImprovement => StatusColor::Red,
        }
    }
}

impl std::fmt::Display for AtsStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AtsStatus::Good => write!(f, "Good Resume"),
            AtsStatus::Average => write!(f, "Average Resume"),
            AtsStatus::NeedsImprovement => write!(f, "Needs Improvement"),
        }
    }
}

/// Display color associated with a status band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    Green,
    Orange,
    Red,
}

/// Result of scoring one resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    pub score: u32,
    pub status: AtsStatus,
    #[serde(rename = "statusColor")]
    pub status_color: StatusColor,
    pub feedback: Vec<String>,
    pub suggestions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_thresholds() {
        assert_eq!(AtsStatus::from_score(100), AtsStatus::Good);
        assert_eq!(AtsStatus::from_score(80), AtsStatus::Good);
        assert_eq!(AtsStatus::from_score(79), AtsStatus::Average);
        assert_eq!(AtsStatus::from_score(60), AtsStatus::Average);
        assert_eq!(AtsStatus::from_score(59), AtsStatus::NeedsImprovement);
        assert_eq!(AtsStatus::from_score(0), AtsStatus::NeedsImprovement);
    }

    #[test]
    fn test_status_colors() {
        assert_eq!(AtsStatus::Good.color(), StatusColor::Green);
        assert_eq!(AtsStatus::Average.color(), StatusColor::Orange);
        assert_eq!(AtsStatus::NeedsImprovement.color(), StatusColor::Red);
    }

    #[test]
    fn test_kind_from_mime() {
        assert_eq!(
            DocumentKind::from_mime("application/pdf"),
            Some(DocumentKind::Pdf)
        );
        assert_eq!(
            DocumentKind::from_mime("image/jpeg"),
            Some(DocumentKind::Jpeg)
        );
        assert_eq!(
            DocumentKind::from_mime("image/jpg"),
            Some(DocumentKind::Jpeg)
        );
        assert_eq!(DocumentKind::from_mime("image/png"), None);
        assert_eq!(DocumentKind::from_mime("text/plain"), None);
    }

    #[test]
    fn test_kind_from_extension() {
        assert_eq!(
            DocumentKind::from_extension("resume.pdf"),
            Some(DocumentKind::Pdf)
        );
        assert_eq!(
            DocumentKind::from_extension("scan.JPG"),
            Some(DocumentKind::Jpeg)
        );
        assert_eq!(DocumentKind::from_extension("resume.docx"), None);
        assert_eq!(DocumentKind::from_extension("no_extension"), None);
    }

    #[test]
    fn test_analysis_wire_format() {
        let analysis = Analysis {
            score: 75,
            status: AtsStatus::Average,
            status_color: AtsStatus::Average.color(),
            feedback: vec!["Contact information found".to_string()],
            suggestions: vec![],
        };

        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["score"], 75);
        assert_eq!(json["status"], "Average Resume");
        assert_eq!(json["statusColor"], "orange");
        assert_eq!(json["feedback"][0], "Contact information found");
    }
}
