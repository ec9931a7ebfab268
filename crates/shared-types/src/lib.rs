pub mod types;

pub use types::{Analysis, AtsStatus, DocumentKind, DocumentPayload, StatusColor};
