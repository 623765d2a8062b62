//! Error body shape returned by the backend on non-2xx answers.

use serde::{Deserialize, Serialize};

/// Best-effort view of a backend error payload.
///
/// The backend is not consistent about the field name (`error` vs
/// `message`), so both are accepted and either may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorBody {
    /// The human-readable detail, whichever field carried it.
    pub fn detail(&self) -> Option<&str> {
        self.error.as_deref().or(self.message.as_deref())
    }

    /// Parse a raw body, tolerating anything that is not the expected
    /// JSON object.
    pub fn parse(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }
}
