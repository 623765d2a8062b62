//! Client-level error types.

use thiserror::Error;

/// Errors surfaced by the remote API gateway.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered 401 or 403 - not logged in, or not the owner.
    #[error("access denied by the server (HTTP {status})")]
    AccessDenied { status: u16 },

    /// Any other non-2xx answer.
    #[error("server rejected the request (HTTP {status})")]
    Status { status: u16, detail: Option<String> },

    #[error("transport failure: {0}")]
    Transport(String),

    /// The body did not match the expected shape.
    #[error("malformed server response: {0}")]
    Decode(String),
}

impl ApiError {
    /// True for 401/403 answers, which the UI surfaces as a warning
    /// instead of a fault.
    pub fn is_access_denied(&self) -> bool {
        matches!(self, ApiError::AccessDenied { .. })
    }
}

/// Errors from the persistent credential storage.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("credential storage io failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("credential encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}
