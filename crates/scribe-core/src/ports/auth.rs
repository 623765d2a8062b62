//! Credential persistence and token access ports.

use async_trait::async_trait;

use crate::domain::Credential;
use crate::error::StorageError;

/// Durable storage for the session credential.
///
/// The persisted form is two entries - the serialized user and the raw
/// token string. Implementations must refuse partial pairs: `load`
/// returns `None` unless both entries are present and the user entry
/// parses, so restoration can never violate the both-or-neither
/// invariant.
#[async_trait]
pub trait CredentialStorage: Send + Sync {
    /// Read the persisted credential, if a complete pair exists.
    async fn load(&self) -> Result<Option<Credential>, StorageError>;

    /// Persist both halves, overwriting any prior values.
    async fn store(&self, credential: &Credential) -> Result<(), StorageError>;

    /// Remove both halves. A no-op when nothing is stored.
    async fn clear(&self) -> Result<(), StorageError>;
}

/// Read-only access to the current bearer token.
///
/// The HTTP gateway consumes this to attach `Authorization` headers
/// without knowing anything else about the session.
pub trait TokenProvider: Send + Sync {
    fn bearer_token(&self) -> Option<String>;
}
