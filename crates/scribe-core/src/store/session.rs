//! Credential store - the session half of the client state.

use std::sync::{Arc, RwLock};

use crate::domain::{Credential, User};
use crate::error::StorageError;
use crate::ports::{CredentialStorage, TokenProvider};

/// Holds the authenticated user and token in memory and mirrors them to
/// durable storage.
///
/// Invariant: the in-memory pair and the persisted pair are each either
/// complete or absent. The pair itself is one [`Credential`] value, and
/// the storage port refuses partial restores, so neither side can hold
/// a user without a token or vice versa.
pub struct CredentialStore {
    current: RwLock<Option<Credential>>,
    storage: Arc<dyn CredentialStorage>,
}

impl CredentialStore {
    pub fn new(storage: Arc<dyn CredentialStorage>) -> Self {
        Self {
            current: RwLock::new(None),
            storage,
        }
    }

    /// Store both halves in memory and in durable storage, overwriting
    /// any prior values.
    pub async fn set_credentials(
        &self,
        user: User,
        token: impl Into<String>,
    ) -> Result<(), StorageError> {
        let credential = Credential::new(user, token);
        self.replace(Some(credential.clone()));
        self.storage.store(&credential).await
    }

    /// Clear both halves. Idempotent: logging out twice is a no-op.
    pub async fn logout(&self) -> Result<(), StorageError> {
        self.replace(None);
        self.storage.clear().await
    }

    /// Populate memory from durable storage on startup.
    ///
    /// The storage port only ever yields a complete pair, so a lone
    /// token or lone user on disk leaves the session empty.
    pub async fn initialize(&self) -> Result<(), StorageError> {
        match self.storage.load().await? {
            Some(credential) => {
                tracing::debug!(user = %credential.user.username, "restored session");
                self.replace(Some(credential));
            }
            None => tracing::debug!("no persisted session to restore"),
        }
        Ok(())
    }

    pub fn user(&self) -> Option<User> {
        self.read(|c| c.user.clone())
    }

    pub fn token(&self) -> Option<String> {
        self.read(|c| c.token.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.read(|_| ()).is_some()
    }

    fn replace(&self, value: Option<Credential>) {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = value;
    }

    fn read<T>(&self, f: impl FnOnce(&Credential) -> T) -> Option<T> {
        let guard = self
            .current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.as_ref().map(f)
    }
}

impl TokenProvider for CredentialStore {
    fn bearer_token(&self) -> Option<String> {
        self.token()
    }
}
