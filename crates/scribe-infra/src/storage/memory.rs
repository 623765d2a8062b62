//! In-memory credential storage - used when no state directory is
//! available. Note: the session is lost on process exit.

use std::sync::Mutex;

use async_trait::async_trait;

use scribe_core::domain::Credential;
use scribe_core::error::StorageError;
use scribe_core::ports::CredentialStorage;

#[derive(Default)]
pub struct InMemoryCredentialStorage {
    slot: Mutex<Option<Credential>>,
}

impl InMemoryCredentialStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStorage for InMemoryCredentialStorage {
    async fn load(&self) -> Result<Option<Credential>, StorageError> {
        Ok(self.slot.lock().unwrap().clone())
    }

    async fn store(&self, credential: &Credential) -> Result<(), StorageError> {
        *self.slot.lock().unwrap() = Some(credential.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        *self.slot.lock().unwrap() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scribe_core::domain::User;

    #[tokio::test]
    async fn round_trips_and_clears() {
        let storage = InMemoryCredentialStorage::new();
        assert!(storage.load().await.unwrap().is_none());

        let credential = Credential::new(
            User {
                id: 1,
                username: "eve".to_string(),
                email: "eve@example.com".to_string(),
            },
            "tok",
        );
        storage.store(&credential).await.unwrap();
        assert_eq!(storage.load().await.unwrap(), Some(credential));

        storage.clear().await.unwrap();
        assert!(storage.load().await.unwrap().is_none());
        storage.clear().await.unwrap();
    }
}
