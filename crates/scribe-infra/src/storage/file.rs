//! File-backed credential storage.
//!
//! The persisted form is two entries under the state directory: the
//! serialized user (`user.json`) and the raw token string (`token`).

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use scribe_core::domain::{Credential, User};
use scribe_core::error::StorageError;
use scribe_core::ports::CredentialStorage;

const USER_FILE: &str = "user.json";
const TOKEN_FILE: &str = "token";

/// Stores the credential pair as two files in one directory.
pub struct FileCredentialStorage {
    dir: PathBuf,
}

impl FileCredentialStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn user_path(&self) -> PathBuf {
        self.dir.join(USER_FILE)
    }

    fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_FILE)
    }

    async fn read_entry(path: &Path) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(path).await {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn remove_entry(path: &Path) -> Result<(), StorageError> {
        match fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl CredentialStorage for FileCredentialStorage {
    async fn load(&self) -> Result<Option<Credential>, StorageError> {
        let user_raw = Self::read_entry(&self.user_path()).await?;
        let token = Self::read_entry(&self.token_path()).await?;

        // Both entries or nothing; a partial pair is treated as absent.
        let (Some(user_raw), Some(token)) = (user_raw, token) else {
            return Ok(None);
        };

        match serde_json::from_str::<User>(&user_raw) {
            Ok(user) => Ok(Some(Credential::new(user, token.trim_end().to_string()))),
            Err(e) => {
                tracing::warn!(error = %e, "stored user record is unreadable, ignoring session");
                Ok(None)
            }
        }
    }

    async fn store(&self, credential: &Credential) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).await?;
        let user_json = serde_json::to_vec_pretty(&credential.user)?;
        fs::write(self.user_path(), user_json).await?;
        fs::write(self.token_path(), credential.token.as_bytes()).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        Self::remove_entry(&self.user_path()).await?;
        Self::remove_entry(&self.token_path()).await?;
        Ok(())
    }
}
