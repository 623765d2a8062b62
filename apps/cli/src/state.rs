//! Application state - the shared stores and the gateway, wired once at
//! startup and injected into the view layer.

use std::sync::Arc;

use scribe_core::ports::{ApiGateway, CredentialStorage, TokenProvider};
use scribe_core::store::CredentialStore;
use scribe_infra::{FileCredentialStorage, HttpApiGateway, InMemoryCredentialStorage};

use crate::config::AppConfig;

/// Shared application state.
pub struct AppState {
    pub gateway: Arc<dyn ApiGateway>,
    pub session: Arc<CredentialStore>,
}

impl AppState {
    /// Build the application state with the appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let storage: Arc<dyn CredentialStorage> = if config.ephemeral {
            tracing::info!("ephemeral mode - the session will not be persisted");
            Arc::new(InMemoryCredentialStorage::new())
        } else {
            Arc::new(FileCredentialStorage::new(&config.state_dir))
        };

        let session = Arc::new(CredentialStore::new(storage));
        if let Err(e) = session.initialize().await {
            // A broken state directory should not keep the app from
            // starting; the user can simply log in again.
            tracing::warn!(error = %e, "could not restore the persisted session");
        }

        let tokens: Arc<dyn TokenProvider> = session.clone();
        let gateway: Arc<dyn ApiGateway> =
            Arc::new(HttpApiGateway::new(config.api_url.clone(), tokens));

        tracing::debug!("application state initialized");
        Self { gateway, session }
    }
}
