//! Remote API port.

use async_trait::async_trait;

use crate::domain::{Credential, Post, PostDraft};
use crate::error::ApiError;

/// The backend REST surface the client consumes.
///
/// One implementation speaks HTTP (`scribe-infra`); tests substitute
/// recording fakes. Token attachment is the implementation's concern -
/// callers never pass credentials per request.
#[async_trait]
pub trait ApiGateway: Send + Sync {
    /// GET /posts - the full list in server order.
    async fn fetch_posts(&self) -> Result<Vec<Post>, ApiError>;

    /// POST /posts - the backend assigns id and owner.
    async fn create_post(&self, draft: &PostDraft) -> Result<Post, ApiError>;

    /// PUT /posts/:id - 401/403 map to [`ApiError::AccessDenied`].
    async fn update_post(&self, id: i64, draft: &PostDraft) -> Result<Post, ApiError>;

    /// DELETE /posts/:id - 401/403 map to [`ApiError::AccessDenied`].
    async fn delete_post(&self, id: i64) -> Result<(), ApiError>;

    /// POST /auth/login.
    async fn login(&self, email: &str, password: &str) -> Result<Credential, ApiError>;

    /// POST /auth/register.
    async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Credential, ApiError>;
}
