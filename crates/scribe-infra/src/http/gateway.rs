//! Reqwest-backed implementation of the [`ApiGateway`] port.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

use scribe_core::domain::{Credential, Post, PostDraft, User};
use scribe_core::error::ApiError;
use scribe_core::ports::{ApiGateway, TokenProvider};
use scribe_shared::ErrorBody;
use scribe_shared::dto::{AuthResponse, LoginRequest, RegisterRequest};

/// HTTP gateway to the posts backend.
///
/// Every outgoing request passes through [`Self::authorize`], which reads
/// the current bearer token from the [`TokenProvider`] and attaches an
/// `Authorization` header when one is present. Call sites never repeat
/// this step.
pub struct HttpApiGateway {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
}

impl HttpApiGateway {
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            tokens,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// The single token attachment point. No token means an
    /// unauthenticated request, not an error.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.tokens.bearer_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        self.authorize(request)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }

    /// Turn a non-2xx answer into the error taxonomy, pulling the detail
    /// out of the backend's error body when it parses.
    async fn check_status(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let raw = response.text().await.unwrap_or_default();
        let detail = ErrorBody::parse(&raw).detail().map(String::from);
        Err(classify_status(status.as_u16(), detail))
    }

    async fn json_body<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let response = Self::check_status(response).await?;
        let raw = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        serde_json::from_str(&raw).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn auth_request<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Credential, ApiError> {
        let response = self.send(self.http.post(self.endpoint(path)).json(body)).await?;
        let auth: AuthResponse = Self::json_body(response).await?;
        Ok(Credential::new(
            User {
                id: auth.user.id,
                username: auth.user.username,
                email: auth.user.email,
            },
            auth.token,
        ))
    }
}

/// 401/403 are the distinct access-denied signal; everything else
/// non-2xx is a generic status failure.
fn classify_status(status: u16, detail: Option<String>) -> ApiError {
    match status {
        401 | 403 => ApiError::AccessDenied { status },
        _ => ApiError::Status { status, detail },
    }
}

#[async_trait]
impl ApiGateway for HttpApiGateway {
    async fn fetch_posts(&self) -> Result<Vec<Post>, ApiError> {
        tracing::debug!("GET /posts");
        let response = self.send(self.http.get(self.endpoint("/posts"))).await?;
        Self::json_body(response).await
    }

    async fn create_post(&self, draft: &PostDraft) -> Result<Post, ApiError> {
        tracing::debug!(title = %draft.title, "POST /posts");
        let response = self
            .send(self.http.post(self.endpoint("/posts")).json(draft))
            .await?;
        Self::json_body(response).await
    }

    async fn update_post(&self, id: i64, draft: &PostDraft) -> Result<Post, ApiError> {
        tracing::debug!(id, "PUT /posts/:id");
        let response = self
            .send(self.http.put(self.endpoint(&format!("/posts/{id}"))).json(draft))
            .await?;
        Self::json_body(response).await
    }

    async fn delete_post(&self, id: i64) -> Result<(), ApiError> {
        tracing::debug!(id, "DELETE /posts/:id");
        let response = self
            .send(self.http.delete(self.endpoint(&format!("/posts/{id}"))))
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn login(&self, email: &str, password: &str) -> Result<Credential, ApiError> {
        tracing::debug!(email, "POST /auth/login");
        self.auth_request(
            "/auth/login",
            &LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            },
        )
        .await
    }

    async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Credential, ApiError> {
        tracing::debug!(username, "POST /auth/register");
        self.auth_request(
            "/auth/register",
            &RegisterRequest {
                username: username.to_string(),
                email: email.to_string(),
                password: password.to_string(),
            },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticTokens(Option<String>);

    impl TokenProvider for StaticTokens {
        fn bearer_token(&self) -> Option<String> {
            self.0.clone()
        }
    }

    fn gateway(token: Option<&str>) -> HttpApiGateway {
        HttpApiGateway::new(
            "http://localhost:5000/",
            Arc::new(StaticTokens(token.map(String::from))),
        )
    }

    #[test]
    fn endpoint_joins_without_duplicate_slashes() {
        let gateway = gateway(None);
        assert_eq!(gateway.endpoint("/posts"), "http://localhost:5000/posts");
        assert_eq!(gateway.endpoint("posts/5"), "http://localhost:5000/posts/5");
    }

    #[test]
    fn authorize_attaches_bearer_header_when_token_present() {
        let gateway = gateway(Some("tok-123"));
        let request = gateway
            .authorize(gateway.http.get("http://localhost:5000/posts"))
            .build()
            .unwrap();

        let header = request
            .headers()
            .get(reqwest::header::AUTHORIZATION)
            .unwrap();
        assert_eq!(header.to_str().unwrap(), "Bearer tok-123");
    }

    #[test]
    fn authorize_omits_header_without_token() {
        let gateway = gateway(None);
        let request = gateway
            .authorize(gateway.http.get("http://localhost:5000/posts"))
            .build()
            .unwrap();

        assert!(request.headers().get(reqwest::header::AUTHORIZATION).is_none());
    }

    #[test]
    fn classify_status_maps_auth_failures() {
        assert!(matches!(
            classify_status(401, None),
            ApiError::AccessDenied { status: 401 }
        ));
        assert!(matches!(
            classify_status(403, None),
            ApiError::AccessDenied { status: 403 }
        ));
    }

    #[test]
    fn classify_status_keeps_other_failures_generic() {
        let err = classify_status(500, Some("boom".to_string()));
        match err {
            ApiError::Status { status, detail } => {
                assert_eq!(status, 500);
                assert_eq!(detail.as_deref(), Some("boom"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
