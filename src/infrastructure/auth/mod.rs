//! Client for the hosted auth backend
//!
//! Authentication is a pass-through: passwords are verified by the hosted
//! backend's users collection, and OAuth2 state/verifier pairs come from
//! its auth-methods listing. Nothing credential-shaped is stored here.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::{AuthMethods, AuthSession, DomainError};
use crate::infrastructure::http::HttpClient;

/// Operations against the hosted auth backend
#[async_trait]
pub trait AuthBackend: Send + Sync + std::fmt::Debug {
    /// Verifies credentials against the users collection.
    async fn auth_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, DomainError>;

    /// Lists the OAuth2 providers the backend is configured with.
    async fn list_auth_methods(&self) -> Result<AuthMethods, DomainError>;
}

/// HTTP client for the hosted auth backend's users collection
#[derive(Debug, Clone)]
pub struct HostedAuthClient {
    http: Arc<dyn HttpClient>,
    base_url: String,
}

impl HostedAuthClient {
    pub fn new(http: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl AuthBackend for HostedAuthClient {
    async fn auth_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, DomainError> {
        let url = format!(
            "{}/api/collections/users/auth-with-password",
            self.base_url
        );
        let body = json!({ "identity": email, "password": password });

        let response = self.http.post_json(&url, vec![], &body).await?;

        serde_json::from_value(response).map_err(|e| {
            DomainError::provider("auth-backend", format!("Malformed auth response: {}", e))
        })
    }

    async fn list_auth_methods(&self) -> Result<AuthMethods, DomainError> {
        let url = format!("{}/api/collections/users/auth-methods", self.base_url);

        let response = self.http.get_json(&url).await?;

        serde_json::from_value(response).map_err(|e| {
            DomainError::provider(
                "auth-backend",
                format!("Malformed auth-methods response: {}", e),
            )
        })
    }
}
