//! Authenticator implementations
//!
//! Handles applying authentication to requests and managing token refresh.

use super::types::{validate_credential, AuthType, CachedToken};
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Default IAM token service
pub const DEFAULT_IAM_URL: &str = "https://iam.cloud.ibm.com";

const IAM_GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";

/// Decorates outgoing requests with credentials
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Scheme implemented by this authenticator
    fn auth_type(&self) -> AuthType;

    /// Check the configured credentials without touching the network
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Apply authentication to a request builder
    async fn authenticate(&self, req: RequestBuilder) -> Result<RequestBuilder>;
}

// ============================================================================
// No Auth
// ============================================================================

/// Leaves requests untouched, for tests and unauthenticated endpoints
#[derive(Debug, Clone, Default)]
pub struct NoAuthAuthenticator;

impl NoAuthAuthenticator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Authenticator for NoAuthAuthenticator {
    fn auth_type(&self) -> AuthType {
        AuthType::NoAuth
    }

    async fn authenticate(&self, req: RequestBuilder) -> Result<RequestBuilder> {
        Ok(req)
    }
}

// ============================================================================
// Basic
// ============================================================================

/// HTTP Basic authentication
#[derive(Debug, Clone)]
pub struct BasicAuthenticator {
    username: String,
    password: String,
}

impl BasicAuthenticator {
    /// Create a basic authenticator, validating both credentials
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        let auth = Self {
            username: username.into(),
            password: password.into(),
        };
        auth.validate()?;
        Ok(auth)
    }
}

#[async_trait]
impl Authenticator for BasicAuthenticator {
    fn auth_type(&self) -> AuthType {
        AuthType::Basic
    }

    fn validate(&self) -> Result<()> {
        validate_credential("username", &self.username)?;
        validate_credential("password", &self.password)
    }

    async fn authenticate(&self, req: RequestBuilder) -> Result<RequestBuilder> {
        Ok(req.basic_auth(&self.username, Some(&self.password)))
    }
}

// ============================================================================
// Bearer Token
// ============================================================================

/// Static bearer token supplied by the caller
#[derive(Debug, Clone)]
pub struct BearerTokenAuthenticator {
    token: String,
}

impl BearerTokenAuthenticator {
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let auth = Self {
            token: token.into(),
        };
        auth.validate()?;
        Ok(auth)
    }

    /// Replace the token, e.g. after the caller refreshed it out of band
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = token.into();
    }
}

#[async_trait]
impl Authenticator for BearerTokenAuthenticator {
    fn auth_type(&self) -> AuthType {
        AuthType::BearerToken
    }

    fn validate(&self) -> Result<()> {
        validate_credential("bearer token", &self.token)
    }

    async fn authenticate(&self, req: RequestBuilder) -> Result<RequestBuilder> {
        Ok(req.bearer_auth(&self.token))
    }
}

// ============================================================================
// IAM
// ============================================================================

/// Exchanges an API key for an IAM access token and sends it as a bearer token
pub struct IamAuthenticator {
    apikey: String,
    url: String,
    client_id: Option<String>,
    client_secret: Option<String>,
    scope: Option<String>,
    /// Cached access token
    cached_token: Arc<RwLock<Option<CachedToken>>>,
    /// HTTP client for token requests
    http_client: Client,
}

impl IamAuthenticator {
    /// Create an IAM authenticator against the default token service
    pub fn new(apikey: impl Into<String>) -> Result<Self> {
        Self::with_client(apikey, Client::new())
    }

    /// Create an IAM authenticator with a custom HTTP client
    pub fn with_client(apikey: impl Into<String>, http_client: Client) -> Result<Self> {
        let auth = Self {
            apikey: apikey.into(),
            url: DEFAULT_IAM_URL.to_string(),
            client_id: None,
            client_secret: None,
            scope: None,
            cached_token: Arc::new(RwLock::new(None)),
            http_client,
        };
        auth.validate()?;
        Ok(auth)
    }

    /// Point the authenticator at another token service
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Send a client id and secret with the token request
    #[must_use]
    pub fn client_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.client_id = Some(client_id.into());
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Request a specific scope
    #[must_use]
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Get a valid token, refreshing if necessary
    pub async fn token(&self) -> Result<String> {
        {
            let cached = self.cached_token.read().await;
            if let Some(token) = cached.as_ref() {
                if !token.is_expired() {
                    return Ok(token.token.clone());
                }
            }
        }

        let mut cached = self.cached_token.write().await;

        // Another task may have refreshed while we waited for the write lock
        if let Some(token) = cached.as_ref() {
            if !token.is_expired() {
                return Ok(token.token.clone());
            }
        }

        let new_token = self.fetch_new_token().await?;
        let token_str = new_token.token.clone();
        *cached = Some(new_token);

        Ok(token_str)
    }

    async fn fetch_new_token(&self) -> Result<CachedToken> {
        let token_url = format!("{}/identity/token", self.url.trim_end_matches('/'));
        debug!("Requesting IAM access token from {}", token_url);

        let mut form = vec![
            ("grant_type", IAM_GRANT_TYPE),
            ("apikey", self.apikey.as_str()),
            ("response_type", "cloud_iam"),
        ];
        if let Some(scope) = &self.scope {
            form.push(("scope", scope.as_str()));
        }

        let mut req = self
            .http_client
            .post(&token_url)
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&form);

        if let (Some(id), Some(secret)) = (&self.client_id, &self.client_secret) {
            req = req.basic_auth(id, Some(secret));
        }

        let response = req
            .send()
            .await
            .map_err(|e| Error::auth(format!("IAM token request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::auth(format!(
                "IAM token request failed with status {status}: {body}"
            )));
        }

        let token_response: TokenResponse = response
            .json()
            .await
            .map_err(|e| Error::auth(format!("invalid IAM token response: {e}")))?;
        Ok(token_response.into_cached_token())
    }
}

impl std::fmt::Debug for IamAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IamAuthenticator")
            .field("url", &self.url)
            .field("client_id", &self.client_id)
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Authenticator for IamAuthenticator {
    fn auth_type(&self) -> AuthType {
        AuthType::Iam
    }

    fn validate(&self) -> Result<()> {
        validate_credential("apikey", &self.apikey)?;
        match (&self.client_id, &self.client_secret) {
            (Some(_), None) | (None, Some(_)) => Err(Error::auth(
                "client_id and client_secret must be supplied together",
            )),
            _ => Ok(()),
        }
    }

    async fn authenticate(&self, req: RequestBuilder) -> Result<RequestBuilder> {
        let token = self.token().await?;
        Ok(req.bearer_auth(token))
    }
}

/// IAM token response
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
}

impl TokenResponse {
    fn into_cached_token(self) -> CachedToken {
        match self.expires_in {
            Some(secs) => CachedToken::expires_in(self.access_token, secs),
            None => CachedToken::new(self.access_token, None),
        }
    }
}
