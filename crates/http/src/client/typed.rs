//! Type-safe API clients that enforce authentication requirements at compile time

use super::ClientError;
use reqwest::{Client, ClientBuilder, header};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tillpoint_core::{ApiConfig, SessionToken};

const USER_AGENT: &str = concat!("tillpoint-client/", env!("CARGO_PKG_VERSION"));

fn build_http_client(timeout: Option<Duration>) -> Result<Client, ClientError> {
    #[cfg(not(target_arch = "wasm32"))]
    let client = {
        let mut builder = ClientBuilder::new().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()?
    };

    #[cfg(target_arch = "wasm32")]
    let client = {
        let _ = timeout; // Timeouts not supported on WASM
        ClientBuilder::new().user_agent(USER_AGENT).build()?
    };

    Ok(client)
}

/// Decode a response: JSON on success, [`ClientError`] otherwise
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::from_response(response).await);
    }
    let bytes = response.bytes().await?;
    // Endpoints answering 204 decode into unit-like types
    if bytes.is_empty() {
        return Ok(serde_json::from_slice(b"null")?);
    }
    Ok(serde_json::from_slice(&bytes)?)
}

/// Client for public endpoints that don't require authentication
#[derive(Clone, Debug)]
pub struct PublicClient {
    client: Client,
    base_url: String,
}

/// Client for endpoints that require a session token
#[derive(Clone)]
pub struct AuthenticatedClient {
    client: Client,
    base_url: String,
    token: SessionToken,
}

impl std::fmt::Debug for AuthenticatedClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticatedClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl PublicClient {
    /// Create a new public client
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::new_with_timeout(base_url, None)
    }

    fn new_with_timeout(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            client: build_http_client(timeout)?,
            base_url,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder without authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Execute a request and decode the JSON body
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        decode(request.send().await?).await
    }

    /// Attach a session token, sharing the connection pool
    pub fn authenticate(&self, token: SessionToken) -> AuthenticatedClient {
        AuthenticatedClient {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            token,
        }
    }
}

impl AuthenticatedClient {
    /// Create a new authenticated client
    pub fn new(base_url: impl Into<String>, token: SessionToken) -> Result<Self, ClientError> {
        Ok(PublicClient::new(base_url)?.authenticate(token))
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder with the bearer token attached
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, url)
            .header(header::AUTHORIZATION, self.token.bearer())
    }

    /// Execute a request and decode the JSON body
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        decode(request.send().await?).await
    }

    /// Execute a request whose response body is irrelevant
    pub async fn execute_empty(&self, request: reqwest::RequestBuilder) -> Result<(), ClientError> {
        let response = request.send().await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(ClientError::from_response(response).await)
        }
    }
}

/// Type-safe builder that creates the appropriate client type
#[derive(Debug, Default)]
pub struct TypedClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl TypedClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Take the base URL from resolved API configuration
    #[must_use]
    pub fn api_config(self, config: &ApiConfig) -> Self {
        self.base_url(config.base_url())
    }

    /// Set the request timeout
    #[cfg(not(target_arch = "wasm32"))]
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build a public client
    pub fn build_public(self) -> Result<PublicClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        PublicClient::new_with_timeout(base_url, self.timeout)
    }

    /// Build an authenticated client
    pub fn build_authenticated(self, token: SessionToken) -> Result<AuthenticatedClient, ClientError> {
        Ok(self.build_public()?.authenticate(token))
    }
}
