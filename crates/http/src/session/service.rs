//! Auth Service: login, logout and token-signed requests

use super::store::TokenStore;
use crate::client::{AuthenticatedClient, ClientError, ErrorKind, PublicClient};
use crate::types::Credentials;
use thiserror::Error;
use tillpoint_core::{ApiError, CoreError, Principal, SessionToken, StoredSession};

/// Failure of an Auth Service operation
#[derive(Debug, Error)]
pub enum AuthError {
    /// The backend answered with an error status; displays its message as sent
    #[error("{error}")]
    Rejected { status: u16, error: ApiError },

    /// No usable response (transport, decoding, configuration)
    #[error(transparent)]
    Client(ClientError),

    #[error("Session storage failed: {0}")]
    Storage(#[from] CoreError),

    #[error("Invalid login response: {0}")]
    InvalidResponse(String),
}

impl From<ClientError> for AuthError {
    fn from(error: ClientError) -> Self {
        match (error.status(), error.api_error()) {
            (Some(status), Some(api_error)) => Self::Rejected {
                status,
                error: api_error.clone(),
            },
            _ => Self::Client(error),
        }
    }
}

impl AuthError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Rejected { status: 401 | 403, .. } => ErrorKind::Authorization,
            Self::Rejected { status, .. } if *status >= 500 => ErrorKind::Server,
            Self::Rejected { .. } => ErrorKind::Validation,
            Self::Client(error) => error.kind(),
            Self::Storage(_) | Self::InvalidResponse(_) => ErrorKind::Other,
        }
    }

    /// Text for the login form
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { status, .. } if *status >= 500 => {
                "Something went wrong on our side. Please try again.".to_string()
            }
            Self::Rejected { error, .. } => error.error.clone(),
            Self::Client(error) => error.user_message(),
            Self::Storage(_) | Self::InvalidResponse(_) => self.to_string(),
        }
    }
}

/// Login/logout against the backend and the single writer of the Token Store
/// outside the forced-logout path.
#[derive(Clone, Debug)]
pub struct AuthService {
    client: PublicClient,
    store: TokenStore,
}

impl AuthService {
    pub fn new(client: PublicClient, store: TokenStore) -> Self {
        Self { client, store }
    }

    pub(crate) fn store(&self) -> &TokenStore {
        &self.store
    }

    /// Exchange credentials for a session and persist it.
    ///
    /// On rejection the store is left untouched.
    pub async fn login(&self, credentials: &Credentials) -> Result<Principal, AuthError> {
        let (token, principal) = match credentials {
            Credentials::Company(request) => {
                let response = self.client.company_login(request).await?;
                (response.token, Principal::Admin(response.user))
            }
            Credentials::Staff(request) => {
                let response = self.client.staff_login(request).await?;
                (response.token, Principal::Staff(response.staff))
            }
        };

        let token = SessionToken::new(token)
            .ok_or_else(|| AuthError::InvalidResponse("empty session token".to_string()))?;

        self.store.set(&StoredSession {
            token,
            principal: principal.clone(),
        })?;

        info!(
            principal = %principal.id(),
            user_type = %principal.user_type(),
            "Logged in"
        );
        Ok(principal)
    }

    /// Tell the backend the session is over and clear local state.
    ///
    /// The store is cleared whatever the backend says. The returned error is
    /// informational only.
    pub async fn logout(&self) -> Result<(), AuthError> {
        let notified = match self.store.token() {
            Ok(Some(token)) => self
                .client
                .authenticate(token)
                .logout()
                .await
                .map(|_| ())
                .map_err(AuthError::from),
            Ok(None) => {
                debug!("Logout without a stored token");
                Ok(())
            }
            Err(error) => Err(error.into()),
        };

        if let Err(error) = &notified {
            warn!(%error, "Backend logout failed, clearing local session anyway");
        }

        self.store.clear()?;
        info!("Logged out");
        notified
    }

    /// Request builder for `endpoint`, bearer-signed when a token is stored
    pub fn authenticated_request(
        &self,
        method: reqwest::Method,
        endpoint: &str,
    ) -> reqwest::RequestBuilder {
        match self.stored_token() {
            Some(token) => self.client.authenticate(token).request(method, endpoint),
            None => self.client.request(method, endpoint),
        }
    }

    /// Send a request built by [`Self::authenticated_request`].
    ///
    /// Every HTTP status is returned as a response; only transport failures
    /// are errors.
    pub async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ClientError> {
        Ok(request.send().await?)
    }

    /// Typed client for the stored session, `None` when logged out
    pub fn authenticated_client(&self) -> Result<Option<AuthenticatedClient>, AuthError> {
        Ok(self
            .store
            .token()?
            .map(|token| self.client.authenticate(token)))
    }

    fn stored_token(&self) -> Option<SessionToken> {
        self.store.token().unwrap_or_else(|error| {
            warn!(%error, "Unable to read stored token");
            None
        })
    }
}
