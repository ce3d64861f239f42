//! Shared authentication state

use super::service::{AuthError, AuthService};
use crate::client::ClientError;
use crate::types::Credentials;
use tillpoint_core::{AuthEvent, AuthState, Principal};
use tokio::sync::watch;

/// The single Auth Context shared by every view.
///
/// State starts as loading and is published through a watch channel.
#[derive(Debug)]
pub struct AuthContext {
    service: AuthService,
    state: watch::Sender<AuthState>,
}

impl AuthContext {
    pub fn new(service: AuthService) -> Self {
        let (state, _) = watch::channel(AuthState::loading());
        Self { service, state }
    }

    pub fn service(&self) -> &AuthService {
        &self.service
    }

    /// Snapshot of the current state
    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every transition
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    fn dispatch(&self, event: AuthEvent) -> bool {
        self.state.send_if_modified(|state| state.apply(event))
    }

    /// Derive the initial state from the Token Store.
    ///
    /// A stored token counts as authenticated without a network round-trip.
    /// An unreadable session is cleared.
    pub fn mount(&self) -> AuthState {
        let restored = match self.service.store().get() {
            Ok(session) => session.map(|session| session.principal),
            Err(error) => {
                warn!(%error, "Discarding unreadable stored session");
                if let Err(error) = self.service.store().clear() {
                    error!(%error, "Failed to clear unreadable session");
                }
                None
            }
        };
        self.dispatch(AuthEvent::Restored(restored));
        self.state()
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<Principal, AuthError> {
        let principal = self.service.login(credentials).await?;
        self.dispatch(AuthEvent::LoggedIn(principal.clone()));
        Ok(principal)
    }

    /// Log out; the state ends unauthenticated even when the service fails
    pub async fn logout(&self) -> Result<(), AuthError> {
        let result = self.service.logout().await;
        self.dispatch(AuthEvent::LoggedOut);
        result
    }

    /// Inspect an API failure and force a logout when it reports the token
    /// expired or invalid.
    ///
    /// Returns whether this call performed the transition. A plain permission
    /// denial leaves the session alone.
    pub fn handle_error(&self, error: &ClientError) -> bool {
        if !error.is_auth_expired() {
            return false;
        }
        self.force_logout()
    }

    /// Clear the store and drop to unauthenticated; repeat calls are no-ops
    pub fn force_logout(&self) -> bool {
        if let Err(error) = self.service.store().clear() {
            error!(%error, "Failed to clear session on forced logout");
        }
        let changed = self.dispatch(AuthEvent::TokenRejected);
        if changed {
            info!("Session invalidated by the backend");
        }
        changed
    }
}
