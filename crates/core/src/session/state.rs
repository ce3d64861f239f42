//! Derived authentication state and its transitions

use crate::types::{Principal, UserType};
use tracing::debug;

/// Coarse phase of the session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthPhase {
    /// Before the stored token has been checked
    #[default]
    Loading,
    Authenticated,
    Unauthenticated,
}

/// Events that drive [`AuthState`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    /// Initial token check finished; `None` when no usable session was stored
    Restored(Option<Principal>),
    LoggedIn(Principal),
    LoggedOut,
    /// An API response declared the token expired or invalid
    TokenRejected,
}

/// In-memory authentication state, always re-derived from the Token Store.
///
/// `phase == Authenticated` exactly when a principal is held.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthState {
    phase: AuthPhase,
    principal: Option<Principal>,
}

impl AuthState {
    /// Initial state at mount
    pub fn loading() -> Self {
        Self::default()
    }

    pub const fn unauthenticated() -> Self {
        Self {
            phase: AuthPhase::Unauthenticated,
            principal: None,
        }
    }

    pub const fn authenticated(principal: Principal) -> Self {
        Self {
            phase: AuthPhase::Authenticated,
            principal: Some(principal),
        }
    }

    pub const fn phase(&self) -> AuthPhase {
        self.phase
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self.phase, AuthPhase::Loading)
    }

    pub const fn is_authenticated(&self) -> bool {
        matches!(self.phase, AuthPhase::Authenticated)
    }

    pub const fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    pub fn user_type(&self) -> Option<UserType> {
        self.principal.as_ref().map(Principal::user_type)
    }

    /// Apply `event`, returning whether anything changed
    pub fn apply(&mut self, event: AuthEvent) -> bool {
        let next = match event {
            AuthEvent::Restored(restored) => {
                if !self.is_loading() {
                    // A login that raced the mount check already decided
                    return false;
                }
                restored.map_or_else(Self::unauthenticated, Self::authenticated)
            }
            AuthEvent::LoggedIn(principal) => Self::authenticated(principal),
            AuthEvent::LoggedOut | AuthEvent::TokenRejected => Self::unauthenticated(),
        };

        if *self == next {
            return false;
        }
        debug!(from = ?self.phase, to = ?next.phase, "Auth state transition");
        *self = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{StaffPrincipal, StaffRole};

    fn staff() -> Principal {
        Principal::Staff(StaffPrincipal {
            staff_id: "S1".to_string(),
            store_id: "ST1".to_string(),
            name: None,
            role: StaffRole::Staff,
        })
    }

    #[test]
    fn test_mount_with_session() {
        let mut state = AuthState::loading();
        assert!(state.is_loading());
        assert!(state.apply(AuthEvent::Restored(Some(staff()))));
        assert!(state.is_authenticated());
        assert_eq!(state.user_type(), Some(UserType::Staff));
    }

    #[test]
    fn test_mount_without_session() {
        let mut state = AuthState::loading();
        assert!(state.apply(AuthEvent::Restored(None)));
        assert_eq!(state.phase(), AuthPhase::Unauthenticated);
        assert_eq!(state.principal(), None);
    }

    #[test]
    fn test_restore_after_login_is_ignored() {
        let mut state = AuthState::loading();
        state.apply(AuthEvent::LoggedIn(staff()));
        assert!(!state.apply(AuthEvent::Restored(None)));
        assert!(state.is_authenticated());
    }

    #[test]
    fn test_token_rejection_is_idempotent() {
        let mut state = AuthState::authenticated(staff());
        assert!(state.apply(AuthEvent::TokenRejected));
        assert!(!state.apply(AuthEvent::TokenRejected));
        assert!(!state.apply(AuthEvent::LoggedOut));
        assert_eq!(state, AuthState::unauthenticated());
    }

    #[test]
    fn test_login_then_logout() {
        let mut state = AuthState::unauthenticated();
        state.apply(AuthEvent::LoggedIn(staff()));
        assert_eq!(state.principal(), Some(&staff()));
        state.apply(AuthEvent::LoggedOut);
        assert!(!state.is_authenticated());
        assert_eq!(state.user_type(), None);
    }
}
