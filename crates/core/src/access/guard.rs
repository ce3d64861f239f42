//! Fine-grained client-side guard decisions

use crate::session::AuthState;
use crate::types::{Principal, StaffRole, UserType};
use std::fmt;

/// How a required staff role is compared against the principal's role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RolePolicy {
    /// Only the exact role is accepted
    #[default]
    Exact,
    /// Higher roles satisfy lower requirements (manager > supervisor > staff)
    Hierarchical,
}

impl RolePolicy {
    pub const fn permits(self, required: StaffRole, actual: StaffRole) -> bool {
        match self {
            Self::Exact => required.rank() == actual.rank(),
            Self::Hierarchical => actual.rank() >= required.rank(),
        }
    }
}

/// What a protected view requires of the current principal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Any logged-in principal
    Authenticated,
    /// Exactly this user type
    UserType(UserType),
    /// A super admin or company user
    Admin,
    /// A staff member holding `role` under `policy`
    StaffRole { role: StaffRole, policy: RolePolicy },
}

impl Access {
    /// Staff role requirement compared exactly
    pub const fn role(role: StaffRole) -> Self {
        Self::StaffRole {
            role,
            policy: RolePolicy::Exact,
        }
    }

    pub fn permits(&self, principal: &Principal) -> bool {
        match *self {
            Self::Authenticated => true,
            Self::UserType(user_type) => principal.user_type() == user_type,
            Self::Admin => principal.user_type().is_admin(),
            Self::StaffRole { role, policy } => principal
                .staff_role()
                .is_some_and(|actual| policy.permits(role, actual)),
        }
    }

    /// Login surface to send a rejected visitor to
    pub const fn login_surface(&self) -> LoginSurface {
        match self {
            Self::UserType(UserType::Staff) | Self::StaffRole { .. } => LoginSurface::Staff,
            Self::Authenticated | Self::UserType(_) | Self::Admin => LoginSurface::Admin,
        }
    }
}

/// The two login pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoginSurface {
    /// Company and super admin login
    Admin,
    /// Store terminal staff login
    Staff,
}

impl LoginSurface {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Admin => "/login",
            Self::Staff => "/pos/login",
        }
    }

    /// Surface serving a requested path: the POS area uses staff login
    pub fn for_path(path: &str) -> Self {
        if path == "/pos" || path.starts_with("/pos/") {
            Self::Staff
        } else {
            Self::Admin
        }
    }
}

impl fmt::Display for LoginSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Outcome of checking a protected view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    /// Token check still running; show a neutral placeholder, do not redirect
    Loading,
    Redirect(LoginSurface),
}

/// Decide whether a view guarded by `access` may render in `state`
pub fn evaluate(state: &AuthState, access: &Access) -> GuardDecision {
    if state.is_loading() {
        return GuardDecision::Loading;
    }
    match state.principal() {
        Some(principal) if access.permits(principal) => GuardDecision::Render,
        _ => GuardDecision::Redirect(access.login_surface()),
    }
}
