//! Client session lifecycle: persisted keys and derived auth state

pub mod state;

pub use state::{AuthEvent, AuthPhase, AuthState};

/// Storage key for the bearer token (also the cookie name)
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Storage key for the user-type discriminator
pub const USER_TYPE_KEY: &str = "user_type";

/// Storage key for the JSON principal snapshot
pub const PRINCIPAL_KEY: &str = "principal";
