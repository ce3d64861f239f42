//! Session lifecycle over the backend API

pub mod context;
pub mod service;
pub mod store;

pub use context::AuthContext;
pub use service::{AuthError, AuthService};
pub use store::TokenStore;
