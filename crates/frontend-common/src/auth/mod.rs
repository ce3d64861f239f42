//! Authentication context and route guarding for Yew views

pub mod context;
pub mod guard;

pub use context::{AuthAction, AuthContextData, AuthHandle, AuthProvider, use_auth};
pub use guard::RouteGuard;
