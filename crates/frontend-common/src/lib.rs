//! Yew integration for the Tillpoint session layer

pub mod auth;
pub mod client;
pub mod components;
pub mod services;
pub mod storage;

pub use auth::{AuthHandle, AuthProvider, RouteGuard, use_auth};
pub use client::auth_context;
pub use components::{LoginForm, Spinner};
pub use storage::{BrowserStorage, CookieJar};
