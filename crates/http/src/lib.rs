//! Tillpoint HTTP layer
//!
//! The `client` feature provides the typed backend API clients together with
//! the Auth Service and shared Auth Context. The `server` feature provides the
//! hosting server's coarse path filter and supporting middleware.

#[macro_use]
extern crate tracing;

pub mod types;

#[cfg(feature = "client")]
pub mod client;
#[cfg(feature = "client")]
pub mod session;

#[cfg(feature = "server")]
pub mod error;
#[cfg(feature = "server")]
pub mod middleware;
#[cfg(feature = "server")]
pub mod routes;

#[cfg(feature = "server")]
pub use error::{HttpError, Result};

#[cfg(feature = "client")]
pub use client::{AuthenticatedClient, ClientError, ErrorKind, PublicClient, TypedClientBuilder};
#[cfg(feature = "client")]
pub use session::{AuthContext, AuthError, AuthService, TokenStore};
