//! Tillpoint backend API clients

pub mod auth;
pub mod catalog;
pub mod error;
pub mod inventory;
pub mod staff;
pub mod stores;
pub mod typed;

pub use error::{ClientError, ErrorKind};
pub use typed::{AuthenticatedClient, PublicClient, TypedClientBuilder};
