//! Tillpoint hosting server: serves the built front-end behind the coarse
//! session path filter.

pub mod config;
pub mod error;
pub mod server;

pub use config::Settings;
pub use error::{Result, WebError};
pub use server::{router, serve};
