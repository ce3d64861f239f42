//! Helpers for feature views calling the backend

pub mod api_wrapper;

pub use api_wrapper::{handle_api_error, with_auth_error_handling};
