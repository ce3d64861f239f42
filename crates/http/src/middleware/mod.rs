//! Middleware components for the hosting server

pub mod path_filter;
pub mod trace;

pub use path_filter::{has_token_cookie, path_filter_middleware};
pub use trace::trace_middleware;
