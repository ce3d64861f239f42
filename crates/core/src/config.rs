//! Backend API location

use crate::error::{CoreError, CoreResult};
use url::Url;

/// Environment variable naming the backend base URL
pub const API_URL_ENV: &str = "TILLPOINT_API_URL";

/// Used by debug builds when no URL is configured
pub const DEV_API_URL: &str = "http://localhost:5000/api";

/// Used by release builds when no URL is configured
pub const PRODUCTION_API_URL: &str = "https://api.tillpoint.app/api";

/// Resolved backend configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Resolve the base URL: configured value, then the development or
    /// production fallback depending on `debug`.
    pub fn resolve(configured: Option<&str>, debug: bool) -> CoreResult<Self> {
        let raw = configured
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(if debug { DEV_API_URL } else { PRODUCTION_API_URL });

        Url::parse(raw).map_err(|e| CoreError::invalid_config(format!("{API_URL_ENV}={raw}: {e}")))?;

        Ok(Self {
            base_url: raw.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve from the process environment (native builds)
    pub fn from_env() -> CoreResult<Self> {
        let configured = std::env::var(API_URL_ENV).ok();
        Self::resolve(configured.as_deref(), cfg!(debug_assertions))
    }

    /// Resolve from the value baked in at compile time (wasm builds)
    pub fn from_build_env() -> CoreResult<Self> {
        Self::resolve(option_env!("TILLPOINT_API_URL"), cfg!(debug_assertions))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
