//! Error body contract shared with the backend API

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error response body returned by the backend: `{ "error": ..., "code": ... }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Recognised `code` values that drive special-case behaviour
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    TokenExpired,
    InvalidToken,
    CategoryHasProducts,
    Other(String),
}

impl ErrorCode {
    pub fn parse(code: &str) -> Self {
        match code {
            "TOKEN_EXPIRED" => Self::TokenExpired,
            "INVALID_TOKEN" => Self::InvalidToken,
            "CATEGORY_HAS_PRODUCTS" => Self::CategoryHasProducts,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::CategoryHasProducts => "CATEGORY_HAS_PRODUCTS",
            Self::Other(code) => code,
        }
    }

    /// Codes that mean the stored session is dead and must be torn down
    pub const fn is_session_invalidating(&self) -> bool {
        matches!(self, Self::TokenExpired | Self::InvalidToken)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ApiError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: None,
        }
    }

    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.code.as_deref().map(ErrorCode::parse)
    }

    /// Parse a response body, falling back to the raw text or `fallback`
    /// (usually the HTTP reason phrase) when it is not the expected shape.
    pub fn from_body(body: &str, fallback: &str) -> Self {
        if let Ok(parsed) = serde_json::from_str::<Self>(body) {
            return parsed;
        }
        let text = body.trim();
        if text.is_empty() {
            Self::new(fallback)
        } else {
            Self::new(text)
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.error)
    }
}
