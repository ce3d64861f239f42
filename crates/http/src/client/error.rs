//! Client error types

use thiserror::Error;
use tillpoint_core::{ApiError, ErrorCode};

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error; no response was received
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// 400 Bad Request
    #[error("{0}")]
    BadRequest(ApiError),

    /// 401 Unauthorized
    #[error("{0}")]
    AuthenticationFailed(ApiError),

    /// 403 Forbidden
    #[error("{0}")]
    Forbidden(ApiError),

    /// 404 Not Found
    #[error("{0}")]
    NotFound(ApiError),

    /// 409 Conflict, 422 Unprocessable Entity and other field-level rejections
    #[error("{error}")]
    Validation { status: u16, error: ApiError },

    /// Any other non-success status
    #[error("Server error {status}: {error}")]
    ServerError { status: u16, error: ApiError },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

/// Error taxonomy the UI branches on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No response received
    Network,
    /// 401/403
    Authorization,
    /// 4xx with a message to show inline on the form
    Validation,
    /// 5xx, shown as a generic alert
    Server,
    /// Local misconfiguration or decoding failure
    Other,
}

impl ClientError {
    /// Create error from HTTP status code and response body
    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let error = ApiError::from_body(body, status.canonical_reason().unwrap_or("Request failed"));
        match status.as_u16() {
            400 => Self::BadRequest(error),
            401 => Self::AuthenticationFailed(error),
            403 => Self::Forbidden(error),
            404 => Self::NotFound(error),
            409 | 422 => Self::Validation {
                status: status.as_u16(),
                error,
            },
            _ => Self::ServerError {
                status: status.as_u16(),
                error,
            },
        }
    }

    /// Read a non-success response into an error
    pub async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Self::from_status(status, &body)
    }

    /// HTTP status, when a response was received
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BadRequest(_) => Some(400),
            Self::AuthenticationFailed(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::Validation { status, .. } | Self::ServerError { status, .. } => Some(*status),
            Self::Request(_) | Self::Serialization(_) | Self::Configuration(_) => None,
        }
    }

    /// Backend error body, when a response was received
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::BadRequest(error)
            | Self::AuthenticationFailed(error)
            | Self::Forbidden(error)
            | Self::NotFound(error)
            | Self::Validation { error, .. }
            | Self::ServerError { error, .. } => Some(error),
            Self::Request(_) | Self::Serialization(_) | Self::Configuration(_) => None,
        }
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.api_error().and_then(ApiError::code)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Request(_) => ErrorKind::Network,
            Self::AuthenticationFailed(_) | Self::Forbidden(_) => ErrorKind::Authorization,
            Self::BadRequest(_) | Self::NotFound(_) | Self::Validation { .. } => ErrorKind::Validation,
            Self::ServerError { status, .. } if *status >= 500 => ErrorKind::Server,
            Self::ServerError { .. } => ErrorKind::Validation,
            Self::Serialization(_) | Self::Configuration(_) => ErrorKind::Other,
        }
    }

    /// 401/403 carrying a token-expired or invalid-token code.
    ///
    /// A plain permission denial without such a code does not qualify.
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::AuthenticationFailed(_) | Self::Forbidden(_))
            && self.code().is_some_and(|code| code.is_session_invalidating())
    }

    /// Text to show the user
    pub fn user_message(&self) -> String {
        match self {
            Self::Request(_) => "Unable to reach the server. Check your connection and try again.".to_string(),
            Self::ServerError { status, .. } if *status >= 500 => {
                "Something went wrong on our side. Please try again.".to_string()
            }
            Self::Serialization(_) | Self::Configuration(_) => self.to_string(),
            other => other
                .api_error()
                .map_or_else(|| other.to_string(), |error| error.error.clone()),
        }
    }
}
