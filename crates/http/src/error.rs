//! HTTP error types for the hosting server

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tillpoint_core::ApiError;

/// Errors answered by the hosting server itself
#[derive(Error, Debug)]
pub enum HttpError {
    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error
    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl HttpError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    const fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
        }
    }
}

// Same `{ error, code }` body the backend API uses
impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        if matches!(self, Self::InternalServerError(_)) {
            error!(error = %self, "Request failed");
        }
        let body = ApiError::new(self.to_string()).with_code(self.code());
        (self.status(), Json(body)).into_response()
    }
}

/// Result type alias using HttpError
pub type Result<T> = std::result::Result<T, HttpError>;
