//! API wrapper utilities for handling authentication errors

use crate::auth::AuthHandle;
use tillpoint_http::client::ClientError;

/// Force a logout when `error` says the session is no longer valid
pub fn handle_api_error(error: &ClientError, auth: &AuthHandle) {
    if auth.handle_error(error) {
        tracing::info!("Session expired, returning to login");
    }
}

/// Wrapper for API calls that handles auth errors
pub async fn with_auth_error_handling<T, F>(auth: &AuthHandle, api_call: F) -> Result<T, ClientError>
where
    F: std::future::Future<Output = Result<T, ClientError>>,
{
    match api_call.await {
        Ok(result) => Ok(result),
        Err(error) => {
            handle_api_error(&error, auth);
            Err(error)
        }
    }
}
