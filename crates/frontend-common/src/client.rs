//! The shared Auth Context instance for this tab

use crate::storage::{BrowserStorage, CookieJar};
use std::cell::OnceCell;
use std::rc::Rc;
use std::sync::Arc;
use tillpoint_core::ApiConfig;
use tillpoint_http::client::{ClientError, TypedClientBuilder};
use tillpoint_http::{AuthContext, AuthService, TokenStore};

thread_local! {
    static AUTH_CONTEXT: OnceCell<Rc<AuthContext>> = const { OnceCell::new() };
}

fn build() -> Result<AuthContext, ClientError> {
    let config =
        ApiConfig::from_build_env().map_err(|e| ClientError::Configuration(e.to_string()))?;
    let client = TypedClientBuilder::new().api_config(&config).build_public()?;
    let store = TokenStore::new(Arc::new(BrowserStorage)).with_cookie_jar(Arc::new(CookieJar));
    tracing::debug!(base_url = %config.base_url(), "Auth context created");
    Ok(AuthContext::new(AuthService::new(client, store)))
}

/// The tab-wide Auth Context, created on first use
pub fn auth_context() -> Result<Rc<AuthContext>, ClientError> {
    AUTH_CONTEXT.with(|cell| {
        if let Some(context) = cell.get() {
            return Ok(context.clone());
        }
        let context = Rc::new(build()?);
        Ok(cell.get_or_init(|| context).clone())
    })
}
