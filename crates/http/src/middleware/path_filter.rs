//! Coarse path filter: protected areas require the token cookie to be present.
//!
//! Only presence is checked. The client guard and the first API call decide
//! whether the token is still valid.

use crate::error::HttpError;
use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;
use tillpoint_core::access::{FilterOutcome, RouteTable};
use tillpoint_core::session::AUTH_TOKEN_KEY;

/// Whether the request carries a non-empty `auth_token` cookie
pub fn has_token_cookie(headers: &HeaderMap) -> bool {
    CookieJar::from_headers(headers)
        .get(AUTH_TOKEN_KEY)
        .is_some_and(|cookie| !cookie.value().trim().is_empty())
}

/// Whether `path` has a `.` or `..` segment, plain or percent-encoded.
///
/// Prefix classification is only sound on normalized paths.
fn has_dot_segment(path: &str) -> bool {
    path.split('/').any(|segment| {
        let segment = segment.to_ascii_lowercase().replace("%2e", ".");
        segment == "." || segment == ".."
    })
}

/// Apply [`RouteTable::filter`] to every request
pub async fn path_filter_middleware(
    State(routes): State<Arc<RouteTable>>,
    req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path().to_owned();
    if has_dot_segment(&path) {
        debug!(%path, "Rejecting non-normalized path");
        return HttpError::BadRequest(format!("path is not normalized: {path}")).into_response();
    }
    match routes.filter(&path, has_token_cookie(req.headers())) {
        FilterOutcome::Pass => next.run(req).await,
        FilterOutcome::Redirect(location) => {
            debug!(%path, %location, "No session cookie, redirecting to login");
            match HeaderValue::from_str(&location) {
                Ok(value) => (StatusCode::SEE_OTHER, [(header::LOCATION, value)]).into_response(),
                Err(e) => HttpError::InternalServerError(format!("invalid redirect target: {e}"))
                    .into_response(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_token_cookie_detection() {
        assert!(has_token_cookie(&headers_with_cookie("auth_token=abc")));
        assert!(has_token_cookie(&headers_with_cookie("theme=dark; auth_token=abc")));
        assert!(!has_token_cookie(&headers_with_cookie("auth_token=")));
        assert!(!has_token_cookie(&headers_with_cookie("auth_token_old=abc")));
        assert!(!has_token_cookie(&HeaderMap::new()));
    }

    #[test]
    fn test_dot_segment_detection() {
        assert!(has_dot_segment("/login/../admin"));
        assert!(has_dot_segment("/pos/./checkout"));
        assert!(has_dot_segment("/login/%2E%2e/admin"));
        assert!(!has_dot_segment("/pos/checkout"));
        assert!(!has_dot_segment("/assets/app.v2.js"));
        assert!(!has_dot_segment("/"));
    }
}
