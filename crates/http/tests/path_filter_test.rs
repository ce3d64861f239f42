//! Coarse path filter wired into an axum router

#![cfg(feature = "server")]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    middleware,
    routing::get,
};
use std::sync::Arc;
use tillpoint_core::access::RouteTable;
use tillpoint_http::middleware::path_filter_middleware;
use tillpoint_http::routes::health_check;
use tower::ServiceExt;

fn app() -> Router {
    let routes = Arc::new(RouteTable::default());
    Router::new()
        .route("/health", get(health_check))
        .fallback(|| async { "app shell" })
        .layer(middleware::from_fn_with_state(routes, path_filter_middleware))
}

async fn status_and_location(uri: &str, cookie: Option<&str>) -> (StatusCode, Option<String>) {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let response = app()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|value| value.to_str().unwrap().to_string());
    (response.status(), location)
}

#[tokio::test]
async fn test_admin_area_without_cookie_redirects() {
    let (status, location) = status_and_location("/admin/companies", None).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/login?next=%2Fadmin%2Fcompanies"));
}

#[tokio::test]
async fn test_pos_area_without_cookie_redirects_to_staff_login() {
    let (status, location) = status_and_location("/pos/checkout", None).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/pos/login?next=%2Fpos%2Fcheckout"));
}

#[tokio::test]
async fn test_cookie_presence_passes() {
    let (status, _) = status_and_location("/dashboard", Some("auth_token=whatever")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_public_and_root_paths_pass() {
    for uri in ["/", "/login", "/pos/login", "/health", "/about"] {
        let (status, location) = status_and_location(uri, None).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(location.is_none(), "{uri}");
    }
}

#[tokio::test]
async fn test_empty_cookie_does_not_count() {
    let (status, _) = status_and_location("/inventory", Some("auth_token=")).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_dot_segments_cannot_reach_protected_area_through_public_prefix() {
    for uri in ["/login/../admin/companies", "/pos/login/%2e%2e/%2e%2e/pos"] {
        let (status, location) = status_and_location(uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert!(location.is_none(), "{uri}");
    }
}

#[tokio::test]
async fn test_rejected_path_uses_api_error_body() {
    let response = app()
        .oneshot(Request::builder().uri("/login/../admin").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["code"], "BAD_REQUEST");
}
