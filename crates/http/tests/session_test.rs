//! Auth Service and Auth Context against a mocked backend

#![cfg(feature = "client")]

use serde_json::json;
use std::sync::Arc;
use tillpoint_core::access::{Access, GuardDecision, LoginSurface, evaluate};
use tillpoint_core::session::{AUTH_TOKEN_KEY, PRINCIPAL_KEY, USER_TYPE_KEY};
use tillpoint_core::{
    AuthPhase, KeyValueStorage, MemoryStorage, Principal, StaffPrincipal, StaffRole,
    UserType,
};
use tillpoint_http::client::{ClientError, PublicClient};
use tillpoint_http::types::Credentials;
use tillpoint_http::{AuthContext, AuthError, AuthService, TokenStore};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct Harness {
    server: MockServer,
    storage: Arc<MemoryStorage>,
    cookies: Arc<MemoryStorage>,
    store: TokenStore,
}

impl Harness {
    async fn start() -> Self {
        let storage = Arc::new(MemoryStorage::new());
        let cookies = Arc::new(MemoryStorage::new());
        let store = TokenStore::new(storage.clone()).with_cookie_jar(cookies.clone());
        Self {
            server: MockServer::start().await,
            storage,
            cookies,
            store,
        }
    }

    fn service(&self) -> AuthService {
        AuthService::new(PublicClient::new(self.server.uri()).unwrap(), self.store.clone())
    }

    fn context(&self) -> AuthContext {
        AuthContext::new(self.service())
    }

    /// Session left behind by an earlier page load
    fn seed_staff_session(&self) {
        let principal = Principal::Staff(StaffPrincipal {
            staff_id: "S1".to_string(),
            store_id: "ST1".to_string(),
            name: None,
            role: StaffRole::Staff,
        });
        self.storage.set_item(AUTH_TOKEN_KEY, "abc").unwrap();
        self.storage.set_item(USER_TYPE_KEY, "staff").unwrap();
        self.storage
            .set_item(PRINCIPAL_KEY, &principal.to_snapshot().unwrap())
            .unwrap();
        self.cookies.set_item(AUTH_TOKEN_KEY, "abc").unwrap();
    }

    async fn mock_staff_login_ok(&self) {
        Mock::given(method("POST"))
            .and(path("/staff/login"))
            .and(body_json(json!({"staff_id": "S1", "store_id": "ST1", "passcode": "1234"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "token": "abc",
                "staff": {"staff_id": "S1", "store_id": "ST1", "role": "staff"}
            })))
            .mount(&self.server)
            .await;
    }
}

fn staff_credentials() -> Credentials {
    Credentials::staff("S1", "ST1", "1234")
}

#[tokio::test]
async fn test_staff_login_stores_token_and_renders_pos() {
    let harness = Harness::start().await;
    harness.mock_staff_login_ok().await;

    let context = harness.context();
    context.mount();
    let principal = context.login(&staff_credentials()).await.unwrap();

    assert_eq!(principal.user_type(), UserType::Staff);
    assert_eq!(harness.store.token().unwrap().unwrap().as_str(), "abc");
    assert_eq!(harness.cookies.get_item("auth_token").unwrap().as_deref(), Some("abc"));

    let state = context.state();
    assert_eq!(state.phase(), AuthPhase::Authenticated);
    assert_eq!(
        evaluate(&state, &Access::UserType(UserType::Staff)),
        GuardDecision::Render
    );
}

#[tokio::test]
async fn test_rejected_login_leaves_store_empty() {
    let harness = Harness::start().await;
    Mock::given(method("POST"))
        .and(path("/staff/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "Invalid passcode"})))
        .mount(&harness.server)
        .await;

    let context = harness.context();
    context.mount();
    let err = context.login(&staff_credentials()).await.unwrap_err();

    assert!(matches!(err, AuthError::Rejected { status: 401, .. }));
    assert_eq!(err.to_string(), "Invalid passcode");
    assert_eq!(err.user_message(), "Invalid passcode");
    assert!(harness.storage.is_empty());
    assert!(harness.cookies.is_empty());
    assert_eq!(context.state().phase(), AuthPhase::Unauthenticated);
}

#[tokio::test]
async fn test_company_login_uses_admin_endpoint() {
    let harness = Harness::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "tok",
            "user": {"id": "1", "user_type": "super_admin"}
        })))
        .expect(1)
        .mount(&harness.server)
        .await;

    let service = harness.service();
    let principal = service
        .login(&Credentials::company("root@tillpoint.test", "pw"))
        .await
        .unwrap();

    assert_eq!(principal.user_type(), UserType::SuperAdmin);
    let stored = harness.store.get().unwrap().unwrap();
    assert_eq!(stored.principal, principal);
}

#[tokio::test]
async fn test_empty_token_in_login_response_is_rejected() {
    let harness = Harness::start().await;
    Mock::given(method("POST"))
        .and(path("/staff/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "",
            "staff": {"staff_id": "S1", "store_id": "ST1", "role": "staff"}
        })))
        .mount(&harness.server)
        .await;

    let err = harness.service().login(&staff_credentials()).await.unwrap_err();
    assert!(matches!(err, AuthError::InvalidResponse(_)));
    assert!(harness.storage.is_empty());
}

#[tokio::test]
async fn test_logout_clears_store_when_backend_fails() {
    let harness = Harness::start().await;
    harness.mock_staff_login_ok().await;
    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .and(header("authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&harness.server)
        .await;

    let context = harness.context();
    context.mount();
    context.login(&staff_credentials()).await.unwrap();

    let result = context.logout().await;
    assert!(result.is_err());
    assert!(harness.storage.is_empty());
    assert!(harness.cookies.is_empty());
    assert_eq!(context.state().phase(), AuthPhase::Unauthenticated);
}

#[tokio::test]
async fn test_logout_clears_store_when_network_is_down() {
    let harness = Harness::start().await;
    harness.seed_staff_session();

    // Same store, unreachable backend
    let offline = AuthService::new(PublicClient::new("http://127.0.0.1:1").unwrap(), harness.store.clone());
    let context = AuthContext::new(offline);
    assert!(context.mount().is_authenticated());

    let err = context.logout().await.unwrap_err();
    assert!(matches!(err, AuthError::Client(ClientError::Request(_))));
    assert!(harness.storage.is_empty());
    assert_eq!(context.state().phase(), AuthPhase::Unauthenticated);
}

#[tokio::test]
async fn test_logout_succeeds_and_repeats_safely() {
    let harness = Harness::start().await;
    harness.seed_staff_session();
    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Logged out"})))
        .expect(1)
        .mount(&harness.server)
        .await;

    let context = harness.context();
    context.mount();
    context.logout().await.unwrap();
    // Second call finds no token and does not hit the backend
    context.logout().await.unwrap();
    assert_eq!(context.state().phase(), AuthPhase::Unauthenticated);
}

#[tokio::test]
async fn test_mount_with_token_is_optimistic() {
    let harness = Harness::start().await;
    harness.seed_staff_session();

    let context = harness.context();
    assert!(context.state().is_loading());
    let state = context.mount();

    assert_eq!(state.phase(), AuthPhase::Authenticated);
    assert_eq!(state.user_type(), Some(UserType::Staff));
    // No request reached the backend
    assert!(harness.server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_mount_without_token() {
    let harness = Harness::start().await;
    let context = harness.context();
    let state = context.mount();

    assert_eq!(state.phase(), AuthPhase::Unauthenticated);
    assert_eq!(
        evaluate(&state, &Access::Admin),
        GuardDecision::Redirect(LoginSurface::Admin)
    );
}

#[tokio::test]
async fn test_mount_with_corrupt_snapshot_clears_store() {
    let harness = Harness::start().await;
    harness.storage.set_item("auth_token", "abc").unwrap();
    harness.storage.set_item("user_type", "staff").unwrap();
    harness.storage.set_item("principal", "{not json").unwrap();

    let context = harness.context();
    assert_eq!(context.mount().phase(), AuthPhase::Unauthenticated);
    assert!(harness.storage.is_empty());
}

#[tokio::test]
async fn test_forced_logout_happens_once() {
    let harness = Harness::start().await;
    harness.seed_staff_session();
    let context = harness.context();
    context.mount();

    let mut updates = context.subscribe();

    let expired = ClientError::from_status(
        reqwest::StatusCode::UNAUTHORIZED,
        r#"{"error":"Token expired","code":"TOKEN_EXPIRED"}"#,
    );
    assert!(context.handle_error(&expired));
    assert!(harness.storage.is_empty());
    assert!(harness.cookies.is_empty());
    assert_eq!(context.state().phase(), AuthPhase::Unauthenticated);
    assert!(updates.has_changed().unwrap());
    updates.borrow_and_update();

    let invalid = ClientError::from_status(
        reqwest::StatusCode::FORBIDDEN,
        r#"{"error":"Invalid token","code":"INVALID_TOKEN"}"#,
    );
    assert!(!context.handle_error(&invalid));
    assert!(!context.handle_error(&expired));
    assert!(!updates.has_changed().unwrap());
}

#[tokio::test]
async fn test_plain_permission_denial_keeps_session() {
    let harness = Harness::start().await;
    harness.seed_staff_session();
    let context = harness.context();
    context.mount();

    let denied = ClientError::from_status(reqwest::StatusCode::FORBIDDEN, r#"{"error":"Managers only"}"#);
    assert!(!context.handle_error(&denied));
    assert!(context.state().is_authenticated());
    assert!(harness.store.token().unwrap().is_some());
}

#[tokio::test]
async fn test_authenticated_request_attaches_bearer() {
    let harness = Harness::start().await;
    harness.seed_staff_session();
    Mock::given(method("GET"))
        .and(path("/categories"))
        .and(header("authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&harness.server)
        .await;

    let service = harness.service();
    let request = service.authenticated_request(reqwest::Method::GET, "/categories");
    let response = service.send(request).await.unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_send_passes_error_statuses_through() {
    let harness = Harness::start().await;
    Mock::given(method("GET"))
        .and(path("/categories"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "Missing token"})))
        .mount(&harness.server)
        .await;

    let service = harness.service();
    let request = service.authenticated_request(reqwest::Method::GET, "/categories");
    let response = service.send(request).await.unwrap();
    assert_eq!(response.status(), 401);

    let received = harness.server.received_requests().await.unwrap();
    assert!(received[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_authenticated_client_follows_store() {
    let harness = Harness::start().await;
    let service = harness.service();
    assert!(service.authenticated_client().unwrap().is_none());

    harness.seed_staff_session();
    assert!(service.authenticated_client().unwrap().is_some());
}
