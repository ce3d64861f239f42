//! Browser storage tests, run with `wasm-pack test --headless --firefox`

#![cfg(target_arch = "wasm32")]

use std::sync::Arc;
use tillpoint_core::session::{AUTH_TOKEN_KEY, PRINCIPAL_KEY, USER_TYPE_KEY};
use tillpoint_core::{KeyValueStorage, Principal, StaffPrincipal, StaffRole};
use tillpoint_frontend_common::{BrowserStorage, CookieJar};
use tillpoint_http::TokenStore;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn principal() -> Principal {
    Principal::Staff(StaffPrincipal {
        staff_id: "S1".to_string(),
        store_id: "ST1".to_string(),
        name: None,
        role: StaffRole::Manager,
    })
}

fn clear_browser() {
    for key in [AUTH_TOKEN_KEY, USER_TYPE_KEY, PRINCIPAL_KEY] {
        BrowserStorage.remove_item(key).unwrap();
    }
    CookieJar.remove_item(AUTH_TOKEN_KEY).unwrap();
}

#[wasm_bindgen_test]
fn local_storage_session_reads_back() {
    clear_browser();
    let store = TokenStore::new(Arc::new(BrowserStorage)).with_cookie_jar(Arc::new(CookieJar));
    assert_eq!(store.get().unwrap(), None);

    BrowserStorage.set_item(AUTH_TOKEN_KEY, "abc").unwrap();
    BrowserStorage.set_item(USER_TYPE_KEY, "staff").unwrap();
    BrowserStorage
        .set_item(PRINCIPAL_KEY, &principal().to_snapshot().unwrap())
        .unwrap();

    let session = store.get().unwrap().unwrap();
    assert_eq!(session.token.as_str(), "abc");
    assert_eq!(session.principal, principal());

    clear_browser();
    assert_eq!(store.get().unwrap(), None);
}

#[wasm_bindgen_test]
fn cookie_round_trips_reserved_characters() {
    clear_browser();
    CookieJar.set_item(AUTH_TOKEN_KEY, "a b;c,d").unwrap();
    assert_eq!(CookieJar.get_item(AUTH_TOKEN_KEY).unwrap().as_deref(), Some("a b;c,d"));

    CookieJar.remove_item(AUTH_TOKEN_KEY).unwrap();
    assert_eq!(CookieJar.get_item(AUTH_TOKEN_KEY).unwrap(), None);
}
