//! Browser-backed [`KeyValueStorage`] implementations

use gloo::storage::{LocalStorage, Storage};
use url::form_urlencoded;
use tillpoint_core::{CoreError, CoreResult, KeyValueStorage};
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// `window.localStorage`; survives reloads and is scoped to the origin
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> CoreResult<Option<String>> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|_| CoreError::storage_error(format!("localStorage read of {key} failed")))
    }

    fn set_item(&self, key: &str, value: &str) -> CoreResult<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|_| CoreError::storage_error(format!("localStorage write of {key} failed")))
    }

    fn remove_item(&self, key: &str) -> CoreResult<()> {
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|_| CoreError::storage_error(format!("localStorage removal of {key} failed")))
    }
}

/// `document.cookie`, read by the hosting server's path filter.
///
/// Values are percent-encoded on write and decoded on read.
#[derive(Debug, Default, Clone, Copy)]
pub struct CookieJar;

/// One week; the backend decides actual validity
const COOKIE_MAX_AGE_SECS: u32 = 7 * 24 * 60 * 60;

impl CookieJar {
    fn document() -> CoreResult<HtmlDocument> {
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.dyn_into::<HtmlDocument>().ok())
            .ok_or_else(|| CoreError::storage_error("no HTML document available"))
    }

    fn write(key: &str, value: &str, max_age_secs: u32) -> CoreResult<()> {
        let value = encode_cookie_value(value);
        Self::document()?
            .set_cookie(&format!("{key}={value}; Path=/; Max-Age={max_age_secs}; SameSite=Lax"))
            .map_err(|_| CoreError::storage_error(format!("cookie write of {key} failed")))
    }
}

impl KeyValueStorage for CookieJar {
    fn get_item(&self, key: &str) -> CoreResult<Option<String>> {
        let cookies = Self::document()?
            .cookie()
            .map_err(|_| CoreError::storage_error("cookie read failed"))?;
        Ok(find_cookie(&cookies, key).map(decode_cookie_value))
    }

    fn set_item(&self, key: &str, value: &str) -> CoreResult<()> {
        Self::write(key, value, COOKIE_MAX_AGE_SECS)
    }

    fn remove_item(&self, key: &str) -> CoreResult<()> {
        Self::write(key, "", 0)
    }
}

fn encode_cookie_value(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

fn decode_cookie_value(raw: &str) -> String {
    // `&` and `=` never appear unescaped, so the whole value parses as one key
    form_urlencoded::parse(raw.as_bytes())
        .next()
        .map(|(decoded, _)| decoded.into_owned())
        .unwrap_or_default()
}

/// Raw value of `key` in a `document.cookie` string
fn find_cookie<'a>(cookies: &'a str, key: &str) -> Option<&'a str> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == key)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}
