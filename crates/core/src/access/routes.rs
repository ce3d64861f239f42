//! Coarse request-path classification used by the hosting server

use super::guard::LoginSurface;
use serde::{Deserialize, Serialize};

/// Class of a requested path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathClass {
    /// `/`, left to client-side logic
    Root,
    Public,
    ClientProtected,
    AdminProtected,
    Other,
}

impl PathClass {
    pub const fn is_protected(self) -> bool {
        matches!(self, Self::ClientProtected | Self::AdminProtected)
    }
}

/// What the path filter does with a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOutcome {
    Pass,
    /// Redirect to this location (login surface plus `next` parameter)
    Redirect(String),
}

/// Static prefix lists for path classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteTable {
    pub public: Vec<String>,
    pub client_protected: Vec<String>,
    pub admin_protected: Vec<String>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            public: ["/login", "/pos/login", "/register", "/health", "/assets"]
                .map(String::from)
                .to_vec(),
            client_protected: ["/dashboard", "/pos", "/inventory", "/staff"]
                .map(String::from)
                .to_vec(),
            admin_protected: ["/admin"].map(String::from).to_vec(),
        }
    }
}

/// Prefix match on whole path segments: `/pos` matches `/pos` and `/pos/x`,
/// never `/position`.
fn matches_prefix(path: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        return false;
    }
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

impl RouteTable {
    pub fn classify(&self, path: &str) -> PathClass {
        if path.is_empty() || path == "/" {
            return PathClass::Root;
        }
        let any = |prefixes: &[String]| prefixes.iter().any(|p| matches_prefix(path, p));

        if any(&self.public) {
            PathClass::Public
        } else if any(&self.admin_protected) {
            PathClass::AdminProtected
        } else if any(&self.client_protected) {
            PathClass::ClientProtected
        } else {
            PathClass::Other
        }
    }

    /// Apply the coarse rule: protected paths need a token cookie to be
    /// present. Validity is not checked here; the client guard and the first
    /// API call do that.
    pub fn filter(&self, path: &str, has_token: bool) -> FilterOutcome {
        let class = self.classify(path);
        if !class.is_protected() || has_token {
            return FilterOutcome::Pass;
        }
        FilterOutcome::Redirect(login_redirect(LoginSurface::for_path(path), path))
    }
}

/// Location of `surface` carrying the originally requested path
pub fn login_redirect(surface: LoginSurface, next: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(next.as_bytes()).collect();
    format!("{}?next={encoded}", surface.path())
}

/// The `next` path carried by a login page query string, if it is safe to
/// follow.
///
/// Only same-origin absolute paths are accepted; protocol-relative (`//host`)
/// and backslash forms are dropped.
pub fn next_location(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let next = url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "next")
        .map(|(_, value)| value.into_owned())?;

    let safe = next.starts_with('/') && !next.starts_with("//") && !next.contains('\\');
    safe.then_some(next)
}
