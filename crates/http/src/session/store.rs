//! Token Store: the only place the session token and principal are persisted

use std::fmt;
use std::sync::Arc;
use tillpoint_core::session::{AUTH_TOKEN_KEY, PRINCIPAL_KEY, USER_TYPE_KEY};
use tillpoint_core::{
    CoreError, CoreResult, KeyValueStorage, Principal, SessionToken, StoredSession, UserType,
};

/// Persists the session token and principal snapshot.
///
/// The token is optionally mirrored into a cookie jar so the hosting server's
/// path filter can see it. Cloning shares the underlying storage.
///
/// Reads are public. Writes are crate-private: only [`AuthService`] and the
/// forced-logout path of [`AuthContext`] change the stored session.
///
/// [`AuthService`]: super::AuthService
/// [`AuthContext`]: super::AuthContext
#[derive(Clone)]
pub struct TokenStore {
    storage: Arc<dyn KeyValueStorage>,
    cookie_jar: Option<Arc<dyn KeyValueStorage>>,
}

impl fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenStore")
            .field("cookie_jar", &self.cookie_jar.is_some())
            .finish_non_exhaustive()
    }
}

impl TokenStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            storage,
            cookie_jar: None,
        }
    }

    /// Mirror the token into `jar` under [`AUTH_TOKEN_KEY`]
    #[must_use]
    pub fn with_cookie_jar(mut self, jar: Arc<dyn KeyValueStorage>) -> Self {
        self.cookie_jar = Some(jar);
        self
    }

    /// Persist a freshly issued session
    pub(crate) fn set(&self, session: &StoredSession) -> CoreResult<()> {
        let user_type = session.principal.user_type();
        let snapshot = session.principal.to_snapshot()?;

        self.storage.set_item(AUTH_TOKEN_KEY, session.token.as_str())?;
        self.storage.set_item(USER_TYPE_KEY, user_type.as_str())?;
        self.storage.set_item(PRINCIPAL_KEY, &snapshot)?;
        if let Some(jar) = &self.cookie_jar {
            jar.set_item(AUTH_TOKEN_KEY, session.token.as_str())?;
        }

        debug!(principal = %session.principal.id(), %user_type, "Session stored");
        Ok(())
    }

    /// The stored token, if any
    pub fn token(&self) -> CoreResult<Option<SessionToken>> {
        Ok(self
            .storage
            .get_item(AUTH_TOKEN_KEY)?
            .and_then(SessionToken::new))
    }

    /// Read back the stored session.
    ///
    /// `Ok(None)` when no token is present. A token whose principal snapshot
    /// is missing or unreadable is reported as a serialization error.
    pub fn get(&self) -> CoreResult<Option<StoredSession>> {
        let Some(token) = self.token()? else {
            return Ok(None);
        };

        let user_type = self
            .storage
            .get_item(USER_TYPE_KEY)?
            .ok_or_else(|| CoreError::serialization_error("user type missing for stored token"))?
            .parse::<UserType>()
            .map_err(|e| CoreError::serialization_error(e.to_string()))?;

        let snapshot = self
            .storage
            .get_item(PRINCIPAL_KEY)?
            .ok_or_else(|| CoreError::serialization_error("principal missing for stored token"))?;

        let principal = Principal::from_snapshot(user_type, &snapshot)?;
        Ok(Some(StoredSession { token, principal }))
    }

    /// Remove every trace of the session. Clearing an empty store is a no-op.
    pub(crate) fn clear(&self) -> CoreResult<()> {
        // Token first: once it is gone the session reads as absent even if a
        // later removal fails.
        self.storage.remove_item(AUTH_TOKEN_KEY)?;
        self.storage.remove_item(USER_TYPE_KEY)?;
        self.storage.remove_item(PRINCIPAL_KEY)?;
        if let Some(jar) = &self.cookie_jar {
            jar.remove_item(AUTH_TOKEN_KEY)?;
        }
        debug!("Session cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tillpoint_core::{AdminPrincipal, MemoryStorage, StaffPrincipal, StaffRole};

    mockall::mock! {
        Storage {}

        impl KeyValueStorage for Storage {
            fn get_item(&self, key: &str) -> CoreResult<Option<String>>;
            fn set_item(&self, key: &str, value: &str) -> CoreResult<()>;
            fn remove_item(&self, key: &str) -> CoreResult<()>;
        }
    }

    fn staff_session() -> StoredSession {
        StoredSession {
            token: SessionToken::new("abc").unwrap(),
            principal: Principal::Staff(StaffPrincipal {
                staff_id: "S1".to_string(),
                store_id: "ST1".to_string(),
                name: Some("Sam".to_string()),
                role: StaffRole::Staff,
            }),
        }
    }

    #[test]
    fn test_set_then_get() {
        let store = TokenStore::new(Arc::new(MemoryStorage::new()));
        assert_eq!(store.get().unwrap(), None);

        store.set(&staff_session()).unwrap();
        assert_eq!(store.get().unwrap(), Some(staff_session()));
        assert_eq!(store.token().unwrap().unwrap().as_str(), "abc");
    }

    #[test]
    fn test_writes_all_keys_and_cookie() {
        let storage = Arc::new(MemoryStorage::new());
        let jar = Arc::new(MemoryStorage::new());
        let store = TokenStore::new(storage.clone()).with_cookie_jar(jar.clone());

        store
            .set(&StoredSession {
                token: SessionToken::new("tok").unwrap(),
                principal: Principal::Admin(AdminPrincipal {
                    id: "42".to_string(),
                    user_type: UserType::SuperAdmin,
                    name: None,
                }),
            })
            .unwrap();

        assert_eq!(storage.get_item(AUTH_TOKEN_KEY).unwrap().as_deref(), Some("tok"));
        assert_eq!(storage.get_item(USER_TYPE_KEY).unwrap().as_deref(), Some("super_admin"));
        assert!(storage.get_item(PRINCIPAL_KEY).unwrap().is_some());
        assert_eq!(jar.get_item(AUTH_TOKEN_KEY).unwrap().as_deref(), Some("tok"));

        store.clear().unwrap();
        assert!(storage.is_empty());
        assert!(jar.is_empty());
        store.clear().unwrap();
    }

    #[test]
    fn test_empty_token_reads_as_absent() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set_item(AUTH_TOKEN_KEY, "").unwrap();
        let store = TokenStore::new(storage);
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn test_token_without_principal_is_corrupt() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set_item(AUTH_TOKEN_KEY, "abc").unwrap();
        storage.set_item(USER_TYPE_KEY, "staff").unwrap();
        let store = TokenStore::new(storage.clone());
        assert!(matches!(store.get(), Err(CoreError::Serialization { .. })));

        storage.set_item(PRINCIPAL_KEY, "{").unwrap();
        assert!(matches!(store.get(), Err(CoreError::Serialization { .. })));

        storage.set_item(USER_TYPE_KEY, "owner").unwrap();
        assert!(matches!(store.get(), Err(CoreError::Serialization { .. })));
    }

    #[test]
    fn test_storage_failure_propagates() {
        let mut storage = MockStorage::new();
        storage
            .expect_set_item()
            .returning(|_, _| Err(CoreError::storage_error("quota exceeded")));
        let store = TokenStore::new(Arc::new(storage));

        let err = store.set(&staff_session()).unwrap_err();
        assert_eq!(err, CoreError::storage_error("quota exceeded"));
    }

    #[test]
    fn test_clear_removes_token_first() {
        let mut storage = MockStorage::new();
        let mut seq = mockall::Sequence::new();
        for key in [AUTH_TOKEN_KEY, USER_TYPE_KEY, PRINCIPAL_KEY] {
            storage
                .expect_remove_item()
                .withf(move |k| k == key)
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| Ok(()));
        }
        TokenStore::new(Arc::new(storage)).clear().unwrap();
    }
}
