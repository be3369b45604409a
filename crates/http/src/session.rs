//! Session token storage
//!
//! The session is two strings, an access token and a refresh token, kept in a
//! key/value backend. In the browser that backend is `localStorage`; natively
//! it is a file or, in tests, memory. The client owns a [`Session`] handle and
//! never touches ambient global storage.

use crate::client::error::ClientError;
use crate::types::TokenPair;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Storage key for the access token
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// Storage key for the refresh token
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// Key/value backend holding the session tokens
pub trait SessionStore: Send + Sync {
    /// Read a value
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> Result<(), ClientError>;

    /// Remove every value held by the store
    fn clear(&self) -> Result<(), ClientError>;
}

/// In-memory store, used by tests and short-lived processes
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn values(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.values.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
        self.values().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        self.values().clear();
        Ok(())
    }
}

/// Handle over the current session
///
/// Cloning is cheap; all clones share the same backend.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
}

impl Session {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Session backed by a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemorySessionStore::new()))
    }

    pub fn access_token(&self) -> Option<String> {
        self.store.get(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.store.get(REFRESH_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Presence check only, the token may well be expired
    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    /// Store a freshly issued pair, overwriting both tokens
    pub fn store_tokens(&self, tokens: &TokenPair) -> Result<(), ClientError> {
        self.store.set(ACCESS_TOKEN_KEY, &tokens.access_token)?;
        self.store.set(REFRESH_TOKEN_KEY, &tokens.refresh_token)
    }

    /// Replace the access token after a refresh
    pub fn replace_access_token(&self, token: &str) -> Result<(), ClientError> {
        self.store.set(ACCESS_TOKEN_KEY, token)
    }

    /// Drop the whole session
    pub fn clear(&self) -> Result<(), ClientError> {
        self.store.clear()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(access: &str, refresh: &str) -> TokenPair {
        TokenPair {
            access_token: access.into(),
            refresh_token: refresh.into(),
        }
    }

    #[test]
    fn test_new_login_overwrites_both_tokens() {
        let session = Session::in_memory();
        session.store_tokens(&pair("a1", "r1")).unwrap();
        session.store_tokens(&pair("a2", "r2")).unwrap();

        assert_eq!(session.access_token().as_deref(), Some("a2"));
        assert_eq!(session.refresh_token().as_deref(), Some("r2"));
    }

    #[test]
    fn test_refresh_replaces_only_access_token() {
        let session = Session::in_memory();
        session.store_tokens(&pair("a1", "r1")).unwrap();
        session.replace_access_token("a2").unwrap();

        assert_eq!(session.access_token().as_deref(), Some("a2"));
        assert_eq!(session.refresh_token().as_deref(), Some("r1"));
    }

    #[test]
    fn test_clear_drops_everything() {
        let store = Arc::new(MemorySessionStore::new());
        store.set("unrelated", "value").unwrap();
        let session = Session::new(store.clone());
        session.store_tokens(&pair("a", "r")).unwrap();

        session.clear().unwrap();

        assert!(!session.is_authenticated());
        assert!(session.refresh_token().is_none());
        assert!(store.get("unrelated").is_none());
    }

    #[test]
    fn test_empty_token_counts_as_absent() {
        let session = Session::in_memory();
        session.replace_access_token("").unwrap();
        assert!(!session.is_authenticated());
    }
}
