//! `localStorage` backed session store

use gloo::storage::{LocalStorage, Storage};
use tasklist_http::{ClientError, SessionStore};

/// Keeps the session tokens in the tab's `localStorage`, as raw strings
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| ClientError::Storage(format!("{e:?}")))
    }

    fn clear(&self) -> Result<(), ClientError> {
        LocalStorage::raw()
            .clear()
            .map_err(|e| ClientError::Storage(format!("{e:?}")))
    }
}
