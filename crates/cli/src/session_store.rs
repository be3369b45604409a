//! Token persistence between CLI runs

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tasklist_http::{ClientError, SessionStore};
use tracing::{debug, warn};

/// Session store backed by a small JSON object on disk
///
/// The file is read once on open and rewritten on every change.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

impl FileSessionStore {
    /// Open the store at `path`. A missing or unreadable file is an empty session.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                warn!("Ignoring corrupt session file {}: {e}", path.display());
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        };
        debug!("Using session file {}", path.display());
        Self {
            path,
            values: Mutex::new(values),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn values(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
        self.values.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn persist(&self, values: &BTreeMap<String, String>) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(storage_error)?;
        }
        let content = serde_json::to_string_pretty(values)?;
        std::fs::write(&self.path, content).map_err(storage_error)
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
        let mut values = self.values();
        values.insert(key.to_string(), value.to_string());
        self.persist(&values)
    }

    fn clear(&self) -> Result<(), ClientError> {
        self.values().clear();
        match std::fs::remove_file(&self.path) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(storage_error(e)),
            _ => Ok(()),
        }
    }
}

fn storage_error(e: std::io::Error) -> ClientError {
    ClientError::Storage(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tasklist_http::{Session, TokenPair};

    #[test]
    fn test_tokens_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let session = Session::new(Arc::new(FileSessionStore::open(&path)));
        session
            .store_tokens(&TokenPair {
                access_token: "access".into(),
                refresh_token: "refresh".into(),
            })
            .unwrap();

        let reopened = Session::new(Arc::new(FileSessionStore::open(&path)));
        assert_eq!(reopened.access_token().as_deref(), Some("access"));
        assert_eq!(reopened.refresh_token().as_deref(), Some("refresh"));
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let store = FileSessionStore::open(&path);

        store.set("accessToken", "a").unwrap();
        assert!(path.exists());

        store.clear().unwrap();
        assert!(!path.exists());
        assert_eq!(store.get("accessToken"), None);
        // Clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_corrupt_file_is_empty_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileSessionStore::open(&path);
        assert_eq!(store.get("accessToken"), None);
    }
}
