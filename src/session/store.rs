use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Keys the application persists. The string forms are the on-disk names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionKey {
    IsLoggedIn,
    UserType,
}

impl SessionKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SessionKey::IsLoggedIn => "isLoggedIn",
            SessionKey::UserType => "userType",
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to access session file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Session file {} is not valid TOML: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize session: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// String key/value store for the session flags.
///
/// `clear` on a missing key is not an error.
pub trait SessionStore: Send {
    fn get(&self, key: SessionKey) -> Option<String>;
    fn set(&mut self, key: SessionKey, value: &str) -> Result<(), StoreError>;
    fn clear(&mut self, key: SessionKey) -> Result<(), StoreError>;
}

/// Process-lifetime store. Used for ephemeral sessions and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<SessionKey, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: SessionKey) -> Option<String> {
        self.values.get(&key).cloned()
    }

    fn set(&mut self, key: SessionKey, value: &str) -> Result<(), StoreError> {
        self.values.insert(key, value.to_string());
        Ok(())
    }

    fn clear(&mut self, key: SessionKey) -> Result<(), StoreError> {
        self.values.remove(&key);
        Ok(())
    }
}

/// Store backed by a flat TOML table on disk. The whole file is rewritten
/// after every mutation.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store; the file
    /// is only created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let values = if path.exists() {
            let contents = std::fs::read_to_string(&path).map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;
            toml::from_str(&contents).map_err(|source| StoreError::Parse {
                path: path.clone(),
                source,
            })?
        } else {
            BTreeMap::new()
        };
        debug!(path = %path.display(), entries = values.len(), "opened session file");
        Ok(Self { path, values })
    }

    /// Like [`FileStore::open`], but an unreadable or malformed file yields
    /// an empty store at the same path together with the error. The file is
    /// rewritten on the next write.
    pub fn open_or_empty(path: impl Into<PathBuf>) -> (Self, Option<StoreError>) {
        let path = path.into();
        match Self::open(&path) {
            Ok(store) => (store, None),
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "session file unusable, starting logged out"
                );
                let store = Self {
                    path,
                    values: BTreeMap::new(),
                };
                (store, Some(e))
            }
        }
    }

    /// Default location: `<data_dir>/gameadconnect/session.toml`.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gameadconnect")
            .join("session.toml")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let contents = toml::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, contents).map_err(|source| {
            warn!(path = %self.path.display(), "session write failed");
            StoreError::Io {
                path: self.path.clone(),
                source,
            }
        })
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: SessionKey) -> Option<String> {
        self.values.get(key.as_str()).cloned()
    }

    fn set(&mut self, key: SessionKey, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.as_str().to_string(), value.to_string());
        self.flush()
    }

    fn clear(&mut self, key: SessionKey) -> Result<(), StoreError> {
        if self.values.remove(key.as_str()).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_clear_missing_key() {
        let mut store = MemoryStore::new();
        assert!(store.clear(SessionKey::UserType).is_ok());
        assert_eq!(store.get(SessionKey::UserType), None);
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.toml");

        let mut store = FileStore::open(&path).unwrap();
        assert_eq!(store.get(SessionKey::IsLoggedIn), None);
        assert!(!path.exists());

        store.set(SessionKey::IsLoggedIn, "true").unwrap();
        store.set(SessionKey::UserType, "developer").unwrap();
        assert!(path.exists());

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get(SessionKey::IsLoggedIn).as_deref(), Some("true"));
        assert_eq!(reopened.get(SessionKey::UserType).as_deref(), Some("developer"));

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("isLoggedIn"));
        assert!(contents.contains("userType"));
    }

    #[test]
    fn test_file_store_clear_rewrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");

        let mut store = FileStore::open(&path).unwrap();
        store.set(SessionKey::IsLoggedIn, "true").unwrap();
        store.clear(SessionKey::IsLoggedIn).unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get(SessionKey::IsLoggedIn), None);
    }

    #[test]
    fn test_file_store_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");
        std::fs::write(&path, "isLoggedIn = [unterminated").unwrap();

        let err = FileStore::open(&path).unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
    }

    #[test]
    fn test_malformed_session_file_reads_as_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");
        std::fs::write(&path, "isLoggedIn = true\nuserType = \"developer\"\n").unwrap();

        assert!(matches!(FileStore::open(&path), Err(StoreError::Parse { .. })));

        let (mut store, err) = FileStore::open_or_empty(&path);
        assert!(matches!(err, Some(StoreError::Parse { .. })));
        assert_eq!(store.get(SessionKey::IsLoggedIn), None);
        assert_eq!(store.path(), path.as_path());

        store.set(SessionKey::IsLoggedIn, "true").unwrap();
        let (reopened, err) = FileStore::open_or_empty(&path);
        assert!(err.is_none());
        assert_eq!(reopened.get(SessionKey::IsLoggedIn).as_deref(), Some("true"));
    }
}
