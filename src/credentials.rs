//! Credential Store
//!
//! Holds the single API key the client sends on every request. The key is
//! written at login, read per request and removed on logout. No format
//! validation is applied; an empty value counts as absent.

use std::sync::{Arc, RwLock};

use crate::error::CredentialError;

/// Storage key under which the API key is persisted
pub const API_KEY_STORAGE_KEY: &str = "wallet_watcher_api_key";

/// Persistent home of the API key
pub trait CredentialStore {
    /// The stored key, if any
    fn api_key(&self) -> Option<String>;

    /// Persist a key, replacing any previous one
    fn store_api_key(&self, key: &str) -> Result<(), CredentialError>;

    /// Forget the key (logout)
    fn clear(&self) -> Result<(), CredentialError>;

    /// Whether a usable key is present
    fn is_authenticated(&self) -> bool {
        self.api_key().is_some()
    }
}

/// In-process store, shared between clones
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    key: Arc<RwLock<Option<String>>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            key: Arc::new(RwLock::new(Some(key.into()))),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn api_key(&self) -> Option<String> {
        self.key
            .read()
            .ok()
            .and_then(|guard| guard.clone())
            .filter(|k| !k.is_empty())
    }

    fn store_api_key(&self, key: &str) -> Result<(), CredentialError> {
        let mut guard = self
            .key
            .write()
            .map_err(|e| CredentialError::Unavailable(e.to_string()))?;
        *guard = Some(key.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), CredentialError> {
        let mut guard = self
            .key
            .write()
            .map_err(|e| CredentialError::Unavailable(e.to_string()))?;
        *guard = None;
        Ok(())
    }
}

#[cfg(feature = "native")]
pub use file::FileCredentialStore;

#[cfg(feature = "native")]
mod file {
    use std::path::{Path, PathBuf};

    use super::{CredentialStore, API_KEY_STORAGE_KEY};
    use crate::error::CredentialError;

    /// TOML-backed store, the native counterpart of browser local storage
    ///
    /// The file holds one entry: `wallet_watcher_api_key = "<key>"`.
    #[derive(Debug, Clone)]
    pub struct FileCredentialStore {
        path: PathBuf,
    }

    impl FileCredentialStore {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn read_table(&self) -> Result<toml::Table, CredentialError> {
            if !self.path.exists() {
                return Ok(toml::Table::new());
            }
            let content = std::fs::read_to_string(&self.path)?;
            content
                .parse::<toml::Table>()
                .map_err(|e| CredentialError::Format(e.to_string()))
        }

        fn write_table(&self, table: &toml::Table) -> Result<(), CredentialError> {
            if let Some(parent) = self.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content =
                toml::to_string(table).map_err(|e| CredentialError::Format(e.to_string()))?;
            std::fs::write(&self.path, content)?;
            Ok(())
        }
    }

    impl CredentialStore for FileCredentialStore {
        fn api_key(&self) -> Option<String> {
            match self.read_table() {
                Ok(table) => table
                    .get(API_KEY_STORAGE_KEY)
                    .and_then(|v| v.as_str())
                    .filter(|k| !k.is_empty())
                    .map(str::to_string),
                Err(e) => {
                    tracing::warn!("Failed to read credentials from {:?}: {}", self.path, e);
                    None
                }
            }
        }

        fn store_api_key(&self, key: &str) -> Result<(), CredentialError> {
            let mut table = self.read_table()?;
            table.insert(
                API_KEY_STORAGE_KEY.to_string(),
                toml::Value::String(key.to_string()),
            );
            self.write_table(&table)
        }

        fn clear(&self) -> Result<(), CredentialError> {
            let mut table = self.read_table()?;
            if table.remove(API_KEY_STORAGE_KEY).is_some() {
                self.write_table(&table)?;
            }
            Ok(())
        }
    }
}
