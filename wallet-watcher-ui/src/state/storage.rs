//! `localStorage` credential store

use wallet_watcher::credentials::{CredentialStore, API_KEY_STORAGE_KEY};
use wallet_watcher::error::CredentialError;
use web_sys::Storage;

/// API key held in the browser's local storage
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageCredentials;

fn local_storage() -> Result<Storage, CredentialError> {
    let window = web_sys::window()
        .ok_or_else(|| CredentialError::Unavailable("no window".to_string()))?;
    window
        .local_storage()
        .map_err(|e| CredentialError::Unavailable(format!("{:?}", e)))?
        .ok_or_else(|| CredentialError::Unavailable("localStorage disabled".to_string()))
}

impl CredentialStore for LocalStorageCredentials {
    fn api_key(&self) -> Option<String> {
        let storage = match local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                tracing::warn!("Cannot read API key: {}", e);
                return None;
            }
        };
        storage
            .get_item(API_KEY_STORAGE_KEY)
            .ok()
            .flatten()
            .filter(|key| !key.is_empty())
    }

    fn store_api_key(&self, key: &str) -> Result<(), CredentialError> {
        local_storage()?
            .set_item(API_KEY_STORAGE_KEY, key)
            .map_err(|e| CredentialError::Unavailable(format!("{:?}", e)))
    }

    fn clear(&self) -> Result<(), CredentialError> {
        local_storage()?
            .remove_item(API_KEY_STORAGE_KEY)
            .map_err(|e| CredentialError::Unavailable(format!("{:?}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_key_round_trips_through_local_storage() {
        let store = LocalStorageCredentials;
        store.clear().unwrap();
        assert!(!store.is_authenticated());

        store.store_api_key("browser-key").unwrap();
        assert_eq!(store.api_key().as_deref(), Some("browser-key"));

        store.store_api_key("").unwrap();
        assert!(!store.is_authenticated());

        store.clear().unwrap();
        assert_eq!(store.api_key(), None);
    }
}
