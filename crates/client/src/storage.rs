//! Bearer-token persistence, one key per portal.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use shared_types::Portal;

/// Key/value store for bearer tokens.
pub trait TokenStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, token: &str);
    fn remove(&self, key: &str);

    fn token(&self, portal: Portal) -> Option<String> {
        self.get(portal.token_key())
    }

    fn store_token(&self, portal: Portal, token: &str) {
        self.set(portal.token_key(), token);
    }

    fn clear_token(&self, portal: Portal) {
        self.remove(portal.token_key());
    }
}

/// Process-local store used by native builds and tests. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    inner: Arc<Mutex<HashMap<String, String>>>,
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, token: &str) {
        if let Ok(mut map) = self.inner.lock() {
            map.insert(key.to_string(), token.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut map) = self.inner.lock() {
            map.remove(key);
        }
    }
}

/// `window.localStorage`, so tokens survive a page reload.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTokenStore;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(target_arch = "wasm32")]
impl TokenStore for BrowserTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, token: &str) {
        match local_storage() {
            Some(storage) => {
                if storage.set_item(key, token).is_err() {
                    tracing::warn!(key, "failed to write token to local storage");
                }
            }
            None => tracing::warn!(key, "local storage unavailable, token not saved"),
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            if storage.remove_item(key).is_err() {
                tracing::warn!(key, "failed to remove token from local storage");
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub type DefaultTokenStore = BrowserTokenStore;

#[cfg(not(target_arch = "wasm32"))]
pub type DefaultTokenStore = MemoryTokenStore;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portals_use_separate_keys() {
        let store = MemoryTokenStore::default();
        store.store_token(Portal::Admin, "a-token");
        store.store_token(Portal::User, "u-token");

        assert_eq!(store.get("adminToken").as_deref(), Some("a-token"));
        assert_eq!(store.get("userToken").as_deref(), Some("u-token"));

        store.clear_token(Portal::Admin);
        assert_eq!(store.token(Portal::Admin), None);
        assert_eq!(store.token(Portal::User).as_deref(), Some("u-token"));
    }

    #[test]
    fn clones_share_state() {
        let store = MemoryTokenStore::default();
        let other = store.clone();
        store.set("adminToken", "t");
        assert_eq!(other.get("adminToken").as_deref(), Some("t"));
        other.remove("adminToken");
        assert_eq!(store.get("adminToken"), None);
    }

    #[test]
    fn writes_overwrite() {
        let store = MemoryTokenStore::default();
        store.store_token(Portal::User, "old");
        store.store_token(Portal::User, "new");
        assert_eq!(store.token(Portal::User).as_deref(), Some("new"));
    }
}
