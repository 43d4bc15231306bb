//! Session state kept in browser localStorage

use std::rc::Rc;

use gloo_storage::{LocalStorage, Storage};
use serde::{de::DeserializeOwned, Serialize};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
pub const LOGGED_IN_KEY: &str = "isLoggedIn";
pub const ROLE_KEY: &str = "userRole";
pub const DEFAULT_CONFIG_KEY: &str = "defaultConfig";

/// Keys removed on logout and on any 401
pub const SESSION_KEYS: [&str; 4] = [TOKEN_KEY, USER_KEY, LOGGED_IN_KEY, ROLE_KEY];

/// Flat string key/value storage backing a [`Session`]
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
    fn clear_all(&self);
}

/// window.localStorage, values stored as plain strings
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if LocalStorage::raw().set_item(key, value).is_err() {
            log::warn!("Failed to write '{}' to localStorage", key);
        }
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }

    fn clear_all(&self) {
        LocalStorage::clear();
    }
}

/// Authentication context handed to everything that talks to the API
#[derive(Clone)]
pub struct Session {
    store: Rc<dyn KeyValueStore>,
}

impl Session {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Session backed by the browser's localStorage
    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserStorage))
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn set_token(&self, token: &str) {
        self.store.set(TOKEN_KEY, token);
    }

    /// Persist everything a successful login hands back
    pub fn store_login<U: Serialize>(&self, token: &str, role: &str, user: &U) {
        self.store.set(LOGGED_IN_KEY, "true");
        self.set_token(token);
        self.store.set(ROLE_KEY, role);
        match serde_json::to_string(user) {
            Ok(json) => self.store.set(USER_KEY, &json),
            Err(e) => log::warn!("Failed to serialize user for session: {}", e),
        }
    }

    pub fn role(&self) -> Option<String> {
        self.store.get(ROLE_KEY)
    }

    pub fn user<U: DeserializeOwned>(&self) -> Option<U> {
        self.store
            .get(USER_KEY)
            .and_then(|json| serde_json::from_str(&json).ok())
    }

    pub fn is_logged_in(&self) -> bool {
        self.store.get(LOGGED_IN_KEY).as_deref() == Some("true") && self.token().is_some()
    }

    /// Drop the four session keys, leaving unrelated keys alone
    pub fn clear(&self) {
        for key in SESSION_KEYS {
            self.store.remove(key);
        }
    }

    /// Wipe the whole store
    pub fn clear_all(&self) {
        self.store.clear_all();
    }

    pub fn default_config<C: DeserializeOwned>(&self) -> Option<C> {
        self.store
            .get(DEFAULT_CONFIG_KEY)
            .and_then(|json| serde_json::from_str(&json).ok())
    }

    pub fn has_default_config(&self) -> bool {
        self.store.get(DEFAULT_CONFIG_KEY).is_some()
    }

    /// Snapshot the first configuration ever saved. Returns true when stored now.
    pub fn remember_default_config_once<C: Serialize>(&self, config: &C) -> bool {
        if self.has_default_config() {
            return false;
        }
        match serde_json::to_string(config) {
            Ok(json) => {
                self.store.set(DEFAULT_CONFIG_KEY, &json);
                true
            }
            Err(e) => {
                log::warn!("Failed to serialize default config: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod memory {
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    use super::KeyValueStore;

    /// In-memory store for tests
    #[derive(Default)]
    pub struct MemoryStore {
        entries: RefCell<BTreeMap<String, String>>,
    }

    impl MemoryStore {
        pub fn keys(&self) -> Vec<String> {
            self.entries.borrow().keys().cloned().collect()
        }
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.entries.borrow_mut().remove(key);
        }

        fn clear_all(&self) {
            self.entries.borrow_mut().clear();
        }
    }
}
