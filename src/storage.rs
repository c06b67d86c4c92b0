//! Client-side Storage
//!
//! Key/value persistence for filter fields and cookie lookup for the auth token.

use std::cell::RefCell;
use std::collections::HashMap;

use percent_encoding::percent_decode_str;
use wasm_bindgen::JsCast;

use crate::error::StorageError;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn open() -> Result<Self, StorageError> {
        let storage = web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }
}

/// In-memory store, used when localStorage is blocked
#[derive(Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Open localStorage, or fall back to memory for this page session
pub fn open_storage() -> Box<dyn KeyValueStore> {
    match BrowserStorage::open() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            log::warn!("{}, filter values will not survive a reload", e);
            Box::new(MemoryStorage::default())
        }
    }
}

/// Write a value, logging instead of failing
pub fn persist(store: &dyn KeyValueStore, key: &str, value: &str) {
    if let Err(e) = store.set(key, value) {
        log::warn!("{}", e);
    }
}

/// Find `name` in a `document.cookie` string and percent-decode its value
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| percent_decode_str(value).decode_utf8_lossy().into_owned())
}

/// Read a cookie from the current document
pub fn read_cookie(name: &str) -> Option<String> {
    let doc = web_sys::window()?.document()?;
    let html = doc.dyn_into::<web_sys::HtmlDocument>().ok()?;
    let cookies = html.cookie().ok()?;
    cookie_value(&cookies, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_value() {
        let cookies = "theme=dark; authToken=abc%3D%3D; other=1";
        assert_eq!(cookie_value(cookies, "authToken").as_deref(), Some("abc=="));
        assert_eq!(cookie_value(cookies, "theme").as_deref(), Some("dark"));
        assert_eq!(cookie_value(cookies, "missing"), None);
    }

    #[test]
    fn test_cookie_name_must_match_exactly() {
        assert_eq!(cookie_value("xauthToken=1", "authToken"), None);
        assert_eq!(cookie_value("", "authToken"), None);
        assert_eq!(cookie_value("authToken=", "authToken").as_deref(), Some(""));
    }

    #[test]
    fn test_memory_storage() {
        let store = MemoryStorage::default();
        assert_eq!(store.get("searchText"), None);
        persist(&store, "searchText", "meeting");
        assert_eq!(store.get("searchText").as_deref(), Some("meeting"));
    }
}
