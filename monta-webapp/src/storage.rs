//! Persistent key-value backends the token store delegates to.

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::error::Result;

/// Origin-scoped string storage, accessed by exact key.
///
/// Reads of a missing key yield `Ok(None)`; removing a missing key is a
/// no-op. Failures of the underlying store are returned as-is.
pub trait KeyValueStore {
    fn get(&self, key: &'static str) -> Result<Option<String>>;
    fn set(&self, key: &'static str, value: &str) -> Result<()>;
    fn remove(&self, key: &'static str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &'static str) -> Result<Option<String>> {
        (**self).get(key)
    }
    fn set(&self, key: &'static str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
    fn remove(&self, key: &'static str) -> Result<()> {
        (**self).remove(key)
    }
}

/// In-process store, used off the browser and in tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every key currently held, in order.
    pub fn keys(&self) -> Vec<String> {
        self.entries.borrow().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &'static str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &'static str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &'static str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(feature = "hydrate")]
pub use browser::BrowserStorage;

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::{JsCast, JsValue};

    use super::KeyValueStore;
    use crate::error::{Error, Result};

    /// `window.localStorage` of the current origin. Values are stored
    /// verbatim, without any JSON encoding.
    #[derive(Debug, Clone)]
    pub struct BrowserStorage {
        raw: web_sys::Storage,
    }

    impl BrowserStorage {
        pub fn local() -> Result<Self> {
            let window =
                web_sys::window().ok_or_else(|| Error::Unavailable("no global window".into()))?;
            let raw = window
                .local_storage()
                .map_err(|e| Error::Unavailable(js_message(&e)))?
                .ok_or_else(|| Error::Unavailable("localStorage is disabled".into()))?;
            Ok(Self { raw })
        }
    }

    impl KeyValueStore for BrowserStorage {
        fn get(&self, key: &'static str) -> Result<Option<String>> {
            self.raw
                .get_item(key)
                .map_err(|e| Error::Read(key, js_message(&e)))
        }

        fn set(&self, key: &'static str, value: &str) -> Result<()> {
            self.raw
                .set_item(key, value)
                .map_err(|e| Error::Write(key, js_message(&e)))
        }

        fn remove(&self, key: &'static str) -> Result<()> {
            self.raw
                .remove_item(key)
                .map_err(|e| Error::Remove(key, js_message(&e)))
        }
    }

    fn js_message(value: &JsValue) -> String {
        match value.dyn_ref::<js_sys::Error>() {
            Some(err) => format!("{}: {}", String::from(err.name()), String::from(err.message())),
            None => value.as_string().unwrap_or_else(|| format!("{value:?}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_key_reads_as_none() {
        let store = MemoryStorage::new();
        assert_eq!(store.get("access_token"), Ok(None));
    }

    #[test]
    fn set_overwrites_and_remove_is_a_noop_when_absent() {
        let store = MemoryStorage::new();
        store.set("access_token", "a").unwrap();
        store.set("access_token", "b").unwrap();
        assert_eq!(store.get("access_token"), Ok(Some("b".to_string())));
        assert_eq!(store.len(), 1);

        store.remove("access_token").unwrap();
        store.remove("access_token").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn keys_are_listed_in_order() {
        let store = MemoryStorage::new();
        store.set("theme", "dark").unwrap();
        store.set("locale", "en").unwrap();
        assert_eq!(store.keys(), vec!["locale".to_string(), "theme".to_string()]);
    }
}
