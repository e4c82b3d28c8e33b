//! The access token kept in origin storage between page loads.

use crate::error::Result;
use crate::storage::KeyValueStore;

/// The only key the token store ever reads or writes.
pub const ACCESS_TOKEN: &str = "access_token";

/// Get, save and destroy the single access token held in a [`KeyValueStore`].
///
/// The store keeps no state of its own; every call goes straight to the
/// backend, and backend failures are returned unchanged.
#[derive(Debug, Clone)]
pub struct TokenStore<S> {
    backend: S,
    key: &'static str,
}

impl<S: KeyValueStore> TokenStore<S> {
    pub fn new(backend: S) -> Self {
        Self {
            backend,
            key: ACCESS_TOKEN,
        }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// The stored token, or `None` if it was never saved or has been destroyed.
    pub fn get_token(&self) -> Result<Option<String>> {
        tracing::trace!("reading {}", self.key);
        self.backend.get(self.key).inspect_err(|e| {
            tracing::warn!("could not read token: {}", e);
        })
    }

    /// Stores `token` verbatim, replacing any previous value.
    pub fn save_token(&self, token: &str) -> Result<()> {
        tracing::debug!("saving {}", self.key);
        self.backend.set(self.key, token).inspect_err(|e| {
            tracing::warn!("could not save token: {}", e);
        })
    }

    pub fn destroy_token(&self) -> Result<()> {
        tracing::debug!("destroying {}", self.key);
        self.backend.remove(self.key).inspect_err(|e| {
            tracing::warn!("could not destroy token: {}", e);
        })
    }
}

#[cfg(feature = "hydrate")]
pub use browser::*;

#[cfg(feature = "hydrate")]
mod browser {
    use super::TokenStore;
    use crate::error::Result;
    use crate::storage::BrowserStorage;

    impl TokenStore<BrowserStorage> {
        pub fn browser() -> Result<Self> {
            Ok(Self::new(BrowserStorage::local()?))
        }
    }

    pub fn get_token() -> Result<Option<String>> {
        TokenStore::browser()?.get_token()
    }

    pub fn save_token(token: &str) -> Result<()> {
        TokenStore::browser()?.save_token(token)
    }

    pub fn destroy_token() -> Result<()> {
        TokenStore::browser()?.destroy_token()
    }
}
