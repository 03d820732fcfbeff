//! Saved card list.
//!
//! The list lives as one JSON blob (`[{id, prompt, answer}, ...]`) under a
//! fixed key in any [`BlobStore`]. Loading never fails: an unreadable or
//! malformed blob is logged and treated as "nothing saved yet".

use std::cell::RefCell;
use std::collections::HashMap;

use crate::card::Card;
use crate::error::Result;

use super::database::Database;

/// Key the card list is stored under unless configured otherwise.
pub const CARDS_KEY: &str = "Cards";

/// Opaque string blobs by key.
pub trait BlobStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl BlobStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.kv_get(key)?)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        Ok(self.kv_set(key, value)?)
    }
}

impl<T: BlobStore + ?Sized> BlobStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// Process-local store, for tests and previews.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub struct CardStore<S> {
    store: S,
    key: String,
}

impl<S: BlobStore> CardStore<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, CARDS_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The saved list, or empty if nothing usable is saved.
    pub fn load(&self) -> Vec<Card> {
        let blob = match self.store.get(&self.key) {
            Ok(Some(blob)) => blob,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to read saved cards");
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<Card>>(&blob) {
            Ok(cards) => {
                tracing::debug!(key = %self.key, count = cards.len(), "loaded cards");
                cards
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "saved cards are malformed, starting empty");
                Vec::new()
            }
        }
    }

    /// # Errors
    /// Returns an error if the store rejects the write.
    pub fn save(&self, cards: &[Card]) -> Result<()> {
        let blob = serde_json::to_string(cards)?;
        self.store.set(&self.key, &blob)?;
        tracing::debug!(key = %self.key, count = cards.len(), "saved cards");
        Ok(())
    }
}
