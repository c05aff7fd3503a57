//! # Persistence Adapter
//!
//! Loads and saves the whole product list as one JSON array under a fixed
//! key.
//!
//! ## Write Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  mutation ──► save(&products) ──► serde_json::to_string ──► set_item   │
//! │                                                                         │
//! │  Every save overwrites the full slot. No deltas, no log, no merge with │
//! │  whatever another writer may have stored in between.                   │
//! │                                                                         │
//! │  open ──► load() ──► get_item ──► serde_json::from_str                 │
//! │                          │               │                              │
//! │                     (unavailable)    (corrupt)                          │
//! │                          └──────┬────────┘                              │
//! │                                 ▼                                       │
//! │                        empty list + warn!                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use stockbook_core::{Product, DEFAULT_STORAGE_KEY};
use tracing::{debug, warn};

use crate::error::StoreResult;
use crate::storage::KeyValueStorage;

/// Reads and writes the saved product list.
#[derive(Debug, Clone)]
pub struct PersistenceAdapter<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> PersistenceAdapter<S> {
    /// Adapter using the default `shopProducts` key.
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        PersistenceAdapter {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Loads the saved list, or an empty list if there is none.
    ///
    /// Never fails: an unreadable medium or unparsable data is logged and
    /// treated as "nothing saved yet". Use [`try_load`](Self::try_load) to
    /// tell those cases apart.
    pub fn load(&self) -> Vec<Product> {
        match self.try_load() {
            Ok(products) => products,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Saved products unreadable, starting empty");
                Vec::new()
            }
        }
    }

    /// Loads the saved list, reporting why it couldn't be read.
    ///
    /// ## Returns
    /// * `Ok(vec![])` - Nothing saved under the key
    /// * `Err(StoreError::PersistenceUnavailable)` - Medium unreadable
    /// * `Err(StoreError::CorruptData)` - Blob isn't a product list
    pub fn try_load(&self) -> StoreResult<Vec<Product>> {
        let Some(blob) = self.storage.get_item(&self.key)? else {
            debug!(key = %self.key, "No saved products");
            return Ok(Vec::new());
        };

        let products: Vec<Product> = serde_json::from_str(&blob)?;

        debug!(key = %self.key, count = products.len(), "Loaded products");
        Ok(products)
    }

    /// Overwrites the saved list with `products`.
    pub fn save(&mut self, products: &[Product]) -> StoreResult<()> {
        let blob = serde_json::to_string(products)?;
        self.storage.set_item(&self.key, &blob)?;

        debug!(key = %self.key, count = products.len(), "Saved products");
        Ok(())
    }

    /// Removes the saved list entirely.
    pub fn clear(&mut self) -> StoreResult<()> {
        self.storage.remove_item(&self.key)
    }
}
