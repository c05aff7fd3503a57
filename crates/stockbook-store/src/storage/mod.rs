//! # Key-Value Storage
//!
//! The storage medium the product list is saved to.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    KeyValueStorage                                      │
//! │                                                                         │
//! │  get_item("shopProducts")     → Some("[{...}, {...}]")                 │
//! │  set_item("shopProducts", v)  → overwrite the whole slot               │
//! │  remove_item("shopProducts")  → slot gone                              │
//! │                                                                         │
//! │  ┌──────────────────┐        ┌──────────────────────────────┐          │
//! │  │  MemoryStorage   │        │  FileStorage                 │          │
//! │  │  HashMap, tests  │        │  <data_dir>/<key>.json       │          │
//! │  └──────────────────┘        └──────────────────────────────┘          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The interface is synchronous and string-valued, the same shape as
//! browser local storage. Writes replace the value; there is no merge.

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::StoreResult;

/// A synchronous string key-value slot store.
pub trait KeyValueStorage {
    /// Reads the value stored under `key`, if any.
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Removes `key`. Removing a missing key succeeds.
    fn remove_item(&mut self, key: &str) -> StoreResult<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Box<S> {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> StoreResult<()> {
        (**self).remove_item(key)
    }
}
