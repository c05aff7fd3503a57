//! # Store Configuration
//!
//! Where the product list lives and how prices are shown.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Builder calls / command-line flags
//! 2. Environment variables (`STOCKBOOK_*`)
//! 3. Defaults (this file)

use std::path::PathBuf;

use stockbook_core::{Money, DEFAULT_STORAGE_KEY};
use tracing::info;

use crate::error::StoreResult;
use crate::persistence::PersistenceAdapter;
use crate::repository::product::ProductStore;
use crate::storage::FileStorage;

/// Store configuration.
///
/// ## Example
/// ```rust,no_run
/// use stockbook_store::StoreConfig;
///
/// let store = StoreConfig::new("./data")
///     .storage_key("shopProducts")
///     .open();
/// println!("{} products", store.len());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding one file per storage key.
    pub data_dir: PathBuf,

    /// Key the product list is saved under.
    /// Default: "shopProducts"
    pub storage_key: String,

    /// Symbol prefixed to displayed prices.
    /// Default: "₦"
    pub currency_symbol: String,
}

impl StoreConfig {
    /// Creates a configuration rooted at `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        StoreConfig {
            data_dir: data_dir.into(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            currency_symbol: "₦".to_string(),
        }
    }

    /// Sets the storage key.
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Sets the currency symbol.
    pub fn currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Defaults overridden by environment variables.
    ///
    /// ## Environment Variables
    /// - `STOCKBOOK_DATA_DIR`: data directory (default `./data`)
    /// - `STOCKBOOK_STORAGE_KEY`: storage key
    /// - `STOCKBOOK_CURRENCY`: currency symbol
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = StoreConfig::new(
            lookup("STOCKBOOK_DATA_DIR")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| "data".to_string()),
        );

        if let Some(key) = lookup("STOCKBOOK_STORAGE_KEY").filter(|v| !v.trim().is_empty()) {
            config.storage_key = key;
        }

        if let Some(symbol) = lookup("STOCKBOOK_CURRENCY") {
            config.currency_symbol = symbol;
        }

        config
    }

    /// Formats a price for display, e.g. `₦45000.00`.
    pub fn format_price(&self, price: Money) -> String {
        format!("{}{}", self.currency_symbol, price)
    }

    /// File storage for this configuration.
    pub fn storage(&self) -> FileStorage {
        FileStorage::new(&self.data_dir)
    }

    /// Opens the file-backed product store described by this configuration.
    pub fn open(&self) -> ProductStore<FileStorage> {
        info!(
            data_dir = %self.data_dir.display(),
            key = %self.storage_key,
            "Opening file-backed store"
        );

        ProductStore::with_persistence(self.persistence())
    }

    /// Discards the saved product list in one step.
    pub fn clear(&self) -> StoreResult<()> {
        info!(
            data_dir = %self.data_dir.display(),
            key = %self.storage_key,
            "Clearing saved products"
        );

        self.persistence().clear()
    }

    fn persistence(&self) -> PersistenceAdapter<FileStorage> {
        PersistenceAdapter::with_key(self.storage(), self.storage_key.clone())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::new("data")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use stockbook_core::NewProduct;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.storage_key, "shopProducts");
        assert_eq!(config.currency_symbol, "₦");
        assert_eq!(config.data_dir, PathBuf::from("data"));
    }

    #[test]
    fn test_from_lookup_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("STOCKBOOK_DATA_DIR", "/var/lib/stockbook"),
            ("STOCKBOOK_STORAGE_KEY", "inventory"),
            ("STOCKBOOK_CURRENCY", "$"),
        ]);

        let config = StoreConfig::from_lookup(|name| vars.get(name).map(|v| v.to_string()));
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/stockbook"));
        assert_eq!(config.storage_key, "inventory");
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn test_blank_env_values_keep_defaults() {
        let config = StoreConfig::from_lookup(|name| match name {
            "STOCKBOOK_STORAGE_KEY" => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_format_price() {
        let config = StoreConfig::default();
        assert_eq!(config.format_price(Money::from_cents(4_500_000)), "₦45000.00");
        assert_eq!(config.currency_symbol("$").format_price(Money::from_cents(5)), "$0.05");
    }

    #[test]
    fn test_open_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::new(dir.path()).storage_key("test-products");

        let mut store = config.open();
        store
            .add(NewProduct::new("Rice 50kg", 45000.0, "Ade Foods"))
            .unwrap();

        let reopened = config.open();
        assert_eq!(reopened.len(), 1);
        assert!(dir.path().join("test-products.json").exists());
    }

    #[test]
    fn test_clear_then_reopen_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::new(dir.path()).storage_key("test-products");

        let mut store = config.open();
        for name in ["Rice 50kg", "Beans", "Garri"] {
            store.add(NewProduct::new(name, 10.0, "Ade Foods")).unwrap();
        }

        config.clear().unwrap();
        assert!(!dir.path().join("test-products.json").exists());
        assert!(config.open().is_empty());

        // Nothing saved is not an error.
        config.clear().unwrap();
    }
}
