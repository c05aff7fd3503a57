//! # Product Store
//!
//! The in-memory product list and every operation on it.
//!
//! ## Key Operations
//! - add / delete / update_price (each followed by a full save)
//! - find_by_id, search, filter (linear scans in store order)
//! - suppliers / stats (recomputed on every call)
//!
//! ## Mutation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  add(NewProduct)                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  IdGenerator::next_at ──► Product::create (validate) ──► push to Vec   │
//! │                                                          │              │
//! │                                                          ▼              │
//! │                                     PersistenceAdapter::save(all)       │
//! │                                                          │              │
//! │                                                          ▼              │
//! │                                              caller re-renders          │
//! │                                                                         │
//! │  Store order = add order. Price edits don't move a product.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! If a save fails the mutation stays applied in memory and the error is
//! returned; the next successful save writes it out.

use chrono::Utc;
use stockbook_core::aggregate;
use stockbook_core::validation::{parse_price_input, validate_new_price, validate_search_query};
use stockbook_core::{InventoryStats, Money, NewProduct, Product, ProductId, Supplier};
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::persistence::PersistenceAdapter;
use crate::storage::KeyValueStorage;

// =============================================================================
// Id Generation
// =============================================================================

/// Issues product ids from a millisecond clock.
///
/// Two adds within the same millisecond, or a clock that stepped back,
/// still get increasing ids: the next id is never below `last + 1`.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    /// Generator that will only issue ids above every id in `existing`.
    pub fn after(existing: &[Product]) -> Self {
        IdGenerator {
            last: existing.iter().map(|p| p.id.value()).max().unwrap_or(0),
        }
    }

    /// Next id given the current time in epoch milliseconds.
    ///
    /// `None` once `i64::MAX` has been issued (or loaded); there is no id
    /// left above it.
    pub fn next_at(&mut self, now_millis: i64) -> Option<ProductId> {
        let next = self.last.checked_add(1)?;
        self.last = now_millis.max(next);
        Some(ProductId::new(self.last))
    }
}

// =============================================================================
// Product Store
// =============================================================================

/// Owns the product list and mirrors it to storage after each change.
///
/// ## Usage
/// ```rust
/// use stockbook_core::NewProduct;
/// use stockbook_store::{MemoryStorage, ProductStore};
///
/// let mut store = ProductStore::open(MemoryStorage::new());
///
/// let rice = store
///     .add(NewProduct::new("Rice 50kg", 45000.0, "Ade Foods").phone("08011112222"))
///     .unwrap();
///
/// assert_eq!(store.find_by_id(rice.id), Some(&rice));
/// assert_eq!(store.stats().total_suppliers, 1);
/// ```
#[derive(Debug)]
pub struct ProductStore<S> {
    products: Vec<Product>,
    persistence: PersistenceAdapter<S>,
    ids: IdGenerator,
}

impl<S: KeyValueStorage> ProductStore<S> {
    /// Opens a store over `storage` using the default key.
    pub fn open(storage: S) -> Self {
        Self::with_persistence(PersistenceAdapter::new(storage))
    }

    /// Opens a store reading whatever `persistence` has saved.
    ///
    /// Unreadable saved data yields an empty store (see
    /// [`PersistenceAdapter::load`]).
    pub fn with_persistence(persistence: PersistenceAdapter<S>) -> Self {
        let products = persistence.load();
        let ids = IdGenerator::after(&products);

        info!(key = %persistence.key(), count = products.len(), "Opened product store");

        ProductStore {
            products,
            persistence,
            ids,
        }
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// All products in store order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Gets a product by its id.
    pub fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products whose name or supplier contains `query`, ignoring case.
    ///
    /// ## Returns
    /// * `Ok(products)` - Matches in store order (possibly none)
    /// * `Err(StoreError::Validation)` - Query is the empty string
    pub fn search(&self, query: &str) -> StoreResult<Vec<Product>> {
        let needle = validate_search_query(query)?;

        let results: Vec<Product> = aggregate::matching(&self.products, &needle)
            .into_iter()
            .cloned()
            .collect();

        debug!(query = %query, count = results.len(), "Searched products");
        Ok(results)
    }

    /// List-screen filter: like [`search`](Self::search) but an empty query
    /// shows every product. Whitespace is matched literally.
    pub fn filter(&self, query: &str) -> Vec<Product> {
        if query.is_empty() {
            return self.products.clone();
        }

        aggregate::matching(&self.products, &query.to_lowercase())
            .into_iter()
            .cloned()
            .collect()
    }

    /// Supplier directory, rebuilt from the current list.
    pub fn suppliers(&self) -> Vec<Supplier> {
        aggregate::list_suppliers(&self.products)
    }

    pub fn total_products(&self) -> usize {
        aggregate::total_products(&self.products)
    }

    pub fn total_suppliers(&self) -> usize {
        aggregate::total_suppliers(&self.products)
    }

    /// Home-screen counters.
    pub fn stats(&self) -> InventoryStats {
        aggregate::inventory_stats(&self.products)
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Adds a product at the end of the list and saves.
    ///
    /// ## Returns
    /// * `Ok(Product)` - The stored record, with its new id
    /// * `Err(StoreError::Validation)` - Missing name/supplier, bad price or image
    /// * `Err(StoreError::CorruptData)` - Saved ids already reach `i64::MAX`
    /// * `Err(StoreError::PersistenceUnavailable)` - Added, but not saved
    pub fn add(&mut self, input: NewProduct) -> StoreResult<Product> {
        let now = Utc::now();
        let id = self.ids.next_at(now.timestamp_millis()).ok_or_else(|| {
            StoreError::CorruptData("no product id left above the largest saved id".to_string())
        })?;
        let product = Product::create(id, input, now)?;

        debug!(id = %product.id, name = %product.name, supplier = %product.supplier, "Adding product");

        self.products.push(product.clone());
        self.persist()?;

        Ok(product)
    }

    /// Sets a product's price and saves.
    ///
    /// ## Returns
    /// * `Ok(Product)` - The updated record
    /// * `Err(StoreError::NotFound)` - No product has `id`
    /// * `Err(StoreError::InvalidPrice)` - Not finite, or not above zero;
    ///   the stored price is unchanged
    pub fn update_price(&mut self, id: ProductId, new_price: f64) -> StoreResult<Product> {
        let index = self.index_of(id)?;
        let price = validate_new_price(new_price)?;
        self.apply_price(id, index, price)
    }

    /// Same as [`update_price`](Self::update_price), taking the text the
    /// user typed. Non-numeric text is an invalid price.
    pub fn update_price_input(&mut self, id: ProductId, raw: &str) -> StoreResult<Product> {
        let index = self.index_of(id)?;
        let price = parse_price_input(raw)?;
        self.apply_price(id, index, price)
    }

    /// Removes the product with `id`, if there is one, and saves.
    ///
    /// Deleting an id that isn't present is a no-op, not an error.
    pub fn delete(&mut self, id: ProductId) -> StoreResult<()> {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);

        debug!(id = %id, removed = before != self.products.len(), "Deleting product");

        self.persist()
    }

    /// Gives back the underlying storage.
    pub fn into_storage(self) -> S {
        self.persistence.into_storage()
    }

    pub fn persistence(&self) -> &PersistenceAdapter<S> {
        &self.persistence
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    fn index_of(&self, id: ProductId) -> StoreResult<usize> {
        self.products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found("Product", id))
    }

    fn apply_price(&mut self, id: ProductId, index: usize, price: Money) -> StoreResult<Product> {
        let product = self
            .products
            .get_mut(index)
            .filter(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found("Product", id))?;

        product.set_price(price, Utc::now());
        let updated = product.clone();

        debug!(id = %updated.id, price = %updated.price, "Updated price");

        self.persist()?;
        Ok(updated)
    }

    fn persist(&mut self) -> StoreResult<()> {
        self.persistence.save(&self.products)
    }
}
