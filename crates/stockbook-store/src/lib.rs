//! # stockbook-store: Persistence Layer for Stockbook
//!
//! This crate owns the product list at runtime and mirrors it to a
//! key-value slot after every change.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockbook Data Flow                              │
//! │                                                                         │
//! │  Frontend event (add / edit price / delete)                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  stockbook-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ ProductStore  │───►│  Persistence  │───►│   Storage    │  │   │
//! │  │   │ (repository)  │    │   Adapter     │    │ Memory/File  │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  stockbook-core aggregates (suppliers, stats) ──► re-render            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`storage`] - Key-value storage trait and media
//! - [`persistence`] - Load/save of the product blob
//! - [`repository`] - The product store
//! - [`config`] - Data directory, storage key, display settings
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stockbook_core::NewProduct;
//! use stockbook_store::StoreConfig;
//!
//! let mut store = StoreConfig::from_env().open();
//! store.add(NewProduct::new("Rice 50kg", 45000.0, "Ade Foods"))?;
//!
//! for supplier in store.suppliers() {
//!     println!("{}: {} product(s)", supplier.name, supplier.product_count());
//! }
//! # Ok::<(), stockbook_store::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod persistence;
pub mod repository;
pub mod storage;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use persistence::PersistenceAdapter;
pub use repository::product::{IdGenerator, ProductStore};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
