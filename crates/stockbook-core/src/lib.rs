//! # stockbook-core: Pure Business Logic for Stockbook
//!
//! This crate holds the inventory domain as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockbook Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web Frontend                                 │   │
//! │  │    Add Form ──► Product List ──► Edit Price ──► Suppliers      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                stockbook-store (ProductStore)                   │   │
//! │  │         add, search, update_price, delete, load/save            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockbook-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ aggregate │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │ suppliers │  │   rules   │  │   │
//! │  │   │ Supplier  │  │           │  │   stats   │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO CLOCK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, NewProduct, Supplier, InventoryStats)
//! - [`money`] - Money type held in integer minor units
//! - [`aggregate`] - Supplier directory, counters, search matching
//! - [`error`] - Domain error types
//! - [`validation`] - Form and price validation
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::Utc;
//! use stockbook_core::{aggregate, NewProduct, Product, ProductId};
//!
//! let input = NewProduct::new("Rice 50kg", 45000.0, "Ade Foods").phone("08011112222");
//! let product = Product::create(ProductId::new(1), input, Utc::now()).unwrap();
//!
//! let stats = aggregate::inventory_stats(&[product]);
//! assert_eq!(stats.total_products, 1);
//! assert_eq!(stats.total_suppliers, 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod aggregate;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Key the product list is saved under.
///
/// Matches the key used by the web frontend, so existing saved data is
/// picked up without a migration.
pub const DEFAULT_STORAGE_KEY: &str = "shopProducts";
