//! # Repository Module
//!
//! Store implementations for Stockbook.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  Frontend event                                                        │
//! │       │                                                                 │
//! │       │  store.search("ade")                                           │
//! │       ▼                                                                 │
//! │  ProductStore                                                          │
//! │  ├── add(&mut self, new_product)                                       │
//! │  ├── find_by_id(&self, id)                                             │
//! │  ├── search(&self, query)                                              │
//! │  ├── update_price(&mut self, id, price)                                │
//! │  └── delete(&mut self, id)                                             │
//! │       │                                                                 │
//! │       │  full JSON blob                                                 │
//! │       ▼                                                                 │
//! │  KeyValueStorage                                                       │
//! │                                                                         │
//! │  The raw Vec never leaves the store; callers get slices and clones.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod product;
