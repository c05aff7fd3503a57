//! # Store Error Types
//!
//! Error types for storage and product store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error / CoreError                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds context and categorization            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Frontend shows a rejected edit, or starts from an empty list          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these are fatal. Load failures are recovered inside the
//! persistence adapter; everything else is handed back to the caller.

use stockbook_core::{CoreError, ValidationError};
use thiserror::Error;

/// Store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entity not found in the store.
    ///
    /// ## When This Occurs
    /// - Price edit for an id that doesn't exist
    ///
    /// Deleting a missing id is not an error.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// A price edit was not a finite number greater than zero.
    #[error("Invalid price: {value}")]
    InvalidPrice { value: String },

    /// Form input failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The storage medium can't be read or written.
    ///
    /// ## When This Occurs
    /// - Data directory can't be created or written
    /// - Storage quota exceeded (large embedded images)
    /// - Storage key is not a plain name
    #[error("Storage unavailable: {0}")]
    PersistenceUnavailable(String),

    /// Saved data exists but doesn't parse as a product list.
    #[error("Saved data is corrupt: {0}")]
    CorruptData(String),

    /// The product list couldn't be serialized.
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Creates a PersistenceUnavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        StoreError::PersistenceUnavailable(message.into())
    }
}

/// Convert domain errors to store errors.
///
/// ```text
/// CoreError::ProductNotFound → StoreError::NotFound
/// CoreError::InvalidPrice    → StoreError::InvalidPrice
/// CoreError::Validation      → StoreError::Validation
/// ```
impl From<CoreError> for StoreError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => StoreError::not_found("Product", id),
            CoreError::InvalidPrice { value } => StoreError::InvalidPrice { value },
            CoreError::Validation(e) => StoreError::Validation(e),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::PersistenceUnavailable(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            StoreError::CorruptData(err.to_string())
        } else {
            StoreError::Serialization(err.to_string())
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use stockbook_core::ProductId;

    #[test]
    fn test_core_errors_map_to_store_errors() {
        let err: StoreError = CoreError::ProductNotFound(ProductId::new(42)).into();
        assert_eq!(err.to_string(), "Product not found: 42");

        let err: StoreError = CoreError::InvalidPrice {
            value: "-5".to_string(),
        }
        .into();
        assert!(matches!(err, StoreError::InvalidPrice { ref value } if value == "-5"));

        let err: StoreError = CoreError::from(ValidationError::required("name")).into();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[test]
    fn test_parse_failure_is_corrupt_data() {
        let err: StoreError = serde_json::from_str::<Vec<u8>>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, StoreError::CorruptData(_)));
    }

    #[test]
    fn test_io_failure_is_unavailable() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: StoreError = io.into();
        assert!(matches!(err, StoreError::PersistenceUnavailable(_)));
    }
}
