//! # Validation Module
//!
//! Input validation for the add-product form, price edits and search.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend form                                                │
//! │  ├── `required` attributes, numeric inputs                             │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Trimming and blank → None normalization                           │
//! │  └── Price rules (list price >= 0, edited price > 0)                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Money / serde                                                │
//! │  └── Saved records with negative or non-numeric prices don't load      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted product or supplier name.
pub const MAX_NAME_LEN: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

fn validate_name_field(field: &str, value: &str) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::required(field));
    }

    if value.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(value.to_string())
}

/// Validates a product name and returns it trimmed.
///
/// ```rust
/// use stockbook_core::validation::validate_product_name;
///
/// assert_eq!(validate_product_name(" Rice 50kg ").unwrap(), "Rice 50kg");
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<String> {
    validate_name_field("name", name)
}

/// Validates a supplier name and returns it trimmed.
pub fn validate_supplier_name(supplier: &str) -> ValidationResult<String> {
    validate_name_field("supplier", supplier)
}

/// Turns blank optional text into `None`.
///
/// Absent phone numbers and notes are stored as `null`, never as an empty
/// string or a placeholder.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Validates an optional product image.
///
/// Images arrive already encoded as `data:image/...` URIs. Blank input is
/// treated as "no image".
pub fn validate_image(image: Option<String>) -> ValidationResult<Option<String>> {
    match normalize_optional(image) {
        None => Ok(None),
        Some(uri) if uri.starts_with("data:image/") => Ok(Some(uri)),
        Some(_) => Err(ValidationError::InvalidFormat {
            field: "image".to_string(),
            reason: "must be a data:image/ URI".to_string(),
        }),
    }
}

/// Validates a search query.
///
/// Only the empty string is rejected. Whitespace is a legitimate substring
/// and there is no length cap, so any stored name can be searched for.
///
/// ## Returns
/// The lowercase needle used for case-insensitive matching. Inner and
/// surrounding spaces are kept, since they are part of the substring.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    if query.is_empty() {
        return Err(ValidationError::required("query"));
    }

    Ok(query.to_lowercase())
}

// =============================================================================
// Price Validators
// =============================================================================

/// Validates the price entered when adding a product.
///
/// ## Rules
/// - Must be a finite number
/// - Zero is allowed (free items); negative is not
pub fn validate_list_price(price: f64) -> ValidationResult<Money> {
    if !price.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: "must be a number".to_string(),
        });
    }

    Money::from_major(price).ok_or_else(|| ValidationError::MustBeNonNegative {
        field: "price".to_string(),
    })
}

/// Validates a price edit.
///
/// ## Rules
/// - Must be a finite number
/// - Must be strictly greater than zero
///
/// ```rust
/// use stockbook_core::validation::validate_new_price;
///
/// assert_eq!(validate_new_price(12.5).unwrap().cents(), 1250);
/// assert!(validate_new_price(0.0).is_err());
/// assert!(validate_new_price(-5.0).is_err());
/// assert!(validate_new_price(f64::NAN).is_err());
/// ```
pub fn validate_new_price(price: f64) -> CoreResult<Money> {
    Money::from_major(price)
        .filter(Money::is_positive)
        .ok_or_else(|| CoreError::InvalidPrice {
            value: price.to_string(),
        })
}

/// Parses the text typed into the price prompt.
///
/// Non-numeric text is an [`CoreError::InvalidPrice`], same as a
/// non-positive number.
pub fn parse_price_input(raw: &str) -> CoreResult<Money> {
    let trimmed = raw.trim();

    let price: f64 = trimmed.parse().map_err(|_| CoreError::InvalidPrice {
        value: trimmed.to_string(),
    })?;

    validate_new_price(price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert_eq!(validate_product_name("Rice 50kg").unwrap(), "Rice 50kg");
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_supplier_name_reports_field() {
        let err = validate_supplier_name(" ").unwrap_err();
        assert_eq!(err.to_string(), "supplier is required");
    }

    #[test]
    fn test_normalize_optional() {
        assert_eq!(normalize_optional(None), None);
        assert_eq!(normalize_optional(Some("  ".to_string())), None);
        assert_eq!(
            normalize_optional(Some(" 0801 ".to_string())),
            Some("0801".to_string())
        );
    }

    #[test]
    fn test_validate_image() {
        assert_eq!(validate_image(None).unwrap(), None);
        assert_eq!(validate_image(Some(String::new())).unwrap(), None);
        assert!(validate_image(Some("data:image/png;base64,iVBORw0KGgo=".to_string()))
            .unwrap()
            .is_some());
        assert!(validate_image(Some("https://example.com/a.png".to_string())).is_err());
    }

    #[test]
    fn test_validate_search_query() {
        assert_eq!(validate_search_query("ADE").unwrap(), "ade");
        assert_eq!(validate_search_query("rice 5").unwrap(), "rice 5");
        assert_eq!(validate_search_query(" ").unwrap(), " ");
        assert!(validate_search_query("").is_err());

        let long = "Q".repeat(MAX_NAME_LEN);
        assert_eq!(validate_search_query(&long).unwrap(), long.to_lowercase());
    }

    #[test]
    fn test_validate_list_price() {
        assert_eq!(validate_list_price(0.0).unwrap(), Money::zero());
        assert_eq!(validate_list_price(45000.0).unwrap().cents(), 4_500_000);
        assert!(matches!(
            validate_list_price(-1.0),
            Err(ValidationError::MustBeNonNegative { .. })
        ));
        assert!(matches!(
            validate_list_price(f64::NAN),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_new_price() {
        assert!(validate_new_price(0.01).is_ok());
        assert!(matches!(
            validate_new_price(0.0),
            Err(CoreError::InvalidPrice { .. })
        ));
        assert!(matches!(
            validate_new_price(f64::INFINITY),
            Err(CoreError::InvalidPrice { .. })
        ));
        // Rounds to zero minor units, so it is not a positive price.
        assert!(validate_new_price(0.001).is_err());
    }

    #[test]
    fn test_parse_price_input() {
        assert_eq!(parse_price_input(" 46000 ").unwrap().cents(), 4_600_000);
        assert_eq!(parse_price_input("12.50").unwrap().cents(), 1250);

        let err = parse_price_input("abc").unwrap_err();
        assert!(matches!(err, CoreError::InvalidPrice { ref value } if value == "abc"));

        assert!(parse_price_input("").is_err());
        assert!(parse_price_input("-5").is_err());
        assert!(parse_price_input("NaN").is_err());
    }
}
