//! # Domain Types
//!
//! Core domain types used throughout Stockbook.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   NewProduct    │──►│    Product      │──►│    Supplier     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  form fields    │   │  id (i64)       │   │  name           │       │
//! │  │  price (f64)    │   │  price (Money)  │   │  phone          │       │
//! │  │                 │   │  supplier       │   │  products[]     │       │
//! │  └─────────────────┘   │  dateAdded      │   └─────────────────┘       │
//! │        (input)         │  lastUpdated    │     (derived, never saved)  │
//! │                        └─────────────────┘                              │
//! │                             (saved)                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Saved records use camelCase field names (`dateAdded`, `lastUpdated`) so
//! a blob written by the web frontend loads as-is.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::CoreResult;
use crate::money::Money;
use crate::validation;

// =============================================================================
// Product Id
// =============================================================================

/// Product identifier.
///
/// Issued from a millisecond clock by the store, so ids sort by creation
/// time. Serialized as a bare integer (serde newtype), so the exported
/// TypeScript type is `number` rather than ts-rs's default `bigint`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct ProductId(#[ts(type = "number")] i64);

impl ProductId {
    #[inline]
    pub const fn new(value: i64) -> Self {
        ProductId(value)
    }

    #[inline]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        ProductId(value)
    }
}

// =============================================================================
// Product
// =============================================================================

/// One inventory item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier within the store.
    pub id: ProductId,

    /// Display name shown in lists and search results.
    pub name: String,

    /// Current price. Never negative.
    #[ts(type = "number")]
    pub price: Money,

    /// Supplier name, the grouping key for the supplier directory.
    pub supplier: String,

    /// Supplier phone number, if one was given.
    #[serde(default)]
    pub phone: Option<String>,

    /// Free-text notes.
    #[serde(default)]
    pub notes: Option<String>,

    /// Embedded image as a `data:image/...` URI.
    #[serde(default)]
    pub image: Option<String>,

    /// When the product was added.
    #[ts(as = "String")]
    pub date_added: DateTime<Utc>,

    /// When the product was last changed.
    #[ts(as = "String")]
    pub last_updated: DateTime<Utc>,
}

impl Product {
    /// Builds a product from submitted form fields.
    ///
    /// Validates and normalizes the input (trimmed name and supplier, blank
    /// optional fields become `None`). Both timestamps are set to `now`.
    pub fn create(id: ProductId, input: NewProduct, now: DateTime<Utc>) -> CoreResult<Self> {
        let name = validation::validate_product_name(&input.name)?;
        let supplier = validation::validate_supplier_name(&input.supplier)?;
        let price = validation::validate_list_price(input.price)?;
        let image = validation::validate_image(input.image)?;

        Ok(Product {
            id,
            name,
            price,
            supplier,
            phone: validation::normalize_optional(input.phone),
            notes: validation::normalize_optional(input.notes),
            image,
            date_added: now,
            last_updated: now,
        })
    }

    /// Sets a new price and refreshes `last_updated`.
    ///
    /// `last_updated` never moves before `date_added`, even if the clock
    /// went backwards.
    pub fn set_price(&mut self, price: Money, now: DateTime<Utc>) {
        self.price = price;
        self.last_updated = now.max(self.date_added);
    }

    /// Phone number if present and non-blank.
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref().filter(|p| !p.trim().is_empty())
    }

    /// Case-insensitive substring match on name or supplier.
    ///
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.supplier.to_lowercase().contains(needle)
    }
}

// =============================================================================
// New Product (form input)
// =============================================================================

/// Fields submitted by the add-product form.
///
/// The price is kept as the raw float the form produced; it is validated
/// and converted to [`Money`] by [`Product::create`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub supplier: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl NewProduct {
    /// Creates form input with the required fields.
    pub fn new(name: impl Into<String>, price: f64, supplier: impl Into<String>) -> Self {
        NewProduct {
            name: name.into(),
            price,
            supplier: supplier.into(),
            ..Default::default()
        }
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

// =============================================================================
// Supplier (derived)
// =============================================================================

/// A supplier directory entry, derived from the product list.
///
/// Rebuilt on every read; never stored or edited on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Supplier {
    /// Supplier name exactly as typed on the products.
    pub name: String,

    /// Phone taken from the first product seen for this supplier.
    pub phone: Option<String>,

    /// Names of the supplier's products, in store order.
    pub products: Vec<String>,
}

impl Supplier {
    /// Number of products supplied.
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// `tel:` link for the "Call" action, if a phone number is known.
    pub fn call_uri(&self) -> Option<String> {
        self.phone
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(|p| format!("tel:{p}"))
    }
}

// =============================================================================
// Inventory Stats (derived)
// =============================================================================

/// Counters shown on the home screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InventoryStats {
    pub total_products: usize,
    pub total_suppliers: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, ValidationError};
    use chrono::{Duration, TimeZone};

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn rice() -> NewProduct {
        NewProduct::new("Rice 50kg", 45000.0, "Ade Foods").phone("08011112222")
    }

    #[test]
    fn test_create_sets_both_timestamps() {
        let product = Product::create(ProductId::new(1), rice(), at(100)).unwrap();

        assert_eq!(product.name, "Rice 50kg");
        assert_eq!(product.price, Money::from_cents(4_500_000));
        assert_eq!(product.phone(), Some("08011112222"));
        assert_eq!(product.date_added, at(100));
        assert_eq!(product.last_updated, at(100));
    }

    #[test]
    fn test_create_normalizes_blank_optionals() {
        let input = NewProduct::new("  Beans  ", 10.0, " Ade Foods ")
            .phone("   ")
            .notes("");
        let product = Product::create(ProductId::new(1), input, at(0)).unwrap();

        assert_eq!(product.name, "Beans");
        assert_eq!(product.supplier, "Ade Foods");
        assert_eq!(product.phone, None);
        assert_eq!(product.notes, None);
        assert_eq!(product.image, None);
    }

    #[test]
    fn test_create_rejects_missing_supplier() {
        let err = Product::create(ProductId::new(1), NewProduct::new("Oil", 5.0, ""), at(0))
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Required { ref field }) if field == "supplier"
        ));
    }

    #[test]
    fn test_set_price_keeps_last_updated_after_date_added() {
        let mut product = Product::create(ProductId::new(1), rice(), at(100)).unwrap();

        product.set_price(Money::from_cents(100), at(200));
        assert_eq!(product.last_updated, at(200));

        product.set_price(Money::from_cents(200), at(100) - Duration::seconds(50));
        assert_eq!(product.price.cents(), 200);
        assert_eq!(product.last_updated, at(100));
    }

    #[test]
    fn test_matches_name_or_supplier() {
        let product = Product::create(ProductId::new(1), rice(), at(0)).unwrap();

        assert!(product.matches("rice"));
        assert!(product.matches("ade"));
        assert!(product.matches("50kg"));
        assert!(!product.matches("beans"));
    }

    #[test]
    fn test_product_json_layout() {
        let product = Product::create(ProductId::new(1_700_000_000_000), rice(), at(0)).unwrap();
        let value = serde_json::to_value(&product).unwrap();

        assert_eq!(value["id"], 1_700_000_000_000_i64);
        assert_eq!(value["price"], 45000.0);
        assert_eq!(value["phone"], "08011112222");
        assert!(value["notes"].is_null());
        assert!(value.get("dateAdded").is_some());
        assert!(value.get("lastUpdated").is_some());
    }

    #[test]
    fn test_exported_id_type_matches_json() {
        assert_eq!(ProductId::inline(), "number");
        assert_eq!(serde_json::to_string(&ProductId::new(42)).unwrap(), "42");
    }

    #[test]
    fn test_loads_frontend_written_record() {
        let json = r#"{
            "id": 1712345678901,
            "name": "Palm Oil",
            "price": 3200.5,
            "supplier": "Mama Nkechi",
            "phone": "",
            "notes": "",
            "image": null,
            "dateAdded": "2024-04-05T19:34:38.901Z",
            "lastUpdated": "2024-04-05T19:34:38.901Z"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id.value(), 1_712_345_678_901);
        assert_eq!(product.price.cents(), 320_050);
        assert_eq!(product.phone(), None);
    }

    #[test]
    fn test_supplier_call_uri() {
        let mut supplier = Supplier {
            name: "Ade Foods".to_string(),
            phone: Some("08011112222".to_string()),
            products: vec!["Rice 50kg".to_string()],
        };
        assert_eq!(supplier.call_uri().as_deref(), Some("tel:08011112222"));
        assert_eq!(supplier.product_count(), 1);

        supplier.phone = Some(String::new());
        assert_eq!(supplier.call_uri(), None);
    }
}
