//! # Aggregates
//!
//! Read-only views derived from the product list: the supplier directory,
//! the home-screen counters and search results.
//!
//! ## Recompute, Don't Cache
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  products: [Rice/Ade, Beans/Ade, Oil/Nkechi]                           │
//! │       │                                                                 │
//! │       ├──► list_suppliers ──► [Ade {Rice, Beans}, Nkechi {Oil}]        │
//! │       ├──► total_products ──► 3                                        │
//! │       ├──► total_suppliers ─► 2                                        │
//! │       └──► search("ade") ───► [Rice, Beans]                            │
//! │                                                                         │
//! │  Every call walks the list again. Nothing here holds state.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Supplier grouping is exact and case-sensitive: "Ade Foods" and
//! "ade foods" are two suppliers.

use std::collections::{HashMap, HashSet};

use crate::types::{InventoryStats, Product, Supplier};

// =============================================================================
// Supplier Directory
// =============================================================================

/// Groups products into a supplier directory.
///
/// One entry per distinct `supplier` value, in first-seen order. The phone
/// number comes from the first product of each group; later products with a
/// different (or missing) phone don't change it.
///
/// ```rust
/// use chrono::Utc;
/// use stockbook_core::aggregate::list_suppliers;
/// use stockbook_core::{NewProduct, Product, ProductId};
///
/// let now = Utc::now();
/// let products = vec![
///     Product::create(ProductId::new(1), NewProduct::new("Rice 50kg", 45000.0, "Ade Foods").phone("08011112222"), now).unwrap(),
///     Product::create(ProductId::new(2), NewProduct::new("Beans", 9000.0, "Ade Foods").phone("09099998888"), now).unwrap(),
/// ];
///
/// let suppliers = list_suppliers(&products);
/// assert_eq!(suppliers.len(), 1);
/// assert_eq!(suppliers[0].phone.as_deref(), Some("08011112222"));
/// assert_eq!(suppliers[0].products, vec!["Rice 50kg", "Beans"]);
/// ```
pub fn list_suppliers(products: &[Product]) -> Vec<Supplier> {
    let mut suppliers: Vec<Supplier> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for product in products {
        match index.get(product.supplier.as_str()) {
            Some(&slot) => {
                if let Some(entry) = suppliers.get_mut(slot) {
                    entry.products.push(product.name.clone());
                }
            }
            None => {
                index.insert(product.supplier.as_str(), suppliers.len());
                suppliers.push(Supplier {
                    name: product.supplier.clone(),
                    phone: product.phone.clone(),
                    products: vec![product.name.clone()],
                });
            }
        }
    }

    suppliers
}

// =============================================================================
// Stats
// =============================================================================

/// Number of products.
#[inline]
pub fn total_products(products: &[Product]) -> usize {
    products.len()
}

/// Number of distinct supplier names (case-sensitive).
pub fn total_suppliers(products: &[Product]) -> usize {
    products
        .iter()
        .map(|p| p.supplier.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Both home-screen counters at once.
pub fn inventory_stats(products: &[Product]) -> InventoryStats {
    InventoryStats {
        total_products: total_products(products),
        total_suppliers: total_suppliers(products),
    }
}

// =============================================================================
// Search
// =============================================================================

/// Products whose name or supplier contains `needle`, in store order.
///
/// `needle` must already be lowercase; use
/// [`validate_search_query`](crate::validation::validate_search_query) to
/// produce it. An empty needle matches everything.
pub fn matching<'a>(products: &'a [Product], needle: &str) -> Vec<&'a Product> {
    products.iter().filter(|p| p.matches(needle)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NewProduct, ProductId};
    use chrono::Utc;

    fn product(id: i64, name: &str, supplier: &str, phone: Option<&str>) -> Product {
        let mut input = NewProduct::new(name, 100.0, supplier);
        if let Some(phone) = phone {
            input = input.phone(phone);
        }
        Product::create(ProductId::new(id), input, Utc::now()).unwrap()
    }

    fn shop() -> Vec<Product> {
        vec![
            product(1, "Rice 50kg", "Ade Foods", Some("08011112222")),
            product(2, "Palm Oil", "Mama Nkechi", None),
            product(3, "Beans", "Ade Foods", Some("09099998888")),
            product(4, "Garri", "ade foods", None),
        ]
    }

    #[test]
    fn test_list_suppliers_groups_in_first_seen_order() {
        let suppliers = list_suppliers(&shop());

        let names: Vec<_> = suppliers.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Ade Foods", "Mama Nkechi", "ade foods"]);

        assert_eq!(suppliers[0].products, vec!["Rice 50kg", "Beans"]);
        assert_eq!(suppliers[0].phone.as_deref(), Some("08011112222"));
        assert_eq!(suppliers[1].phone, None);
    }

    #[test]
    fn test_first_phone_wins_even_when_absent() {
        let products = vec![
            product(1, "Oil", "Nkechi", None),
            product(2, "Salt", "Nkechi", Some("0803")),
        ];

        let suppliers = list_suppliers(&products);
        assert_eq!(suppliers.len(), 1);
        assert_eq!(suppliers[0].phone, None);
        assert_eq!(suppliers[0].product_count(), 2);
    }

    #[test]
    fn test_group_sizes_match_product_counts() {
        let products = shop();
        for supplier in list_suppliers(&products) {
            let expected = products
                .iter()
                .filter(|p| p.supplier == supplier.name)
                .count();
            assert_eq!(supplier.products.len(), expected);
        }
    }

    #[test]
    fn test_stats() {
        let products = shop();
        assert_eq!(total_products(&products), 4);
        assert_eq!(total_suppliers(&products), 3);
        assert_eq!(
            inventory_stats(&products),
            InventoryStats {
                total_products: 4,
                total_suppliers: 3,
            }
        );
    }

    #[test]
    fn test_empty_inventory() {
        assert!(list_suppliers(&[]).is_empty());
        assert_eq!(inventory_stats(&[]), InventoryStats::default());
    }

    #[test]
    fn test_matching_is_case_insensitive_on_name_or_supplier() {
        let products = shop();

        let ids: Vec<_> = matching(&products, "ade")
            .iter()
            .map(|p| p.id.value())
            .collect();
        assert_eq!(ids, vec![1, 3, 4]);

        let ids: Vec<_> = matching(&products, "oil")
            .iter()
            .map(|p| p.id.value())
            .collect();
        assert_eq!(ids, vec![2]);

        assert!(matching(&products, "yam").is_empty());
        assert_eq!(matching(&products, "").len(), 4);
    }
}
