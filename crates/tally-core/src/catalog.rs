//! # Catalog
//!
//! The catalog is the full set of known products keyed by item code.
//!
//! Backed by a `Vec` so enumeration preserves first-insertion order
//! (deterministic display and test output). Lookup is a linear scan; the
//! catalog is a small in-memory table, so there is nothing to index.
//!
//! Products are never deleted: upsert either inserts a new product or
//! replaces the pricing fields of an existing one wholesale.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::product::{BulkOffer, Product};

// =============================================================================
// Upsert Outcome
// =============================================================================

/// Whether an upsert created a new product or updated an existing one.
///
/// Lets the front-end say "Added" vs "Updated" without a pre-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// A new product was added to the catalog.
    Inserted,
    /// An existing product's pricing fields were replaced.
    Updated,
}

// =============================================================================
// Catalog
// =============================================================================

/// The product catalog, keyed by code, in first-insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog {
            products: Vec::new(),
        }
    }

    /// Inserts a product, replacing any existing product with the same code.
    pub fn insert(&mut self, product: Product) {
        if let Some(existing) = self.products.iter_mut().find(|p| p.code == product.code) {
            *existing = product;
        } else {
            self.products.push(product);
        }
    }

    /// Inserts a new product or replaces an existing product's pricing
    /// fields wholesale.
    ///
    /// ## Wholesale Replacement
    /// Both `unit_price` and `offer` are overwritten every time. Updating a
    /// product without an offer REMOVES any previous offer - old pricing
    /// fields never linger. `created_at` is preserved on update;
    /// `updated_at` is refreshed.
    pub fn upsert(
        &mut self,
        code: &str,
        unit_price: Money,
        offer: Option<BulkOffer>,
    ) -> UpsertOutcome {
        if let Some(existing) = self.products.iter_mut().find(|p| p.code == code) {
            existing.unit_price = unit_price;
            existing.offer = offer;
            existing.updated_at = chrono::Utc::now();
            UpsertOutcome::Updated
        } else {
            self.products.push(Product::new(code, unit_price, offer));
            UpsertOutcome::Inserted
        }
    }

    /// Looks up a product by code.
    pub fn get(&self, code: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.code == code)
    }

    /// Checks whether a code is present in the catalog.
    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Read-only view of all products in first-insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut catalog = Catalog::new();
        catalog.insert(Product::new("A", Money::from_cents(50), None));

        assert!(catalog.contains("A"));
        assert!(!catalog.contains("Z"));
        assert_eq!(catalog.get("A").unwrap().unit_price.cents(), 50);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_upsert_inserts_then_updates() {
        let mut catalog = Catalog::new();

        let outcome = catalog.upsert("A", Money::from_cents(50), None);
        assert_eq!(outcome, UpsertOutcome::Inserted);

        let outcome = catalog.upsert("A", Money::from_cents(60), None);
        assert_eq!(outcome, UpsertOutcome::Updated);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("A").unwrap().unit_price.cents(), 60);
    }

    #[test]
    fn test_upsert_replaces_offer_wholesale() {
        let mut catalog = Catalog::new();
        catalog.upsert(
            "A",
            Money::from_cents(50),
            Some(BulkOffer::new(3, Money::from_cents(130))),
        );
        assert!(catalog.get("A").unwrap().has_offer());

        // Re-upsert without an offer: the old offer must not linger
        catalog.upsert("A", Money::from_cents(60), None);

        let product = catalog.get("A").unwrap();
        assert!(!product.has_offer());
        for q in 0..10u32 {
            assert_eq!(product.price_for(q).cents(), i64::from(q) * 60);
        }
    }

    #[test]
    fn test_upsert_preserves_created_at() {
        let mut catalog = Catalog::new();
        catalog.upsert("A", Money::from_cents(50), None);
        let created = catalog.get("A").unwrap().created_at;

        catalog.upsert("A", Money::from_cents(60), None);
        let product = catalog.get("A").unwrap();

        assert_eq!(product.created_at, created);
        assert!(product.updated_at >= created);
    }

    #[test]
    fn test_products_preserve_insertion_order() {
        let mut catalog = Catalog::new();
        catalog.upsert("C", Money::from_cents(20), None);
        catalog.upsert("A", Money::from_cents(50), None);
        catalog.upsert("B", Money::from_cents(30), None);
        // Updating A must not move it
        catalog.upsert("A", Money::from_cents(55), None);

        let codes: Vec<&str> = catalog.products().iter().map(|p| p.code.as_str()).collect();
        assert_eq!(codes, vec!["C", "A", "B"]);
    }
}
