//! # Checkout System
//!
//! Orchestrates the catalog and the cart for one checkout session.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Checkout Session                                   │
//! │                                                                         │
//! │  ┌──────────────────┐            ┌──────────────────┐                   │
//! │  │     Catalog      │            │       Cart       │                   │
//! │  │  code → Product  │            │  code → quantity │                   │
//! │  └────────┬─────────┘            └────────┬─────────┘                   │
//! │           │                               │                             │
//! │           │     ┌─────────────────┐       │                             │
//! │           └────►│ CheckoutSystem  │◄──────┘                             │
//! │                 └─────────────────┘                                     │
//! │                                                                         │
//! │  upsert_product ──► validate ──► catalog.upsert (wholesale replace)     │
//! │                                                                         │
//! │  scan ──► partition by catalog membership                               │
//! │            ├── accepted ──► cart.add                                    │
//! │            └── rejected ──► reported to caller (never an error)         │
//! │                                                                         │
//! │  total ──► cart.total(catalog) - offers applied per product             │
//! │                                                                         │
//! │  The catalog and cart are plain owned fields. One session, one thread,  │
//! │  no locks: every operation is an immediate synchronous call.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Partition-and-Report Pattern
//! A scan of mixed valid/invalid codes must still admit the valid ones.
//! `scan` therefore never fails: it splits its input into accepted and
//! rejected codes and reports both. Rejecting the whole batch on one bad
//! code would throw away good scans.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cart::Cart;
use crate::catalog::{Catalog, UpsertOutcome};
use crate::error::CoreResult;
use crate::money::Money;
use crate::product::Product;
use crate::validation::{validate_code, validate_offer, validate_price};

// =============================================================================
// Scan Outcome
// =============================================================================

/// The result of scanning a batch of item codes.
///
/// `accepted` and `rejected` together are a partition of the input, in input
/// order with duplicates preserved. Rejected codes were not added to the
/// cart; they are data for the caller to report, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOutcome {
    /// Codes present in the catalog, now added to the cart.
    pub accepted: Vec<String>,

    /// Codes absent from the catalog, ignored.
    pub rejected: Vec<String>,
}

impl ScanOutcome {
    /// Checks whether any scanned code was unknown to the catalog.
    pub fn has_rejections(&self) -> bool {
        !self.rejected.is_empty()
    }
}

// =============================================================================
// Checkout System
// =============================================================================

/// One checkout session: a catalog of products and a single cart.
///
/// The catalog is owned exclusively by the session; the cart holds no
/// reference to it. Cart contents are validated against the catalog at scan
/// time and priced against it at total time, so the catalog may change
/// between the two.
#[derive(Debug, Clone, Default)]
pub struct CheckoutSystem {
    catalog: Catalog,
    cart: Cart,
}

impl CheckoutSystem {
    /// Creates a session with an empty catalog and an empty cart.
    pub fn new() -> Self {
        CheckoutSystem {
            catalog: Catalog::new(),
            cart: Cart::new(),
        }
    }

    /// Creates a session seeded with the default catalog:
    ///
    /// | Code | Unit price | Offer      |
    /// |------|-----------|-------------|
    /// | A    | 50        | 3 for 130   |
    /// | B    | 30        | 2 for 45    |
    /// | C    | 20        | -           |
    /// | D    | 15        | -           |
    pub fn with_default_catalog() -> Self {
        let mut system = CheckoutSystem::new();
        for (code, unit, offer) in [
            ("A", 50, Some((3u32, 130i64))),
            ("B", 30, Some((2, 45))),
            ("C", 20, None),
            ("D", 15, None),
        ] {
            system
                .upsert_product(
                    code,
                    Money::from_cents(unit),
                    offer.map(|(n, _)| n),
                    offer.map(|(_, p)| Money::from_cents(p)),
                )
                .expect("default catalog entries are valid");
        }
        info!(products = system.catalog.len(), "Default catalog loaded");
        system
    }

    /// Adds a new product or replaces an existing product's pricing fields
    /// wholesale.
    ///
    /// The offer is supplied as two separate optional fields, matching the
    /// input boundary; they are validated into a single `Option<BulkOffer>`
    /// before touching the catalog.
    ///
    /// ## Errors
    /// Returns a [`ValidationError`] (wrapped in `CoreError`) for a
    /// malformed code, a negative price, a half-set offer, or a zero offer
    /// count. The catalog is untouched on error.
    ///
    /// [`ValidationError`]: crate::error::ValidationError
    pub fn upsert_product(
        &mut self,
        code: &str,
        unit_price: Money,
        offer_count: Option<u32>,
        offer_price: Option<Money>,
    ) -> CoreResult<UpsertOutcome> {
        validate_code(code)?;
        validate_price("unit price", unit_price)?;
        let offer = validate_offer(offer_count, offer_price)?;

        let outcome = self.catalog.upsert(code.trim(), unit_price, offer);
        info!(code, %unit_price, ?outcome, "Product upserted");
        Ok(outcome)
    }

    /// Scans a batch of item codes into the cart.
    ///
    /// Codes present in the catalog are added to the cart; unknown codes are
    /// reported in the outcome and ignored. Never fails: a mixed batch still
    /// admits its valid codes, regardless of position or duplication.
    pub fn scan<I>(&mut self, codes: I) -> ScanOutcome
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut outcome = ScanOutcome::default();
        for code in codes {
            let code = code.as_ref();
            if self.catalog.contains(code) {
                self.cart.add_one(code);
                outcome.accepted.push(code.to_string());
            } else {
                outcome.rejected.push(code.to_string());
            }
        }

        debug!(
            accepted = outcome.accepted.len(),
            rejected = outcome.rejected.len(),
            "Scan processed"
        );
        if outcome.has_rejections() {
            warn!(codes = ?outcome.rejected, "Unknown item codes ignored");
        }
        outcome
    }

    /// Calculates the total price of the cart, applying bulk offers.
    ///
    /// ## Errors
    /// Returns [`CoreError::ProductNotFound`] if the cart references a code
    /// missing from the catalog (see [`Cart::total`]).
    ///
    /// [`CoreError::ProductNotFound`]: crate::error::CoreError::ProductNotFound
    pub fn total(&self) -> CoreResult<Money> {
        self.cart.total(&self.catalog)
    }

    /// Read-only view of the catalog's products for display.
    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    /// Read-only view of the cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Empties the cart. Idempotent.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        info!("Cart cleared");
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, ValidationError};

    /// Splits a scan string into per-character codes, the way the terminal
    /// front-end does.
    fn codes(s: &str) -> Vec<String> {
        s.chars().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_default_catalog_contents() {
        let system = CheckoutSystem::with_default_catalog();
        let listed: Vec<&str> = system.products().iter().map(|p| p.code.as_str()).collect();
        assert_eq!(listed, vec!["A", "B", "C", "D"]);

        assert!(system.products()[0].has_offer());
        assert!(system.products()[1].has_offer());
        assert!(!system.products()[2].has_offer());
        assert!(!system.products()[3].has_offer());
    }

    #[test]
    fn test_scan_partition_law() {
        // Catalog has A and B only
        let mut system = CheckoutSystem::new();
        system
            .upsert_product("A", Money::from_cents(50), None, None)
            .unwrap();
        system
            .upsert_product("B", Money::from_cents(30), None, None)
            .unwrap();

        let outcome = system.scan(["A", "X", "A", "B", "Y"]);

        assert_eq!(outcome.accepted, vec!["A", "A", "B"]);
        assert_eq!(outcome.rejected, vec!["X", "Y"]);

        let lines = system.cart().lines();
        assert_eq!(lines.len(), 2);
        assert_eq!((lines[0].code.as_str(), lines[0].quantity), ("A", 2));
        assert_eq!((lines[1].code.as_str(), lines[1].quantity), ("B", 1));
    }

    #[test]
    fn test_scan_valid_batch_has_no_rejections() {
        let mut system = CheckoutSystem::with_default_catalog();
        let outcome = system.scan(codes("ABCD"));
        assert!(!outcome.has_rejections());
        assert_eq!(outcome.accepted.len(), 4);
    }

    #[test]
    fn test_end_to_end_total_with_offers() {
        // ABABACC → A:3, B:2, C:2 → 130 + 45 + 40 = 215
        let mut system = CheckoutSystem::with_default_catalog();
        system.scan(codes("ABABACC"));

        assert_eq!(system.total().unwrap().cents(), 215);
    }

    #[test]
    fn test_unknown_code_excluded_from_total() {
        // ABZ → Z rejected, total covers A and B only
        let mut system = CheckoutSystem::with_default_catalog();
        let outcome = system.scan(codes("ABZ"));

        assert_eq!(outcome.accepted, vec!["A", "B"]);
        assert_eq!(outcome.rejected, vec!["Z"]);
        assert_eq!(system.total().unwrap().cents(), 80);
    }

    #[test]
    fn test_clear_cart_then_total_is_zero() {
        let mut system = CheckoutSystem::with_default_catalog();
        system.scan(codes("ABABACC"));
        system.clear_cart();

        assert!(system.cart().is_empty());
        assert_eq!(system.total().unwrap(), Money::zero());

        // Clearing again is harmless
        system.clear_cart();
        assert_eq!(system.total().unwrap(), Money::zero());
    }

    #[test]
    fn test_upsert_removes_stale_offer() {
        let mut system = CheckoutSystem::with_default_catalog();

        // A starts with 3-for-130; replace it with a plain 60-cent price
        system
            .upsert_product("A", Money::from_cents(60), None, None)
            .unwrap();

        system.scan(codes("AAA"));
        // 3 × 60, not 130: the offer must not linger
        assert_eq!(system.total().unwrap().cents(), 180);
    }

    #[test]
    fn test_upsert_rejects_negative_price() {
        let mut system = CheckoutSystem::new();
        let err = system
            .upsert_product("A", Money::from_cents(-50), None, None)
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::OutOfRange { .. })
        ));
        assert!(system.products().is_empty());
    }

    #[test]
    fn test_upsert_rejects_half_set_offer() {
        let mut system = CheckoutSystem::new();
        let err = system
            .upsert_product("A", Money::from_cents(50), Some(3), None)
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::IncompleteOffer)
        ));
    }

    #[test]
    fn test_upsert_rejects_zero_offer_count() {
        let mut system = CheckoutSystem::new();
        let err = system
            .upsert_product("A", Money::from_cents(50), Some(0), Some(Money::from_cents(130)))
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::MustBePositive { .. })
        ));
    }

    #[test]
    fn test_catalog_may_change_between_scan_and_total() {
        let mut system = CheckoutSystem::with_default_catalog();
        system.scan(codes("CC"));

        // Reprice C after it is already in the cart
        system
            .upsert_product("C", Money::from_cents(25), None, None)
            .unwrap();

        // Total reflects the catalog at computation time
        assert_eq!(system.total().unwrap().cents(), 50);
    }
}
