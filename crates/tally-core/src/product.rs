//! # Product Types
//!
//! The product record and its bulk-offer pricing rule.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Product Types                                   │
//! │                                                                         │
//! │  ┌─────────────────────┐        ┌─────────────────────┐                 │
//! │  │      Product        │        │     BulkOffer       │                 │
//! │  │  ─────────────────  │        │  ─────────────────  │                 │
//! │  │  code (key)         │  0..1  │  count (u32 > 0)    │                 │
//! │  │  unit_price         ├───────►│  price (Money)      │                 │
//! │  │  offer              │        │                     │                 │
//! │  │  created_at         │        │  "3 for $1.30"      │                 │
//! │  │  updated_at         │        └─────────────────────┘                 │
//! │  └─────────────────────┘                                                │
//! │                                                                         │
//! │  The offer is a single Option<BulkOffer>, never two nullable fields:    │
//! │  a half-set offer (count without price) is unrepresentable.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Pricing Rule
//! With an offer of `count` items for `price`, a quantity is split into
//! complete offer sets plus a remainder priced at the unit price:
//!
//! ```text
//! price_for(q) = (q / count) * price + (q % count) * unit_price
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Bulk Offer
// =============================================================================

/// A bulk-purchase discount rule: `count` items for `price`.
///
/// ## Example
/// "3 for $1.30" on a $0.50 item: buying 7 costs 2 × $1.30 + 1 × $0.50.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkOffer {
    /// Number of items required to qualify for the offer. Always > 0
    /// (enforced by validation at the upsert boundary).
    pub count: u32,

    /// The discounted price for `count` items together.
    pub price: Money,
}

impl BulkOffer {
    /// Creates a new bulk offer.
    #[inline]
    pub const fn new(count: u32, price: Money) -> Self {
        BulkOffer { count, price }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale, keyed by its item code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Item code - business identifier, unique within the catalog.
    /// Normalized to uppercase at the input boundary.
    pub code: String,

    /// Price of a single unit.
    pub unit_price: Money,

    /// Optional bulk-purchase discount rule.
    pub offer: Option<BulkOffer>,

    /// When the product was created.
    pub created_at: DateTime<Utc>,

    /// When the pricing fields were last replaced.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Creates a new product with fresh timestamps.
    pub fn new(code: impl Into<String>, unit_price: Money, offer: Option<BulkOffer>) -> Self {
        let now = Utc::now();
        Product {
            code: code.into(),
            unit_price,
            offer,
            created_at: now,
            updated_at: now,
        }
    }

    /// Calculates the total price for a given quantity, applying the bulk
    /// offer if one exists.
    ///
    /// Pure function: no side effects, same input always yields the same
    /// output. Negative quantities are unrepresentable (`u32`).
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    /// use tally_core::product::{BulkOffer, Product};
    ///
    /// let a = Product::new(
    ///     "A",
    ///     Money::from_cents(50),
    ///     Some(BulkOffer::new(3, Money::from_cents(130))),
    /// );
    /// // 7 = 2 complete sets of 3, plus 1 at unit price
    /// assert_eq!(a.price_for(7).cents(), 2 * 130 + 50);
    /// ```
    pub fn price_for(&self, quantity: u32) -> Money {
        match self.offer {
            Some(offer) => {
                let sets = quantity / offer.count;
                let remainder = quantity % offer.count;
                offer.price * i64::from(sets) + self.unit_price * i64::from(remainder)
            }
            None => self.unit_price * i64::from(quantity),
        }
    }

    /// Returns a human-readable summary of price and offer state.
    ///
    /// Pure formatting, no side effects.
    pub fn describe(&self) -> String {
        match self.offer {
            Some(offer) => format!(
                "Code: {}, Price: {}, Offer: {} for {}",
                self.code, self.unit_price, offer.count, offer.price
            ),
            None => format!(
                "Code: {}, Price: {}, No offer available",
                self.code, self.unit_price
            ),
        }
    }

    /// Checks if the product carries a bulk offer.
    #[inline]
    pub fn has_offer(&self) -> bool {
        self.offer.is_some()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(unit_cents: i64, offer: Option<(u32, i64)>) -> Product {
        Product::new(
            "A",
            Money::from_cents(unit_cents),
            offer.map(|(count, price)| BulkOffer::new(count, Money::from_cents(price))),
        )
    }

    #[test]
    fn test_price_without_offer_is_linear() {
        let p = product(50, None);
        for q in 0..20u32 {
            assert_eq!(p.price_for(q).cents(), i64::from(q) * 50);
        }
    }

    #[test]
    fn test_price_with_offer_splits_sets_and_remainder() {
        // unit 50, offer 3 for 130
        let p = product(50, Some((3, 130)));

        assert_eq!(p.price_for(0).cents(), 0);
        assert_eq!(p.price_for(1).cents(), 50);
        assert_eq!(p.price_for(2).cents(), 100);
        assert_eq!(p.price_for(3).cents(), 130);
        assert_eq!(p.price_for(4).cents(), 180);
        assert_eq!(p.price_for(6).cents(), 260);
        // 7 = 2 complete sets + 1 remainder
        assert_eq!(p.price_for(7).cents(), 310);
    }

    #[test]
    fn test_offer_formula_holds_generally() {
        let p = product(30, Some((2, 45)));
        for q in 0..50u32 {
            let expected = i64::from(q / 2) * 45 + i64::from(q % 2) * 30;
            assert_eq!(p.price_for(q).cents(), expected, "quantity {}", q);
        }
    }

    #[test]
    fn test_describe_with_offer() {
        let p = product(50, Some((3, 130)));
        assert_eq!(p.describe(), "Code: A, Price: $0.50, Offer: 3 for $1.30");
    }

    #[test]
    fn test_describe_without_offer() {
        let p = product(20, None);
        assert_eq!(p.describe(), "Code: A, Price: $0.20, No offer available");
    }

    #[test]
    fn test_has_offer() {
        assert!(product(50, Some((3, 130))).has_offer());
        assert!(!product(50, None).has_offer());
    }
}
