//! # Cart
//!
//! The cart is a multiset of scanned item codes awaiting total computation.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Operations                                   │
//! │                                                                         │
//! │  Menu Action              Checkout Call           Cart State Change     │
//! │  ───────────              ─────────────           ─────────────────     │
//! │                                                                         │
//! │  Scan "ABAC" ────────────► scan() ──────────────► counts += {A:2,B,C}   │
//! │                                                                         │
//! │  View Cart ──────────────► cart().lines() ──────► (read only)           │
//! │                                                                         │
//! │  Clear Cart ─────────────► clear_cart() ────────► lines.clear()         │
//! │                                                                         │
//! │  View Total ─────────────► total() ─────────────► (read only)           │
//! │                                                                         │
//! │  The cart is catalog-agnostic: it counts whatever it is given.          │
//! │  Validating codes against the catalog is the checkout's job.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Cart Line
// =============================================================================

/// One line of the cart: an item code and its accumulated quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Item code as scanned.
    pub code: String,

    /// How many times the code has been scanned.
    pub quantity: u32,
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: a multiset of item codes.
///
/// ## Invariants
/// - Lines are unique by `code` (re-scanning a code increments its quantity)
/// - Iteration order is first-seen order, so display and test output are
///   deterministic
/// - The cart performs NO catalog validation; it is a dumb counter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Increments the count for a single item code.
    pub fn add_one(&mut self, code: &str) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.code == code) {
            line.quantity += 1;
            return;
        }
        self.lines.push(CartLine {
            code: code.to_string(),
            quantity: 1,
        });
    }

    /// Increments the count for each code in the sequence.
    pub fn add<I>(&mut self, codes: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for code in codes {
            self.add_one(code.as_ref());
        }
    }

    /// Removes all items from the cart. Idempotent.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Read-only view of the cart lines in first-seen order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the total quantity of all items.
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Calculates the total price of the cart against a catalog.
    ///
    /// Each line is priced by the matching product's [`price_for`]
    /// (bulk offers included).
    ///
    /// ## Errors
    /// Returns [`CoreError::ProductNotFound`] if any cart code is missing
    /// from the catalog. Scanning filters unknown codes before they reach
    /// the cart, so this only happens when the catalog and cart have drifted
    /// apart - an internal-consistency defect that must be surfaced.
    ///
    /// [`price_for`]: crate::product::Product::price_for
    pub fn total(&self, catalog: &Catalog) -> CoreResult<Money> {
        let mut total = Money::zero();
        for line in &self.lines {
            let product = catalog
                .get(&line.code)
                .ok_or_else(|| CoreError::ProductNotFound(line.code.clone()))?;
            total += product.price_for(line.quantity);
        }
        Ok(total)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
