//! # tally-core: Pure Business Logic for Tally POS
//!
//! This crate is the **heart** of Tally POS. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tally POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Terminal Front-End (apps/terminal)              │   │
//! │  │    Menu loop ──► Prompts ──► Rendering                          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain method calls                     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌──────────┐ │   │
//! │  │  │  money  │ │ product │ │  cart   │ │ catalog  │ │ checkout │ │   │
//! │  │  │  Money  │ │ Product │ │  Cart   │ │ Catalog  │ │ Checkout │ │   │
//! │  │  │         │ │BulkOffer│ │CartLine │ │          │ │  System  │ │   │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └──────────┘ └──────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PROMPTS • NO PERSISTENCE • PURE FUNCTIONS         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`product`] - Product record and bulk-offer pricing
//! - [`cart`] - The cart multiset of scanned codes
//! - [`catalog`] - Code-keyed product catalog
//! - [`checkout`] - Session orchestration: upsert, scan, total
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every pricing computation is deterministic
//! 2. **No I/O**: prompting, printing, and persistence are FORBIDDEN here
//! 3. **Integer Money**: all monetary values are cents (i64), never floats
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::{CheckoutSystem, Money};
//!
//! let mut session = CheckoutSystem::with_default_catalog();
//!
//! // Scan a batch; unknown codes are reported, not fatal
//! let outcome = session.scan(["A", "B", "A", "B", "A", "C", "C"]);
//! assert!(!outcome.has_rejections());
//!
//! // A: 3 for 130, B: 2 for 45, C: 2 × 20
//! assert_eq!(session.total().unwrap(), Money::from_cents(215));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod money;
pub mod product;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::Money` instead of
// `use tally_core::money::Money`

pub use cart::{Cart, CartLine};
pub use catalog::{Catalog, UpsertOutcome};
pub use checkout::{CheckoutSystem, ScanOutcome};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use product::{BulkOffer, Product};
