//! # Validation Module
//!
//! Input validation for product upserts.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Terminal prompts (dialoguer validators)                       │
//! │  ├── Basic format checks (numeric price, non-empty code)                │
//! │  └── Immediate user feedback, re-prompt on bad input                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (business rule validation)                        │
//! │  ├── Code shape, price sign, offer consistency                          │
//! │  └── Enforced inside upsert_product - the catalog can never hold        │
//! │      a product that skipped these checks                                │
//! │                                                                         │
//! │  Scanned cart codes are deliberately NOT validated here: unknown        │
//! │  codes are partitioned out by scan() and reported, not rejected.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Negative prices and zero offer counts are rejected here before they can
//! reach the catalog; "no offer" is the absence of both fields, never a zero.

use crate::error::ValidationError;
use crate::money::Money;
use crate::product::BulkOffer;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum length of an item code.
pub const MAX_CODE_LENGTH: usize = 12;

// =============================================================================
// Code Validation
// =============================================================================

/// Validates an item code.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most [`MAX_CODE_LENGTH`] characters
/// - Must contain only alphanumeric characters
///
/// ## Example
/// ```rust
/// use tally_core::validation::validate_code;
///
/// assert!(validate_code("A").is_ok());
/// assert!(validate_code("COKE330").is_ok());
/// assert!(validate_code("").is_err());
/// assert!(validate_code("A B").is_err());
/// ```
pub fn validate_code(code: &str) -> ValidationResult<()> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "code".to_string(),
        });
    }

    if code.len() > MAX_CODE_LENGTH {
        return Err(ValidationError::TooLong {
            field: "code".to_string(),
            max: MAX_CODE_LENGTH,
        });
    }

    if !code.chars().all(|c| c.is_alphanumeric()) {
        return Err(ValidationError::InvalidFormat {
            field: "code".to_string(),
            reason: "must contain only letters and numbers".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Price Validation
// =============================================================================

/// Validates a unit or offer price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price(field: &str, price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Offer Validation
// =============================================================================

/// Validates a pair of optional offer fields and assembles them into a
/// single composite.
///
/// ## Rules
/// - Both fields present, or both absent ("no offer" is the absence of the
///   pair, never a zero)
/// - Offer count must be strictly positive
/// - Offer price must be non-negative
///
/// ## Example
/// ```rust
/// use tally_core::money::Money;
/// use tally_core::validation::validate_offer;
///
/// let offer = validate_offer(Some(3), Some(Money::from_cents(130))).unwrap();
/// assert_eq!(offer.unwrap().count, 3);
///
/// assert!(validate_offer(None, None).unwrap().is_none());
/// assert!(validate_offer(Some(3), None).is_err());
/// assert!(validate_offer(Some(0), Some(Money::from_cents(130))).is_err());
/// ```
pub fn validate_offer(
    count: Option<u32>,
    price: Option<Money>,
) -> ValidationResult<Option<BulkOffer>> {
    match (count, price) {
        (None, None) => Ok(None),
        (Some(count), Some(price)) => {
            if count == 0 {
                return Err(ValidationError::MustBePositive {
                    field: "offer count".to_string(),
                });
            }
            validate_price("offer price", price)?;
            Ok(Some(BulkOffer::new(count, price)))
        }
        _ => Err(ValidationError::IncompleteOffer),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
