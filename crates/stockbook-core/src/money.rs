//! # Money Module
//!
//! Provides the `Money` type for shop prices.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  The price field arrives from a form as a float:                        │
//! │    "12.10" → 12.099999999999999644...                                   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units (kobo, cents)                        │
//! │    12.10 → 1210 minor units, rounded once at the boundary              │
//! │                                                                         │
//! │  The saved blob still carries a plain decimal number (`"price": 12.1`) │
//! │  so records written by the web frontend load unchanged.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockbook_core::money::Money;
//!
//! let price = Money::from_major(45000.0).unwrap();
//! assert_eq!(price.cents(), 4_500_000);
//! assert_eq!(price.to_string(), "45000.00");
//!
//! // Negative, NaN and infinite prices never become Money
//! assert!(Money::from_major(-5.0).is_none());
//! assert!(Money::from_major(f64::NAN).is_none());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest major-unit amount that still fits in i64 minor units.
const MAX_MAJOR: f64 = (i64::MAX / 100) as f64;

// =============================================================================
// Money Type
// =============================================================================

/// A non-negative price in the smallest currency unit.
///
/// ## Design Decisions
/// - **i64 minor units**: exact comparison and display, no float drift
/// - **Serialized as a decimal number**: matches the saved record layout
/// - **Never negative**: every constructor that accepts outside input
///   rejects negative values, so `price >= 0` holds for every product
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "f64", try_from = "f64")]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// Negative input is clamped to zero.
    ///
    /// ```rust
    /// use stockbook_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).cents(), 1099);
    /// assert_eq!(Money::from_cents(-1).cents(), 0);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        if cents < 0 {
            Money(0)
        } else {
            Money(cents)
        }
    }

    /// Creates a Money value from a major-unit amount (naira, dollars).
    ///
    /// Rounds to the nearest minor unit. Returns `None` for NaN, infinities,
    /// negative amounts and amounts too large to represent.
    pub fn from_major(amount: f64) -> Option<Self> {
        if !amount.is_finite() || amount < 0.0 || amount > MAX_MAJOR {
            return None;
        }

        Some(Money((amount * 100.0).round() as i64))
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the value as a major-unit decimal.
    #[inline]
    pub fn major(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is greater than zero.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Two decimal places, no currency symbol.
///
/// The symbol is a display setting and is added by the store configuration.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl From<Money> for f64 {
    fn from(money: Money) -> Self {
        money.major()
    }
}

impl TryFrom<f64> for Money {
    type Error = String;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Money::from_major(amount).ok_or_else(|| format!("invalid price: {amount}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_major_rounds_to_minor_units() {
        assert_eq!(Money::from_major(12.1).map(|m| m.cents()), Some(1210));
        assert_eq!(Money::from_major(0.005).map(|m| m.cents()), Some(1));
        assert_eq!(Money::from_major(0.0).map(|m| m.cents()), Some(0));
    }

    #[test]
    fn test_from_major_rejects_bad_amounts() {
        assert!(Money::from_major(-0.01).is_none());
        assert!(Money::from_major(f64::NAN).is_none());
        assert!(Money::from_major(f64::INFINITY).is_none());
        assert!(Money::from_major(1e30).is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(4_500_000).to_string(), "45000.00");
        assert_eq!(Money::from_cents(1205).to_string(), "12.05");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_serializes_as_decimal_number() {
        let json = serde_json::to_string(&Money::from_cents(1250)).unwrap();
        assert_eq!(json, "12.5");

        let money: Money = serde_json::from_str("45000").unwrap();
        assert_eq!(money.cents(), 4_500_000);

        assert!(serde_json::from_str::<Money>("-3").is_err());
    }

    #[test]
    fn test_zero_and_checks() {
        assert!(Money::zero().is_zero());
        assert!(!Money::zero().is_positive());
        assert!(Money::from_cents(1).is_positive());
    }
}
