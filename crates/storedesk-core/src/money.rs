//! # Money Module
//!
//! Provides the `Money` type used for order totals and product prices.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Most prices have no exact float form:                                  │
//! │    29.99  is stored as  29.989999999999998436805981327779591083527  ❌   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units (cents, paisa)                       │
//! │    2999  is exact, and prints as "29.99"  ✅                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Display
//! `Display` renders the shortest decimal form, the way the browser prints a
//! number: `2000` → `20`, `1850` → `18.5`, `2999` → `29.99`. Exported CSV
//! cells and list rows both go through it.
//!
//! ```rust
//! use storedesk_core::money::Money;
//!
//! let total = Money::from_cents(1850);
//! assert_eq!(total.to_string(), "18.5");
//! assert_eq!(total.with_currency("NPR"), "NPR 18.5");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit.
///
/// Serialized as the raw integer so the browser never sees a float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// ```rust
    /// use storedesk_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Formats the amount behind a currency code, as the product table does.
    pub fn with_currency(&self, currency: &str) -> String {
        format!("{} {}", currency, self)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let whole = abs / 100;
        let fraction = abs % 100;

        if fraction == 0 {
            write!(f, "{}{}", sign, whole)
        } else if fraction % 10 == 0 {
            write!(f, "{}{}.{}", sign, whole, fraction / 10)
        } else {
            write!(f, "{}{}.{:02}", sign, whole, fraction)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_browser_numbers() {
        assert_eq!(Money::from_cents(2000).to_string(), "20");
        assert_eq!(Money::from_cents(1850).to_string(), "18.5");
        assert_eq!(Money::from_cents(2999).to_string(), "29.99");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.5");
        assert_eq!(Money::from_cents(0).to_string(), "0");
    }

    #[test]
    fn test_with_currency() {
        assert_eq!(Money::from_cents(120000).with_currency("NPR"), "NPR 1200");
    }
}
