//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In floating point:                                                 │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  A register that multiplies `price * (1 + rate)` in floats can     │
//! │  emit a receipt total with fractional currency units.              │
//! │                                                                     │
//! │  OUR SOLUTION: integer smallest-currency-units plus an explicit    │
//! │  rounding law (round half-up to the unit, applied per line).       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kiosk_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(150);
//!
//! // Arithmetic operations
//! let total = price + Money::from_cents(300); // 450
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: leaves room for refunds and corrections
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from the smallest currency unit.
    ///
    /// ## Example
    /// ```rust
    /// use kiosk_core::money::Money;
    ///
    /// let price = Money::from_cents(150);
    /// assert_eq!(price.cents(), 150);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in the smallest currency unit.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates the tax owed on this amount.
    ///
    /// ## Rounding Law
    /// Round half-up to the smallest currency unit, applied per amount.
    /// This is the single place the rule lives; every line total and every
    /// receipt total flows through it, which makes totals reproducible for
    /// identical inputs.
    ///
    /// ## Implementation
    /// Integer math only: `(amount * bps + 5000) / 10000`, carried in i128
    /// so large amounts cannot overflow the intermediate product.
    ///
    /// ## Example
    /// ```rust
    /// use kiosk_core::money::Money;
    /// use kiosk_core::types::TaxRate;
    ///
    /// let price = Money::from_cents(150);
    /// let rate = TaxRate::from_bps(1000); // 10%
    /// assert_eq!(price.tax_at(rate).cents(), 15);
    /// ```
    pub fn tax_at(&self, rate: TaxRate) -> Money {
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(tax_cents as i64)
    }

    /// Returns this amount with tax added (the tax-inclusive value).
    ///
    /// ## Example
    /// ```rust
    /// use kiosk_core::money::Money;
    /// use kiosk_core::types::TaxRate;
    ///
    /// let price = Money::from_cents(300);
    /// assert_eq!(price.with_tax(TaxRate::from_bps(1000)).cents(), 330);
    /// ```
    #[inline]
    pub fn with_tax(&self, rate: TaxRate) -> Money {
        *self + self.tax_at(rate)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows the raw unit count.
///
/// Formatting with currency symbols and separators is a presentation
/// concern; receipts are rendered by the caller.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Summation over an iterator of Money values (used by totals).
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
