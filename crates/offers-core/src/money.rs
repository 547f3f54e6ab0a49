//! # Money Module
//!
//! Provides the `CartValue` type for cart totals and discount arithmetic.
//!
//! ## Why Integer Cart Values?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: signed integer totals, truncating percent math           │
//! │    33% of 199 = 6567 / 100 = 65.67 → 65                                │
//! │    The fraction is dropped deterministically, never rounded by a float  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Sign Convention
//! Cart values are signed end to end. A discount larger than the cart total
//! produces a negative result on purpose: the engine is pass-through
//! arithmetic, and whether a negative total is payable is the caller's
//! decision, not ours.
//!
//! ## Usage
//! ```rust
//! use offers_core::money::CartValue;
//!
//! let cart = CartValue::new(200);
//!
//! // Flat discount
//! assert_eq!(cart.less_flat_amount(10).amount(), 190);
//!
//! // Percentage discount (truncating, applied to the original value)
//! assert_eq!(cart.less_percent(10).amount(), 180);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

// =============================================================================
// CartValue Type
// =============================================================================

/// A shopping-cart total in the platform's smallest currency unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: discounts may legitimately drive a total negative
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CartValue(i64);

impl CartValue {
    /// Creates a cart value from a raw integer amount.
    ///
    /// ## Example
    /// ```rust
    /// use offers_core::money::CartValue;
    ///
    /// let cart = CartValue::new(200);
    /// assert_eq!(cart.amount(), 200);
    /// ```
    #[inline]
    pub const fn new(amount: i64) -> Self {
        CartValue(amount)
    }

    /// Returns the raw integer amount.
    #[inline]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Returns a zero cart value.
    #[inline]
    pub const fn zero() -> Self {
        CartValue(0)
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

    /// Subtracts a flat discount amount.
    ///
    /// No floor at zero: a discount exceeding the cart total yields a
    /// negative result.
    ///
    /// ## Example
    /// ```rust
    /// use offers_core::money::CartValue;
    ///
    /// assert_eq!(CartValue::new(200).less_flat_amount(10).amount(), 190);
    /// assert_eq!(CartValue::new(1).less_flat_amount(10).amount(), -9);
    /// ```
    #[inline]
    pub const fn less_flat_amount(&self, value: i64) -> Self {
        CartValue(self.0 - value)
    }

    /// Subtracts a percentage of the **original** cart value.
    ///
    /// ## Arithmetic
    /// `result = cart - (cart * percent) / 100`, where the division is
    /// integer division truncating toward zero. The percentage is applied to
    /// the original value once, never iteratively.
    ///
    /// ## Implementation
    /// The intermediate product is widened to i128 so that a near-`i64::MAX`
    /// cart multiplied by a percentage cannot overflow.
    ///
    /// ## Example
    /// ```rust
    /// use offers_core::money::CartValue;
    ///
    /// assert_eq!(CartValue::new(200).less_percent(10).amount(), 180);
    /// // 33% of 199 = 65.67, truncated to 65
    /// assert_eq!(CartValue::new(199).less_percent(33).amount(), 134);
    /// ```
    pub const fn less_percent(&self, percent: i64) -> Self {
        let discount = (self.0 as i128 * percent as i128) / 100;
        CartValue(self.0 - discount as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the raw amount; currency formatting belongs to the shell.
impl fmt::Display for CartValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Default cart value is zero.
impl Default for CartValue {
    fn default() -> Self {
        CartValue::zero()
    }
}

impl From<i64> for CartValue {
    fn from(amount: i64) -> Self {
        CartValue(amount)
    }
}

/// Addition of two cart values.
impl Add for CartValue {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        CartValue(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for CartValue {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two cart values.
impl Sub for CartValue {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        CartValue(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for CartValue {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_amount() {
        let cart = CartValue::new(200);
        assert_eq!(cart.amount(), 200);
        assert!(!cart.is_zero());
        assert!(!cart.is_negative());
    }

    #[test]
    fn test_flat_amount_discount() {
        assert_eq!(CartValue::new(200).less_flat_amount(10).amount(), 190);
        assert_eq!(CartValue::new(200).less_flat_amount(0).amount(), 200);
    }

    #[test]
    fn test_flat_amount_goes_negative() {
        // No floor at zero
        assert_eq!(CartValue::new(1).less_flat_amount(10).amount(), -9);
        assert_eq!(CartValue::new(0).less_flat_amount(10).amount(), -10);
        assert_eq!(CartValue::new(1).less_flat_amount(1).amount(), 0);
    }

    #[test]
    fn test_percent_discount() {
        assert_eq!(CartValue::new(200).less_percent(10).amount(), 180);
        assert_eq!(CartValue::new(1_000_000).less_percent(10).amount(), 900_000);
    }

    #[test]
    fn test_percent_discount_truncates_toward_zero() {
        // 33% of 199 = 65.67 → 65
        assert_eq!(CartValue::new(199).less_percent(33).amount(), 134);
        // 10% of 5 = 0.5 → 0
        assert_eq!(CartValue::new(5).less_percent(10).amount(), 5);
    }

    #[test]
    fn test_percent_above_100_goes_negative() {
        assert_eq!(CartValue::new(200).less_percent(150).amount(), -100);
    }

    #[test]
    fn test_negative_percent_increases_total() {
        // Pass-through arithmetic: a negative percentage is a surcharge
        assert_eq!(CartValue::new(200).less_percent(-10).amount(), 220);
    }

    #[test]
    fn test_percent_on_huge_cart_does_not_overflow() {
        let huge = CartValue::new(i32::MAX as i64);
        assert!(huge.less_percent(10).amount() > 0);

        // The i128 widening keeps even i64-scale carts safe
        let max = CartValue::new(i64::MAX);
        assert_eq!(
            max.less_percent(100).amount(),
            0,
            "100% discount clears the cart exactly"
        );
    }

    #[test]
    fn test_arithmetic_ops() {
        let a = CartValue::new(150);
        let b = CartValue::new(50);
        assert_eq!((a + b).amount(), 200);
        assert_eq!((a - b).amount(), 100);

        let mut c = CartValue::new(10);
        c += CartValue::new(5);
        c -= CartValue::new(3);
        assert_eq!(c.amount(), 12);
    }

    #[test]
    fn test_display_and_default() {
        assert_eq!(format!("{}", CartValue::new(-9)), "-9");
        assert_eq!(CartValue::default(), CartValue::zero());
    }
}
