//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  In this engine the breakdown must preserve UNROUNDED discount         │
//! │  amounts between steps (a 11% cut of $27.65 is $3.0415), so integer    │
//! │  cents cannot carry the intermediates either.                           │
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal::Decimal                                    │
//! │    Exact base-10 arithmetic; rounding happens only at the points the   │
//! │    pricing algorithm names, never silently.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use meridian_pricing::money::Money;
//! use rust_decimal_macros::dec;
//!
//! let price = Money::from_cents(1099); // $10.99
//! let doubled = price * 2;             // $21.98
//!
//! // 11% of $27.65 is carried exactly until a rounding point:
//! let cut = Money::new(dec!(27.65)).percentage_of(dec!(11));
//! assert_eq!(cut.amount(), dec!(3.0415));
//! assert_eq!(cut.round_to_cents().amount(), dec!(3.04));
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value as an exact decimal amount.
///
/// ## Design Decisions
/// - **Decimal (signed)**: Allows negative values for credits and refunds
/// - **Single field tuple struct**: Zero-cost abstraction over `Decimal`
/// - **Serde transparent**: Serializes as the inner decimal (a string in JSON)
///
/// ## Where Money is Used
/// ```text
/// Plan.base_price_monthly ──► regional adjustment ──► PricingBreakdown.*
///
/// PricingBreakdown.total_per_month ──► ProrationResult.credit / .charge
///
/// EVERY monetary value in the engine flows through this type
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from an exact decimal amount.
    ///
    /// ## Example
    /// ```rust
    /// use meridian_pricing::money::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// let price = Money::new(dec!(49.00));
    /// assert_eq!(price.amount(), dec!(49.00));
    /// ```
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use meridian_pricing::money::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.amount(), dec!(10.99));
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// Returns the exact decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Rounds to the nearest cent using half-up rounding.
    ///
    /// ## Half-Up Rounding
    /// ```text
    /// 17.145 → 17.15      3.0415 → 3.04      -2.505 → -2.51
    /// ```
    /// Midpoints round away from zero, which is the conventional "half-up"
    /// behavior for price displays. The result always carries exactly two
    /// decimal places, so `$49` renders as `49.00`.
    ///
    /// ## Example
    /// ```rust
    /// use meridian_pricing::money::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// let raw = Money::new(dec!(43.6085));
    /// assert_eq!(raw.round_to_cents().amount(), dec!(43.61));
    /// ```
    pub fn round_to_cents(&self) -> Money {
        let mut rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);
        Money(rounded)
    }

    /// Returns the given percentage of this amount, unrounded.
    ///
    /// ## Arguments
    /// * `percent` - Percentage in the range callers usually keep to [0, 100]
    ///
    /// ## Example
    /// ```rust
    /// use meridian_pricing::money::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// let subtotal = Money::new(dec!(49.00));
    /// let discount = subtotal.percentage_of(dec!(11)); // 11%
    /// assert_eq!(discount.amount(), dec!(5.39));
    /// ```
    ///
    /// The result is NOT rounded: discount amounts stay exact in the
    /// breakdown, and rounding happens only at the named rounding points.
    pub fn percentage_of(&self, percent: Decimal) -> Money {
        Money(self.0 * percent / Decimal::ONE_HUNDRED)
    }

    /// Scales this amount by an arbitrary factor, unrounded.
    ///
    /// Used for the regional price multiplier and the proration
    /// remaining-fraction. Callers round the result where the algorithm
    /// says to.
    ///
    /// ## Example
    /// ```rust
    /// use meridian_pricing::money::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// let base = Money::new(dec!(49));
    /// let regional = base.scale_by(dec!(0.35)).round_to_cents();
    /// assert_eq!(regional.amount(), dec!(17.15));
    /// ```
    #[inline]
    pub fn scale_by(&self, factor: Decimal) -> Money {
        Money(self.0 * factor)
    }

    /// Multiplies money by a quantity (seat counts, cycle months).
    ///
    /// ## Example
    /// ```rust
    /// use meridian_pricing::money::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// let per_seat = Money::new(dec!(3.50));
    /// let line_total = per_seat.multiply_quantity(3);
    /// assert_eq!(line_total.amount(), dec!(10.50));
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * Decimal::from(qty))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging. Use [`crate::format::format_price`] for display
/// strings, which handles per-currency symbol placement.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}${}", sign, self.abs().round_to_cents().amount())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
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

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * Decimal::from(qty))
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * Decimal::from(qty))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.amount(), dec!(10.99));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).amount(), dec!(15.00));
        assert_eq!((a - b).amount(), dec!(5.00));
        let result: Money = a * 3;
        assert_eq!(result.amount(), dec!(30.00));
    }

    #[test]
    fn test_round_to_cents_half_up() {
        assert_eq!(Money::new(dec!(17.145)).round_to_cents().amount(), dec!(17.15));
        assert_eq!(Money::new(dec!(3.0415)).round_to_cents().amount(), dec!(3.04));
        assert_eq!(Money::new(dec!(2.005)).round_to_cents().amount(), dec!(2.01));
        assert_eq!(Money::new(dec!(-2.505)).round_to_cents().amount(), dec!(-2.51));
    }

    #[test]
    fn test_round_to_cents_pads_scale() {
        // Whole-dollar amounts still render with two decimal places.
        let rounded = Money::new(dec!(49)).round_to_cents();
        assert_eq!(rounded.amount().to_string(), "49.00");
    }

    #[test]
    fn test_percentage_of_is_unrounded() {
        let subtotal = Money::new(dec!(27.65));
        let discount = subtotal.percentage_of(dec!(11));
        assert_eq!(discount.amount(), dec!(3.0415));
    }

    #[test]
    fn test_scale_by() {
        let base = Money::new(dec!(49));
        assert_eq!(base.scale_by(dec!(0.35)).round_to_cents().amount(), dec!(17.15));
        assert_eq!(base.scale_by(dec!(1.0)).round_to_cents().amount(), dec!(49.00));
    }

    #[test]
    fn test_multiply_quantity() {
        let per_seat = Money::new(dec!(3.50));
        assert_eq!(per_seat.multiply_quantity(3).amount(), dec!(10.50));
        assert_eq!(per_seat.multiply_quantity(0).amount(), dec!(0.00));
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_cents(100);
        assert!(positive.is_positive());

        let negative = Money::from_cents(-100);
        assert!(negative.is_negative());
        assert_eq!(negative.abs().amount(), dec!(1.00));
    }
}
