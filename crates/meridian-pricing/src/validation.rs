//! # Validation Module
//!
//! Opt-in input validation for the pricing engine.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty, range)                                │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Billing orchestrator (Rust)                                  │
//! │  └── THIS MODULE: called BEFORE the calculators when strict            │
//! │      behavior is wanted                                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: The calculators                                              │
//! │  └── Trust their input: clamp seats, compute coupons through,          │
//! │      fall back to GLOBAL. Never reject.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Skipping this module does not make the engine error; it makes the
//! engine compute the documented fallback result instead.

use rust_decimal::Decimal;

use crate::error::{PricingResult, ValidationError, ValidationResult};
use crate::types::{Plan, PricingInput, Region};
use crate::MAX_SEAT_COUNT;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a seat count.
///
/// ## Rules
/// - Must be non-negative (the calculator would clamp, this rejects)
/// - Must not exceed [`MAX_SEAT_COUNT`]
pub fn validate_seat_count(seat_count: i64) -> ValidationResult<()> {
    if seat_count < 0 || seat_count > MAX_SEAT_COUNT {
        return Err(ValidationError::OutOfRange {
            field: "seat_count".to_string(),
            min: 0,
            max: MAX_SEAT_COUNT,
        });
    }

    Ok(())
}

/// Validates a coupon percentage.
///
/// ## Rules
/// - Must be within [0, 100]; the calculator computes out-of-range values
///   through to a possibly nonsensical total, so reject them here
pub fn validate_coupon_percent(percent: Decimal) -> ValidationResult<()> {
    if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
        return Err(ValidationError::InvalidPercentage {
            field: "coupon_discount".to_string(),
            value: percent.to_string(),
        });
    }

    Ok(())
}

/// Validates a proration window.
///
/// ## Rules
/// - `total_days` must be positive: the proration division is not guarded
///   in the calculator, so a zero there is a caller contract violation
/// - `days_remaining` must lie within `[0, total_days]`
pub fn validate_proration_window(days_remaining: i64, total_days: i64) -> ValidationResult<()> {
    if total_days <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "total_days_in_cycle".to_string(),
        });
    }

    if days_remaining < 0 || days_remaining > total_days {
        return Err(ValidationError::InvalidProrationWindow {
            days_remaining,
            total_days,
        });
    }

    Ok(())
}

// =============================================================================
// Catalog Shape Validators
// =============================================================================

/// Validates a plan record supplied by the external plan catalog.
///
/// ## Rules
/// - Slug must not be empty
/// - All four baseline prices must be non-negative
/// - Included seats must be non-negative
pub fn validate_plan(plan: &Plan) -> ValidationResult<()> {
    if plan.slug.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "plan.slug".to_string(),
        });
    }

    let prices = [
        ("plan.base_price_monthly", plan.base_price_monthly),
        ("plan.base_price_yearly", plan.base_price_yearly),
        ("plan.per_seat_price_monthly", plan.per_seat_price_monthly),
        ("plan.per_seat_price_yearly", plan.per_seat_price_yearly),
    ];
    for (field, price) in prices {
        if price.is_negative() {
            return Err(ValidationError::MustBeNonNegative {
                field: field.to_string(),
            });
        }
    }

    if plan.included_seats < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "plan.included_seats".to_string(),
        });
    }

    Ok(())
}

/// Validates a region record.
///
/// ## Rules
/// - Code must not be empty
/// - The PPP multiplier must be strictly positive (1.0 is the US baseline)
pub fn validate_region(region: &Region) -> ValidationResult<()> {
    if region.code.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "region.code".to_string(),
        });
    }

    if region.price_multiplier <= Decimal::ZERO {
        return Err(ValidationError::MustBePositive {
            field: "region.price_multiplier".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Composite Validator
// =============================================================================

/// Validates a full pricing input before it reaches the calculator.
///
/// ## Example
/// ```rust,no_run
/// use meridian_pricing::pricing::PriceCalculator;
/// use meridian_pricing::validation::validate_input;
/// # fn quote(input: meridian_pricing::types::PricingInput) -> meridian_pricing::error::PricingResult<()> {
/// validate_input(&input)?;
/// let breakdown = PriceCalculator::new().calculate(&input);
/// # Ok(())
/// # }
/// ```
pub fn validate_input(input: &PricingInput) -> PricingResult<()> {
    validate_plan(&input.plan)?;
    validate_region(&input.region)?;
    validate_seat_count(input.seat_count)?;
    validate_coupon_percent(input.coupon_discount)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PricingError;
    use crate::money::Money;
    use crate::region::RegionCatalog;
    use crate::types::BillingCycle;
    use rust_decimal_macros::dec;

    fn plan() -> Plan {
        Plan {
            slug: "growth".to_string(),
            name: "Growth".to_string(),
            base_price_monthly: Money::new(dec!(49)),
            base_price_yearly: Money::new(dec!(39)),
            per_seat_price_monthly: Money::new(dec!(10)),
            per_seat_price_yearly: Money::new(dec!(8)),
            included_seats: 5,
        }
    }

    #[test]
    fn test_validate_seat_count() {
        assert!(validate_seat_count(0).is_ok());
        assert!(validate_seat_count(5).is_ok());
        assert!(validate_seat_count(MAX_SEAT_COUNT).is_ok());

        assert!(validate_seat_count(-1).is_err());
        assert!(validate_seat_count(MAX_SEAT_COUNT + 1).is_err());
    }

    #[test]
    fn test_validate_coupon_percent() {
        assert!(validate_coupon_percent(dec!(0)).is_ok());
        assert!(validate_coupon_percent(dec!(12.5)).is_ok());
        assert!(validate_coupon_percent(dec!(100)).is_ok());

        assert!(validate_coupon_percent(dec!(-0.01)).is_err());
        assert!(validate_coupon_percent(dec!(100.01)).is_err());
    }

    #[test]
    fn test_validate_proration_window() {
        assert!(validate_proration_window(15, 30).is_ok());
        assert!(validate_proration_window(0, 30).is_ok());
        assert!(validate_proration_window(30, 30).is_ok());

        assert!(validate_proration_window(15, 0).is_err());
        assert!(validate_proration_window(15, -30).is_err());
        assert!(validate_proration_window(-1, 30).is_err());
        assert!(validate_proration_window(31, 30).is_err());
    }

    #[test]
    fn test_validate_plan() {
        assert!(validate_plan(&plan()).is_ok());

        let mut no_slug = plan();
        no_slug.slug = "  ".to_string();
        assert!(validate_plan(&no_slug).is_err());

        let mut negative_price = plan();
        negative_price.per_seat_price_yearly = Money::new(dec!(-1));
        assert!(validate_plan(&negative_price).is_err());

        let mut negative_seats = plan();
        negative_seats.included_seats = -5;
        assert!(validate_plan(&negative_seats).is_err());

        // Free plans are valid.
        let mut free = plan();
        free.base_price_monthly = Money::zero();
        assert!(validate_plan(&free).is_ok());
    }

    #[test]
    fn test_validate_region() {
        let catalog = RegionCatalog::new();
        for region in catalog.all() {
            assert!(validate_region(region).is_ok());
        }

        let mut bad = catalog.get("US").clone();
        bad.price_multiplier = dec!(0);
        assert!(validate_region(&bad).is_err());
    }

    #[test]
    fn test_validate_input_composes() {
        let catalog = RegionCatalog::new();
        let good = PricingInput::new(
            plan(),
            catalog.get("US").clone(),
            BillingCycle::Monthly,
            8,
        );
        assert!(validate_input(&good).is_ok());

        let bad = PricingInput::new(
            plan(),
            catalog.get("US").clone(),
            BillingCycle::Monthly,
            8,
        )
        .with_coupon(dec!(150));
        let err = validate_input(&bad).unwrap_err();
        assert!(matches!(err, PricingError::Validation(_)));
    }
}
