//! # Price Calculator
//!
//! Produces a full [`PricingBreakdown`] for one plan + region + cycle +
//! seat-count combination.
//!
//! ## Calculation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Price Calculation Pipeline                            │
//! │                                                                         │
//! │  1. Tier selection      yearly rate set for yearly/3_year, else monthly│
//! │  2. Regional adjust     round2(base × multiplier), round2(seat × mult) │
//! │  3. Seat split          additional = max(0, seats - included)          │
//! │  4. Subtotal            base_total + additional_seats_total            │
//! │  5. Cycle discount      0% / 11% / 18% of the running subtotal         │
//! │  6. Volume discount     tier by TOTAL seats, amount on SEAT total only │
//! │  7. Coupon discount     coupon% of the running total                   │
//! │  8. Monthly total       round2(running)                                │
//! │  9. Billed total        round2(monthly × cycle months)                 │
//! │                                                                         │
//! │  Order matters: discounts compound sequentially, not independently.    │
//! │  Steps 5-7 subtract UNROUNDED amounts; rounding happens only at        │
//! │  steps 2, 8 and 9.                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every intermediate figure lands in the breakdown so an invoice can be
//! reconstructed without re-deriving any number.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::format::format_price;
use crate::money::Money;
use crate::types::{BillingCycle, PricingInput};

// =============================================================================
// Volume Discount Tiers
// =============================================================================

/// One row of the volume discount table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatTier {
    /// Smallest total seat count that lands in this tier.
    pub min_seats: i64,
    /// Whole-number discount percentage for the tier.
    pub discount_percent: u32,
}

/// Volume tiers, highest first so the first match wins.
///
/// The tier is selected by the TOTAL seat count, but the discount amount is
/// taken against the additional-seats total only (seats beyond the
/// included allotment).
pub const SEAT_TIERS: [SeatTier; 3] = [
    SeatTier {
        min_seats: 51,
        discount_percent: 15,
    },
    SeatTier {
        min_seats: 26,
        discount_percent: 10,
    },
    SeatTier {
        min_seats: 11,
        discount_percent: 5,
    },
];

/// Volume discount percentage for a total seat count. Seat counts of ten or
/// fewer (including zero and negative inputs) get no discount.
pub fn volume_discount_percent(seat_count: i64) -> Decimal {
    SEAT_TIERS
        .iter()
        .find(|tier| seat_count >= tier.min_seats)
        .map(|tier| Decimal::from(tier.discount_percent))
        .unwrap_or(Decimal::ZERO)
}

// =============================================================================
// Pricing Breakdown
// =============================================================================

/// The full, immutable result of one price calculation.
///
/// ## Auditability
/// Never mutated after construction. Every number a caller might display on
/// an invoice appears here; nothing needs to be recomputed. Discount
/// *amounts* are kept unrounded; only the regional unit prices,
/// `total_per_month` and `total` are rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PricingBreakdown {
    /// Slug of the plan that was priced.
    pub plan_slug: String,

    /// The billing cycle the quote is for.
    pub billing_cycle: BillingCycle,

    /// Billing-period length in months (1, 12, or 36).
    pub cycle_months: u32,

    /// Region the price was adjusted for.
    pub region_code: String,

    /// Currency of every amount below.
    pub currency: String,

    /// Display symbol for the currency.
    pub currency_symbol: String,

    /// Regionally adjusted base price per month, rounded to cents.
    #[ts(as = "String")]
    pub base_price: Money,

    /// Regionally adjusted per-seat price per month, rounded to cents.
    #[ts(as = "String")]
    pub per_seat_price: Money,

    /// Seat count as supplied by the caller (may be negative; see seat split).
    pub seat_count: i64,

    /// Seats bundled into the base price.
    pub included_seats: i64,

    /// Seats charged beyond the included allotment, clamped at zero.
    pub additional_seats: i64,

    /// Base component of the subtotal (equals `base_price`).
    #[ts(as = "String")]
    pub base_price_total: Money,

    /// `additional_seats × per_seat_price`.
    #[ts(as = "String")]
    pub additional_seats_total: Money,

    /// Pre-discount subtotal, preserved verbatim for audit.
    #[ts(as = "String")]
    pub subtotal: Money,

    /// Billing-cycle discount percentage (0, 11, or 18).
    #[ts(as = "String")]
    pub billing_discount_percent: Decimal,

    /// Cycle discount amount, unrounded.
    #[ts(as = "String")]
    pub billing_discount_amount: Money,

    /// Volume discount percentage for the seat tier.
    #[ts(as = "String")]
    pub volume_discount_percent: Decimal,

    /// Volume discount amount (taken against the seat total), unrounded.
    #[ts(as = "String")]
    pub volume_discount_amount: Money,

    /// Coupon percentage as supplied by the caller.
    #[ts(as = "String")]
    pub coupon_discount_percent: Decimal,

    /// Coupon discount amount, unrounded.
    #[ts(as = "String")]
    pub coupon_discount_amount: Money,

    /// Monthly-equivalent total after all discounts, rounded to cents.
    /// Display figure only; the charged amount is `total`.
    #[ts(as = "String")]
    pub total_per_month: Money,

    /// Amount charged per billing event: `round2(total_per_month × months)`.
    #[ts(as = "String")]
    pub total: Money,
}

impl PricingBreakdown {
    /// The billed total as a display string in the breakdown's currency.
    pub fn formatted_total(&self) -> String {
        format_price(self.total, &self.currency, &self.currency_symbol)
    }

    /// The monthly-equivalent total as a display string.
    pub fn formatted_total_per_month(&self) -> String {
        format_price(self.total_per_month, &self.currency, &self.currency_symbol)
    }
}

// =============================================================================
// Price Calculator
// =============================================================================

/// Stateless price calculator.
///
/// Construct one explicitly wherever it is needed; the engine keeps no
/// global instance. All calls are pure and safe to run concurrently.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceCalculator;

impl PriceCalculator {
    /// Creates a calculator.
    pub fn new() -> Self {
        PriceCalculator
    }

    /// Runs the nine-step pipeline and returns the full breakdown.
    ///
    /// ## Input Trust
    /// Malformed numeric input is computed through, never rejected:
    /// - negative `seat_count`: additional seats clamp to zero, the base
    ///   price is still charged
    /// - `coupon_discount` outside [0, 100]: values above 100 drive the
    ///   total negative, negative values increase the price
    ///
    /// Callers wanting strict behavior validate first
    /// ([`crate::validation::validate_input`]).
    pub fn calculate(&self, input: &PricingInput) -> PricingBreakdown {
        debug!(
            plan = %input.plan.slug,
            region = %input.region.code,
            cycle = ?input.billing_cycle,
            seats = input.seat_count,
            "calculating price breakdown"
        );

        let cycle = input.billing_cycle;
        let multiplier = input.region.price_multiplier;

        // Steps 1-2: tier selection, then regional adjustment rounded to cents.
        let base_price = input
            .plan
            .base_price(cycle)
            .scale_by(multiplier)
            .round_to_cents();
        let per_seat_price = input
            .plan
            .per_seat_price(cycle)
            .scale_by(multiplier)
            .round_to_cents();

        // Step 3: seat split. Negative seat counts clamp here.
        let additional_seats = (input.seat_count - input.plan.included_seats).max(0);

        // Step 4: subtotal, preserved verbatim in the output.
        let base_price_total = base_price;
        let additional_seats_total = per_seat_price.multiply_quantity(additional_seats);
        let subtotal = base_price_total + additional_seats_total;

        // Step 5: billing-cycle discount on the running subtotal.
        let billing_discount_percent = cycle.discount_percent();
        let billing_discount_amount = subtotal.percentage_of(billing_discount_percent);
        let mut running = subtotal - billing_discount_amount;

        // Step 6: volume discount. Tier keys off the TOTAL seat count, the
        // amount is taken against the additional-seats total only.
        let volume_percent = volume_discount_percent(input.seat_count);
        let volume_discount_amount = additional_seats_total.percentage_of(volume_percent);
        running -= volume_discount_amount;

        // Step 7: coupon on whatever remains.
        let coupon_discount_amount = running.percentage_of(input.coupon_discount);
        running -= coupon_discount_amount;

        // Steps 8-9: the only rounding points after the unit prices.
        let total_per_month = running.round_to_cents();
        let total = total_per_month
            .multiply_quantity(i64::from(cycle.months()))
            .round_to_cents();

        PricingBreakdown {
            plan_slug: input.plan.slug.clone(),
            billing_cycle: cycle,
            cycle_months: cycle.months(),
            region_code: input.region.code.clone(),
            currency: input.region.currency.clone(),
            currency_symbol: input.region.currency_symbol.clone(),
            base_price,
            per_seat_price,
            seat_count: input.seat_count,
            included_seats: input.plan.included_seats,
            additional_seats,
            base_price_total,
            additional_seats_total,
            subtotal,
            billing_discount_percent,
            billing_discount_amount,
            volume_discount_percent: volume_percent,
            volume_discount_amount,
            coupon_discount_percent: input.coupon_discount,
            coupon_discount_amount,
            total_per_month,
            total,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
