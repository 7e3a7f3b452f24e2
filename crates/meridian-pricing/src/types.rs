//! # Domain Types
//!
//! Core domain types for the Meridian pricing engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Region      │   │      Plan       │   │  PricingInput   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  code (unique)  │   │  slug (unique)  │   │  plan           │       │
//! │  │  currency       │   │  base prices    │   │  region         │       │
//! │  │  symbol         │   │  per-seat       │   │  billing_cycle  │       │
//! │  │  multiplier     │   │  included_seats │   │  seat_count     │       │
//! │  └─────────────────┘   └─────────────────┘   │  coupon         │       │
//! │                                              └─────────────────┘       │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │  BillingCycle   │   │   CycleTerms    │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  Monthly        │   │  cycle          │                             │
//! │  │  Yearly         │   │  discount %     │                             │
//! │  │  ThreeYear      │   │  months         │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All plan prices are USD baseline amounts before regional adjustment.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Region
// =============================================================================

/// A pricing region with its currency metadata and PPP multiplier.
///
/// ## Invariant
/// `price_multiplier` is strictly positive; `1.0` is the baseline (US)
/// market. Regions are static catalog data, created once at process start
/// and never mutated (see [`crate::region::RegionCatalog`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Region {
    /// Short region code, e.g. `US`, `IN`, `GLOBAL`. Unique within the catalog.
    pub code: String,

    /// Display name shown in region pickers.
    pub name: String,

    /// ISO 4217-like currency code, e.g. `USD`, `INR`.
    pub currency: String,

    /// Display symbol, e.g. `$`, `₹`.
    pub currency_symbol: String,

    /// Purchasing-power-parity multiplier applied to USD baseline prices.
    #[ts(as = "String")]
    pub price_multiplier: Decimal,
}

// =============================================================================
// Plan
// =============================================================================

/// A subscription plan as supplied by the external plan catalog.
///
/// The engine only consumes this shape; plan persistence and management
/// belong to the billing orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Plan {
    /// Unique plan identifier, e.g. `starter`, `growth`.
    pub slug: String,

    /// Display name shown on invoices and pricing pages.
    pub name: String,

    /// USD baseline base price per month on the monthly rate set.
    #[ts(as = "String")]
    pub base_price_monthly: Money,

    /// USD baseline base price per month on the yearly rate set.
    #[ts(as = "String")]
    pub base_price_yearly: Money,

    /// USD baseline per-seat price per month on the monthly rate set.
    #[ts(as = "String")]
    pub per_seat_price_monthly: Money,

    /// USD baseline per-seat price per month on the yearly rate set.
    #[ts(as = "String")]
    pub per_seat_price_yearly: Money,

    /// Seats bundled into the base price before per-seat charges apply.
    pub included_seats: i64,
}

impl Plan {
    /// Returns the base price for the given cycle's rate set.
    ///
    /// The `3_year` cycle reuses the *yearly* rate set: there is no distinct
    /// 3-year price point in the plan shape, only a deeper cycle discount.
    #[inline]
    pub fn base_price(&self, cycle: BillingCycle) -> Money {
        if cycle.uses_yearly_rates() {
            self.base_price_yearly
        } else {
            self.base_price_monthly
        }
    }

    /// Returns the per-seat price for the given cycle's rate set.
    #[inline]
    pub fn per_seat_price(&self, cycle: BillingCycle) -> Money {
        if cycle.uses_yearly_rates() {
            self.per_seat_price_yearly
        } else {
            self.per_seat_price_monthly
        }
    }
}

// =============================================================================
// Billing Cycle
// =============================================================================

/// The billing period selected by the subscriber.
///
/// A closed enumeration: there is no "unknown cycle" value to fall back
/// from, so every cycle resolves to exactly one row of [`CYCLE_TERMS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BillingCycle {
    /// Billed every month at the monthly rate set.
    Monthly,
    /// Billed every 12 months at the yearly rate set.
    Yearly,
    /// Billed every 36 months at the yearly rate set.
    #[serde(rename = "3_year")]
    ThreeYear,
}

/// One row of the billing-cycle terms table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleTerms {
    /// The cycle this row describes.
    pub cycle: BillingCycle,
    /// Whole-number discount percentage applied to the running subtotal.
    pub discount_percent: u32,
    /// Billing-period length in months.
    pub months: u32,
}

/// Terms per cycle. Adding a cycle is a data change here (plus its enum
/// variant), not a change to the calculator.
pub const CYCLE_TERMS: [CycleTerms; 3] = [
    CycleTerms {
        cycle: BillingCycle::Monthly,
        discount_percent: 0,
        months: 1,
    },
    CycleTerms {
        cycle: BillingCycle::Yearly,
        discount_percent: 11,
        months: 12,
    },
    CycleTerms {
        cycle: BillingCycle::ThreeYear,
        discount_percent: 18,
        months: 36,
    },
];

impl BillingCycle {
    /// Returns this cycle's row from the terms table.
    pub fn terms(&self) -> &'static CycleTerms {
        // Every variant has a row; the fallback keeps the lookup total
        // without an unwrap.
        CYCLE_TERMS
            .iter()
            .find(|t| t.cycle == *self)
            .unwrap_or(&CYCLE_TERMS[0])
    }

    /// Billing-period length in months (`1`, `12`, or `36`).
    #[inline]
    pub fn months(&self) -> u32 {
        self.terms().months
    }

    /// Cycle discount as a percentage.
    #[inline]
    pub fn discount_percent(&self) -> Decimal {
        Decimal::from(self.terms().discount_percent)
    }

    /// Whether this cycle prices against the yearly rate set.
    ///
    /// `ThreeYear` deliberately reuses yearly rates; see the plan shape.
    #[inline]
    pub fn uses_yearly_rates(&self) -> bool {
        matches!(self, BillingCycle::Yearly | BillingCycle::ThreeYear)
    }
}

// =============================================================================
// Pricing Input
// =============================================================================

/// Everything the price calculator needs for one quote.
///
/// ## Input Trust
/// The calculator trusts this input: negative seat counts are clamped, and
/// out-of-range coupon percentages are computed through rather than
/// rejected. Orchestrators that want strict behavior call
/// [`crate::validation::validate_input`] first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingInput {
    /// The plan being priced.
    pub plan: Plan,

    /// The subscriber's resolved region (see `RegionCatalog::get`).
    pub region: Region,

    /// The selected billing period.
    pub billing_cycle: BillingCycle,

    /// Total seats the subscriber wants, including the bundled ones.
    pub seat_count: i64,

    /// Coupon percentage in [0, 100]. Zero means no coupon.
    pub coupon_discount: Decimal,
}

impl PricingInput {
    /// Creates an input with no coupon applied.
    pub fn new(plan: Plan, region: Region, billing_cycle: BillingCycle, seat_count: i64) -> Self {
        PricingInput {
            plan,
            region,
            billing_cycle,
            seat_count,
            coupon_discount: Decimal::ZERO,
        }
    }

    /// Sets a coupon percentage.
    pub fn with_coupon(mut self, percent: Decimal) -> Self {
        self.coupon_discount = percent;
        self
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
