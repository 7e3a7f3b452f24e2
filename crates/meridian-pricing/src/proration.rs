//! # Proration Calculator
//!
//! Computes the net charge or credit for a mid-cycle plan or seat change.
//!
//! ## How It Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Mid-Cycle Change                                     │
//! │                                                                         │
//! │  old (plan, seats) ──► PriceCalculator ──► old total_per_month         │
//! │  new (plan, seats) ──► PriceCalculator ──► new total_per_month         │
//! │                                                                         │
//! │  fraction = days_remaining / total_days                                 │
//! │  credit  = round2(old × fraction)   ← rounded independently,           │
//! │  charge  = round2(new × fraction)   ← before the subtraction           │
//! │  net     = charge - credit                                              │
//! │                                                                         │
//! │  net > 0  → additional charge owed (upgrade)                            │
//! │  net < 0  → credit owed to the subscriber (downgrade)                   │
//! │  net = 0  → lateral change                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `credit` and `charge` are rounded to cents before the subtraction, so
//! swapping the old and new sides negates the net within ±0.01.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::money::Money;
use crate::pricing::PriceCalculator;
use crate::types::{BillingCycle, Plan, PricingInput, Region};

// =============================================================================
// Change Kind
// =============================================================================

/// Direction of a mid-cycle change, derived purely from the sign of the
/// net amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// Net amount positive: the subscriber owes an additional charge.
    Upgrade,
    /// Net amount negative: the subscriber is owed a credit.
    Downgrade,
    /// Net amount zero.
    Lateral,
}

impl ChangeKind {
    fn from_net(net: Money) -> Self {
        if net.is_positive() {
            ChangeKind::Upgrade
        } else if net.is_negative() {
            ChangeKind::Downgrade
        } else {
            ChangeKind::Lateral
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ChangeKind::Upgrade => "Upgrade",
            ChangeKind::Downgrade => "Downgrade",
            ChangeKind::Lateral => "Lateral change",
        }
    }
}

// =============================================================================
// Proration Result
// =============================================================================

/// Result of a proration calculation.
///
/// Sign convention: `net_amount = charge - credit`; positive means an
/// additional charge is owed, negative means a credit is owed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProrationResult {
    /// Credit for unused time on the old plan, rounded to cents.
    #[ts(as = "String")]
    pub credit: Money,

    /// Charge for remaining time on the new plan, rounded to cents.
    #[ts(as = "String")]
    pub charge: Money,

    /// `charge - credit`.
    #[ts(as = "String")]
    pub net_amount: Money,

    /// Direction of the change, from the sign of `net_amount` alone.
    pub change: ChangeKind,

    /// Human-readable summary for invoices and confirmation dialogs.
    pub description: String,

    /// Days remaining in the cycle, echoed from the input.
    pub days_remaining: i64,

    /// Total days in the cycle, echoed from the input.
    pub total_days: i64,

    /// Currency of the amounts.
    pub currency: String,

    /// Display symbol for the currency.
    pub currency_symbol: String,
}

impl ProrationResult {
    /// True when the subscriber owes an additional charge.
    pub fn is_charge(&self) -> bool {
        self.net_amount.is_positive()
    }

    /// True when the subscriber is owed a credit.
    pub fn is_refund(&self) -> bool {
        self.net_amount.is_negative()
    }

    /// True when the amounts balance out exactly.
    pub fn is_neutral(&self) -> bool {
        self.net_amount.is_zero()
    }
}

// =============================================================================
// Proration Calculator
// =============================================================================

/// Computes mid-cycle adjustments by pricing both sides of the change.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProrationCalculator {
    pricing: PriceCalculator,
}

impl ProrationCalculator {
    /// Creates a calculator.
    pub fn new() -> Self {
        ProrationCalculator {
            pricing: PriceCalculator::new(),
        }
    }

    /// Computes the net charge or credit for a mid-cycle change.
    ///
    /// ## Caller Contract
    /// `total_days` must be greater than zero; the division is not guarded
    /// here, and a zero panics. `days_remaining` is expected to be in
    /// `[0, total_days]`. Use
    /// [`crate::validation::validate_proration_window`] to enforce both
    /// up front.
    #[allow(clippy::too_many_arguments)]
    pub fn calculate(
        &self,
        old_plan: &Plan,
        new_plan: &Plan,
        region: &Region,
        billing_cycle: BillingCycle,
        old_seats: i64,
        new_seats: i64,
        days_remaining: i64,
        total_days: i64,
    ) -> ProrationResult {
        debug!(
            old_plan = %old_plan.slug,
            new_plan = %new_plan.slug,
            region = %region.code,
            old_seats,
            new_seats,
            days_remaining,
            total_days,
            "calculating proration"
        );

        let old_breakdown = self.pricing.calculate(&PricingInput::new(
            old_plan.clone(),
            region.clone(),
            billing_cycle,
            old_seats,
        ));
        let new_breakdown = self.pricing.calculate(&PricingInput::new(
            new_plan.clone(),
            region.clone(),
            billing_cycle,
            new_seats,
        ));

        let remaining_fraction = rust_decimal::Decimal::from(days_remaining)
            / rust_decimal::Decimal::from(total_days);

        // Rounded independently before the subtraction: each side is a real
        // ledger entry of its own.
        let credit = old_breakdown
            .total_per_month
            .scale_by(remaining_fraction)
            .round_to_cents();
        let charge = new_breakdown
            .total_per_month
            .scale_by(remaining_fraction)
            .round_to_cents();
        let net_amount = charge - credit;

        let change = ChangeKind::from_net(net_amount);
        let description = format!(
            "{} from {} ({} seats) to {} ({} seats) for the remaining {} of {} days",
            change.label(),
            old_plan.name,
            old_seats,
            new_plan.name,
            new_seats,
            days_remaining,
            total_days,
        );

        ProrationResult {
            credit,
            charge,
            net_amount,
            change,
            description,
            days_remaining,
            total_days,
            currency: region.currency.clone(),
            currency_symbol: region.currency_symbol.clone(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::RegionCatalog;
    use rust_decimal_macros::dec;

    fn plan(slug: &str, name: &str, base: rust_decimal::Decimal) -> Plan {
        Plan {
            slug: slug.to_string(),
            name: name.to_string(),
            base_price_monthly: Money::new(base),
            base_price_yearly: Money::new(base),
            per_seat_price_monthly: Money::new(dec!(10)),
            per_seat_price_yearly: Money::new(dec!(10)),
            included_seats: 5,
        }
    }

    fn us() -> Region {
        RegionCatalog::new().get("US").clone()
    }

    #[test]
    fn test_mid_cycle_upgrade() {
        let old = plan("starter", "Starter", dec!(49));
        let new = plan("growth", "Growth", dec!(99));
        let result = ProrationCalculator::new().calculate(
            &old,
            &new,
            &us(),
            BillingCycle::Monthly,
            5,
            8,
            15,
            30,
        );

        // Half the cycle remains: credit = 49 × 0.5, charge = 129 × 0.5.
        assert_eq!(result.credit.amount(), dec!(24.50));
        assert_eq!(result.charge.amount(), dec!(64.50));
        assert_eq!(result.net_amount.amount(), dec!(40.00));
        assert_eq!(result.change, ChangeKind::Upgrade);
        assert!(result.is_charge());
        assert!(result.description.starts_with("Upgrade from Starter"));
        assert_eq!(result.days_remaining, 15);
        assert_eq!(result.total_days, 30);
    }

    #[test]
    fn test_mid_cycle_downgrade_is_refund() {
        let old = plan("growth", "Growth", dec!(99));
        let new = plan("starter", "Starter", dec!(49));
        let result = ProrationCalculator::new().calculate(
            &old,
            &new,
            &us(),
            BillingCycle::Monthly,
            5,
            5,
            10,
            30,
        );

        assert!(result.is_refund());
        assert_eq!(result.change, ChangeKind::Downgrade);
        assert!(result.description.starts_with("Downgrade from Growth"));
        assert!(result.net_amount.is_negative());
    }

    #[test]
    fn test_seat_only_change_same_plan() {
        let p = plan("growth", "Growth", dec!(49));
        let result = ProrationCalculator::new().calculate(
            &p,
            &p,
            &us(),
            BillingCycle::Monthly,
            5,
            8,
            15,
            30,
        );

        // Old 49.00, new 79.00, half remaining.
        assert_eq!(result.credit.amount(), dec!(24.50));
        assert_eq!(result.charge.amount(), dec!(39.50));
        assert_eq!(result.net_amount.amount(), dec!(15.00));
    }

    #[test]
    fn test_lateral_change_is_neutral() {
        let p = plan("growth", "Growth", dec!(49));
        let result = ProrationCalculator::new().calculate(
            &p,
            &p,
            &us(),
            BillingCycle::Monthly,
            5,
            5,
            12,
            30,
        );

        assert!(result.is_neutral());
        assert_eq!(result.change, ChangeKind::Lateral);
        assert_eq!(result.net_amount.amount(), dec!(0.00));
        assert!(result.description.starts_with("Lateral change"));
    }

    #[test]
    fn test_swapping_sides_negates_net_within_a_cent() {
        let a = plan("starter", "Starter", dec!(49));
        let b = plan("growth", "Growth", dec!(99));
        let calc = ProrationCalculator::new();

        // 7 of 30 days: the fraction does not divide evenly, so credit and
        // charge each round on their own.
        let forward = calc.calculate(&a, &b, &us(), BillingCycle::Monthly, 6, 17, 7, 30);
        let reverse = calc.calculate(&b, &a, &us(), BillingCycle::Monthly, 17, 6, 7, 30);

        let drift = (forward.net_amount + reverse.net_amount).abs();
        assert!(drift.amount() <= dec!(0.01), "drift was {}", drift);
    }

    #[test]
    fn test_full_cycle_remaining() {
        let old = plan("starter", "Starter", dec!(49));
        let new = plan("growth", "Growth", dec!(99));
        let result = ProrationCalculator::new().calculate(
            &old,
            &new,
            &us(),
            BillingCycle::Monthly,
            5,
            5,
            30,
            30,
        );

        assert_eq!(result.credit.amount(), dec!(49.00));
        assert_eq!(result.charge.amount(), dec!(99.00));
        assert_eq!(result.net_amount.amount(), dec!(50.00));
    }

    #[test]
    fn test_zero_days_remaining() {
        let old = plan("starter", "Starter", dec!(49));
        let new = plan("growth", "Growth", dec!(99));
        let result = ProrationCalculator::new().calculate(
            &old,
            &new,
            &us(),
            BillingCycle::Monthly,
            5,
            5,
            0,
            30,
        );

        assert!(result.is_neutral());
        assert_eq!(result.credit.amount(), dec!(0.00));
        assert_eq!(result.charge.amount(), dec!(0.00));
    }

    #[test]
    fn test_proration_uses_monthly_equivalent_for_yearly_cycles() {
        // Yearly cycles prorate on total_per_month, not on the billed total.
        let old = plan("starter", "Starter", dec!(49));
        let new = plan("growth", "Growth", dec!(99));
        let result = ProrationCalculator::new().calculate(
            &old,
            &new,
            &us(),
            BillingCycle::Yearly,
            5,
            5,
            15,
            30,
        );

        // total_per_month: 49 - 11% = 43.61; 99 - 11% = 88.11.
        assert_eq!(result.credit.amount(), dec!(21.81)); // round2(43.61 × 0.5) = 21.805 → 21.81
        assert_eq!(result.charge.amount(), dec!(44.06)); // round2(88.11 × 0.5) = 44.055 → 44.06
        assert_eq!(result.net_amount.amount(), dec!(22.25));
    }

    #[test]
    fn test_regional_proration() {
        let old = plan("starter", "Starter", dec!(49));
        let new = plan("growth", "Growth", dec!(99));
        let catalog = RegionCatalog::new();
        let result = ProrationCalculator::new().calculate(
            &old,
            &new,
            catalog.get("IN"),
            BillingCycle::Monthly,
            5,
            5,
            15,
            30,
        );

        // 49 × 0.35 = 17.15, 99 × 0.35 = 34.65, half remaining.
        assert_eq!(result.credit.amount(), dec!(8.58)); // round2(8.575)
        assert_eq!(result.charge.amount(), dec!(17.33)); // round2(17.325)
        assert_eq!(result.currency, "INR");
        assert_eq!(result.currency_symbol, "₹");
    }
}
