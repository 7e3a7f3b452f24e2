//! # meridian-pricing: Pure Pricing Logic for Meridian
//!
//! This crate is the pricing **engine** of Meridian. It computes
//! subscription prices for a multi-region SaaS product and the proration
//! adjustments for mid-cycle plan or seat changes, as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Meridian Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (React)                             │   │
//! │  │    Pricing page ──► Checkout ──► Plan change dialog             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  Billing Orchestrator                           │   │
//! │  │    owns plan/region persistence, payment gateway, invoicing     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ meridian-pricing (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  region   │  │  pricing  │  │ proration │  │  format   │  │   │
//! │  │   │  catalog  │  │ breakdown │  │  credits  │  │  display  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Region, Plan, BillingCycle, PricingInput)
//! - [`money`] - Money type with exact decimal arithmetic
//! - [`region`] - The static region catalog with GLOBAL fallback
//! - [`pricing`] - The price calculator and its breakdown
//! - [`proration`] - Mid-cycle change credits and charges
//! - [`format`] - Currency display formatting
//! - [`error`] - Domain error types
//! - [`validation`] - Opt-in input validation for the orchestrator
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every calculation is deterministic - same input =
//!    same output, bit for bit
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Exact Money**: All monetary values are `rust_decimal` decimals;
//!    rounding happens only at the points the algorithm names
//! 4. **Silent Fallbacks Over Errors**: Unknown regions resolve to GLOBAL,
//!    negative seat counts clamp, coupons are computed through; validation
//!    is a separate, caller-invoked layer
//!
//! ## Example Usage
//!
//! ```rust
//! use meridian_pricing::pricing::PriceCalculator;
//! use meridian_pricing::region::RegionCatalog;
//! use meridian_pricing::types::{BillingCycle, Plan, PricingInput};
//! use meridian_pricing::Money;
//! use rust_decimal_macros::dec;
//!
//! let catalog = RegionCatalog::new();
//! let plan = Plan {
//!     slug: "growth".to_string(),
//!     name: "Growth".to_string(),
//!     base_price_monthly: Money::new(dec!(49)),
//!     base_price_yearly: Money::new(dec!(39)),
//!     per_seat_price_monthly: Money::new(dec!(10)),
//!     per_seat_price_yearly: Money::new(dec!(8)),
//!     included_seats: 5,
//! };
//!
//! let input = PricingInput::new(plan, catalog.get("IN").clone(), BillingCycle::Monthly, 8);
//! let breakdown = PriceCalculator::new().calculate(&input);
//!
//! assert_eq!(breakdown.subtotal.amount(), dec!(27.65));
//! assert_eq!(breakdown.formatted_total(), "₹27.65");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod format;
pub mod money;
pub mod pricing;
pub mod proration;
pub mod region;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use meridian_pricing::Money` instead of
// `use meridian_pricing::money::Money`

pub use error::{PricingError, PricingResult, ValidationError, ValidationResult};
pub use format::format_price;
pub use money::Money;
pub use pricing::{PriceCalculator, PricingBreakdown};
pub use proration::{ChangeKind, ProrationCalculator, ProrationResult};
pub use region::RegionCatalog;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum seat count accepted by the opt-in validators.
///
/// The calculator itself computes any seat count; this cap exists so the
/// orchestrator can reject fat-fingered quantities (e.g. 100000 instead of
/// 100) before they reach checkout. Can be made configurable per-tenant in
/// future versions.
pub const MAX_SEAT_COUNT: i64 = 10_000;
