//! # Price Formatter
//!
//! Renders an amount plus currency metadata into a display string.
//!
//! Fixed two-decimal formatting with per-currency symbol placement:
//! prefix for USD/AUD/CAD/SGD/EUR/GBP/INR (and as the fallback), suffix
//! with a separating space for AED/TRY. No locale-aware thousands
//! separators; localization belongs to the frontend.

use crate::money::Money;

/// Currencies whose symbol goes before the amount.
pub const SYMBOL_PREFIX_CURRENCIES: [&str; 7] =
    ["USD", "AUD", "CAD", "SGD", "EUR", "GBP", "INR"];

/// Currencies whose symbol follows the amount, space-separated.
pub const SYMBOL_SUFFIX_CURRENCIES: [&str; 2] = ["AED", "TRY"];

/// Formats an amount for display in the given currency.
///
/// Negative amounts keep the sign in front of the whole string, so a
/// credit renders as `-$5.00` rather than `$-5.00`.
///
/// ## Example
/// ```rust
/// use meridian_pricing::format::format_price;
/// use meridian_pricing::money::Money;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_price(Money::new(dec!(17.15)), "INR", "₹"), "₹17.15");
/// assert_eq!(format_price(Money::new(dec!(129)), "TRY", "₺"), "129.00 ₺");
/// ```
pub fn format_price(amount: Money, currency: &str, symbol: &str) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    let magnitude = amount.abs().round_to_cents().amount();

    if SYMBOL_PREFIX_CURRENCIES.contains(&currency) {
        format!("{}{}{}", sign, symbol, magnitude)
    } else if SYMBOL_SUFFIX_CURRENCIES.contains(&currency) {
        format!("{}{} {}", sign, magnitude, symbol)
    } else {
        // Anything unlisted falls back to prefix placement.
        format!("{}{}{}", sign, symbol, magnitude)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
