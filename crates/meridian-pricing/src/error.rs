//! # Error Types
//!
//! Domain error types for the pricing engine.
//!
//! The calculators themselves never fail: unknown regions fall back to
//! `GLOBAL`, negative seat counts clamp to zero additional seats, and
//! out-of-range coupons are computed through (see the module docs on
//! [`crate::pricing`]). These types exist for the opt-in validation layer
//! in [`crate::validation`], which orchestrators call *before* invoking the
//! engine when they want strict behavior.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, offending value)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Pricing Error
// =============================================================================

/// Top-level error for callers that opt into validation.
#[derive(Debug, Error)]
pub enum PricingError {
    /// Input validation failure (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Produced only by the standalone validators in [`crate::validation`];
/// the calculators compute through the same conditions silently.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Percentage outside [0, 100].
    #[error("{field} must be a percentage between 0 and 100, got {value}")]
    InvalidPercentage { field: String, value: String },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Proration window where days remaining exceed the cycle length.
    #[error("days remaining ({days_remaining}) exceed total days in cycle ({total_days})")]
    InvalidProrationWindow {
        days_remaining: i64,
        total_days: i64,
    },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with PricingError.
pub type PricingResult<T> = Result<T, PricingError>;

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::OutOfRange {
            field: "seat_count".to_string(),
            min: 0,
            max: 10_000,
        };
        assert_eq!(err.to_string(), "seat_count must be between 0 and 10000");

        let err = ValidationError::InvalidProrationWindow {
            days_remaining: 40,
            total_days: 30,
        };
        assert_eq!(
            err.to_string(),
            "days remaining (40) exceed total days in cycle (30)"
        );
    }

    #[test]
    fn test_validation_converts_to_pricing_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "total_days_in_cycle".to_string(),
        };
        let pricing_err: PricingError = validation_err.into();
        assert!(matches!(pricing_err, PricingError::Validation(_)));
    }
}
