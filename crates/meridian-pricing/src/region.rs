//! # Region Catalog
//!
//! The static table of pricing regions with their PPP multipliers.
//!
//! ## Resolution Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Region Resolution                                   │
//! │                                                                         │
//! │  Orchestrator has country code "in" (from signup / IP / tax data)      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  catalog.get("in")  ← case-insensitive                                 │
//! │       │                                                                 │
//! │       ├── code in table? → Region { IN, INR, ₹, 0.35 }                 │
//! │       │                                                                 │
//! │       └── unknown code? → Region { GLOBAL, USD, $, 0.60 }              │
//! │                            (never an error)                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog is built once at process start and never mutated, so sharing
//! a single instance across threads needs no locking. There is no global
//! singleton: the orchestrator constructs the catalog and passes it where
//! it is needed.

use rust_decimal_macros::dec;

use crate::types::Region;

/// Code of the designated fallback region for unknown country codes.
pub const FALLBACK_REGION_CODE: &str = "GLOBAL";

// =============================================================================
// Region Catalog
// =============================================================================

/// Fixed, read-only lookup table of pricing regions.
#[derive(Debug, Clone)]
pub struct RegionCatalog {
    regions: Vec<Region>,
    /// Index of the GLOBAL fallback row within `regions`.
    fallback_idx: usize,
}

fn region(code: &str, name: &str, currency: &str, symbol: &str, multiplier: rust_decimal::Decimal) -> Region {
    Region {
        code: code.to_string(),
        name: name.to_string(),
        currency: currency.to_string(),
        currency_symbol: symbol.to_string(),
        price_multiplier: multiplier,
    }
}

impl RegionCatalog {
    /// Builds the catalog with the standard region table.
    ///
    /// US is the 1.0 baseline market. Multipliers for the other markets are
    /// catalog data; adjusting one is a data change, not a code change.
    pub fn new() -> Self {
        let regions = vec![
            region("US", "United States", "USD", "$", dec!(1.0)),
            region("IN", "India", "INR", "₹", dec!(0.35)),
            region("GB", "United Kingdom", "GBP", "£", dec!(0.95)),
            region("EU", "European Union", "EUR", "€", dec!(0.90)),
            region("AU", "Australia", "AUD", "A$", dec!(0.90)),
            region("CA", "Canada", "CAD", "C$", dec!(0.85)),
            region("SG", "Singapore", "SGD", "S$", dec!(0.80)),
            region("AE", "United Arab Emirates", "AED", "د.إ", dec!(0.70)),
            region("TR", "Türkiye", "TRY", "₺", dec!(0.30)),
            region("GLOBAL", "Rest of World", "USD", "$", dec!(0.60)),
        ];
        let fallback_idx = regions.len() - 1;
        RegionCatalog {
            regions,
            fallback_idx,
        }
    }

    /// Looks up a region by code, case-insensitively.
    ///
    /// Unknown codes resolve to the `GLOBAL` fallback region; this lookup
    /// never fails.
    ///
    /// ## Example
    /// ```rust
    /// use meridian_pricing::region::RegionCatalog;
    ///
    /// let catalog = RegionCatalog::new();
    /// assert_eq!(catalog.get("in").code, "IN");
    /// assert_eq!(catalog.get("XX").code, "GLOBAL");
    /// ```
    pub fn get(&self, code: &str) -> &Region {
        self.regions
            .iter()
            .find(|r| r.code.eq_ignore_ascii_case(code))
            .unwrap_or(&self.regions[self.fallback_idx])
    }

    /// Returns every region in the table, for listing and region pickers.
    pub fn all(&self) -> &[Region] {
        &self.regions
    }
}

impl Default for RegionCatalog {
    fn default() -> Self {
        Self::new()
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
    fn test_lookup_is_case_insensitive() {
        let catalog = RegionCatalog::new();
        assert_eq!(catalog.get("US").code, "US");
        assert_eq!(catalog.get("us").code, "US");
        assert_eq!(catalog.get("Us").code, "US");
    }

    #[test]
    fn test_unknown_code_resolves_to_global() {
        let catalog = RegionCatalog::new();
        let fallback = catalog.get("ZZ");
        assert_eq!(fallback.code, FALLBACK_REGION_CODE);
        assert_eq!(fallback.currency, "USD");

        // Empty string is just another unknown code.
        assert_eq!(catalog.get("").code, FALLBACK_REGION_CODE);
    }

    #[test]
    fn test_baseline_and_india_multipliers() {
        let catalog = RegionCatalog::new();
        assert_eq!(catalog.get("US").price_multiplier, dec!(1.0));
        assert_eq!(catalog.get("IN").price_multiplier, dec!(0.35));
    }

    #[test]
    fn test_all_multipliers_positive_and_codes_unique() {
        let catalog = RegionCatalog::new();
        let regions = catalog.all();
        assert_eq!(regions.len(), 10);

        for r in regions {
            assert!(
                r.price_multiplier > dec!(0),
                "multiplier for {} must be positive",
                r.code
            );
        }

        let mut codes: Vec<&str> = regions.iter().map(|r| r.code.as_str()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), regions.len());
    }

    #[test]
    fn test_suffix_currency_regions_present() {
        let catalog = RegionCatalog::new();
        assert_eq!(catalog.get("AE").currency, "AED");
        assert_eq!(catalog.get("TR").currency, "TRY");
    }
}
