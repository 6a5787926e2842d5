//! Warranty policy: the constants the rules are keyed on.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use warrantyerp_core::{DomainError, DomainResult, ValueObject};

/// Pricing/duration/eligibility constants.
///
/// `Default` is the production policy: above 500000 a warranty costs 20% of the
/// product price and lasts 200 days, otherwise 10% and 100 days. Codes with
/// exactly 3 vowels are not eligible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarrantyPolicy {
    /// Prices strictly above this are premium.
    pub premium_threshold: Decimal,
    pub premium_rate: Decimal,
    pub standard_rate: Decimal,
    /// Premium coverage length. Only this duration gets the Monday/Sunday walk.
    pub premium_days: u32,
    pub standard_days: u32,
    pub ineligible_vowel_count: usize,
}

impl Default for WarrantyPolicy {
    fn default() -> Self {
        Self {
            premium_threshold: Decimal::new(500_000, 0),
            premium_rate: Decimal::new(2, 1),
            standard_rate: Decimal::new(1, 1),
            premium_days: 200,
            standard_days: 100,
            ineligible_vowel_count: 3,
        }
    }
}

impl ValueObject for WarrantyPolicy {}

impl WarrantyPolicy {
    pub fn is_premium(&self, price: Decimal) -> bool {
        price > self.premium_threshold
    }

    pub fn validate(&self) -> DomainResult<()> {
        for (name, rate) in [
            ("premium_rate", self.premium_rate),
            ("standard_rate", self.standard_rate),
        ] {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(DomainError::validation(format!(
                    "{name} must be between 0 and 1 (got {rate})"
                )));
            }
        }

        if self.premium_threshold < Decimal::ZERO {
            return Err(DomainError::validation("premium_threshold cannot be negative"));
        }

        if self.premium_days == 0 || self.standard_days == 0 {
            return Err(DomainError::validation(
                "warranty durations must be at least one day",
            ));
        }

        if self.premium_days == self.standard_days {
            return Err(DomainError::validation(format!(
                "premium_days and standard_days must differ (both {})",
                self.premium_days
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn default_policy_is_valid() {
        let policy = WarrantyPolicy::default();
        assert!(policy.validate().is_ok());
        assert_eq!(policy.premium_threshold, dec!(500000));
        assert_eq!(policy.premium_rate, dec!(0.2));
        assert_eq!(policy.standard_rate, dec!(0.1));
    }

    #[test]
    fn threshold_is_exclusive() {
        let policy = WarrantyPolicy::default();
        assert!(!policy.is_premium(dec!(500000)));
        assert!(policy.is_premium(dec!(500000.01)));
    }

    #[test]
    fn rejects_rate_above_one() {
        let policy = WarrantyPolicy {
            premium_rate: dec!(1.5),
            ..WarrantyPolicy::default()
        };
        match policy.validate().unwrap_err() {
            DomainError::Validation(msg) => assert!(msg.contains("premium_rate")),
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_zero_day_coverage() {
        let policy = WarrantyPolicy {
            standard_days: 0,
            ..WarrantyPolicy::default()
        };
        assert!(matches!(policy.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn rejects_equal_durations() {
        let policy = WarrantyPolicy {
            premium_days: 100,
            ..WarrantyPolicy::default()
        };
        match policy.validate().unwrap_err() {
            DomainError::Validation(msg) => assert!(msg.contains("must differ")),
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }
}
