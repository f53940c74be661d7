//! Tiered discount selection.
//!
//! The discount percentage depends only on the amount: the highest tier whose
//! lower bound the amount reaches wins.

use rust_decimal::Decimal;

use crate::config::CalculatorConfig;

/// Returns the discount percentage for `amount`.
///
/// With the default schedule: below 1000.00 → 5, from 1000.00 → 10,
/// from 5000.00 → 15. Boundary values belong to the higher tier. Amounts
/// below the first bound (negative amounts) take the first tier.
///
/// # Examples
///
/// ```
/// use logistics_toolkit::calculation::select_discount_percentage;
/// use logistics_toolkit::config::CalculatorConfig;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = CalculatorConfig::default();
/// let pct = select_discount_percentage(Decimal::from_str("1000.00").unwrap(), &config);
/// assert_eq!(pct, Decimal::from_str("10").unwrap());
/// ```
pub fn select_discount_percentage(amount: Decimal, config: &CalculatorConfig) -> Decimal {
    config.discount_tiers.tier_for(amount).percentage
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DiscountSchedule, DiscountTier};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn select(amount: &str) -> Decimal {
        select_discount_percentage(dec(amount), &CalculatorConfig::default())
    }

    /// DT-001: lowest tier below the first threshold
    #[test]
    fn test_small_amount_gets_5_percent() {
        assert_eq!(select("100.00"), dec("5"));
        assert_eq!(select("0"), dec("5"));
    }

    /// DT-002: boundaries belong to the higher tier
    #[test]
    fn test_boundary_values() {
        assert_eq!(select("999.99"), dec("5"));
        assert_eq!(select("1000.00"), dec("10"));
        assert_eq!(select("4999.99"), dec("10"));
        assert_eq!(select("5000.00"), dec("15"));
    }

    /// DT-003: large amounts stay in the top tier
    #[test]
    fn test_large_amount_gets_15_percent() {
        assert_eq!(select("1000000000.00"), dec("15"));
    }

    #[test]
    fn test_negative_amount_gets_lowest_tier() {
        assert_eq!(select("-1.00"), dec("5"));
    }

    #[test]
    fn test_custom_schedule_is_honoured() {
        let config = CalculatorConfig {
            default_tax_percentage: dec("21"),
            discount_tiers: DiscountSchedule::new(vec![
                DiscountTier::new("none", dec("0"), dec("0")),
                DiscountTier::new("bulk", dec("250"), dec("7.5")),
            ])
            .unwrap(),
        };
        assert_eq!(select_discount_percentage(dec("249.99"), &config), dec("0"));
        assert_eq!(select_discount_percentage(dec("250"), &config), dec("7.5"));
    }
}
