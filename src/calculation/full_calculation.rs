//! Full business calculation: tier discount followed by tax.

use rust_decimal::Decimal;

use crate::config::CalculatorConfig;
use crate::error::{ToolkitError, ToolkitResult};
use crate::models::CalculationResult;

use super::discount_tiers::select_discount_percentage;
use super::percentage::percent_of;

/// Produces the complete discount and tax breakdown for an amount.
///
/// Steps, in order:
/// 1. select the tier discount percentage;
/// 2. discount = amount × percentage / 100;
/// 3. subtotal = amount − discount;
/// 4. tax = subtotal × default tax percentage / 100;
/// 5. total = subtotal + tax.
///
/// Amounts are not range-checked here; zero and negative amounts are
/// calculated like any other. An amount whose breakdown leaves the `Decimal`
/// range fails with [`ToolkitError::InvalidArgument`] on `original_amount`.
///
/// # Examples
///
/// ```
/// use logistics_toolkit::calculation::calculate_full;
/// use logistics_toolkit::config::CalculatorConfig;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let result = calculate_full(dec("100.00"), &CalculatorConfig::default()).unwrap();
///
/// assert_eq!(result.discount_percentage, dec("5"));
/// assert_eq!(result.discount_amount, dec("5.00"));
/// assert_eq!(result.subtotal, dec("95.00"));
/// assert_eq!(result.tax_amount, dec("14.25"));
/// assert_eq!(result.total, dec("109.25"));
/// ```
pub fn calculate_full(
    original_amount: Decimal,
    config: &CalculatorConfig,
) -> ToolkitResult<CalculationResult> {
    let out_of_range = || ToolkitError::out_of_range("original_amount", original_amount);

    let discount_percentage = select_discount_percentage(original_amount, config);
    let discount_amount =
        percent_of(original_amount, discount_percentage).map_err(|_| out_of_range())?;
    let subtotal = original_amount
        .checked_sub(discount_amount)
        .ok_or_else(out_of_range)?;
    let tax_percentage = config.default_tax_percentage;
    let tax_amount = percent_of(subtotal, tax_percentage).map_err(|_| out_of_range())?;
    let total = subtotal.checked_add(tax_amount).ok_or_else(out_of_range)?;

    Ok(CalculationResult {
        original_amount,
        discount_percentage,
        discount_amount,
        subtotal,
        tax_percentage,
        tax_amount,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn full(amount: &str) -> CalculationResult {
        calculate_full(dec(amount), &CalculatorConfig::default()).unwrap()
    }

    /// FC-001: first tier
    #[test]
    fn test_first_tier_breakdown() {
        let result = full("100.00");

        assert_eq!(result.original_amount, dec("100.00"));
        assert_eq!(result.discount_percentage, dec("5"));
        assert_eq!(result.discount_amount, dec("5.00"));
        assert_eq!(result.subtotal, dec("95.00"));
        assert_eq!(result.tax_percentage, dec("15"));
        assert_eq!(result.tax_amount, dec("14.25"));
        assert_eq!(result.total, dec("109.25"));
    }

    /// FC-002: second tier at its boundary
    #[test]
    fn test_second_tier_breakdown() {
        let result = full("1000.00");

        assert_eq!(result.discount_percentage, dec("10"));
        assert_eq!(result.discount_amount, dec("100.00"));
        assert_eq!(result.subtotal, dec("900.00"));
        assert_eq!(result.tax_amount, dec("135.00"));
        assert_eq!(result.total, dec("1035.00"));
    }

    /// FC-003: third tier
    #[test]
    fn test_third_tier_breakdown() {
        let result = full("8000.00");

        assert_eq!(result.discount_percentage, dec("15"));
        assert_eq!(result.discount_amount, dec("1200.00"));
        assert_eq!(result.subtotal, dec("6800.00"));
        assert_eq!(result.tax_amount, dec("1020.00"));
        assert_eq!(result.total, dec("7820.00"));
    }

    #[test]
    fn test_tax_is_charged_on_subtotal_not_original() {
        let result = full("2000.00");
        assert_eq!(result.tax_amount, percent_of(result.subtotal, dec("15")).unwrap());
        assert_ne!(
            result.tax_amount,
            percent_of(result.original_amount, dec("15")).unwrap()
        );
    }

    #[test]
    fn test_zero_amount() {
        let result = full("0.00");
        assert_eq!(result.total, Decimal::ZERO);
        assert_eq!(result.discount_percentage, dec("5"));
    }

    #[test]
    fn test_negative_amount_is_not_rejected() {
        let result = full("-100.00");
        assert_eq!(result.subtotal, dec("-95.00"));
        assert_eq!(result.total, dec("-109.25"));
    }

    #[test]
    fn test_largest_amount_is_out_of_range() {
        let result = calculate_full(Decimal::MAX, &CalculatorConfig::default());
        assert_eq!(
            result,
            Err(ToolkitError::out_of_range("original_amount", Decimal::MAX))
        );
    }

    #[test]
    fn test_amount_overflowing_only_at_discount_step() {
        // 6e27 × 15 overflows before the division by 100.
        let amount = dec("6000000000000000000000000000");
        assert!(matches!(
            calculate_full(amount, &CalculatorConfig::default()),
            Err(ToolkitError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_large_amount_within_range_is_calculated() {
        let result = full("1000000000000000000.00");
        assert_eq!(result.discount_percentage, dec("15"));
        assert_eq!(result.subtotal, dec("850000000000000000.00"));
        assert_eq!(result.total, dec("977500000000000000.00"));
    }

    #[test]
    fn test_breakdown_is_internally_consistent() {
        let result = full("3456.78");
        assert_eq!(result.original_amount - result.discount_amount, result.subtotal);
        assert_eq!(result.subtotal + result.tax_amount, result.total);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let first = full("1234.5678");
        let second = full("1234.5678");
        assert_eq!(first, second);
        assert_eq!(first.total.to_string(), second.total.to_string());
    }
}
