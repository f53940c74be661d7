//! Percentage arithmetic shared by discount and tax calculations.

use rust_decimal::Decimal;

use crate::error::{ToolkitError, ToolkitResult};

/// Returns `percentage` percent of `amount`.
///
/// The percentage is a whole-number percent: `percent_of(200, 15)` is 30.
/// Multiplication happens before division so no intermediate value is
/// rounded. Returns [`ToolkitError::InvalidArgument`] when the product
/// leaves the `Decimal` range.
///
/// # Examples
///
/// ```
/// use logistics_toolkit::calculation::percent_of;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let tax = percent_of(Decimal::from_str("95.00").unwrap(), Decimal::from_str("15.00").unwrap());
/// assert_eq!(tax, Ok(Decimal::from_str("14.25").unwrap()));
/// ```
pub fn percent_of(amount: Decimal, percentage: Decimal) -> ToolkitResult<Decimal> {
    amount
        .checked_mul(percentage)
        .and_then(|product| product.checked_div(Decimal::ONE_HUNDRED))
        .ok_or_else(|| ToolkitError::out_of_range("amount", amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_percent_of_whole_percent() {
        assert_eq!(percent_of(dec("100.00"), dec("10")).unwrap(), dec("10.00"));
    }

    #[test]
    fn test_percent_of_fractional_result_is_exact() {
        assert_eq!(percent_of(dec("999.99"), dec("5")).unwrap(), dec("49.9995"));
    }

    #[test]
    fn test_percent_of_zero() {
        assert_eq!(percent_of(Decimal::ZERO, dec("15")).unwrap(), Decimal::ZERO);
        assert_eq!(percent_of(dec("250.00"), Decimal::ZERO).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_percent_of_negative_amount() {
        assert_eq!(percent_of(dec("-200"), dec("15")).unwrap(), dec("-30"));
    }

    #[test]
    fn test_percent_of_overflow_is_out_of_range() {
        assert_eq!(
            percent_of(Decimal::MAX, dec("15")),
            Err(ToolkitError::out_of_range("amount", Decimal::MAX))
        );
        assert_eq!(
            percent_of(Decimal::MIN, dec("5")),
            Err(ToolkitError::out_of_range("amount", Decimal::MIN))
        );
    }
}
