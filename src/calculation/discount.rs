//! Discount application.

use rust_decimal::Decimal;

use crate::config::CalculatorConfig;
use crate::error::{ToolkitError, ToolkitResult};

use super::discount_tiers::select_discount_percentage;
use super::percentage::percent_of;

/// Applies a percentage discount to an amount.
///
/// Computes `amount - amount * percentage / 100` exactly. Fails with
/// [`ToolkitError::InvalidArgument`] when the result leaves the `Decimal`
/// range.
///
/// # Examples
///
/// ```
/// use logistics_toolkit::calculation::apply_discount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let discounted = apply_discount(
///     Decimal::from_str("100.00").unwrap(),
///     Decimal::from_str("10").unwrap(),
/// );
/// assert_eq!(discounted, Ok(Decimal::from_str("90.00").unwrap()));
/// ```
pub fn apply_discount(amount: Decimal, percentage: Decimal) -> ToolkitResult<Decimal> {
    let discount = percent_of(amount, percentage)?;
    amount
        .checked_sub(discount)
        .ok_or_else(|| ToolkitError::out_of_range("amount", amount))
}

/// Applies the tier discount that matches the amount.
pub fn apply_tiered_discount(
    amount: Decimal,
    config: &CalculatorConfig,
) -> ToolkitResult<Decimal> {
    apply_discount(amount, select_discount_percentage(amount, config))
}
