//! Tax (IVA) application.
//!
//! Tax is always charged on the post-discount subtotal, never on the
//! original amount.

use rust_decimal::Decimal;

use crate::config::CalculatorConfig;
use crate::error::{ToolkitError, ToolkitResult};

use super::percentage::percent_of;

/// Returns the tax due on `amount` at the default tax percentage.
pub fn tax_amount(amount: Decimal, config: &CalculatorConfig) -> ToolkitResult<Decimal> {
    percent_of(amount, config.default_tax_percentage)
}

/// Adds tax at `tax_percentage` to a subtotal.
///
/// Computes `subtotal + subtotal * tax_percentage / 100` exactly. Fails with
/// [`ToolkitError::InvalidArgument`] when the total leaves the `Decimal`
/// range.
///
/// # Examples
///
/// ```
/// use logistics_toolkit::calculation::apply_tax;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let total = apply_tax(
///     Decimal::from_str("100.00").unwrap(),
///     Decimal::from_str("12").unwrap(),
/// );
/// assert_eq!(total, Ok(Decimal::from_str("112.00").unwrap()));
/// ```
pub fn apply_tax(subtotal: Decimal, tax_percentage: Decimal) -> ToolkitResult<Decimal> {
    let tax = percent_of(subtotal, tax_percentage)
        .map_err(|_| ToolkitError::out_of_range("subtotal", subtotal))?;
    subtotal
        .checked_add(tax)
        .ok_or_else(|| ToolkitError::out_of_range("subtotal", subtotal))
}

/// Adds tax at the default tax percentage to a subtotal.
pub fn apply_default_tax(subtotal: Decimal, config: &CalculatorConfig) -> ToolkitResult<Decimal> {
    apply_tax(subtotal, config.default_tax_percentage)
}
