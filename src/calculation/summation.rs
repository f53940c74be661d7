//! Summation of monetary amounts.

use rust_decimal::Decimal;

use crate::error::{ToolkitError, ToolkitResult};

/// Sums a sequence of amounts, skipping absent entries.
///
/// An empty sequence sums to zero. A running total that leaves the `Decimal`
/// range is reported as [`ToolkitError::InvalidArgument`] naming the entry
/// that overflowed.
///
/// # Examples
///
/// ```
/// use logistics_toolkit::calculation::sum_all;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let values = [
///     Some(Decimal::from_str("10.50").unwrap()),
///     None,
///     Some(Decimal::from_str("25.30").unwrap()),
/// ];
/// assert_eq!(sum_all(&values), Ok(Decimal::from_str("35.80").unwrap()));
/// ```
pub fn sum_all(values: &[Option<Decimal>]) -> ToolkitResult<Decimal> {
    values.iter().flatten().try_fold(Decimal::ZERO, |total, value| {
        total
            .checked_add(*value)
            .ok_or_else(|| ToolkitError::out_of_range("values", value))
    })
}
