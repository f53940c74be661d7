//! Calculation result model.
//!
//! This module contains the [`CalculationResult`] type that captures the full
//! breakdown of a tiered discount and tax calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The breakdown produced by a full business calculation.
///
/// A result is produced fresh for every calculation and never mutated
/// afterwards. Monetary values are kept at full precision; no rounding is
/// applied between steps.
///
/// # Example
///
/// ```
/// use logistics_toolkit::calculation::calculate_full;
/// use logistics_toolkit::config::CalculatorConfig;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("100.00").unwrap();
/// let result = calculate_full(amount, &CalculatorConfig::default()).unwrap();
/// assert_eq!(result.total, Decimal::from_str("109.25").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// The amount before discount and tax.
    pub original_amount: Decimal,
    /// The tier discount percentage that was applied.
    pub discount_percentage: Decimal,
    /// The amount removed by the discount.
    pub discount_amount: Decimal,
    /// The amount after discount, before tax.
    pub subtotal: Decimal,
    /// The tax percentage that was applied to the subtotal.
    pub tax_percentage: Decimal,
    /// The tax charged on the subtotal.
    pub tax_amount: Decimal,
    /// The final amount (subtotal plus tax).
    pub total: Decimal,
}
