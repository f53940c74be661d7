//! Calculator facade for callers whose inputs may be absent.
//!
//! Order and invoice services receive amounts from requests where any field
//! can be missing. [`Calculator`] takes `Option` inputs and reports a missing
//! one as [`ToolkitError::InvalidArgument`](crate::error::ToolkitError::InvalidArgument)
//! before any arithmetic happens. Results that leave the `Decimal` range are
//! reported the same way, with the reason "amount out of range".

use rust_decimal::Decimal;

use crate::config::CalculatorConfig;
use crate::error::{ToolkitResult, require};
use crate::models::CalculationResult;

use super::{
    apply_discount, apply_tax, apply_tiered_discount, calculate_full, select_discount_percentage,
    sum_all, tax_amount,
};

/// Tiered financial calculator bound to a configuration.
///
/// Holds no mutable state; clones share nothing that can change.
///
/// # Example
///
/// ```
/// use logistics_toolkit::calculation::Calculator;
/// use logistics_toolkit::error::ToolkitError;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let calculator = Calculator::default();
///
/// let result = calculator.calculate_full(Some(Decimal::from_str("100.00").unwrap()))?;
/// assert_eq!(result.total, Decimal::from_str("109.25").unwrap());
///
/// assert!(matches!(
///     calculator.calculate_full(None),
///     Err(ToolkitError::InvalidArgument { .. })
/// ));
/// # Ok::<(), ToolkitError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    config: CalculatorConfig,
}

impl Calculator {
    /// Creates a calculator using the given business constants.
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Returns the business constants in use.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Returns the default tax percentage.
    pub fn default_tax_percentage(&self) -> Decimal {
        self.config.default_tax_percentage
    }

    /// Selects the tier discount percentage for an amount.
    pub fn select_discount_percentage(&self, amount: Option<Decimal>) -> ToolkitResult<Decimal> {
        let amount = require(amount, "amount")?;
        Ok(select_discount_percentage(amount, &self.config))
    }

    /// Applies a percentage discount.
    pub fn apply_discount(
        &self,
        amount: Option<Decimal>,
        percentage: Option<Decimal>,
    ) -> ToolkitResult<Decimal> {
        let amount = require(amount, "amount")?;
        let percentage = require(percentage, "discount_percentage")?;
        apply_discount(amount, percentage)
    }

    /// Applies the tier discount that matches the amount.
    pub fn apply_tiered_discount(&self, amount: Option<Decimal>) -> ToolkitResult<Decimal> {
        let amount = require(amount, "amount")?;
        apply_tiered_discount(amount, &self.config)
    }

    /// Returns the tax due at the default tax percentage.
    pub fn tax_amount(&self, amount: Option<Decimal>) -> ToolkitResult<Decimal> {
        let amount = require(amount, "amount")?;
        tax_amount(amount, &self.config)
    }

    /// Adds tax to a subtotal.
    ///
    /// The default tax percentage is used when `tax_percentage` is `None`;
    /// use [`Calculator::apply_tax_checked`] when the percentage is required.
    pub fn apply_tax(
        &self,
        subtotal: Option<Decimal>,
        tax_percentage: Option<Decimal>,
    ) -> ToolkitResult<Decimal> {
        let subtotal = require(subtotal, "subtotal")?;
        let tax_percentage = tax_percentage.unwrap_or(self.config.default_tax_percentage);
        apply_tax(subtotal, tax_percentage)
    }

    /// Adds tax to a subtotal, requiring both inputs.
    pub fn apply_tax_checked(
        &self,
        subtotal: Option<Decimal>,
        tax_percentage: Option<Decimal>,
    ) -> ToolkitResult<Decimal> {
        let subtotal = require(subtotal, "subtotal")?;
        let tax_percentage = require(tax_percentage, "tax_percentage")?;
        apply_tax(subtotal, tax_percentage)
    }

    /// Produces the full discount and tax breakdown.
    pub fn calculate_full(
        &self,
        original_amount: Option<Decimal>,
    ) -> ToolkitResult<CalculationResult> {
        let original_amount = require(original_amount, "original_amount")?;
        calculate_full(original_amount, &self.config)
    }

    /// Sums amounts, skipping absent entries.
    ///
    /// Absent entries never fail; the sequence itself must be present and
    /// its total must stay within the `Decimal` range.
    pub fn sum_all(&self, values: Option<&[Option<Decimal>]>) -> ToolkitResult<Decimal> {
        let values = require(values, "values")?;
        sum_all(values)
    }
}
