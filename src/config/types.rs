//! Configuration types for the logistics toolkit.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every type has a
//! `Default` matching the shipped `config/default` directory.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::DiscountSchedule;

/// Business constants for the tiered financial calculator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CalculatorConfig {
    /// Tax percentage applied when the caller does not supply one.
    pub default_tax_percentage: Decimal,
    /// Discount tiers, selected by amount.
    pub discount_tiers: DiscountSchedule,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            default_tax_percentage: Decimal::new(1500, 2),
            discount_tiers: DiscountSchedule::default(),
        }
    }
}

/// Limits used by the field validators.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ValidationConfig {
    /// Smallest accepted business amount (inclusive).
    pub min_business_amount: Decimal,
    /// Largest accepted business amount (inclusive).
    pub max_business_amount: Decimal,
    /// Shortest accepted business name, in characters.
    pub min_name_length: usize,
    /// Longest accepted business name, in characters.
    pub max_name_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_business_amount: Decimal::new(10000, 2),
            max_business_amount: Decimal::new(100000000, 2),
            min_name_length: 2,
            max_name_length: 100,
        }
    }
}

/// Locations of the peer services.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IntegrationConfig {
    /// Base URL of the orders service API.
    pub orders_base_url: String,
    /// Base URL of the invoices service API.
    pub invoices_base_url: String,
    /// Per-request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    5000
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            orders_base_url: "http://localhost:8081/api".to_string(),
            invoices_base_url: "http://localhost:8082/api".to_string(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// The complete toolkit configuration.
///
/// Loaded once at process start and shared read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolkitConfig {
    calculator: CalculatorConfig,
    validation: ValidationConfig,
    integration: IntegrationConfig,
}

impl ToolkitConfig {
    /// Creates a new ToolkitConfig from its component parts.
    pub fn new(
        calculator: CalculatorConfig,
        validation: ValidationConfig,
        integration: IntegrationConfig,
    ) -> Self {
        Self {
            calculator,
            validation,
            integration,
        }
    }

    /// Returns the calculator configuration.
    pub fn calculator(&self) -> &CalculatorConfig {
        &self.calculator
    }

    /// Returns the validation limits.
    pub fn validation(&self) -> &ValidationConfig {
        &self.validation
    }

    /// Returns the peer service locations.
    pub fn integration(&self) -> &IntegrationConfig {
        &self.integration
    }
}
