//! Cross-service statistics models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Raw statistics as returned by a peer service.
pub type ServiceStats = Map<String, Value>;

/// Statistics gathered from every peer service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerStats {
    /// Statistics from the orders service.
    pub orders: ServiceStats,
    /// Statistics from the invoices service.
    pub invoices: ServiceStats,
}

/// A report combining order and invoice statistics.
///
/// When either peer cannot be queried the report still comes back, with
/// `error` set and every total at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsolidatedReport {
    /// The `total` reported by the orders service.
    pub orders_total: Decimal,
    /// The `total` reported by the invoices service.
    pub invoices_total: Decimal,
    /// Orders total plus invoices total.
    pub consolidated_total: Decimal,
    /// Raw order statistics.
    #[serde(default)]
    pub order_stats: ServiceStats,
    /// Raw invoice statistics.
    #[serde(default)]
    pub invoice_stats: ServiceStats,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Why the report could not be built, if it could not.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConsolidatedReport {
    /// Builds a report from both peers' statistics.
    pub fn from_stats(stats: PeerStats) -> Self {
        let orders_total = extract_total(&stats.orders, "total");
        let invoices_total = extract_total(&stats.invoices, "total");

        Self {
            orders_total,
            invoices_total,
            consolidated_total: orders_total + invoices_total,
            order_stats: stats.orders,
            invoice_stats: stats.invoices,
            generated_at: Utc::now(),
            error: None,
        }
    }

    /// Builds the zeroed report returned when statistics are unavailable.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            orders_total: Decimal::ZERO,
            invoices_total: Decimal::ZERO,
            consolidated_total: Decimal::ZERO,
            order_stats: ServiceStats::new(),
            invoice_stats: ServiceStats::new(),
            generated_at: Utc::now(),
            error: Some(message.into()),
        }
    }

    /// Returns true if the report carries real totals.
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

/// Reads a numeric statistic as a decimal.
///
/// Numbers and numeric strings are accepted; anything else counts as zero.
pub fn extract_total(stats: &ServiceStats, key: &str) -> Decimal {
    match stats.get(key) {
        Some(Value::Number(number)) => number.to_string().parse().unwrap_or(Decimal::ZERO),
        Some(Value::String(text)) => text.trim().parse().unwrap_or(Decimal::ZERO),
        _ => Decimal::ZERO,
    }
}
