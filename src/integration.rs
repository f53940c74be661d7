//! HTTP client for peer back-office services.
//!
//! The orders service and the invoices service each expose a statistics
//! endpoint; the orders service also accepts new-invoice notifications.
//! Calls are made once: there is no retry or circuit breaking.

use std::time::Duration;

use reqwest::{Client, ClientBuilder};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::config::IntegrationConfig;
use crate::error::{ToolkitError, ToolkitResult};
use crate::models::{ConsolidatedReport, PeerStats, ServiceStats};

const ORDERS_SERVICE: &str = "orders";
const INVOICES_SERVICE: &str = "invoices";

/// Body of a new-invoice notification, in the orders service's wire format.
#[derive(Debug, Serialize)]
struct NewInvoiceNotification<'a> {
    #[serde(rename = "facturaId")]
    invoice_id: &'a str,
    #[serde(rename = "monto")]
    amount: Decimal,
}

/// Client for the orders and invoices services.
///
/// # Example
///
/// ```no_run
/// use logistics_toolkit::config::IntegrationConfig;
/// use logistics_toolkit::integration::IntegrationClient;
///
/// # async fn run() -> logistics_toolkit::error::ToolkitResult<()> {
/// let client = IntegrationClient::new(&IntegrationConfig::default())?;
/// let report = client.consolidated_report().await;
/// println!("Consolidated total: {}", report.consolidated_total);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct IntegrationClient {
    http_client: Client,
    orders_base_url: String,
    invoices_base_url: String,
}

impl IntegrationClient {
    /// Creates a client for the configured peer services.
    pub fn new(config: &IntegrationConfig) -> ToolkitResult<Self> {
        let http_client = ClientBuilder::new()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| ToolkitError::InvalidConfig {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            http_client,
            orders_base_url: config.orders_base_url.trim_end_matches('/').to_string(),
            invoices_base_url: config.invoices_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetches order statistics from the orders service.
    pub async fn order_stats(&self) -> ToolkitResult<ServiceStats> {
        let url = format!("{}/pedidos/estadisticas", self.orders_base_url);
        self.fetch_stats(ORDERS_SERVICE, &url).await
    }

    /// Fetches invoice statistics from the invoices service.
    pub async fn invoice_stats(&self) -> ToolkitResult<ServiceStats> {
        let url = format!("{}/facturas/estadisticas", self.invoices_base_url);
        self.fetch_stats(INVOICES_SERVICE, &url).await
    }

    /// Fetches statistics from both peer services.
    ///
    /// The two requests run concurrently; the first failure is returned.
    pub async fn get_stats(&self) -> ToolkitResult<PeerStats> {
        let (orders, invoices) = tokio::try_join!(self.order_stats(), self.invoice_stats())?;
        Ok(PeerStats { orders, invoices })
    }

    /// Builds a report combining both services' totals.
    ///
    /// Never fails: if either service cannot be queried, the returned report
    /// carries the error and zero totals.
    pub async fn consolidated_report(&self) -> ConsolidatedReport {
        match self.get_stats().await {
            Ok(stats) => ConsolidatedReport::from_stats(stats),
            Err(err) => {
                warn!(error = %err, "Failed to build consolidated report");
                ConsolidatedReport::failed(format!("Failed to build report: {}", err))
            }
        }
    }

    /// Tells the orders service about a newly created invoice.
    ///
    /// Returns true if the service answered with a 2xx status. Transport
    /// failures and other statuses are logged and reported as false.
    #[instrument(skip(self), fields(service = ORDERS_SERVICE))]
    pub async fn notify_new_invoice(&self, invoice_id: &str, amount: Decimal) -> bool {
        let url = format!("{}/notificaciones/nueva-factura", self.orders_base_url);
        let payload = NewInvoiceNotification { invoice_id, amount };

        match self.http_client.post(&url).json(&payload).send().await {
            Ok(response) if response.status().is_success() => {
                debug!(status = %response.status(), "Invoice notification accepted");
                true
            }
            Ok(response) => {
                warn!(status = %response.status(), "Invoice notification rejected");
                false
            }
            Err(err) => {
                warn!(error = %err, "Invoice notification failed");
                false
            }
        }
    }

    /// Notifies peers of a business event carrying an amount.
    ///
    /// Events are currently delivered as new-invoice notifications.
    pub async fn notify_event(&self, id: &str, amount: Decimal) -> bool {
        self.notify_new_invoice(id, amount).await
    }

    #[instrument(skip(self))]
    async fn fetch_stats(&self, service: &str, url: &str) -> ToolkitResult<ServiceStats> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| ToolkitError::ServiceUnavailable {
                service: service.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ToolkitError::UnexpectedResponse {
                service: service.to_string(),
                message: format!("HTTP status {}", status),
            });
        }

        let stats = response
            .json::<ServiceStats>()
            .await
            .map_err(|e| ToolkitError::UnexpectedResponse {
                service: service.to_string(),
                message: format!("invalid statistics body: {}", e),
            })?;

        debug!(entries = stats.len(), "Statistics received");
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_slashes() {
        let config = IntegrationConfig {
            orders_base_url: "http://orders.local/api/".to_string(),
            invoices_base_url: "http://invoices.local/api".to_string(),
            timeout_ms: 100,
        };
        let client = IntegrationClient::new(&config).unwrap();
        assert_eq!(client.orders_base_url, "http://orders.local/api");
        assert_eq!(client.invoices_base_url, "http://invoices.local/api");
    }

    #[test]
    fn test_notification_wire_format() {
        let payload = NewInvoiceNotification {
            invoice_id: "FACT-001",
            amount: Decimal::new(12550, 2),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["facturaId"], "FACT-001");
        assert_eq!(json["monto"], "125.50");
    }

    #[tokio::test]
    async fn test_unreachable_service_yields_failed_report() {
        let config = IntegrationConfig {
            orders_base_url: "http://127.0.0.1:1/api".to_string(),
            invoices_base_url: "http://127.0.0.1:1/api".to_string(),
            timeout_ms: 500,
        };
        let client = IntegrationClient::new(&config).unwrap();

        let report = client.consolidated_report().await;
        assert!(!report.is_complete());
        assert_eq!(report.consolidated_total, Decimal::ZERO);
        assert!(!client.notify_new_invoice("FACT-001", Decimal::ONE).await);
    }
}
