//! Request and response bodies for the toolkit API.
//!
//! Required fields are modelled as `Option` so that an absent or `null`
//! value reaches the calculator and is reported as an invalid argument
//! naming the field, rather than as a generic JSON error.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request body for `POST /calculate`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The amount before discount and tax.
    #[serde(default)]
    pub amount: Option<Decimal>,
}

/// Request body for `POST /sum`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SumRequest {
    /// Amounts to add; `null` entries are skipped.
    #[serde(default)]
    pub values: Option<Vec<Option<Decimal>>>,
}

/// Response body for `POST /sum`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SumResponse {
    /// The sum of all present values.
    pub total: Decimal,
}

/// Request body for `POST /codes`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodeRequest {
    /// The entity type (e.g. "CLIENTE", "FACTURA").
    #[serde(default)]
    pub entity_type: Option<String>,
}

/// Response body for `POST /codes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeResponse {
    /// The generated code.
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_calculation_request_accepts_string_amount() {
        let request: CalculationRequest = serde_json::from_str(r#"{"amount": "100.00"}"#).unwrap();
        assert_eq!(request.amount, Some(Decimal::from_str("100.00").unwrap()));
    }

    #[test]
    fn test_calculation_request_missing_amount_is_none() {
        let request: CalculationRequest = serde_json::from_str("{}").unwrap();
        assert!(request.amount.is_none());

        let request: CalculationRequest = serde_json::from_str(r#"{"amount": null}"#).unwrap();
        assert!(request.amount.is_none());
    }

    #[test]
    fn test_sum_request_keeps_null_entries() {
        let request: SumRequest =
            serde_json::from_str(r#"{"values": ["10.50", null, "25.30"]}"#).unwrap();
        let values = request.values.unwrap();
        assert_eq!(values.len(), 3);
        assert!(values[1].is_none());
    }
}
