//! Error responses for the toolkit API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::ToolkitError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<ToolkitError> for ApiErrorResponse {
    fn from(error: ToolkitError) -> Self {
        match error {
            ToolkitError::InvalidArgument {
                field,
                value,
                reason,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_ARGUMENT",
                    format!("Invalid argument '{}': {}", field, reason),
                    format!("Received value: {}", value),
                ),
            },
            ToolkitError::ConfigNotFound { .. }
            | ToolkitError::ConfigParseError { .. }
            | ToolkitError::InvalidConfig { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    error.to_string(),
                ),
            },
            ToolkitError::ServiceUnavailable { .. } | ToolkitError::UnexpectedResponse { .. } => {
                ApiErrorResponse {
                    status: StatusCode::BAD_GATEWAY,
                    error: ApiError::with_details(
                        "PEER_SERVICE_ERROR",
                        "Peer service call failed",
                        error.to_string(),
                    ),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_invalid_argument_maps_to_bad_request() {
        let api_error: ApiErrorResponse = ToolkitError::missing("amount").into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_ARGUMENT");
        assert!(api_error.error.message.contains("amount"));
        assert_eq!(api_error.error.details.as_deref(), Some("Received value: null"));
    }

    #[test]
    fn test_into_response_carries_status_and_json_body() {
        let response = ApiErrorResponse::from(ToolkitError::out_of_range(
            "original_amount",
            "79228162514264337593543950335",
        ))
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[axum::http::header::CONTENT_TYPE],
            "application/json"
        );
    }

    #[test]
    fn test_peer_errors_map_to_bad_gateway() {
        let api_error: ApiErrorResponse = ToolkitError::ServiceUnavailable {
            service: "orders".to_string(),
            message: "timeout".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_GATEWAY);
        assert_eq!(api_error.error.code, "PEER_SERVICE_ERROR");
    }
}
