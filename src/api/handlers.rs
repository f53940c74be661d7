//! HTTP request handlers for the toolkit API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::codes::generate_unique_code;
use crate::error::{ToolkitError, ToolkitResult};

use super::request::{CalculationRequest, CodeRequest, CodeResponse, SumRequest, SumResponse};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/sum", post(sum_handler))
        .route("/codes", post(code_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Returns the full discount and tax breakdown for the requested amount.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let result = state.calculator().calculate_full(request.amount);
    if let Ok(breakdown) = &result {
        info!(
            correlation_id = %correlation_id,
            original_amount = %breakdown.original_amount,
            discount_percentage = %breakdown.discount_percentage,
            total = %breakdown.total,
            duration_us = start_time.elapsed().as_micros(),
            "Calculation completed successfully"
        );
    }

    respond(correlation_id, result)
}

/// Handler for POST /sum endpoint.
async fn sum_handler(
    State(state): State<AppState>,
    payload: Result<Json<SumRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing sum request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let result = state
        .calculator()
        .sum_all(request.values.as_deref())
        .map(|total| SumResponse { total });

    respond(correlation_id, result)
}

/// Handler for POST /codes endpoint.
async fn code_handler(payload: Result<Json<CodeRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing code generation request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let result = request
        .entity_type
        .ok_or_else(|| ToolkitError::missing("entity_type"))
        .and_then(|entity_type| generate_unique_code(&entity_type))
        .map(|code| CodeResponse { code });

    respond(correlation_id, result)
}

/// Turns a handler outcome into a JSON response.
fn respond<T: Serialize>(correlation_id: Uuid, result: ToolkitResult<T>) -> Response {
    match result {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(body),
        )
            .into_response(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Request failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::malformed_json(body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    }
    .into_response()
}
