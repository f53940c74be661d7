//! HTTP API module for the logistics toolkit.
//!
//! This module exposes the calculator and the code generator over HTTP for
//! services that do not link the crate directly.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, CodeRequest, CodeResponse, SumRequest, SumResponse};
pub use response::ApiError;
pub use state::AppState;
