//! Error types for the logistics toolkit.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur in the toolkit.

use thiserror::Error;

/// The main error type for the logistics toolkit.
///
/// Calculation, code generation and validation only ever fail with
/// [`ToolkitError::InvalidArgument`]. The remaining variants belong to
/// configuration loading and peer-service communication.
///
/// # Example
///
/// ```
/// use logistics_toolkit::error::ToolkitError;
///
/// let error = ToolkitError::invalid_argument("amount", "null", "must not be absent");
/// assert_eq!(error.to_string(), "Invalid argument 'amount' (null): must not be absent");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolkitError {
    /// A required input was absent or failed validation.
    #[error("Invalid argument '{field}' ({value}): {reason}")]
    InvalidArgument {
        /// The name of the offending field.
        field: String,
        /// The offending value, rendered as text (`"null"` when absent).
        value: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but its values are inconsistent.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the inconsistency.
        message: String,
    },

    /// A peer service could not be reached.
    #[error("Service '{service}' unavailable: {message}")]
    ServiceUnavailable {
        /// The name of the peer service.
        service: String,
        /// A description of the transport failure.
        message: String,
    },

    /// A peer service answered with an unexpected status or body.
    #[error("Unexpected response from '{service}': {message}")]
    UnexpectedResponse {
        /// The name of the peer service.
        service: String,
        /// A description of what was unexpected.
        message: String,
    },
}

impl ToolkitError {
    /// Creates an [`ToolkitError::InvalidArgument`] from its parts.
    pub fn invalid_argument(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Creates the error reported when a required input is absent.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::invalid_argument(field, "null", "must not be absent")
    }

    /// Creates the error reported when arithmetic on `value` leaves the
    /// range a `Decimal` can represent.
    pub fn out_of_range(field: impl Into<String>, value: impl std::fmt::Display) -> Self {
        Self::invalid_argument(field, value.to_string(), "amount out of range")
    }
}

/// A type alias for Results that return ToolkitError.
pub type ToolkitResult<T> = Result<T, ToolkitError>;

/// Unwraps a required input or reports it as absent.
pub(crate) fn require<T>(value: Option<T>, field: &str) -> ToolkitResult<T> {
    value.ok_or_else(|| ToolkitError::missing(field))
}
