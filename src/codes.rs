//! Unique code generation for business entities.
//!
//! Codes combine an entity prefix, a local timestamp and part of a random
//! UUID, e.g. `CLI-20260115093000-1A2B3C4D`.

use chrono::{DateTime, Local};
use uuid::Uuid;

use crate::error::{ToolkitError, ToolkitResult};
use crate::models::EntityKind;

/// Timestamp layout used in generated codes (`yyyyMMddHHmmss`).
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Number of UUID hex characters appended to a unique code.
const UNIQUE_SUFFIX_LEN: usize = 8;

/// Generates a unique code for an entity type.
///
/// The entity type is matched case-insensitively (see [`EntityKind::parse`]);
/// unknown types get the generic `GEN` prefix.
///
/// # Errors
///
/// Returns [`ToolkitError::InvalidArgument`] if `entity_type` is blank.
///
/// # Examples
///
/// ```
/// use logistics_toolkit::codes::generate_unique_code;
///
/// let code = generate_unique_code("CLIENTE")?;
/// assert!(code.starts_with("CLI-"));
/// assert_eq!(code.len(), "CLI-".len() + 14 + 1 + 8);
/// # Ok::<(), logistics_toolkit::error::ToolkitError>(())
/// ```
pub fn generate_unique_code(entity_type: &str) -> ToolkitResult<String> {
    generate_unique_code_at(entity_type, Local::now())
}

/// Generates a unique code using an explicit timestamp.
pub fn generate_unique_code_at(entity_type: &str, now: DateTime<Local>) -> ToolkitResult<String> {
    let entity_type = require_text(entity_type, "entity_type")?;
    let prefix = EntityKind::parse(entity_type).prefix();
    let suffix = Uuid::new_v4().simple().to_string()[..UNIQUE_SUFFIX_LEN].to_uppercase();

    Ok(format!(
        "{}-{}-{}",
        prefix,
        now.format(TIMESTAMP_FORMAT),
        suffix
    ))
}

/// Generates a 32-character uppercase hexadecimal code from a random UUID.
pub fn generate_simple_code() -> String {
    Uuid::new_v4().simple().to_string().to_uppercase()
}

/// Generates a code from a caller-chosen prefix and the current time.
///
/// The prefix is upper-cased: `generate_prefixed_code("test")` yields
/// `TEST-yyyyMMddHHmmss`.
///
/// # Errors
///
/// Returns [`ToolkitError::InvalidArgument`] if `prefix` is blank.
pub fn generate_prefixed_code(prefix: &str) -> ToolkitResult<String> {
    generate_prefixed_code_at(prefix, Local::now())
}

/// Generates a prefixed code using an explicit timestamp.
pub fn generate_prefixed_code_at(prefix: &str, now: DateTime<Local>) -> ToolkitResult<String> {
    let prefix = require_text(prefix, "prefix")?;
    Ok(format!(
        "{}-{}",
        prefix.to_uppercase(),
        now.format(TIMESTAMP_FORMAT)
    ))
}

fn require_text<'a>(value: &'a str, field: &str) -> ToolkitResult<&'a str> {
    if value.trim().is_empty() {
        return Err(ToolkitError::invalid_argument(
            field,
            value,
            "must not be blank",
        ));
    }
    Ok(value)
}
