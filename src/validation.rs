//! Field validation helpers.
//!
//! Predicates (`is_*`) answer yes or no. The `require_*` variants turn a
//! failed check into [`ToolkitError::InvalidArgument`] carrying the field
//! name, the offending value and the reason, so callers can report all three.
//!
//! Range checks belong here, not in the calculator: the calculation engine
//! accepts any amount.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;

use crate::config::ValidationConfig;
use crate::error::{ToolkitError, ToolkitResult};

/// Rendering of an absent value in error reports.
const NULL: &str = "null";

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("static regex should not panic")
});

static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+]?[0-9]{7,15}$").expect("static regex should not panic"));

static POSTAL_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5,10}$").expect("static regex should not panic"));

static PROJECT_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{2,3}-[0-9]{4,6}$").expect("static regex should not panic")
});

// =============================================================================
// Format predicates
// =============================================================================

/// Returns true if `email` is a well-formed address (surrounding whitespace ignored).
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    !email.is_empty() && EMAIL_REGEX.is_match(email)
}

/// Returns true for 7 to 15 digits with an optional leading `+`.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

/// Returns true for 5 to 10 digits.
pub fn is_valid_postal_code(postal_code: &str) -> bool {
    POSTAL_CODE_REGEX.is_match(postal_code)
}

/// Returns true for project codes such as `PR-001234`.
pub fn is_valid_project_code(code: &str) -> bool {
    PROJECT_CODE_REGEX.is_match(code)
}

// =============================================================================
// Amount predicates
// =============================================================================

/// Returns true if the amount is strictly greater than zero.
pub fn is_positive_amount(amount: Decimal) -> bool {
    amount > Decimal::ZERO
}

/// Returns true if the amount lies within the configured business range (inclusive).
pub fn is_business_amount(amount: Decimal, limits: &ValidationConfig) -> bool {
    amount >= limits.min_business_amount && amount <= limits.max_business_amount
}

// =============================================================================
// Text predicates
// =============================================================================

/// Returns true if the text contains something other than whitespace.
pub fn is_non_blank(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Returns true if the trimmed text is non-blank and has between `min` and
/// `max` characters (inclusive).
pub fn has_length_between(text: &str, min: usize, max: usize) -> bool {
    if !is_non_blank(text) {
        return false;
    }
    let length = text.trim().chars().count();
    length >= min && length <= max
}

/// Returns true if the name satisfies the configured business name length.
pub fn is_business_name(name: &str, limits: &ValidationConfig) -> bool {
    has_length_between(name, limits.min_name_length, limits.max_name_length)
}

// =============================================================================
// Date, collection and identifier predicates
// =============================================================================

/// Returns true if `date` is on or before `today`.
pub fn is_not_future_date(date: NaiveDate, today: NaiveDate) -> bool {
    date <= today
}

/// Returns true if `date` is strictly after `today`.
pub fn is_future_date(date: NaiveDate, today: NaiveDate) -> bool {
    date > today
}

/// Returns true if `end` is strictly after `start`.
pub fn is_valid_date_range(start: NaiveDate, end: NaiveDate) -> bool {
    end > start
}

/// Returns true if the list has at least one element.
pub fn is_non_empty_list<T>(items: &[T]) -> bool {
    !items.is_empty()
}

/// Returns true if the identifier is strictly positive.
pub fn is_valid_id(id: i64) -> bool {
    id > 0
}

// =============================================================================
// Required-field checks
// =============================================================================

/// Requires a well-formed email address.
///
/// # Example
///
/// ```
/// use logistics_toolkit::validation::require_email;
///
/// assert!(require_email(Some("ops@logistica.example"), "contact_email").is_ok());
/// assert!(require_email(Some("ops@"), "contact_email").is_err());
/// assert!(require_email(None, "contact_email").is_err());
/// ```
pub fn require_email(email: Option<&str>, field: &str) -> ToolkitResult<()> {
    match email {
        Some(email) if is_valid_email(email) => Ok(()),
        other => Err(ToolkitError::invalid_argument(
            field,
            other.unwrap_or(NULL),
            "invalid email format",
        )),
    }
}

/// Requires an amount within the configured business range.
pub fn require_business_amount(
    amount: Option<Decimal>,
    field: &str,
    limits: &ValidationConfig,
) -> ToolkitResult<()> {
    match amount {
        Some(amount) if is_business_amount(amount, limits) => Ok(()),
        other => Err(ToolkitError::invalid_argument(
            field,
            other.map_or_else(|| NULL.to_string(), |a| a.to_string()),
            format!(
                "must be between {} and {}",
                limits.min_business_amount, limits.max_business_amount
            ),
        )),
    }
}

/// Requires a business name of configured length.
pub fn require_business_name(
    name: Option<&str>,
    field: &str,
    limits: &ValidationConfig,
) -> ToolkitResult<()> {
    match name {
        Some(name) if is_business_name(name, limits) => Ok(()),
        other => Err(ToolkitError::invalid_argument(
            field,
            other.unwrap_or(NULL),
            format!(
                "must have between {} and {} characters",
                limits.min_name_length, limits.max_name_length
            ),
        )),
    }
}

/// Requires an end date strictly after the start date.
pub fn require_date_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> ToolkitResult<()> {
    match (start, end) {
        (Some(start), Some(end)) if is_valid_date_range(start, end) => Ok(()),
        (start, end) => {
            let render =
                |date: Option<NaiveDate>| date.map_or_else(|| NULL.to_string(), |d| d.to_string());
            Err(ToolkitError::invalid_argument(
                "date_range",
                format!("{}..{}", render(start), render(end)),
                "end date must be after start date",
            ))
        }
    }
}

/// Requires a positive identifier for the named entity.
pub fn require_id(id: Option<i64>, entity: &str) -> ToolkitResult<()> {
    match id {
        Some(id) if is_valid_id(id) => Ok(()),
        other => Err(ToolkitError::invalid_argument(
            format!("{} id", entity),
            other.map_or_else(|| NULL.to_string(), |id| id.to_string()),
            "must be a positive number",
        )),
    }
}
