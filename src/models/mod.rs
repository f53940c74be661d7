//! Core data models for the logistics toolkit.
//!
//! This module contains all the domain models used throughout the toolkit.

mod calculation_result;
mod discount_tier;
mod entity_kind;
mod report;

pub use calculation_result::CalculationResult;
pub use discount_tier::{DiscountSchedule, DiscountTier};
pub use entity_kind::EntityKind;
pub use report::{ConsolidatedReport, PeerStats, ServiceStats, extract_total};
