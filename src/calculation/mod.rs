//! Tiered financial calculation engine.
//!
//! This module contains the pure calculation functions (tier selection,
//! discount, tax, full breakdown and summation) and the [`Calculator`]
//! facade that validates absent inputs before delegating to them.
//!
//! All arithmetic uses [`rust_decimal::Decimal`]; nothing is rounded between
//! steps, so repeated calls with the same inputs give identical results.

mod calculator;
mod discount;
mod discount_tiers;
mod full_calculation;
mod percentage;
mod summation;
mod tax;

pub use calculator::Calculator;
pub use discount::{apply_discount, apply_tiered_discount};
pub use discount_tiers::select_discount_percentage;
pub use full_calculation::calculate_full;
pub use percentage::percent_of;
pub use summation::sum_all;
pub use tax::{apply_default_tax, apply_tax, tax_amount};
