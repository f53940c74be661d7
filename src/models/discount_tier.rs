//! Discount tier models.
//!
//! A [`DiscountSchedule`] is an ordered list of [`DiscountTier`]s. Each tier
//! starts at an inclusive lower bound and runs up to the next tier's bound.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ToolkitError, ToolkitResult};

/// A single discount bracket.
///
/// # Example
///
/// ```
/// use logistics_toolkit::models::DiscountTier;
/// use rust_decimal::Decimal;
///
/// let tier = DiscountTier::new("tier_2", Decimal::new(100000, 2), Decimal::new(1000, 2));
/// assert!(tier.is_reached_by(Decimal::new(100000, 2)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountTier {
    /// Identifier of the tier (e.g. "tier_1").
    pub name: String,
    /// The smallest amount belonging to this tier (inclusive).
    pub lower_bound: Decimal,
    /// Discount percentage, expressed as a whole-number percent (10 means 10%).
    pub percentage: Decimal,
}

impl DiscountTier {
    /// Creates a new tier.
    pub fn new(name: impl Into<String>, lower_bound: Decimal, percentage: Decimal) -> Self {
        Self {
            name: name.into(),
            lower_bound,
            percentage,
        }
    }

    /// Returns true if `amount` reaches this tier's lower bound.
    pub fn is_reached_by(&self, amount: Decimal) -> bool {
        amount >= self.lower_bound
    }
}

/// An ordered set of discount tiers.
///
/// Tiers are kept strictly ascending by lower bound, so exactly one tier
/// matches any amount. Amounts below the first bound fall into the first tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscountSchedule {
    tiers: Vec<DiscountTier>,
}

impl DiscountSchedule {
    /// Builds a schedule from tiers in any order.
    ///
    /// Returns [`ToolkitError::InvalidConfig`] when no tiers are given or two
    /// tiers share a lower bound.
    pub fn new(mut tiers: Vec<DiscountTier>) -> ToolkitResult<Self> {
        if tiers.is_empty() {
            return Err(ToolkitError::InvalidConfig {
                message: "discount schedule must contain at least one tier".to_string(),
            });
        }

        tiers.sort_by(|a, b| a.lower_bound.cmp(&b.lower_bound));

        if let Some(pair) = tiers
            .windows(2)
            .find(|pair| pair[0].lower_bound == pair[1].lower_bound)
        {
            return Err(ToolkitError::InvalidConfig {
                message: format!(
                    "tiers '{}' and '{}' share lower bound {}",
                    pair[0].name, pair[1].name, pair[0].lower_bound
                ),
            });
        }

        Ok(Self { tiers })
    }

    /// Returns the tier that applies to `amount`.
    pub fn tier_for(&self, amount: Decimal) -> &DiscountTier {
        self.tiers
            .iter()
            .rev()
            .find(|tier| tier.is_reached_by(amount))
            .unwrap_or(&self.tiers[0])
    }

    /// Returns the tiers, lowest bound first.
    pub fn tiers(&self) -> &[DiscountTier] {
        &self.tiers
    }
}

impl Default for DiscountSchedule {
    /// Below 1000.00 → 5%, from 1000.00 → 10%, from 5000.00 → 15%.
    fn default() -> Self {
        Self {
            tiers: vec![
                DiscountTier::new("tier_1", Decimal::new(0, 2), Decimal::new(500, 2)),
                DiscountTier::new("tier_2", Decimal::new(100000, 2), Decimal::new(1000, 2)),
                DiscountTier::new("tier_3", Decimal::new(500000, 2), Decimal::new(1500, 2)),
            ],
        }
    }
}

impl<'de> Deserialize<'de> for DiscountSchedule {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tiers = Vec::<DiscountTier>::deserialize(deserializer)?;
        DiscountSchedule::new(tiers).map_err(serde::de::Error::custom)
    }
}
