use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;

// =============================================================================
// Customer Tier
// =============================================================================

/// Loyalty tier of the customer requesting a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CustomerTier {
    #[default]
    None,
    Silver,
    Gold,
    Platinum,
}

impl CustomerTier {
    pub const ALL: [CustomerTier; 4] = [
        CustomerTier::None,
        CustomerTier::Silver,
        CustomerTier::Gold,
        CustomerTier::Platinum,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerTier::None => "NONE",
            CustomerTier::Silver => "SILVER",
            CustomerTier::Gold => "GOLD",
            CustomerTier::Platinum => "PLATINUM",
        }
    }
}

impl fmt::Display for CustomerTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CustomerTier {
    type Err = ValidationError;

    /// Case-insensitive. The error carries the upper-cased input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        CustomerTier::ALL
            .into_iter()
            .find(|tier| tier.as_str() == upper)
            .ok_or(ValidationError::InvalidTier(upper))
    }
}

// =============================================================================
// Tier Table
// =============================================================================

/// Immutable mapping from tier to bonus multiplier.
///
/// Built once at startup and shared read-only. A tier with no entry earns
/// no bonus.
#[derive(Debug, Clone, PartialEq)]
pub struct TierTable {
    multipliers: HashMap<CustomerTier, f64>,
}

impl TierTable {
    pub fn new(entries: impl IntoIterator<Item = (CustomerTier, f64)>) -> Self {
        Self {
            multipliers: entries.into_iter().collect(),
        }
    }

    /// NONE 0%, SILVER 15%, GOLD 30%, PLATINUM 50%.
    pub fn standard() -> Self {
        Self::new([
            (CustomerTier::None, 0.00),
            (CustomerTier::Silver, 0.15),
            (CustomerTier::Gold, 0.30),
            (CustomerTier::Platinum, 0.50),
        ])
    }

    pub fn multiplier(&self, tier: CustomerTier) -> f64 {
        self.multipliers.get(&tier).copied().unwrap_or(0.0)
    }
}

impl Default for TierTable {
    fn default() -> Self {
        Self::standard()
    }
}
