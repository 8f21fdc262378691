//! Customer tiers and their bonus multipliers.

mod tiers_model;

pub use tiers_model::{CustomerTier, TierTable};
