//! Points calculation.
//!
//! Pure: no I/O, no clock, no shared mutable state. The same inputs always
//! give the same quote.

use super::model::{QuoteRequest, QuoteResponse, QuoteWarning};
use crate::constants::MAX_POINTS;
use crate::tiers::TierTable;

/// Turns a validated request plus its resolved rate and promo bonus into
/// a points breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteCalculator {
    tiers: TierTable,
    max_points: u64,
}

impl QuoteCalculator {
    pub fn new(tiers: TierTable, max_points: u64) -> Self {
        Self { tiers, max_points }
    }

    /// `external_warnings` come first in the result, in the order given;
    /// the cap warning, if any, is appended after them.
    pub fn calculate(
        &self,
        request: &QuoteRequest,
        fx_rate: f64,
        promo_bonus: u64,
        external_warnings: Vec<QuoteWarning>,
    ) -> QuoteResponse {
        let fare_in_target_currency = request.fare_amount * fx_rate;
        // Float to int casts saturate, so absurd fares cannot wrap around.
        let base_points = fare_in_target_currency.floor() as u64;

        let multiplier = self.tiers.multiplier(request.customer_tier);
        let tier_bonus = (base_points as f64 * multiplier).floor() as u64;

        let uncapped = base_points
            .saturating_add(tier_bonus)
            .saturating_add(promo_bonus);

        let mut warnings = external_warnings;
        let total_points = if uncapped > self.max_points {
            warnings.push(QuoteWarning::PointsCappedAtMax);
            self.max_points
        } else {
            uncapped
        };

        QuoteResponse {
            base_points,
            tier_bonus,
            promo_bonus,
            total_points,
            effective_fx_rate: fx_rate,
            warnings,
        }
    }
}

impl Default for QuoteCalculator {
    fn default() -> Self {
        Self::new(TierTable::standard(), MAX_POINTS)
    }
}
