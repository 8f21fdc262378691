//! Already-resolved settings consumed by the quoting core.
//!
//! How these values are loaded (file, environment, defaults) is the
//! caller's concern; the core only sees the final values.

use std::time::Duration;

use crate::constants::{BASE_CURRENCY, MAX_POINTS};
use crate::tiers::TierTable;

pub const DEFAULT_RATE_TIMEOUT: Duration = Duration::from_millis(2000);
pub const DEFAULT_RATE_ATTEMPTS: u32 = 3;
pub const DEFAULT_PROMO_TIMEOUT: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, PartialEq)]
pub struct QuoteSettings {
    pub base_currency: String,
    pub max_points: u64,
    pub rate_lookup: RateLookupSettings,
    pub promo_lookup: PromoLookupSettings,
    pub tiers: TierTable,
}

/// Policy for the exchange-rate lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLookupSettings {
    /// Budget for a single attempt
    pub timeout: Duration,
    /// Total attempts, including the first one
    pub max_attempts: u32,
}

/// Policy for the promotion lookup. It is never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromoLookupSettings {
    pub timeout: Duration,
}

impl Default for QuoteSettings {
    fn default() -> Self {
        Self {
            base_currency: BASE_CURRENCY.to_string(),
            max_points: MAX_POINTS,
            rate_lookup: RateLookupSettings::default(),
            promo_lookup: PromoLookupSettings::default(),
            tiers: TierTable::standard(),
        }
    }
}

impl Default for RateLookupSettings {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_RATE_TIMEOUT,
            max_attempts: DEFAULT_RATE_ATTEMPTS,
        }
    }
}

impl Default for PromoLookupSettings {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_PROMO_TIMEOUT,
        }
    }
}
