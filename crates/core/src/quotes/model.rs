//! Quote domain models.
//!
//! A request arrives as [`RawQuoteRequest`] (whatever the client sent),
//! becomes a [`QuoteRequest`] once validated, and produces a
//! [`QuoteResponse`]. None of these outlive the request that created them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::tiers::CustomerTier;

// =============================================================================
// Requests
// =============================================================================

/// Request body as sent by the client, before validation.
///
/// Unknown fields are ignored. A missing or null `fareAmount` reads as 0.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuoteRequest {
    pub fare_amount: Option<f64>,
    pub currency: Option<String>,
    pub cabin_class: Option<String>,
    pub customer_tier: Option<String>,
    pub promo_code: Option<String>,
}

/// A validated quote request.
///
/// `fare_amount` is strictly positive, `currency` is a trimmed
/// three-character code and `promo_code`, when present, is not blank.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRequest {
    pub fare_amount: f64,
    pub currency: String,
    /// Passed through untouched.
    pub cabin_class: Option<String>,
    pub customer_tier: CustomerTier,
    pub promo_code: Option<String>,
}

// =============================================================================
// Response
// =============================================================================

/// Condition worth flagging on an otherwise successful quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuoteWarning {
    /// The applied promotion is about to expire.
    PromoExpiresSoon,
    /// The total was clamped to the per-quote ceiling.
    PointsCappedAtMax,
}

impl QuoteWarning {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteWarning::PromoExpiresSoon => "PROMO_EXPIRES_SOON",
            QuoteWarning::PointsCappedAtMax => "POINTS_CAPPED_AT_MAX",
        }
    }
}

impl fmt::Display for QuoteWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Points breakdown for one quote.
///
/// Only `total_points` is capped; the components are reported uncapped.
/// Warnings keep detection order and are not deduplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub base_points: u64,
    pub tier_bonus: u64,
    pub promo_bonus: u64,
    pub total_points: u64,
    pub effective_fx_rate: f64,
    pub warnings: Vec<QuoteWarning>,
}

impl QuoteResponse {
    pub fn is_capped(&self) -> bool {
        self.warnings.contains(&QuoteWarning::PointsCappedAtMax)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_request_ignores_unknown_fields() {
        let raw: RawQuoteRequest = serde_json::from_str(
            r#"{"fareAmount": 10.5, "currency": "EUR", "seat": "12A"}"#,
        )
        .unwrap();
        assert_eq!(raw.fare_amount, Some(10.5));
        assert_eq!(raw.currency.as_deref(), Some("EUR"));
        assert_eq!(raw.customer_tier, None);
    }

    #[test]
    fn response_serializes_camel_case_with_warning_codes() {
        let response = QuoteResponse {
            base_points: 1,
            tier_bonus: 2,
            promo_bonus: 3,
            total_points: 6,
            effective_fx_rate: 1.0,
            warnings: vec![QuoteWarning::PromoExpiresSoon],
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["basePoints"], 1);
        assert_eq!(json["effectiveFxRate"], 1.0);
        assert_eq!(json["warnings"][0], "PROMO_EXPIRES_SOON");
    }
}
