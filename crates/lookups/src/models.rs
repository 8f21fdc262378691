//! Wire models for the lookup services.
//!
//! The promo bonus is read leniently: any non-negative JSON number is
//! accepted and a fractional part is dropped, so `308.0` reads as 308.

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Number;

/// Rate used when the FX service answers successfully but omits the field.
pub const DEFAULT_RATE: f64 = 1.0;

/// Bonus terms of a promotion.
///
/// `Default` is the fallback value: no bonus, not expiring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromoTerms {
    pub bonus: u64,
    pub expires_soon: bool,
}

/// Response from `GET {fx_url}{currency}`
#[derive(Debug, Deserialize)]
pub(crate) struct RateResponse {
    pub rate: Option<f64>,
}

/// Response from `GET {promo_url}{code}`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PromoResponse {
    #[serde(default, deserialize_with = "whole_points")]
    pub bonus: Option<u64>,
    pub expires_soon: Option<bool>,
}

impl From<PromoResponse> for PromoTerms {
    fn from(r: PromoResponse) -> Self {
        Self {
            bonus: r.bonus.unwrap_or(0),
            expires_soon: r.expires_soon.unwrap_or(false),
        }
    }
}

fn whole_points<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(number) = Option::<Number>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if let Some(points) = number.as_u64() {
        return Ok(Some(points));
    }
    match number.as_f64() {
        Some(value) if value.is_finite() && value >= 0.0 => Ok(Some(value.trunc() as u64)),
        _ => Err(de::Error::custom(format!(
            "bonus must be a non-negative number, got {}",
            number
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_promo_fields_default() {
        let parsed: PromoResponse = serde_json::from_str(r#"{"bonus": 100}"#).unwrap();
        let terms = PromoTerms::from(parsed);
        assert_eq!(terms.bonus, 100);
        assert!(!terms.expires_soon);
    }

    #[test]
    fn whole_float_bonus_is_accepted() {
        let parsed: PromoResponse =
            serde_json::from_str(r#"{"bonus": 308.0, "expiresSoon": true}"#).unwrap();
        let terms = PromoTerms::from(parsed);
        assert_eq!(terms.bonus, 308);
        assert!(terms.expires_soon);
    }

    #[test]
    fn fractional_bonus_is_truncated() {
        let parsed: PromoResponse = serde_json::from_str(r#"{"bonus": 10.7}"#).unwrap();
        assert_eq!(parsed.bonus, Some(10));
    }

    #[test]
    fn null_bonus_defaults_to_zero() {
        let parsed: PromoResponse = serde_json::from_str(r#"{"bonus": null}"#).unwrap();
        assert_eq!(PromoTerms::from(parsed).bonus, 0);
    }

    #[test]
    fn negative_bonus_is_rejected() {
        let parsed = serde_json::from_str::<PromoResponse>(r#"{"bonus": -5}"#);
        assert!(parsed.is_err());
        let parsed = serde_json::from_str::<PromoResponse>(r#"{"bonus": -2.5}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn rate_field_is_optional() {
        let parsed: RateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.rate, None);
    }
}
