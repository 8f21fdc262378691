//! Request validation.
//!
//! Rules run in a fixed order and the first failure wins, so a request
//! with several problems always gets the same message:
//!
//! 1. body present and a JSON object
//! 2. currency present, three characters after trimming
//! 3. fare amount strictly positive
//! 4. customer tier one of NONE/SILVER/GOLD/PLATINUM (absent means NONE)
//! 5. promo code, when present, not blank

use log::warn;
use serde_json::Value;

use super::model::{QuoteRequest, RawQuoteRequest};
use crate::constants::CURRENCY_CODE_LEN;
use crate::errors::ValidationError;
use crate::tiers::CustomerTier;

/// Decode a request body.
pub fn parse_body(body: &[u8]) -> Result<RawQuoteRequest, ValidationError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        warn!("Request received with missing body");
        return Err(ValidationError::MissingBody);
    }

    let value: Value = serde_json::from_slice(body).map_err(|e| {
        warn!("Request received with malformed JSON: {}", e);
        ValidationError::MalformedBody
    })?;

    match value {
        Value::Null => {
            warn!("Request received with missing body");
            Err(ValidationError::MissingBody)
        }
        Value::Object(_) => serde_json::from_value(value).map_err(|e| {
            warn!("Request received with invalid fields: {}", e);
            ValidationError::InvalidFields(e.to_string())
        }),
        other => {
            warn!("Request body is not a JSON object: {}", other);
            Err(ValidationError::MalformedBody)
        }
    }
}

/// Check a decoded request and normalize it.
///
/// Normalization trims the currency and maps the tier to its canonical
/// value; nothing else is changed.
pub fn validate(raw: RawQuoteRequest) -> Result<QuoteRequest, ValidationError> {
    let currency = match raw.currency.as_deref().map(str::trim) {
        Some(code) if code.chars().count() == CURRENCY_CODE_LEN => code.to_string(),
        other => {
            warn!("Validation failed: Invalid currency '{:?}'", other);
            return Err(ValidationError::InvalidCurrency);
        }
    };

    let fare_amount = raw.fare_amount.unwrap_or(0.0);
    if fare_amount.is_nan() || fare_amount <= 0.0 {
        warn!("Validation failed: Invalid fare amount {}", fare_amount);
        return Err(ValidationError::InvalidFare);
    }

    let customer_tier = match raw.customer_tier.as_deref() {
        Some(tier) => tier.parse::<CustomerTier>().map_err(|e| {
            warn!("Validation failed: {}", e);
            e
        })?,
        None => CustomerTier::None,
    };

    if let Some(code) = raw.promo_code.as_deref() {
        if code.trim().is_empty() {
            warn!("Validation failed: Empty promo code");
            return Err(ValidationError::EmptyPromoCode);
        }
    }

    Ok(QuoteRequest {
        fare_amount,
        currency,
        cabin_class: raw.cabin_class,
        customer_tier,
        promo_code: raw.promo_code,
    })
}

/// [`parse_body`] followed by [`validate`].
pub fn parse_and_validate(body: &[u8]) -> Result<QuoteRequest, ValidationError> {
    validate(parse_body(body)?)
}
