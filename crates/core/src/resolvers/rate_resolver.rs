use log::debug;
use loyalty_lookups::{LookupError, RateProvider};
use std::sync::Arc;
use std::time::Duration;

use super::retry::retry_with_attempts;
use crate::constants::BASE_RATE;
use crate::errors::{Error, Result};
use crate::settings::RateLookupSettings;

/// Resolves the conversion rate of a fare currency.
///
/// The base currency resolves to 1.0 without any call. Other currencies
/// are looked up through the provider, each attempt bounded by its own
/// timeout, with an immediate retry on any failure until the attempt
/// budget is spent.
pub struct RateResolver {
    provider: Arc<dyn RateProvider>,
    base_currency: String,
    timeout: Duration,
    max_attempts: u32,
}

impl RateResolver {
    pub fn new(
        provider: Arc<dyn RateProvider>,
        base_currency: impl Into<String>,
        settings: RateLookupSettings,
    ) -> Self {
        Self {
            provider,
            base_currency: base_currency.into(),
            timeout: settings.timeout,
            max_attempts: settings.max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub async fn resolve(&self, currency: &str) -> Result<f64> {
        if currency.eq_ignore_ascii_case(&self.base_currency) {
            debug!("{} is the base currency, no lookup needed", currency);
            return Ok(BASE_RATE);
        }

        retry_with_attempts(self.max_attempts, || self.attempt(currency))
            .await
            .map_err(|source| Error::RateResolution {
                attempts: self.max_attempts,
                source,
            })
    }

    async fn attempt(&self, currency: &str) -> std::result::Result<f64, LookupError> {
        match tokio::time::timeout(self.timeout, self.provider.fetch_rate(currency)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(LookupError::Timeout {
                service: self.provider.id(),
            }),
        }
    }
}
