//! Quote orchestration.
//!
//! Runs the rate and promo lookups concurrently, then hands the results to
//! the calculator. The rate lookup decides the outcome: when it fails the
//! quote fails straight away without waiting for the promo lookup.

use async_trait::async_trait;
use log::{debug, error, info};
use loyalty_lookups::{PromoProvider, RateProvider};
use std::sync::Arc;
use std::time::Instant;

use super::calculator::QuoteCalculator;
use super::model::{QuoteRequest, QuoteResponse, QuoteWarning};
use crate::errors::{Error, Result};
use crate::resolvers::{PromoResolver, RateResolver};
use crate::settings::QuoteSettings;

/// Produces points quotes for validated requests.
#[async_trait]
pub trait QuoteServiceTrait: Send + Sync {
    async fn quote(&self, request: &QuoteRequest) -> Result<QuoteResponse>;
}

pub struct QuoteService {
    rates: Arc<RateResolver>,
    promos: Arc<PromoResolver>,
    calculator: QuoteCalculator,
}

impl QuoteService {
    pub fn new(
        rate_provider: Arc<dyn RateProvider>,
        promo_provider: Arc<dyn PromoProvider>,
        settings: &QuoteSettings,
    ) -> Self {
        Self::from_parts(
            RateResolver::new(
                rate_provider,
                settings.base_currency.clone(),
                settings.rate_lookup,
            ),
            PromoResolver::new(promo_provider, settings.promo_lookup),
            QuoteCalculator::new(settings.tiers.clone(), settings.max_points),
        )
    }

    pub fn from_parts(
        rates: RateResolver,
        promos: PromoResolver,
        calculator: QuoteCalculator,
    ) -> Self {
        Self {
            rates: Arc::new(rates),
            promos: Arc::new(promos),
            calculator,
        }
    }
}

#[async_trait]
impl QuoteServiceTrait for QuoteService {
    async fn quote(&self, request: &QuoteRequest) -> Result<QuoteResponse> {
        let started = Instant::now();
        info!(
            "Quote requested: fareAmount={}, currency={}, tier={}, promoCode={:?}",
            request.fare_amount, request.currency, request.customer_tier, request.promo_code
        );

        let rates = Arc::clone(&self.rates);
        let currency = request.currency.clone();
        let rate_task = tokio::spawn(async move { rates.resolve(&currency).await });

        let promos = Arc::clone(&self.promos);
        let promo_code = request.promo_code.clone();
        let promo_task = tokio::spawn(async move { promos.resolve(promo_code.as_deref()).await });

        // An Err from the rate branch returns here; the promo task is
        // detached and its result discarded.
        let (fx_rate, promo) = tokio::try_join!(
            async {
                rate_task.await.unwrap_or_else(|e| {
                    Err(Error::Unexpected(format!("rate lookup task failed: {}", e)))
                })
            },
            async {
                promo_task
                    .await
                    .map_err(|e| Error::Unexpected(format!("promo lookup task failed: {}", e)))
            },
        )
        .inspect_err(|e| error!("Quote failed for currency {}: {}", request.currency, e))?;
        debug!(
            "Resolved fxRate={} promoBonus={} expiresSoon={}",
            fx_rate, promo.bonus, promo.expires_soon
        );

        let mut warnings = Vec::new();
        if promo.expires_soon {
            warnings.push(QuoteWarning::PromoExpiresSoon);
        }

        let quote = self
            .calculator
            .calculate(request, fx_rate, promo.bonus, warnings);

        info!(
            "Quote calculated: totalPoints={}, duration={}ms",
            quote.total_points,
            started.elapsed().as_millis()
        );
        Ok(quote)
    }
}
