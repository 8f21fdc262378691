use log::{debug, warn};
use loyalty_lookups::{LookupError, PromoProvider, PromoTerms};
use std::sync::Arc;
use std::time::Duration;

use crate::settings::PromoLookupSettings;

/// Resolves the bonus terms of a promo code.
///
/// Never fails: a missing code, an unknown code, a slow or broken promo
/// service all end up as the zero-bonus default. There is one attempt per
/// quote.
pub struct PromoResolver {
    provider: Arc<dyn PromoProvider>,
    timeout: Duration,
}

impl PromoResolver {
    pub fn new(provider: Arc<dyn PromoProvider>, settings: PromoLookupSettings) -> Self {
        Self {
            provider,
            timeout: settings.timeout,
        }
    }

    pub async fn resolve(&self, code: Option<&str>) -> PromoTerms {
        let code = match code {
            Some(code) if !code.is_empty() => code,
            _ => {
                debug!("No promo code supplied");
                return PromoTerms::default();
            }
        };

        let outcome = tokio::time::timeout(self.timeout, self.provider.fetch_promo(code))
            .await
            .unwrap_or(Err(LookupError::Timeout {
                service: self.provider.id(),
            }));

        match outcome {
            Ok(terms) => terms,
            Err(e) => {
                warn!("Promo service timed out or failed for code {}: {}", code, e);
                PromoTerms::default()
            }
        }
    }
}
