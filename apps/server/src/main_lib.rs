use std::sync::Arc;

use crate::config::Config;
use loyalty_lookups::{HttpPromoClient, HttpRateClient};
use loyalty_quote_core::quotes::{QuoteService, QuoteServiceTrait};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub quote_service: Arc<dyn QuoteServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("LQ_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    // One connection pool shared by both lookup clients.
    let http = reqwest::Client::builder().build()?;
    let rate_client = Arc::new(HttpRateClient::with_client(http.clone(), &config.fx_url));
    let promo_client = Arc::new(HttpPromoClient::with_client(http, &config.promo_url));
    tracing::info!(
        "Rate lookups via {} ({} attempts, {:?} each), promo lookups via {} ({:?})",
        config.fx_url,
        config.quote.rate_lookup.max_attempts,
        config.quote.rate_lookup.timeout,
        config.promo_url,
        config.quote.promo_lookup.timeout
    );

    let quote_service: Arc<dyn QuoteServiceTrait> = Arc::new(QuoteService::new(
        rate_client,
        promo_client,
        &config.quote,
    ));

    Ok(Arc::new(AppState { quote_service }))
}
