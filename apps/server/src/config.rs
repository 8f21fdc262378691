use std::{net::SocketAddr, str::FromStr, time::Duration};

use anyhow::Context;
use loyalty_quote_core::settings::{PromoLookupSettings, QuoteSettings, RateLookupSettings};

pub struct Config {
    pub listen_addr: SocketAddr,
    /// Prefix of the rate lookup URL; the currency code is appended.
    pub fx_url: String,
    /// Prefix of the promo lookup URL; the promo code is appended.
    pub promo_url: String,
    pub quote: QuoteSettings,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = env_or("LQ_LISTEN_ADDR", "0.0.0.0:8080")?;
        let fx_url = std::env::var("LQ_FX_URL")
            .unwrap_or_else(|_| "http://localhost:8081/v1/fx-rate/".into());
        let fx_timeout_ms: u64 = env_or("LQ_FX_TIMEOUT_MS", "2000")?;
        let fx_retries: u32 = env_or("LQ_FX_RETRIES", "3")?;
        let promo_url = std::env::var("LQ_PROMO_URL")
            .unwrap_or_else(|_| "http://localhost:8082/v1/promos/".into());
        let promo_timeout_ms: u64 = env_or("LQ_PROMO_TIMEOUT_MS", "1000")?;

        Ok(Self {
            listen_addr,
            fx_url,
            promo_url,
            quote: QuoteSettings {
                rate_lookup: RateLookupSettings {
                    timeout: Duration::from_millis(fx_timeout_ms),
                    max_attempts: fx_retries,
                },
                promo_lookup: PromoLookupSettings {
                    timeout: Duration::from_millis(promo_timeout_ms),
                },
                ..QuoteSettings::default()
            },
        })
    }
}

fn env_or<T>(name: &str, default: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = std::env::var(name).unwrap_or_else(|_| default.to_string());
    raw.trim()
        .parse()
        .with_context(|| format!("Invalid {}: '{}'", name, raw))
}
