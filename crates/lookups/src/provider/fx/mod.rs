//! Exchange-rate service client.
//!
//! `GET {base_url}{currency}` answers `{"rate": <number>}` on success.
//! The base URL is used verbatim, so it normally ends with a slash
//! (e.g. `http://fx.internal/v1/fx-rate/`).

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::errors::LookupError;
use crate::models::{RateResponse, DEFAULT_RATE};
use crate::provider::RateProvider;

const SERVICE_ID: &str = "FX";

/// HTTP client for the FX rate service.
#[derive(Clone)]
pub struct HttpRateClient {
    client: Client,
    base_url: String,
}

impl HttpRateClient {
    /// Create a client with its own connection pool.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a client that shares an existing connection pool.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url_for(&self, currency: &str) -> String {
        format!("{}{}", self.base_url, currency)
    }
}

#[async_trait]
impl RateProvider for HttpRateClient {
    fn id(&self) -> &'static str {
        SERVICE_ID
    }

    async fn fetch_rate(&self, currency: &str) -> Result<f64, LookupError> {
        let url = self.url_for(currency);
        debug!("FX request: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::from_reqwest(SERVICE_ID, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("FX service answered {} for {}", status, currency);
            return Err(LookupError::Status {
                service: SERVICE_ID,
                status: status.as_u16(),
            });
        }

        // Parse from text: the service does not always send a JSON content type.
        let body = response
            .text()
            .await
            .map_err(|e| LookupError::from_reqwest(SERVICE_ID, e))?;
        let parsed: RateResponse =
            serde_json::from_str(&body).map_err(|e| LookupError::InvalidResponse {
                service: SERVICE_ID,
                message: e.to_string(),
            })?;

        let rate = parsed.rate.unwrap_or(DEFAULT_RATE);
        if !rate.is_finite() || rate <= 0.0 {
            return Err(LookupError::InvalidResponse {
                service: SERVICE_ID,
                message: format!("rate must be a positive number, got {}", rate),
            });
        }

        Ok(rate)
    }
}
