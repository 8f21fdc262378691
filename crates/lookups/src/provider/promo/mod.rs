//! Promotion service client.
//!
//! `GET {base_url}{code}` answers `{"bonus": <int>, "expiresSoon": <bool>}`
//! for a known code. Any non-success status, including 404 for an unknown
//! code, means "no promotion" and yields the default terms.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use crate::errors::LookupError;
use crate::models::{PromoResponse, PromoTerms};
use crate::provider::PromoProvider;

const SERVICE_ID: &str = "Promo";

/// HTTP client for the promotion service.
#[derive(Clone)]
pub struct HttpPromoClient {
    client: Client,
    base_url: String,
}

impl HttpPromoClient {
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
}

#[async_trait]
impl PromoProvider for HttpPromoClient {
    fn id(&self) -> &'static str {
        SERVICE_ID
    }

    async fn fetch_promo(&self, code: &str) -> Result<PromoTerms, LookupError> {
        let url = format!("{}{}", self.base_url, code);
        debug!("Promo request: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::from_reqwest(SERVICE_ID, e))?;

        let status = response.status();
        if !status.is_success() {
            // Not found and service errors are deliberately not told apart.
            info!("Promo service answered {} for code {}", status, code);
            return Ok(PromoTerms::default());
        }

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::from_reqwest(SERVICE_ID, e))?;
        let parsed: PromoResponse =
            serde_json::from_str(&body).map_err(|e| LookupError::InvalidResponse {
                service: SERVICE_ID,
                message: e.to_string(),
            })?;

        Ok(parsed.into())
    }
}
