//! Lookup provider trait definitions.

use async_trait::async_trait;

use crate::errors::LookupError;
use crate::models::PromoTerms;

/// Source of currency conversion rates.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use loyalty_lookups::{LookupError, RateProvider};
///
/// struct FixedRate(f64);
///
/// #[async_trait]
/// impl RateProvider for FixedRate {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn fetch_rate(&self, _currency: &str) -> Result<f64, LookupError> {
///         Ok(self.0)
///     }
/// }
/// ```
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Short identifier used in logs and error messages.
    fn id(&self) -> &'static str;

    /// Fetch the conversion rate for `currency`.
    ///
    /// One call is one attempt. Implementations must not retry; the
    /// returned rate is finite and strictly positive.
    async fn fetch_rate(&self, currency: &str) -> Result<f64, LookupError>;
}

/// Source of promotion bonus terms.
#[async_trait]
pub trait PromoProvider: Send + Sync {
    /// Short identifier used in logs and error messages.
    fn id(&self) -> &'static str;

    /// Fetch the terms for `code`.
    ///
    /// An unknown code is not an error: implementations answer with
    /// [`PromoTerms::default`].
    async fn fetch_promo(&self, code: &str) -> Result<PromoTerms, LookupError>;
}
