use loyalty_quote_core::quotes::{QuoteResponse, QuoteWarning};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Shape of the quote request, for the API document only.
///
/// The handler reads raw bytes so the core validator can tell a missing
/// body from a malformed one.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequestBody {
    pub fare_amount: f64,
    #[schema(example = "AED")]
    pub currency: String,
    pub cabin_class: Option<String>,
    #[schema(example = "SILVER")]
    pub customer_tier: Option<String>,
    pub promo_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PointsQuote {
    pub base_points: u64,
    pub tier_bonus: u64,
    pub promo_bonus: u64,
    pub total_points: u64,
    pub effective_fx_rate: f64,
    /// Warning codes in detection order, e.g. `PROMO_EXPIRES_SOON`.
    pub warnings: Vec<String>,
}

impl From<QuoteResponse> for PointsQuote {
    fn from(quote: QuoteResponse) -> Self {
        Self {
            base_points: quote.base_points,
            tier_bonus: quote.tier_bonus,
            promo_bonus: quote.promo_bonus,
            total_points: quote.total_points,
            effective_fx_rate: quote.effective_fx_rate,
            warnings: quote
                .warnings
                .iter()
                .map(QuoteWarning::as_str)
                .map(str::to_string)
                .collect(),
        }
    }
}
