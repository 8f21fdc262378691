use std::sync::Arc;

use crate::{
    error::{ApiResult, ErrorBody},
    main_lib::AppState,
    models::{PointsQuote, QuoteRequestBody},
};
use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use loyalty_quote_core::quotes::parse_and_validate;

/// Quote the loyalty points earned by a fare.
#[utoipa::path(
    post,
    path = "/v1/points/quote",
    request_body = QuoteRequestBody,
    responses(
        (status = 200, body = PointsQuote),
        (status = 400, description = "Invalid request", body = ErrorBody),
        (status = 500, description = "Rate lookup failed", body = ErrorBody)
    )
)]
pub async fn quote_points(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<Json<PointsQuote>> {
    let request = parse_and_validate(&body)?;
    let quote = state.quote_service.quote(&request).await?;
    Ok(Json(PointsQuote::from(quote)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/points/quote", post(quote_points))
}
