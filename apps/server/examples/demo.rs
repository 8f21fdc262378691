//! Runs the quote server against stubbed FX and promo services.
//!
//! ```text
//! cargo run -p loyalty-quote-server --example demo
//! curl -X POST http://localhost:8080/v1/points/quote \
//!   -H 'Content-Type: application/json' \
//!   -d '{"fareAmount": 1000, "currency": "AED", "customerTier": "GOLD", "promoCode": "SUMMER25"}'
//! ```
//!
//! Every currency converts at 3.67. `SUMMER25` is worth 308 points and
//! expires soon; any other promo code is unknown.

use loyalty_quote_core::settings::QuoteSettings;
use loyalty_quote_server::{api::app_router, build_state, config::Config, init_tracing};
use serde_json::json;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn fx_stub() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/v1/fx-rate/[^/]+$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "rate": 3.67 })))
        .mount(&server)
        .await;
    server
}

async fn promo_stub() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/promos/SUMMER25"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "bonus": 308, "expiresSoon": true })),
        )
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/v1/promos/[^/]+$"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    server
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let fx = fx_stub().await;
    let promo = promo_stub().await;

    let listen_addr = std::env::var("LQ_LISTEN_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:8080".into())
        .parse()?;
    let config = Config {
        listen_addr,
        fx_url: format!("{}/v1/fx-rate/", fx.uri()),
        promo_url: format!("{}/v1/promos/", promo.uri()),
        quote: QuoteSettings::default(),
    };

    let router = app_router(build_state(&config)?);
    tracing::info!("FX stub at {}, promo stub at {}", fx.uri(), promo.uri());
    tracing::info!("Quote service listening on http://{}", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
