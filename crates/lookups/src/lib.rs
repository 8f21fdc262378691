//! Loyalty Lookups Crate
//!
//! Clients for the two external facts a points quote depends on:
//! the exchange rate of the fare currency and the bonus terms of a
//! promotion code.
//!
//! # Overview
//!
//! ```text
//!                 +----------------+
//!                 |  quote core    |
//!                 +----------------+
//!                   |            |
//!                   v            v
//!          +--------------+  +---------------+
//!          | RateProvider |  | PromoProvider |   (traits)
//!          +--------------+  +---------------+
//!                   |            |
//!                   v            v
//!         +----------------+  +----------------+
//!         | HttpRateClient |  | HttpPromoClient|   (reqwest)
//!         +----------------+  +----------------+
//! ```
//!
//! Providers perform exactly one request per call. Retry, timeout and
//! fallback policy belong to the caller.

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::LookupError;
pub use models::PromoTerms;
pub use provider::fx::HttpRateClient;
pub use provider::promo::HttpPromoClient;
pub use provider::{PromoProvider, RateProvider};
