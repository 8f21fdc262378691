//! Resolution of the external facts a quote depends on.
//!
//! - [`RateResolver`] - exchange rate, bounded retry, failure is fatal
//! - [`PromoResolver`] - promotion terms, single attempt, failure falls back

mod promo_resolver;
mod rate_resolver;
mod retry;

pub use promo_resolver::PromoResolver;
pub use rate_resolver::RateResolver;
pub use retry::retry_with_attempts;
