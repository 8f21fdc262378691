//! Loyalty Quote Core - validation, external fact resolution and points calculation.
//!
//! A quote request is validated, then the exchange rate and the promotion
//! terms are resolved concurrently and handed to a pure calculator.
//! Nothing here performs HTTP directly; outbound calls go through the
//! provider traits of `loyalty-lookups`.

pub mod constants;
pub mod errors;
pub mod quotes;
pub mod resolvers;
pub mod settings;
pub mod tiers;

#[cfg(test)]
pub(crate) mod testing;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
