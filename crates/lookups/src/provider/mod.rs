//! Lookup provider abstractions and HTTP implementations.
//!
//! This module contains:
//! - The `RateProvider` and `PromoProvider` traits
//! - `fx`: the exchange-rate service client
//! - `promo`: the promotion service client

mod traits;

pub mod fx;
pub mod promo;

pub use traits::{PromoProvider, RateProvider};
