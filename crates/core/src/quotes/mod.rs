//! Points quoting.
//!
//! - [`model`] - request, response and warning types
//! - [`validation`] - body parsing and ordered validation rules
//! - [`calculator`] - the pure points formula
//! - [`service`] - orchestration of lookups and calculation

pub mod calculator;
pub mod model;
pub mod service;
pub mod validation;


pub use calculator::QuoteCalculator;
pub use model::{QuoteRequest, QuoteResponse, QuoteWarning, RawQuoteRequest};
pub use service::{QuoteService, QuoteServiceTrait};
pub use validation::{parse_and_validate, parse_body, validate};
