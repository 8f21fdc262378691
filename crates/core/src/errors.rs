//! Core error types for quoting.
//!
//! Validation failures are detected before any external call and are never
//! retried. A rate resolution failure means every attempt was used up.
//! Promotion lookups never surface an error, so they have no variant here.

use loyalty_lookups::LookupError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for a quote.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to fetch external data: {source}")]
    RateResolution {
        attempts: u32,
        #[source]
        source: LookupError,
    },

    #[error("Internal server error: {0}")]
    Unexpected(String),
}

impl Error {
    /// Stable classification code.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Validation(e) => e.code(),
            Error::RateResolution { .. } => "RATE_RESOLUTION_FAILED",
            Error::Unexpected(_) => "UNEXPECTED_ERROR",
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

/// Validation errors for an inbound quote request.
///
/// The display strings are returned to clients verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Request body is missing")]
    MissingBody,

    #[error("Invalid JSON format")]
    MalformedBody,

    /// Valid JSON whose fields have the wrong types.
    #[error("Invalid request fields: {0}")]
    InvalidFields(String),

    #[error("Currency is required and must be a 3-character ISO code")]
    InvalidCurrency,

    #[error("Fare amount must be greater than zero")]
    InvalidFare,

    #[error("Invalid customer tier: {0}")]
    InvalidTier(String),

    #[error("Promo code cannot be empty if provided")]
    EmptyPromoCode,
}

impl ValidationError {
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MissingBody => "MISSING_BODY",
            ValidationError::MalformedBody | ValidationError::InvalidFields(_) => "MALFORMED_BODY",
            ValidationError::InvalidCurrency => "INVALID_CURRENCY",
            ValidationError::InvalidFare => "INVALID_FARE",
            ValidationError::InvalidTier(_) => "INVALID_TIER",
            ValidationError::EmptyPromoCode => "EMPTY_PROMO_CODE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_resolution_names_the_cause() {
        let error = Error::RateResolution {
            attempts: 3,
            source: LookupError::Status {
                service: "FX",
                status: 404,
            },
        };
        assert_eq!(
            error.to_string(),
            "Failed to fetch external data: FX service failed with status 404"
        );
        assert_eq!(error.code(), "RATE_RESOLUTION_FAILED");
        assert!(!error.is_validation());
    }

    #[test]
    fn validation_message_is_passed_through() {
        let error = Error::from(ValidationError::InvalidTier("DIAMOND".to_string()));
        assert_eq!(error.to_string(), "Invalid customer tier: DIAMOND");
        assert_eq!(error.code(), "INVALID_TIER");
        assert!(error.is_validation());
    }

    #[test]
    fn invalid_fields_share_the_malformed_code() {
        let error = ValidationError::InvalidFields("fareAmount".to_string());
        assert_eq!(error.code(), "MALFORMED_BODY");
    }
}
