//! Error types for outbound lookups.

use thiserror::Error;

/// Errors that can occur while talking to an external lookup service.
///
/// A single value describes the outcome of a single attempt. Whether the
/// attempt is retried is decided by the caller, not by the variant.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The service answered with a non-success HTTP status.
    #[error("{service} service failed with status {status}")]
    Status {
        /// Short name of the service ("FX", "Promo")
        service: &'static str,
        /// The HTTP status code returned
        status: u16,
    },

    /// The attempt did not complete within its time budget.
    #[error("{service} service timed out")]
    Timeout {
        /// Short name of the service
        service: &'static str,
    },

    /// The request could not be sent or the response could not be read.
    #[error("{service} request failed: {source}")]
    Transport {
        /// Short name of the service
        service: &'static str,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a body we could not use.
    #[error("Malformed {service} response: {message}")]
    InvalidResponse {
        /// Short name of the service
        service: &'static str,
        /// What was wrong with the body
        message: String,
    },
}

impl LookupError {
    /// Maps a client error, keeping timeouts distinguishable from other
    /// transport failures.
    pub fn from_reqwest(service: &'static str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout { service }
        } else {
            Self::Transport {
                service,
                source: err,
            }
        }
    }

    /// Returns true when the attempt ran out of time.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_names_service_and_code() {
        let error = LookupError::Status {
            service: "FX",
            status: 404,
        };
        assert_eq!(error.to_string(), "FX service failed with status 404");
    }

    #[test]
    fn test_timeout_display() {
        let error = LookupError::Timeout { service: "Promo" };
        assert_eq!(error.to_string(), "Promo service timed out");
        assert!(error.is_timeout());
    }

    #[test]
    fn test_invalid_response_display() {
        let error = LookupError::InvalidResponse {
            service: "FX",
            message: "rate must be positive".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed FX response: rate must be positive"
        );
        assert!(!error.is_timeout());
    }
}
