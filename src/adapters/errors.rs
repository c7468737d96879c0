//! Exchange adapter error types
//!
//! Adapters surface exactly two kinds of failure: the venue client is
//! missing altogether (`ClientUnavailable`), or the venue reported a
//! problem while serving a call (`Venue`). Venue errors are propagated
//! unchanged; adapters never retry or swallow them.

use thiserror::Error;

/// Failures reported by (or while talking to) the venue client
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VenueError {
    /// Transport-level failure reaching the venue
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request did not complete within the client's timeout
    #[error("Network timeout after {0}ms")]
    NetworkTimeout(u64),

    /// Venue refused the credentials or bearer token
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Venue rejected the order
    #[error("Order rejected: {0}")]
    OrderRejected(String),

    /// Invalid or unexpected response from the venue (including non-numeric levels)
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Order could not be encoded or signed for the venue
    #[error("Invalid order: {0}")]
    InvalidOrder(String),
}

/// Exchange-level error returned by every adapter operation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExchangeError {
    /// No venue client capability is available for this adapter
    #[error("Venue client unavailable: {0}")]
    ClientUnavailable(String),

    /// Any failure surfaced by the venue client during an operation
    #[error("Venue error: {0}")]
    Venue(#[from] VenueError),
}

impl ExchangeError {
    /// True when the error came from the venue rather than adapter setup
    pub fn is_venue_error(&self) -> bool {
        matches!(self, ExchangeError::Venue(_))
    }
}

/// Result type alias for exchange operations
pub type ExchangeResult<T> = std::result::Result<T, ExchangeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_unavailable_display() {
        let err = ExchangeError::ClientUnavailable("rest feature disabled".to_string());
        assert_eq!(
            err.to_string(),
            "Venue client unavailable: rest feature disabled"
        );
        assert!(!err.is_venue_error());
    }

    #[test]
    fn test_venue_error_wraps_display() {
        let err: ExchangeError = VenueError::OrderRejected("post-only would cross".into()).into();
        assert_eq!(
            err.to_string(),
            "Venue error: Order rejected: post-only would cross"
        );
        assert!(err.is_venue_error());
    }

    #[test]
    fn test_network_timeout_display() {
        let err = VenueError::NetworkTimeout(3000);
        assert_eq!(err.to_string(), "Network timeout after 3000ms");
    }

    #[test]
    fn test_invalid_response_display() {
        let err = VenueError::InvalidResponse("malformed JSON".to_string());
        assert_eq!(err.to_string(), "Invalid response: malformed JSON");
    }
}
