//! Application-wide error types using thiserror
//!
//! Adapter calls return `ExchangeError`; everything around them (config
//! loading, CLI output) wraps failures in AppError.

use thiserror::Error;

use crate::adapters::errors::ExchangeError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Exchange error: {0}")]
    Exchange(#[from] ExchangeError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::errors::VenueError;

    #[test]
    fn test_config_error_display() {
        let err = AppError::Config("PARADEX_PRIVATE_KEY not set".into());
        assert_eq!(err.to_string(), "Configuration error: PARADEX_PRIVATE_KEY not set");
    }

    #[test]
    fn test_exchange_error_converts() {
        fn fails() -> Result<()> {
            let call: std::result::Result<(), ExchangeError> =
                Err(ExchangeError::ClientUnavailable("no client".into()));
            call?;
            Ok(())
        }
        match fails() {
            Err(AppError::Exchange(ExchangeError::ClientUnavailable(msg))) => assert_eq!(msg, "no client"),
            other => panic!("Expected Exchange error, got {:?}", other),
        }
    }

    #[test]
    fn test_nested_venue_error_display() {
        let err: AppError = ExchangeError::from(VenueError::OrderRejected("crossed".into())).into();
        assert_eq!(err.to_string(), "Exchange error: Venue error: Order rejected: crossed");
    }

    #[test]
    fn test_serde_error_converts() {
        let parse = serde_json::from_str::<serde_json::Value>("{");
        let err: AppError = parse.unwrap_err().into();
        assert!(matches!(err, AppError::Serialization(_)));
    }
}
