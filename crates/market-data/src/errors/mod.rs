//! Error types for the market data crate.
//!
//! Every variant describes why a live source produced no price. Callers in
//! the pricing core never surface these errors; they log them and fall
//! through to the next source in the chain.

use thiserror::Error;

/// Errors that can occur while fetching live price data.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The source answered but had nothing for the requested item.
    #[error("No listings found for: {0}")]
    NoListings(String),

    /// The source answered with a non-success HTTP status.
    #[error("HTTP {status} from {provider}")]
    HttpStatus {
        /// The provider that returned the status
        provider: String,
        /// The HTTP status code
        status: u16,
    },

    /// A provider-specific error occurred.
    /// Try the next provider in the chain.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The response body could not be interpreted.
    #[error("Malformed response from {provider}: {message}")]
    MalformedResponse {
        /// The provider whose response could not be parsed
        provider: String,
        /// What went wrong while parsing
        message: String,
    },

    /// No providers are configured in the chain.
    #[error("No providers available")]
    NoProvidersAvailable,

    /// All providers were tried and all failed.
    #[error("All providers failed")]
    AllProvidersFailed,

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Whether the error means "the item is unknown to this source" rather
    /// than "the source is unavailable". Only used to pick a log level.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NoListings(_))
            || matches!(self, Self::HttpStatus { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_listings_is_not_found() {
        let error = MarketDataError::NoListings("Shako".to_string());
        assert!(error.is_not_found());
    }

    #[test]
    fn test_http_404_is_not_found() {
        let error = MarketDataError::HttpStatus {
            provider: "BACKEND_API".to_string(),
            status: 404,
        };
        assert!(error.is_not_found());

        let error = MarketDataError::HttpStatus {
            provider: "BACKEND_API".to_string(),
            status: 503,
        };
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_error_display() {
        let error = MarketDataError::NoListings("Harlequin Crest".to_string());
        assert_eq!(format!("{}", error), "No listings found for: Harlequin Crest");

        let error = MarketDataError::ProviderError {
            provider: "DIABLO_TRADE".to_string(),
            message: "selector failed".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Provider error: DIABLO_TRADE - selector failed"
        );

        let error = MarketDataError::HttpStatus {
            provider: "BACKEND_API".to_string(),
            status: 500,
        };
        assert_eq!(format!("{}", error), "HTTP 500 from BACKEND_API");
    }
}
