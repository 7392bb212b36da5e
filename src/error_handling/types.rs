//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Errors surfaced by a single analysis run.
///
/// All variants are terminal for the call: there is no partial report on
/// failure, and the `Display` text is the message the caller is expected to
/// surface as-is.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// No URL was supplied (empty or whitespace-only input).
    #[error("URL is required")]
    MissingUrl,

    /// The supplied URL could not be turned into an absolute HTTP(S) URL.
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The URL as the caller supplied it.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Error constructing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    ClientInit(#[from] ReqwestError),

    /// The page could not be fetched.
    #[error("could not fetch the website ({url}): {cause}")]
    Fetch {
        /// The absolute URL that was requested.
        url: String,
        /// Categorized human-readable cause.
        cause: String,
    },
}

/// Error types for startup failures in the binary.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_url_display() {
        assert_eq!(AnalysisError::MissingUrl.to_string(), "URL is required");
    }

    #[test]
    fn test_invalid_url_display() {
        let err = AnalysisError::InvalidUrl {
            url: "ftp://example.com".to_string(),
            reason: "unsupported scheme 'ftp'".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid URL 'ftp://example.com': unsupported scheme 'ftp'"
        );
    }

    #[test]
    fn test_fetch_display() {
        let err = AnalysisError::Fetch {
            url: "https://example.com/".to_string(),
            cause: "request timed out".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "could not fetch the website (https://example.com/): request timed out"
        );
    }
}
