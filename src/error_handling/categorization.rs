//! Fetch error categorization.
//!
//! Maps a `reqwest::Error` to the single human-readable cause string carried
//! by [`AnalysisError::Fetch`](super::AnalysisError::Fetch).

/// Categorizes a `reqwest::Error` into a human-readable cause.
///
/// HTTP status codes are checked first (the error produced by
/// `error_for_status` carries one), then the network-level error kinds.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// A short cause string suitable for surfacing to the caller unchanged.
pub fn fetch_error_cause(error: &reqwest::Error) -> String {
    if let Some(status) = error.status() {
        return match status.as_u16() {
            403 => "request was blocked (403 Forbidden)".to_string(),
            404 => "page not found (404)".to_string(),
            429 => "too many requests (429)".to_string(),
            code if status.is_client_error() => format!("client error ({code})"),
            code if status.is_server_error() => format!("server error ({code})"),
            code => format!("unexpected HTTP status ({code})"),
        };
    }

    if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_connect() {
        format!("connection failed: {error}")
    } else if error.is_redirect() {
        "too many redirects".to_string()
    } else if error.is_body() || error.is_decode() {
        format!("could not read response body: {error}")
    } else if error.is_builder() {
        format!("request could not be built: {error}")
    } else {
        error.to_string()
    }
}

// Note: constructing reqwest::Error values for the network-level branches
// requires a live connection or a mock server, so those paths are exercised
// through the status-code branch (constructible via error_for_status in
// integration contexts) and through real-world usage. The categorization
// logic itself is a straight chain of reqwest's own error predicates.
