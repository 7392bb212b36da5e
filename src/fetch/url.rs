//! URL validation and normalization.

use url::Url;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::AnalysisError;

/// Validates and normalizes a user-supplied URL.
///
/// Adds an `https://` prefix if the scheme is missing, then parses and
/// validates that the result is an absolute http/https URL with a host.
/// Rejects empty input and URLs longer than `MAX_URL_LENGTH`.
///
/// # Arguments
///
/// * `raw` - The URL string as supplied by the caller (may omit the scheme)
///
/// # Errors
///
/// - `AnalysisError::MissingUrl` for empty or whitespace-only input
/// - `AnalysisError::InvalidUrl` for oversized, unparseable, non-http(s), or
///   host-less input
pub fn normalize_url(raw: &str) -> Result<Url, AnalysisError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AnalysisError::MissingUrl);
    }

    if trimmed.len() > MAX_URL_LENGTH {
        return Err(AnalysisError::InvalidUrl {
            url: format!("{}...", &trimmed[..50.min(trimmed.len())]),
            reason: format!("exceeds maximum length ({} > {MAX_URL_LENGTH})", trimmed.len()),
        });
    }

    // Normalize: add https:// prefix if the scheme is missing. An explicit
    // non-http(s) scheme is rejected rather than prefixed (prepending would
    // silently turn "ftp://example.com" into a URL with host "ftp").
    let candidate = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else if let Some((scheme, _)) = trimmed.split_once("://") {
        return Err(AnalysisError::InvalidUrl {
            url: trimmed.to_string(),
            reason: format!("unsupported scheme '{scheme}'"),
        });
    } else {
        format!("https://{trimmed}")
    };

    let parsed = Url::parse(&candidate).map_err(|e| AnalysisError::InvalidUrl {
        url: trimmed.to_string(),
        reason: e.to_string(),
    })?;

    if parsed.host_str().is_none() {
        return Err(AnalysisError::InvalidUrl {
            url: trimmed.to_string(),
            reason: "missing host".to_string(),
        });
    }

    Ok(parsed)
}
