//! Single-page retrieval.
//!
//! This module turns a user-supplied URL string into the raw HTML of the
//! page: normalization/validation first, then one GET with a browser-like
//! User-Agent and a bounded timeout. There are no retries; any failure is
//! reported as a single categorized cause.

mod url;

use log::debug;

use crate::error_handling::{fetch_error_cause, AnalysisError};

pub use self::url::normalize_url;

/// A fetched page, ready for analysis.
///
/// Owned exclusively by one analysis run and discarded after parsing.
#[derive(Debug)]
pub struct FetchedDocument {
    /// The absolute URL that was requested.
    pub url: ::url::Url,
    /// The host component of the requested URL.
    pub domain: String,
    /// The raw HTML body.
    pub body: String,
}

/// Fetches a page with a single GET request.
///
/// Any non-success HTTP status is treated as a failure (redirects are
/// followed by the client, so a 3xx never surfaces here).
///
/// # Arguments
///
/// * `client` - The configured HTTP client (timeout, User-Agent)
/// * `url` - The normalized absolute URL to fetch
///
/// # Errors
///
/// Returns `AnalysisError::Fetch` carrying a human-readable cause for any
/// network error, timeout, DNS failure, or non-success status.
pub async fn fetch_document(
    client: &reqwest::Client,
    url: ::url::Url,
) -> Result<FetchedDocument, AnalysisError> {
    debug!("Fetching {url}");

    let response = client
        .get(url.clone())
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|e| AnalysisError::Fetch {
            url: url.to_string(),
            cause: fetch_error_cause(&e),
        })?;

    let status = response.status();
    let body = response.text().await.map_err(|e| AnalysisError::Fetch {
        url: url.to_string(),
        cause: fetch_error_cause(&e),
    })?;

    debug!("Fetched {url}: {status}, {} bytes", body.len());

    // Host presence is guaranteed by normalize_url
    let domain = url.host_str().unwrap_or_default().to_string();

    Ok(FetchedDocument { url, domain, body })
}
