//! seo_audit library: single-page SEO analysis.
//!
//! This library fetches one web page and extracts a fixed set of on-page SEO
//! signals (title, meta description, social-sharing tags, canonical link,
//! robots directive, heading structure, image alt-text coverage, viewport,
//! structured data, favicon), producing a structured [`Report`] plus
//! human-readable improvement recommendations.
//!
//! # Example
//!
//! ```no_run
//! use seo_audit::{run_audit, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     url: "example.com".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = run_audit(&config).await?;
//! println!("{} recommendations", report.recommendations.len());
//! # Ok(())
//! # }
//! ```
//!
//! Fetching requires a Tokio runtime. The analysis step itself
//! ([`analyze_document`]) is a pure synchronous function and can be used
//! directly on HTML you already have.

#![warn(missing_docs)]

mod analyze;
pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
mod report;
mod utils;

// Re-export public API
pub use analyze::{analyze_document, PageDocument};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{AnalysisError, InitializationError};
pub use fetch::{fetch_document, normalize_url, FetchedDocument};
pub use report::{FieldResult, HeadingLists, ImageStats, Report, Status, TagResult};

use log::info;

/// Runs one full audit: normalize the URL, fetch the page, analyze it.
///
/// Each invocation owns its own client, document, and report; nothing is
/// shared or cached across calls, so concurrent audits need no coordination.
///
/// # Arguments
///
/// * `config` - Audit configuration; `config.url` may omit the scheme
///
/// # Errors
///
/// Returns an [`AnalysisError`] if the URL is missing/invalid or the page
/// cannot be fetched. Once the page is fetched, analysis always succeeds.
pub async fn run_audit(config: &Config) -> Result<Report, AnalysisError> {
    let url = normalize_url(&config.url)?;
    let client = initialization::init_client(config)?;

    let fetched = fetch_document(&client, url).await?;
    info!(
        "Fetched {} ({} bytes), analyzing",
        fetched.domain,
        fetched.body.len()
    );

    let report = analyze_document(&fetched.body, &fetched.url);
    info!(
        "Analysis of {} complete: {} recommendations",
        fetched.domain,
        report.recommendations.len()
    );

    Ok(report)
}
