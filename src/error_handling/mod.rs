//! Error handling.
//!
//! This module provides:
//! - Error type definitions for analysis and startup failures
//! - Categorization of fetch errors into human-readable cause strings
//!
//! The taxonomy is deliberately small:
//! - **Input errors**: the supplied URL is missing or unusable — surfaced
//!   before any network access
//! - **Fetch errors**: network failure, timeout, DNS failure, or a non-success
//!   HTTP status — one descriptive message, no retries
//!
//! Parsing is never an error: once HTML is in hand, analysis always produces
//! a complete report.

mod categorization;
mod types;

// Re-export public API
pub use categorization::fetch_error_cause;
pub use types::{AnalysisError, InitializationError};
