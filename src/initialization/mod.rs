//! Initialization of shared resources.
//!
//! This module provides functions to initialize:
//! - The HTTP client (timeout, User-Agent)
//! - The logger (plain colored or JSON format)

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
