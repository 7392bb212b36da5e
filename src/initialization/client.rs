//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::AnalysisError;

/// Initializes the HTTP client.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration (a desktop-browser value by
///   default, so sites that reject unknown agents remain reachable)
/// - Whole-request timeout from the configuration
/// - Redirect following enabled (reqwest's default policy)
///
/// # Arguments
///
/// * `config` - Configuration containing user-agent and timeout settings
///
/// # Returns
///
/// A configured HTTP client ready for making requests.
///
/// # Errors
///
/// Returns `AnalysisError::ClientInit` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, AnalysisError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_default_config() {
        let config = Config::default();
        assert!(init_client(&config).is_ok());
    }

    #[test]
    fn test_init_client_custom_user_agent() {
        let config = Config {
            user_agent: "test-agent/1.0".to_string(),
            ..Default::default()
        };
        assert!(init_client(&config).is_ok());
    }
}
