//! Portal API endpoint configuration.

use serde::Deserialize;
use std::time::Duration;

use super::ConfigValidationError;

/// Connection settings for the marketplace portal API.
#[derive(Debug, Clone, Deserialize)]
pub struct PortalApiConfig {
    /// Base URL of the portal API.
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl PortalApiConfig {
    /// Creates a configuration for the given endpoint.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: default_timeout(),
        }
    }

    /// Creates configuration from environment variables.
    ///
    /// Reads:
    /// - `PORTAL_API_BASE_URL`
    /// - `PORTAL_API_TIMEOUT_SECS` (optional, defaults to 10)
    pub fn from_env() -> Result<Self, ConfigValidationError> {
        let base_url = std::env::var("PORTAL_API_BASE_URL")
            .map_err(|_| ConfigValidationError::MissingRequired("PORTAL_API_BASE_URL"))?;
        let timeout_secs = std::env::var("PORTAL_API_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout);

        let config = Self {
            base_url,
            timeout_secs,
        };
        config.validate()?;
        Ok(config)
    }

    /// Request timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validates the endpoint settings.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.base_url.is_empty() {
            return Err(ConfigValidationError::MissingRequired("PORTAL_API_BASE_URL"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigValidationError::InvalidBaseUrl);
        }
        Ok(())
    }
}

fn default_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_applies_default_timeout() {
        let config = PortalApiConfig::new("https://portal.example.com");
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn validation_rejects_empty_base_url() {
        let config = PortalApiConfig::new("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_rejects_non_http_url() {
        let config = PortalApiConfig::new("ftp://portal.example.com");
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidBaseUrl)
        ));
    }

    #[test]
    fn validation_accepts_https_url() {
        let config = PortalApiConfig::new("https://portal.example.com");
        assert!(config.validate().is_ok());
    }
}
