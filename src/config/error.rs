//! Configuration validation errors.

use thiserror::Error;

/// Problems detected while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    /// A required setting is missing.
    #[error("missing required configuration: {0}")]
    MissingRequired(&'static str),

    /// The portal base URL is not an http(s) URL.
    #[error("PORTAL_API_BASE_URL must start with http:// or https://")]
    InvalidBaseUrl,
}
