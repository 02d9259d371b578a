//! Error taxonomy exposed to callers of the adapter.

use thiserror::Error;

use super::SalesChannelId;
use crate::ports::ConfigStoreError;

/// Errors surfaced by the portal adapter's public operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No configuration record exists for the sales channel. Never retried.
    #[error("Failed to locate channel config for sales channel {0}")]
    EntityNotFound(SalesChannelId),

    /// The portal cannot be used right now: circuit open, bulkhead full, or
    /// a status lookup failed after retries. The message is caller-facing.
    #[error("{0}")]
    ServiceUnavailable(String),

    /// The configuration store itself failed (not a missing record).
    #[error("config store error: {0}")]
    ConfigStore(#[from] ConfigStoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_not_found_names_the_lookup() {
        let err = ServiceError::EntityNotFound(SalesChannelId::new());
        assert!(err.to_string().contains("Failed to locate channel config"));
    }

    #[test]
    fn service_unavailable_carries_its_message() {
        let err = ServiceError::ServiceUnavailable("Portal API service error".into());
        assert_eq!(err.to_string(), "Portal API service error");
    }
}
