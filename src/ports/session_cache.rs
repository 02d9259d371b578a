//! SessionCache port - external TTL key/value store for session cookies.

use async_trait::async_trait;
use std::time::Duration;

/// Port for the process-external session cache.
///
/// Values are ordered lists of cookie strings keyed by
/// `"<channel-type-id>.<config-id>.api.token"`. The cache owns expiry;
/// callers pass a TTL on write and never delete explicitly. Concurrent
/// writes to the same key are last-write-wins, which is acceptable since
/// both racing writers hold valid sessions.
#[async_trait]
pub trait SessionCache: Send + Sync {
    /// Returns the cached list for `key`, or `None` when absent/expired.
    async fn retrieve_list(&self, key: &str) -> Result<Option<Vec<String>>, CacheError>;

    /// Stores `values` under `key` with the given time-to-live.
    async fn cache_list(
        &self,
        key: &str,
        values: &[String],
        ttl: Duration,
    ) -> Result<(), CacheError>;
}

/// Errors from the session cache transport.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// The cache backend could not be reached or the command failed.
    #[error("session cache unavailable: {0}")]
    Unavailable(String),
}
