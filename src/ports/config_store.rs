//! ConfigStore port - per-sales-channel configuration lookup.

use async_trait::async_trait;

use crate::domain::{ChannelConfig, SalesChannelId};

/// Port for resolving the portal configuration of a sales channel.
///
/// The store owns the records; this adapter only reads them. `Ok(None)`
/// means no config exists for the channel, which the application layer
/// turns into an entity-not-found error.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Finds the configuration for the given sales channel, if any.
    async fn find_by_sales_channel(
        &self,
        channel: &SalesChannelId,
    ) -> Result<Option<ChannelConfig>, ConfigStoreError>;
}

/// Errors from the configuration store transport.
#[derive(Debug, thiserror::Error)]
pub enum ConfigStoreError {
    /// The backing store could not be reached or the query failed.
    #[error("config store unavailable: {0}")]
    Unavailable(String),
}
