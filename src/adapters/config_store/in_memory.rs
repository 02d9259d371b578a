//! In-memory configuration store for tests.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::{ChannelConfig, SalesChannelId};
use crate::ports::{ConfigStore, ConfigStoreError};

/// Map-backed config store. One config per sales channel, like the real
/// store guarantees.
#[derive(Debug, Default)]
pub struct InMemoryConfigStore {
    configs: RwLock<HashMap<SalesChannelId, ChannelConfig>>,
}

impl InMemoryConfigStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the config for its sales channel.
    pub async fn insert(&self, config: ChannelConfig) {
        let mut configs = self.configs.write().await;
        configs.insert(config.sales_channel, config);
    }
}

#[async_trait]
impl ConfigStore for InMemoryConfigStore {
    async fn find_by_sales_channel(
        &self,
        channel: &SalesChannelId,
    ) -> Result<Option<ChannelConfig>, ConfigStoreError> {
        let configs = self.configs.read().await;
        Ok(configs.get(channel).cloned())
    }
}
