//! In-memory session cache for testing and single-process development.
//!
//! Honors TTLs on read; expired entries behave exactly like absent ones.
//! Not suitable for production, where sessions must be shared across
//! processes.

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::domain::Timestamp;
use crate::ports::{CacheError, SessionCache};

#[derive(Debug, Clone)]
struct CacheRecord {
    values: Vec<String>,
    expires_at: Timestamp,
}

/// Map-backed session cache with TTL semantics.
#[derive(Debug, Default)]
pub struct InMemorySessionCache {
    entries: RwLock<HashMap<String, CacheRecord>>,
}

impl InMemorySessionCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expiry of a live entry, for assertions on write TTLs.
    pub async fn expires_at(&self, key: &str) -> Option<Timestamp> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|record| record.expires_at.is_after(&Timestamp::now()))
            .map(|record| record.expires_at)
    }
}

#[async_trait]
impl SessionCache for InMemorySessionCache {
    async fn retrieve_list(&self, key: &str) -> Result<Option<Vec<String>>, CacheError> {
        let entries = self.entries.read().await;
        Ok(entries
            .get(key)
            .filter(|record| record.expires_at.is_after(&Timestamp::now()))
            .map(|record| record.values.clone()))
    }

    async fn cache_list(
        &self,
        key: &str,
        values: &[String],
        ttl: Duration,
    ) -> Result<(), CacheError> {
        let mut entries = self.entries.write().await;
        entries.insert(
            key.to_string(),
            CacheRecord {
                values: values.to_vec(),
                expires_at: Timestamp::now().plus(ttl),
            },
        );
        Ok(())
    }
}
