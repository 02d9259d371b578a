//! Redis-backed session cache for production deployments.
//!
//! Cookies are stored as a Redis list (RPUSH preserves portal order) with
//! EXPIRE owning the TTL. The key is replaced atomically on write via a
//! pipeline, so a concurrent reader sees either the old or the new session,
//! never a partial list.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use std::time::Duration;

use crate::ports::{CacheError, SessionCache};

/// Session cache on a shared Redis instance.
#[derive(Clone)]
pub struct RedisSessionCache {
    conn: MultiplexedConnection,
}

impl RedisSessionCache {
    /// Wraps an established multiplexed connection.
    pub fn new(conn: MultiplexedConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl SessionCache for RedisSessionCache {
    async fn retrieve_list(&self, key: &str) -> Result<Option<Vec<String>>, CacheError> {
        let mut conn = self.conn.clone();
        let values: Vec<String> = conn
            .lrange(key, 0, -1)
            .await
            .map_err(|e: redis::RedisError| CacheError::Unavailable(e.to_string()))?;

        if values.is_empty() {
            Ok(None)
        } else {
            Ok(Some(values))
        }
    }

    async fn cache_list(
        &self,
        key: &str,
        values: &[String],
        ttl: Duration,
    ) -> Result<(), CacheError> {
        if values.is_empty() {
            return Ok(());
        }

        let mut conn = self.conn.clone();
        redis::pipe()
            .atomic()
            .del(key)
            .ignore()
            .rpush(key, values)
            .ignore()
            .expire(key, ttl.as_secs() as i64)
            .ignore()
            .query_async::<_, ()>(&mut conn)
            .await
            .map_err(|e: redis::RedisError| CacheError::Unavailable(e.to_string()))?;

        Ok(())
    }
}
