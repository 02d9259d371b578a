//! PostgreSQL configuration store adapter.
//!
//! Reads the `channel_configs` table owned by the surrounding application.
//! Runtime-bound queries keep this crate buildable without a database at
//! compile time.

use async_trait::async_trait;
use sqlx::postgres::PgPool;
use sqlx::FromRow;
use uuid::Uuid;

use crate::domain::{ChannelConfig, ConfigId, SalesChannelId};
use crate::ports::{ConfigStore, ConfigStoreError};

#[derive(Debug, FromRow)]
struct ChannelConfigRow {
    id: Uuid,
    sales_channel_id: Uuid,
    merchant_id: String,
    username: String,
    password: String,
}

impl From<ChannelConfigRow> for ChannelConfig {
    fn from(row: ChannelConfigRow) -> Self {
        ChannelConfig::new(
            ConfigId::from_uuid(row.id),
            SalesChannelId::from_uuid(row.sales_channel_id),
            row.merchant_id,
            row.username,
            row.password,
        )
    }
}

/// Config store backed by the application's PostgreSQL database.
#[derive(Clone)]
pub struct PostgresConfigStore {
    pool: PgPool,
}

impl PostgresConfigStore {
    /// Wraps an established connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConfigStore for PostgresConfigStore {
    async fn find_by_sales_channel(
        &self,
        channel: &SalesChannelId,
    ) -> Result<Option<ChannelConfig>, ConfigStoreError> {
        let row = sqlx::query_as::<_, ChannelConfigRow>(
            r#"
            SELECT id, sales_channel_id, merchant_id, username, password
            FROM channel_configs
            WHERE sales_channel_id = $1
            "#,
        )
        .bind(channel.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ConfigStoreError::Unavailable(e.to_string()))?;

        Ok(row.map(ChannelConfig::from))
    }
}
