//! Portal service - config lookup, session establishment, order validation.
//!
//! All collaborators come in through ports; the resilience policy guards the
//! three protected operations (`connect` and the two status lookups) as one
//! shared policy group. Fallback handling is asymmetric on purpose: a failed
//! `connect` degrades to an unauthenticated connection, while failed status
//! lookups surface a typed service-unavailable error.

use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

use crate::domain::{
    classify, ChannelConfig, OrderStatus, PortalConnection, RawOrderData, SalesChannelId,
    ServiceError, SystemIdentity,
};
use crate::ports::{ConfigStore, ConnectionFactory, DefaultConnectionFactory, PortalClient, SessionCache};
use crate::resilience::{PolicyError, ResiliencePolicy};

/// How long cached portal sessions stay valid.
pub const SESSION_TTL: Duration = Duration::from_secs(30 * 60);

const MSG_NOT_AVAILABLE: &str = "Portal API service is not available";
const MSG_LIMIT_REACHED: &str =
    "Portal API limit has been reached. Please retry after sometime.";
const MSG_SERVICE_ERROR: &str = "Portal API service error";

/// The marketplace portal adapter.
pub struct PortalService {
    configs: Arc<dyn ConfigStore>,
    cache: Arc<dyn SessionCache>,
    portal: Arc<dyn PortalClient>,
    policy: Arc<ResiliencePolicy>,
    connection_factory: Arc<dyn ConnectionFactory>,
}

impl PortalService {
    /// Wires the service with its collaborators and a default connection
    /// factory.
    pub fn new(
        configs: Arc<dyn ConfigStore>,
        cache: Arc<dyn SessionCache>,
        portal: Arc<dyn PortalClient>,
        policy: Arc<ResiliencePolicy>,
    ) -> Self {
        Self {
            configs,
            cache,
            portal,
            policy,
            connection_factory: Arc::new(DefaultConnectionFactory),
        }
    }

    /// Substitutes the connection factory.
    pub fn with_connection_factory(mut self, factory: Arc<dyn ConnectionFactory>) -> Self {
        self.connection_factory = factory;
        self
    }

    /// Resolves the portal configuration for a sales channel.
    pub async fn get_config(&self, channel: &SalesChannelId) -> Result<ChannelConfig, ServiceError> {
        match self.configs.find_by_sales_channel(channel).await? {
            Some(config) => Ok(config),
            None => Err(ServiceError::EntityNotFound(*channel)),
        }
    }

    /// Establishes a portal session, reusing a cached one when available.
    ///
    /// Guarded by the resilience policy. Circuit-open and bulkhead-full
    /// rejections surface as `ServiceUnavailable`; any other failure
    /// degrades gracefully to a fresh unauthenticated connection, leaving
    /// the caller to inspect `is_logged_in`.
    pub async fn connect(&self, config: &ChannelConfig) -> Result<PortalConnection, ServiceError> {
        match self
            .policy
            .execute("connect", || self.try_connect(config))
            .await
        {
            Ok(connection) => Ok(connection),
            Err(err) => {
                error!(
                    operation = "connect",
                    config_id = %config.id,
                    error = %err,
                    "connect fallback triggered"
                );
                match err {
                    PolicyError::CircuitOpen(_) => {
                        Err(ServiceError::ServiceUnavailable(MSG_NOT_AVAILABLE.into()))
                    }
                    PolicyError::BulkheadFull(_) => {
                        Err(ServiceError::ServiceUnavailable(MSG_LIMIT_REACHED.into()))
                    }
                    _ => Ok(self.connection_factory.create()),
                }
            }
        }
    }

    /// Classifies an order by tracking number.
    ///
    /// Checks the primary status lookup first and falls back to the
    /// cancelled-orders view when the portal returned nothing. A payload
    /// whose status code is outside the active allow-list classifies as
    /// cancelled; two empty lookups classify as not-found.
    pub async fn validate_order(
        &self,
        connection: &PortalConnection,
        tracking_number: &str,
    ) -> Result<OrderStatus, ServiceError> {
        let mut data = self.check_order_status(connection, tracking_number).await?;
        if data.is_empty() {
            data = self
                .check_cancelled_order_status(connection, tracking_number)
                .await?;
        }
        if data.is_empty() {
            return Ok(OrderStatus::NotFound);
        }
        Ok(classify(&data))
    }

    /// Primary order-status lookup, guarded by the resilience policy.
    pub async fn check_order_status(
        &self,
        connection: &PortalConnection,
        tracking_number: &str,
    ) -> Result<RawOrderData, ServiceError> {
        self.guarded_lookup("check_order_status", || {
            self.portal.get_order_status(connection, tracking_number)
        })
        .await
    }

    /// Cancelled-orders lookup, guarded by the resilience policy.
    pub async fn check_cancelled_order_status(
        &self,
        connection: &PortalConnection,
        tracking_number: &str,
    ) -> Result<RawOrderData, ServiceError> {
        self.guarded_lookup("check_cancelled_order_status", || {
            self.portal.get_cancelled_order(connection, tracking_number)
        })
        .await
    }

    async fn try_connect(
        &self,
        config: &ChannelConfig,
    ) -> Result<PortalConnection, crate::ports::PortalError> {
        let mut connection = self.connection_factory.create();

        let key = session_token_key(config);
        let cookies = self.cache.retrieve_list(&key).await?;
        match cookies {
            Some(cookies) if !cookies.is_empty() => {
                connection.set_cookies(cookies);
                connection.set_login_successful(true);
            }
            _ => {
                let login = self.portal.login(config).await?;
                if login.successful {
                    self.cache.cache_list(&key, &login.cookies, SESSION_TTL).await?;
                }
                info!(
                    config_id = %config.id,
                    logged_in = login.successful,
                    "portal connector status"
                );
                connection.set_cookies(login.cookies);
                connection.set_login_successful(login.successful);
            }
        }
        Ok(connection)
    }

    async fn guarded_lookup<F, Fut>(
        &self,
        operation: &str,
        call: F,
    ) -> Result<RawOrderData, ServiceError>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<RawOrderData, crate::ports::PortalError>>,
    {
        match self.policy.execute(operation, call).await {
            Ok(data) => Ok(data),
            Err(err) => {
                error!(operation, error = %err, "order lookup fallback triggered");
                let message = match err {
                    PolicyError::CircuitOpen(_) => MSG_NOT_AVAILABLE,
                    PolicyError::BulkheadFull(_) => MSG_LIMIT_REACHED,
                    _ => MSG_SERVICE_ERROR,
                };
                Err(ServiceError::ServiceUnavailable(message.into()))
            }
        }
    }
}

/// Cache key for one channel's portal session:
/// `"<channel-type-id>.<config-id>.api.token"`.
fn session_token_key(config: &ChannelConfig) -> String {
    format!(
        "{}.{}.api.token",
        SystemIdentity::ChannelPortal.id(),
        config.id
    )
}
