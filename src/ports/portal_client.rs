//! PortalClient port - raw remote calls to the marketplace portal.
//!
//! The client is a pure remote-call wrapper: it owns no caching and no
//! resilience policy. Those concerns live in the application layer and in
//! `resilience::ResiliencePolicy` respectively.

use async_trait::async_trait;

use crate::domain::{ChannelConfig, PortalConnection, RawOrderData};
use crate::ports::CacheError;

/// Outcome of a live portal login.
#[derive(Debug, Clone, Default)]
pub struct LoginResult {
    /// Whether the portal accepted the credentials.
    pub successful: bool,
    /// Session cookies issued by the portal, in response order.
    pub cookies: Vec<String>,
}

/// Port for the portal's remote API.
#[async_trait]
pub trait PortalClient: Send + Sync {
    /// Performs a live login with the channel's credentials.
    ///
    /// A rejected login is `Ok` with `successful == false`; `Err` is
    /// reserved for transport-level failures.
    async fn login(&self, config: &ChannelConfig) -> Result<LoginResult, PortalError>;

    /// Looks up an order by tracking number (primary lookup).
    ///
    /// An empty payload means the portal does not know the order under
    /// this lookup.
    async fn get_order_status(
        &self,
        connection: &PortalConnection,
        tracking_number: &str,
    ) -> Result<RawOrderData, PortalError>;

    /// Looks up an order in the cancelled-orders view (secondary lookup).
    async fn get_cancelled_order(
        &self,
        connection: &PortalConnection,
        tracking_number: &str,
    ) -> Result<RawOrderData, PortalError>;
}

/// Transient failures from a protected remote operation.
///
/// All variants are retried by the resilience policy before the fallback
/// decision is made.
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    /// The portal could not be reached or the request failed in transit.
    #[error("portal request failed: {0}")]
    Network(String),

    /// The portal answered with something the adapter cannot interpret.
    #[error("unexpected portal response: {0}")]
    UnexpectedResponse(String),

    /// The session cache failed while establishing a connection.
    #[error("session cache error: {0}")]
    Cache(#[from] CacheError),
}
