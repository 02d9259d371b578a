//! Sales channel identity and per-channel portal configuration.

use secrecy::SecretString;
use serde::Deserialize;

use super::{ConfigId, SalesChannelId};

/// Fixed identifiers for the external systems this backend integrates with.
///
/// The identifier participates in cache key construction, so existing cached
/// sessions depend on these values staying stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemIdentity {
    /// The marketplace portal served by this adapter.
    ChannelPortal,
}

impl SystemIdentity {
    /// Returns the stable string identifier for this system.
    pub fn id(&self) -> &'static str {
        match self {
            SystemIdentity::ChannelPortal => "portal",
        }
    }
}

/// Portal account configuration for one sales channel.
///
/// Owned by the external configuration store; read-only to this adapter.
/// Exactly one config exists per sales channel, and absence is an error
/// surfaced by the config lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelConfig {
    /// Identifier of this configuration record.
    pub id: ConfigId,

    /// The sales channel this configuration belongs to.
    pub sales_channel: SalesChannelId,

    /// Merchant account identifier on the portal.
    pub merchant_id: String,

    /// Portal login username.
    pub username: String,

    /// Portal login password.
    pub password: SecretString,
}

impl ChannelConfig {
    /// Creates a configuration record.
    pub fn new(
        id: ConfigId,
        sales_channel: SalesChannelId,
        merchant_id: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id,
            sales_channel,
            merchant_id: merchant_id.into(),
            username: username.into(),
            password: SecretString::new(password.into()),
        }
    }
}
