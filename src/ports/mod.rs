//! Ports - interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! adapter core and the outside world. Adapters implement these ports, and
//! tests substitute in-memory doubles without a runtime container.
//!
//! - `ConfigStore` - per-sales-channel portal configuration lookup
//! - `SessionCache` - external TTL key/value store for session cookies
//! - `PortalClient` - raw remote calls to the marketplace portal
//! - `ConnectionFactory` - seam for constructing fresh portal connections

mod config_store;
mod connection_factory;
mod portal_client;
mod session_cache;

pub use config_store::{ConfigStore, ConfigStoreError};
pub use connection_factory::{ConnectionFactory, DefaultConnectionFactory};
pub use portal_client::{LoginResult, PortalClient, PortalError};
pub use session_cache::{CacheError, SessionCache};
