//! Domain layer - value objects and pure classification logic.
//!
//! Nothing in this module performs I/O. The application layer wires these
//! types to the ports; the adapters never construct them directly except
//! when mapping external rows/payloads.

mod channel;
mod connection;
mod errors;
mod ids;
mod order_status;
mod timestamp;

pub use channel::{ChannelConfig, SystemIdentity};
pub use connection::PortalConnection;
pub use errors::ServiceError;
pub use ids::{ConfigId, SalesChannelId};
pub use order_status::{classify, OrderStatus, RawOrderData, ACTIVE_STATUS_CODES};
pub use timestamp::Timestamp;
