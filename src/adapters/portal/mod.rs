//! Portal client adapters.

mod http_client;
mod mock_client;

pub use http_client::HttpPortalClient;
pub use mock_client::{LoginBehavior, MockPortalClient};
