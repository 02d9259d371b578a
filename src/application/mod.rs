//! Application layer - the portal adapter's use cases.

mod portal_service;

pub use portal_service::{PortalService, SESSION_TTL};
