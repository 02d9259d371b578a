//! Configuration for the portal adapter.
//!
//! Resilience policy parameters live next to the policy objects in
//! `crate::resilience`; this module covers the portal endpoint itself.

mod error;
mod portal;

pub use error::ConfigValidationError;
pub use portal::PortalApiConfig;
