//! Adapters - implementations of the ports.
//!
//! Each port ships a production adapter and an in-memory double so the
//! application layer is testable without a container, a portal account,
//! or live infrastructure.

pub mod cache;
pub mod config_store;
pub mod portal;
