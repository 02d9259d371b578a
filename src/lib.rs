//! Portal Bridge - Marketplace order-status integration adapter.
//!
//! Connects an order-management backend to a third-party marketplace portal:
//! authenticates against the portal, caches the resulting session in an
//! external TTL store, and classifies raw portal order statuses into the
//! internal order-status enumeration. Every remote call is guarded by an
//! explicit resilience policy (circuit breaker, rate limiter, bulkhead,
//! retry).

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod resilience;
