//! Resilience layer - explicit policy objects guarding remote calls.
//!
//! The original design relied on annotation-declared cross-cutting policies;
//! here each primitive is a plain struct parameterized by a named
//! configuration, and [`ResiliencePolicy`] composes them around a call:
//!
//! - [`CircuitBreaker`] - rejects calls while the failure rate is too high
//! - [`RateLimiter`] - caps calls per time window
//! - [`Bulkhead`] - caps concurrent in-flight calls, failing fast
//! - [`RetryPolicy`] - bounded re-attempts with exponential backoff

mod bulkhead;
mod circuit_breaker;
mod policy;
mod rate_limiter;
mod retry;

pub use bulkhead::{Bulkhead, BulkheadConfig};
pub use circuit_breaker::{CircuitBreaker, CircuitBreakerConfig, CircuitState};
pub use policy::{PolicyError, ResilienceConfig, ResiliencePolicy};
pub use rate_limiter::{RateLimiter, RateLimiterConfig};
pub use retry::{RetryConfig, RetryPolicy};
