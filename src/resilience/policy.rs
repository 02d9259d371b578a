//! Composed resilience policy guarding the portal's protected operations.
//!
//! One policy instance (a named policy group) is shared by `connect` and
//! both order-status lookups, so the breaker, limiter, and bulkhead see the
//! portal's health as a whole rather than per operation.

use serde::Deserialize;
use std::future::Future;
use thiserror::Error;
use tracing::{error, warn};

use crate::ports::PortalError;

use super::{
    Bulkhead, BulkheadConfig, CircuitBreaker, CircuitBreakerConfig, RateLimiter,
    RateLimiterConfig, RetryConfig, RetryPolicy,
};

/// Configuration for one named policy group.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResilienceConfig {
    /// Policy group identifier, used in rejection messages and logs.
    pub name: String,
    pub circuit_breaker: CircuitBreakerConfig,
    pub rate_limiter: RateLimiterConfig,
    pub bulkhead: BulkheadConfig,
    pub retry: RetryConfig,
}

impl Default for ResilienceConfig {
    fn default() -> Self {
        Self {
            name: "portal-api".to_string(),
            circuit_breaker: CircuitBreakerConfig::default(),
            rate_limiter: RateLimiterConfig::default(),
            bulkhead: BulkheadConfig::default(),
            retry: RetryConfig::default(),
        }
    }
}

/// Failure of a protected call, after policy checks and retries.
#[derive(Debug, Error)]
pub enum PolicyError {
    /// The circuit breaker is open; the remote call was not attempted.
    #[error("call not permitted: circuit '{0}' is open")]
    CircuitOpen(String),

    /// The bulkhead has no free slot; the remote call was not attempted.
    #[error("bulkhead '{0}' is full")]
    BulkheadFull(String),

    /// The rate limiter rejected the call for this window.
    #[error("rate limit exceeded for '{0}'")]
    RateLimited(String),

    /// The remote call itself failed, retries exhausted.
    #[error(transparent)]
    Inner(#[from] PortalError),
}

/// Circuit breaker + rate limiter + bulkhead + retry around a remote call.
#[derive(Debug)]
pub struct ResiliencePolicy {
    name: String,
    breaker: CircuitBreaker,
    limiter: RateLimiter,
    bulkhead: Bulkhead,
    retry: RetryPolicy,
}

impl ResiliencePolicy {
    /// Builds the policy group from configuration.
    pub fn new(config: ResilienceConfig) -> Self {
        Self {
            breaker: CircuitBreaker::new(config.name.clone(), config.circuit_breaker),
            limiter: RateLimiter::new(config.rate_limiter),
            bulkhead: Bulkhead::new(config.bulkhead),
            retry: RetryPolicy::new(config.retry),
            name: config.name,
        }
    }

    /// Policy group identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The shared circuit breaker, exposed for administrative reset and
    /// for tests that need to drive the breaker into a given state.
    pub fn circuit_breaker(&self) -> &CircuitBreaker {
        &self.breaker
    }

    /// Runs `call` under the full policy.
    ///
    /// Transient inner failures are retried with backoff up to the
    /// configured attempt count. Policy rejections (circuit open, bulkhead
    /// full, rate limited) fail immediately and are never retried; the
    /// breaker only records outcomes of calls that actually ran.
    pub async fn execute<T, F, Fut>(&self, operation: &str, call: F) -> Result<T, PolicyError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, PortalError>>,
    {
        let mut attempt = 1u32;
        loop {
            match self.try_once(&call).await {
                Ok(value) => return Ok(value),
                Err(PolicyError::Inner(err)) if attempt < self.retry.max_attempts() => {
                    let delay = self.retry.delay_for(attempt);
                    warn!(
                        policy = %self.name,
                        operation,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "transient failure, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => {
                    error!(
                        policy = %self.name,
                        operation,
                        attempt,
                        error = %err,
                        "protected call failed"
                    );
                    return Err(err);
                }
            }
        }
    }

    async fn try_once<T, F, Fut>(&self, call: &F) -> Result<T, PolicyError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, PortalError>>,
    {
        if !self.limiter.try_acquire() {
            return Err(PolicyError::RateLimited(self.name.clone()));
        }
        let _permit = self
            .bulkhead
            .try_acquire()
            .ok_or_else(|| PolicyError::BulkheadFull(self.name.clone()))?;
        if !self.breaker.should_allow() {
            return Err(PolicyError::CircuitOpen(self.name.clone()));
        }

        match call().await {
            Ok(value) => {
                self.breaker.record_success();
                Ok(value)
            }
            Err(err) => {
                self.breaker.record_failure();
                Err(PolicyError::Inner(err))
            }
        }
    }
}
