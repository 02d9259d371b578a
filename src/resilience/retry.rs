//! Bounded retry with exponential backoff.

use serde::Deserialize;
use std::time::Duration;

/// Configuration for retry behavior.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Total attempts including the first call. Must be at least 1.
    pub max_attempts: u32,

    /// Delay before the first retry, in milliseconds.
    pub initial_backoff_millis: u64,

    /// Multiplier applied to the delay after each retry.
    pub backoff_multiplier: f64,

    /// Upper bound on any single delay, in milliseconds.
    pub max_backoff_millis: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff_millis: 100,
            backoff_multiplier: 2.0,
            max_backoff_millis: 2_000,
        }
    }
}

/// Computes backoff delays for transient failures.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    config: RetryConfig,
}

impl RetryPolicy {
    /// Creates a policy from configuration.
    pub fn new(config: RetryConfig) -> Self {
        Self { config }
    }

    /// Total attempts including the first call, never below 1.
    pub fn max_attempts(&self) -> u32 {
        self.config.max_attempts.max(1)
    }

    /// Delay to sleep after the given failed attempt (1-based).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(31);
        let factor = self.config.backoff_multiplier.powi(exponent as i32);
        let millis = (self.config.initial_backoff_millis as f64 * factor)
            .min(self.config.max_backoff_millis as f64);
        Duration::from_millis(millis as u64)
    }
}
