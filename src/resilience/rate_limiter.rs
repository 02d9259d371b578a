//! Fixed-window rate limiter bounding throughput per policy group.
//!
//! A single counter per policy group: the first acquisition starts the
//! window, and the counter resets once the refresh period elapses. Known
//! edge case of fixed windows: bursts straddling a boundary can briefly
//! reach twice the limit, which is acceptable here.

use serde::Deserialize;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Configuration for rate limiter behavior.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateLimiterConfig {
    /// Calls permitted per refresh period.
    pub limit_for_period: u32,

    /// Window length in milliseconds.
    pub refresh_period_millis: u64,
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            limit_for_period: 50,
            refresh_period_millis: 1_000,
        }
    }
}

impl RateLimiterConfig {
    /// Refresh period as a Duration.
    pub fn refresh_period(&self) -> Duration {
        Duration::from_millis(self.refresh_period_millis)
    }
}

#[derive(Debug)]
struct Window {
    count: u32,
    window_start: Instant,
}

/// Thread-safe fixed-window call counter.
#[derive(Debug)]
pub struct RateLimiter {
    config: RateLimiterConfig,
    inner: Mutex<Window>,
}

impl RateLimiter {
    /// Creates a limiter with a fresh window.
    pub fn new(config: RateLimiterConfig) -> Self {
        Self {
            config,
            inner: Mutex::new(Window {
                count: 0,
                window_start: Instant::now(),
            }),
        }
    }

    /// Consumes one permit if the current window has capacity.
    pub fn try_acquire(&self) -> bool {
        let mut window = self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if window.window_start.elapsed() >= self.config.refresh_period() {
            window.count = 0;
            window.window_start = Instant::now();
        }

        if window.count >= self.config.limit_for_period {
            return false;
        }
        window.count += 1;
        true
    }
}
