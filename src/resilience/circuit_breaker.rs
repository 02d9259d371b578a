//! Circuit breaker over a rolling window of call outcomes.
//!
//! ## States
//!
//! - **Closed**: normal operation, requests flow through
//! - **Open**: failure rate exceeded the threshold, requests rejected
//!   immediately without calling the service
//! - **Half-Open**: testing recovery, a bounded number of probes allowed
//!
//! ## Transitions
//!
//! ```text
//! Closed --[failure rate >= threshold over window]--> Open
//! Open --[recovery_timeout elapsed]--> Half-Open
//! Half-Open --[success_threshold reached]--> Closed
//! Half-Open --[any failure]--> Open
//! ```

use serde::Deserialize;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::warn;

/// Circuit breaker states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircuitState {
    /// Normal operation - requests flow through to the service.
    Closed,

    /// Failure rate too high - requests rejected without calling the service.
    Open,

    /// Testing if the service recovered - limited probes allowed through.
    HalfOpen,
}

/// Configuration for circuit breaker behavior.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CircuitBreakerConfig {
    /// Failure rate (0.0..=1.0) over the window that opens the circuit.
    pub failure_rate_threshold: f64,

    /// Number of most recent call outcomes considered.
    pub sliding_window_size: usize,

    /// Minimum recorded calls before the failure rate is evaluated.
    pub minimum_calls: u32,

    /// Seconds to wait before testing recovery (moving to half-open).
    pub recovery_timeout_secs: u64,

    /// Successes in half-open state needed to close the circuit.
    pub success_threshold: u32,

    /// Maximum concurrent probes in half-open state.
    pub half_open_max_requests: u32,
}

impl Default for CircuitBreakerConfig {
    fn default() -> Self {
        Self {
            failure_rate_threshold: 0.5,
            sliding_window_size: 10,
            minimum_calls: 5,
            recovery_timeout_secs: 30,
            success_threshold: 3,
            half_open_max_requests: 1,
        }
    }
}

impl CircuitBreakerConfig {
    /// Recovery timeout as a Duration.
    pub fn recovery_timeout(&self) -> Duration {
        Duration::from_secs(self.recovery_timeout_secs)
    }
}

#[derive(Debug)]
struct BreakerState {
    state: CircuitState,
    /// Rolling outcomes, `true` = failure.
    window: VecDeque<bool>,
    opened_at: Option<Instant>,
    half_open_successes: u32,
    half_open_in_flight: u32,
}

/// Thread-safe circuit breaker shared by all operations of one policy group.
#[derive(Debug)]
pub struct CircuitBreaker {
    name: String,
    config: CircuitBreakerConfig,
    inner: Mutex<BreakerState>,
}

impl CircuitBreaker {
    /// Creates a closed breaker for the named policy group.
    pub fn new(name: impl Into<String>, config: CircuitBreakerConfig) -> Self {
        Self {
            name: name.into(),
            config,
            inner: Mutex::new(BreakerState {
                state: CircuitState::Closed,
                window: VecDeque::new(),
                opened_at: None,
                half_open_successes: 0,
                half_open_in_flight: 0,
            }),
        }
    }

    /// Current state of the circuit.
    pub fn state(&self) -> CircuitState {
        self.lock().state
    }

    /// Checks whether a call may proceed, reserving a probe slot when
    /// half-open. Every `true` must be paired with exactly one
    /// `record_success` or `record_failure`.
    pub fn should_allow(&self) -> bool {
        let mut inner = self.lock();
        match inner.state {
            CircuitState::Closed => true,
            CircuitState::Open => {
                let elapsed = inner
                    .opened_at
                    .map(|at| at.elapsed() >= self.config.recovery_timeout())
                    .unwrap_or(true);
                if elapsed {
                    inner.state = CircuitState::HalfOpen;
                    inner.half_open_successes = 0;
                    inner.half_open_in_flight = 1;
                    true
                } else {
                    false
                }
            }
            CircuitState::HalfOpen => {
                if inner.half_open_in_flight < self.config.half_open_max_requests {
                    inner.half_open_in_flight += 1;
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Records a successful call.
    pub fn record_success(&self) {
        let mut inner = self.lock();
        match inner.state {
            CircuitState::Closed => self.push_outcome(&mut inner, false),
            CircuitState::HalfOpen => {
                inner.half_open_in_flight = inner.half_open_in_flight.saturating_sub(1);
                inner.half_open_successes += 1;
                if inner.half_open_successes >= self.config.success_threshold {
                    inner.state = CircuitState::Closed;
                    inner.window.clear();
                    inner.opened_at = None;
                }
            }
            CircuitState::Open => {}
        }
    }

    /// Records a failed call.
    pub fn record_failure(&self) {
        let mut inner = self.lock();
        match inner.state {
            CircuitState::Closed => {
                self.push_outcome(&mut inner, true);
                let total = inner.window.len() as u32;
                if total >= self.config.minimum_calls {
                    let failures = inner.window.iter().filter(|failed| **failed).count();
                    let rate = failures as f64 / total as f64;
                    if rate >= self.config.failure_rate_threshold {
                        warn!(
                            breaker = %self.name,
                            failure_rate = rate,
                            window = total,
                            "failure rate threshold exceeded, opening circuit"
                        );
                        Self::open(&mut inner);
                    }
                }
            }
            CircuitState::HalfOpen => {
                inner.half_open_in_flight = inner.half_open_in_flight.saturating_sub(1);
                warn!(breaker = %self.name, "probe failed in half-open state, reopening circuit");
                Self::open(&mut inner);
            }
            CircuitState::Open => {}
        }
    }

    /// Forces the circuit open. Administrative operation, also used to
    /// exercise rejection paths in tests.
    pub fn force_open(&self) {
        Self::open(&mut self.lock());
    }

    /// Forces the circuit back to closed, clearing recorded outcomes.
    pub fn reset(&self) {
        let mut inner = self.lock();
        inner.state = CircuitState::Closed;
        inner.window.clear();
        inner.opened_at = None;
        inner.half_open_successes = 0;
        inner.half_open_in_flight = 0;
    }

    fn open(inner: &mut BreakerState) {
        inner.state = CircuitState::Open;
        inner.opened_at = Some(Instant::now());
        inner.window.clear();
        inner.half_open_successes = 0;
        inner.half_open_in_flight = 0;
    }

    fn push_outcome(&self, inner: &mut BreakerState, failed: bool) {
        inner.window.push_back(failed);
        while inner.window.len() > self.config.sliding_window_size {
            inner.window.pop_front();
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BreakerState> {
        // A poisoned lock only happens if a holder panicked; the state is
        // plain data, so continuing with it is safe.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
