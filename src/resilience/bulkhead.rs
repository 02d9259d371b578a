//! Bulkhead capping concurrent in-flight calls per policy group.
//!
//! Calls beyond the cap fail fast rather than queueing: waiting callers
//! would otherwise pile up behind a slow portal and exhaust the caller's
//! own resources.

use serde::Deserialize;
use tokio::sync::{Semaphore, SemaphorePermit};

/// Configuration for bulkhead behavior.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BulkheadConfig {
    /// Maximum concurrent in-flight calls.
    pub max_concurrent_calls: u32,
}

impl Default for BulkheadConfig {
    fn default() -> Self {
        Self {
            max_concurrent_calls: 25,
        }
    }
}

/// Semaphore-backed concurrency cap. The permit guards the whole remote
/// call; dropping it releases the slot.
#[derive(Debug)]
pub struct Bulkhead {
    semaphore: Semaphore,
}

impl Bulkhead {
    /// Creates a bulkhead with all permits available.
    pub fn new(config: BulkheadConfig) -> Self {
        Self {
            semaphore: Semaphore::new(config.max_concurrent_calls as usize),
        }
    }

    /// Reserves an in-flight slot, or `None` when the bulkhead is full.
    pub fn try_acquire(&self) -> Option<SemaphorePermit<'_>> {
        self.semaphore.try_acquire().ok()
    }

    /// Currently available slots.
    pub fn available(&self) -> usize {
        self.semaphore.available_permits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_beyond_the_cap() {
        let bulkhead = Bulkhead::new(BulkheadConfig {
            max_concurrent_calls: 2,
        });
        let first = bulkhead.try_acquire();
        let second = bulkhead.try_acquire();
        assert!(first.is_some());
        assert!(second.is_some());
        assert!(bulkhead.try_acquire().is_none());
    }

    #[test]
    fn dropping_a_permit_frees_a_slot() {
        let bulkhead = Bulkhead::new(BulkheadConfig {
            max_concurrent_calls: 1,
        });
        let permit = bulkhead.try_acquire();
        assert!(bulkhead.try_acquire().is_none());
        drop(permit);
        assert!(bulkhead.try_acquire().is_some());
    }

    #[test]
    fn available_tracks_permits() {
        let bulkhead = Bulkhead::new(BulkheadConfig {
            max_concurrent_calls: 3,
        });
        assert_eq!(bulkhead.available(), 3);
        let _permit = bulkhead.try_acquire();
        assert_eq!(bulkhead.available(), 2);
    }
}
