//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Checks if this timestamp is after another.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }

    /// Creates a new timestamp offset forward by a std Duration.
    ///
    /// Saturates at the maximum representable time rather than panicking
    /// on overflow.
    pub fn plus(&self, offset: std::time::Duration) -> Self {
        let delta = Duration::from_std(offset).unwrap_or(Duration::MAX);
        Self(self.0.checked_add_signed(delta).unwrap_or(DateTime::<Utc>::MAX_UTC))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plus_moves_forward() {
        let now = Timestamp::now();
        let later = now.plus(std::time::Duration::from_secs(60));
        assert!(later.is_after(&now));
    }

    #[test]
    fn plus_saturates_on_overflow() {
        let now = Timestamp::now();
        let far = now.plus(std::time::Duration::from_secs(u64::MAX));
        assert!(far.is_after(&now));
    }
}
