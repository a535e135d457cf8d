//! Store configuration.

use chrono::TimeDelta;

/// Configuration for a [`TickStore`](crate::TickStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// How long ticks are kept per topic.
    ///
    /// Only whole minutes are significant: a tick is evicted once its age,
    /// truncated to minutes, reaches this many minutes.
    pub retention: TimeDelta,
}

impl StoreConfig {
    /// Default retention window in minutes.
    pub const DEFAULT_RETENTION_MINUTES: i64 = 30;

    /// Largest retention a [`TimeDelta`] can represent, in minutes.
    pub const MAX_RETENTION_MINUTES: i64 = i64::MAX / 60_000;

    /// Creates a configuration retaining `minutes` of ticks per topic.
    ///
    /// # Panics
    ///
    /// Panics if `minutes` exceeds [`MAX_RETENTION_MINUTES`](Self::MAX_RETENTION_MINUTES).
    /// Use [`try_with_retention_minutes`](Self::try_with_retention_minutes) for
    /// untrusted input.
    #[must_use]
    pub const fn with_retention_minutes(minutes: i64) -> Self {
        Self {
            retention: TimeDelta::minutes(minutes),
        }
    }

    /// Creates a configuration retaining `minutes` of ticks per topic.
    ///
    /// Returns `None` if the window is out of range for a [`TimeDelta`].
    #[must_use]
    pub const fn try_with_retention_minutes(minutes: i64) -> Option<Self> {
        match TimeDelta::try_minutes(minutes) {
            Some(retention) => Some(Self { retention }),
            None => None,
        }
    }

    /// Returns the retention window in whole minutes.
    #[must_use]
    pub const fn retention_minutes(&self) -> i64 {
        self.retention.num_minutes()
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::with_retention_minutes(Self::DEFAULT_RETENTION_MINUTES)
    }
}
