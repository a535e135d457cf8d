//! Tick data representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single price observation for an instrument.
///
/// Ticks are immutable once created. The timestamp is the moment the quote
/// was received, not a time supplied by the upstream feed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Quoted price.
    pub price: f64,
    /// Receipt time of the quote (UTC).
    pub timestamp: DateTime<Utc>,
}

impl Tick {
    /// Creates a new tick.
    #[must_use]
    pub const fn new(price: f64, timestamp: DateTime<Utc>) -> Self {
        Self { price, timestamp }
    }

    /// Creates a tick stamped with the current time.
    #[must_use]
    pub fn now(price: f64) -> Self {
        Self::new(price, Utc::now())
    }

    /// Returns the whole minutes elapsed between this tick and `now`.
    ///
    /// Partial minutes are truncated; a tick in the future yields a negative value.
    #[must_use]
    pub fn age_minutes(&self, now: DateTime<Utc>) -> i64 {
        (now - self.timestamp).num_minutes()
    }
}
