//! Candlestick data structure.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// One-minute OHLC bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candlestick {
    /// Timestamp of the first tick in the minute.
    pub open_timestamp: DateTime<Utc>,
    /// Timestamp of the last tick in the minute.
    pub close_timestamp: DateTime<Utc>,
    /// Price of the first tick in the minute.
    pub open_price: f64,
    /// Highest price seen in the minute.
    pub high_price: f64,
    /// Lowest price seen in the minute.
    pub low_price: f64,
    /// Price of the last tick in the minute.
    pub close_price: f64,
}

impl Candlestick {
    /// Creates a new candlestick.
    #[must_use]
    pub const fn new(
        open_timestamp: DateTime<Utc>,
        close_timestamp: DateTime<Utc>,
        open_price: f64,
        high_price: f64,
        low_price: f64,
        close_price: f64,
    ) -> Self {
        Self {
            open_timestamp,
            close_timestamp,
            open_price,
            high_price,
            low_price,
            close_price,
        }
    }

    /// Returns a copy with both timestamps moved forward by `minutes`.
    ///
    /// Prices are carried over unchanged. Used for gap-filling quiet minutes.
    #[must_use]
    pub fn shifted(&self, minutes: i64) -> Self {
        let offset = TimeDelta::minutes(minutes);
        Self {
            open_timestamp: self.open_timestamp + offset,
            close_timestamp: self.close_timestamp + offset,
            ..*self
        }
    }

    /// Returns the price range (high - low).
    #[must_use]
    pub fn range(&self) -> f64 {
        self.high_price - self.low_price
    }

    /// Returns the body size (|close - open|).
    #[must_use]
    pub fn body(&self) -> f64 {
        (self.close_price - self.open_price).abs()
    }

    /// Returns true if this is a bullish (green) bar.
    #[must_use]
    pub fn is_bullish(&self) -> bool {
        self.close_price > self.open_price
    }

    /// Returns true if this is a bearish (red) bar.
    #[must_use]
    pub fn is_bearish(&self) -> bool {
        self.close_price < self.open_price
    }

    /// Checks the OHLC invariants.
    ///
    /// Low must not exceed open, close or high; high must not be below open
    /// or close; the bar must not close before it opens.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.low_price <= self.open_price
            && self.low_price <= self.close_price
            && self.low_price <= self.high_price
            && self.high_price >= self.open_price
            && self.high_price >= self.close_price
            && self.open_timestamp <= self.close_timestamp
    }
}
