//! Tick-to-candlestick aggregation.

use candela_types::Tick;
use chrono::{DateTime, Utc};

use crate::Candlestick;

const SECONDS_PER_MINUTE: i64 = 60;

/// Returns the absolute minute bucket of a timestamp (whole minutes since the Unix epoch).
///
/// Buckets increase monotonically across hour and day boundaries, unlike the
/// minute-of-hour field which wraps from 59 to 0.
#[must_use]
pub fn minute_bucket(timestamp: DateTime<Utc>) -> i64 {
    timestamp.timestamp().div_euclid(SECONDS_PER_MINUTE)
}

/// Aggregates an ordered tick window into one-minute candlesticks.
///
/// `ticks` must be ordered by non-decreasing timestamp. This is not checked:
/// a tick whose minute precedes the current bar's is folded into that bar,
/// so the result is unspecified but computing it never panics.
///
/// Emits one bar per minute spanned by the ticks, in chronological order.
/// Minutes without ticks get a flat copy of the previous bar with both
/// timestamps advanced one minute per step. After the last tick, copies
/// continue up to, but not including, the minute containing `now`.
///
/// Returns an empty vector for an empty window.
#[must_use]
pub fn aggregate(ticks: &[Tick], now: DateTime<Utc>) -> Vec<Candlestick> {
    let Some((first, rest)) = ticks.split_first() else {
        return Vec::new();
    };

    let mut bars = Vec::new();
    let mut current = CandlestickBuilder::new(first);

    for tick in rest {
        let bucket = minute_bucket(tick.timestamp);
        if bucket > current.bucket {
            close_bar(&mut bars, current.finish(), bucket - current.bucket);
            current = CandlestickBuilder::new(tick);
        } else {
            current.update(tick);
        }
    }

    close_bar(&mut bars, current.finish(), minute_bucket(now) - current.bucket);
    bars
}

/// Emits a finished bar followed by flat copies for the `distance - 1`
/// empty minutes before the next occupied bucket.
fn close_bar(bars: &mut Vec<Candlestick>, bar: Candlestick, distance: i64) {
    bars.push(bar);
    for step in 1..distance {
        bars.push(bar.shifted(step));
    }
}

/// Running state for the bar of one minute bucket.
#[derive(Debug)]
struct CandlestickBuilder {
    bucket: i64,
    open_timestamp: DateTime<Utc>,
    close_timestamp: DateTime<Utc>,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
}

impl CandlestickBuilder {
    /// Starts a bar from the first tick of its minute.
    fn new(tick: &Tick) -> Self {
        Self {
            bucket: minute_bucket(tick.timestamp),
            open_timestamp: tick.timestamp,
            close_timestamp: tick.timestamp,
            open: tick.price,
            high: tick.price,
            low: tick.price,
            close: tick.price,
        }
    }

    /// Folds a tick into the bar.
    fn update(&mut self, tick: &Tick) {
        self.high = self.high.max(tick.price);
        self.low = self.low.min(tick.price);
        self.close = tick.price;
        self.close_timestamp = tick.timestamp;
    }

    const fn finish(&self) -> Candlestick {
        Candlestick::new(
            self.open_timestamp,
            self.close_timestamp,
            self.open,
            self.high,
            self.low,
            self.close,
        )
    }
}
