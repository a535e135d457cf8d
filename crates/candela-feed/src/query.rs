//! Query adapter: candlesticks for an instrument.

use std::sync::Arc;

use candela_aggregate::{Candlestick, aggregate};
use candela_store::TickStore;
use candela_types::Tick;
use chrono::{DateTime, Utc};
use tracing::debug;

/// Source of one-minute candlesticks per instrument.
pub trait CandlestickManager: Send + Sync {
    /// Returns the candlesticks for `isin`, oldest first.
    ///
    /// Unknown instruments and instruments without ticks yield an empty list.
    fn candlesticks(&self, isin: &str) -> Vec<Candlestick>;
}

/// [`CandlestickManager`] that aggregates snapshots of a [`TickStore`].
///
/// The store snapshot is taken first and aggregated afterwards, so writers
/// are never held up by an aggregation pass.
#[derive(Debug, Clone)]
pub struct CandlestickService {
    store: Arc<TickStore>,
}

impl CandlestickService {
    /// Creates a service reading from `store`.
    #[must_use]
    pub const fn new(store: Arc<TickStore>) -> Self {
        Self { store }
    }

    /// Returns the candlesticks for `isin`, gap-filled up to the minute before `now`.
    #[must_use]
    pub fn candlesticks_at(&self, isin: &str, now: DateTime<Utc>) -> Vec<Candlestick> {
        let ticks = self.store.read_window(isin);
        if ticks.is_empty() {
            return Vec::new();
        }

        let bars = aggregate(&ticks, now);
        debug!(isin, ticks = ticks.len(), bars = bars.len(), "Aggregated candlesticks");
        bars
    }

    /// Returns the raw tick window for `isin`.
    #[must_use]
    pub fn window(&self, isin: &str) -> Vec<Tick> {
        self.store.read_window(isin)
    }
}

impl CandlestickManager for CandlestickService {
    fn candlesticks(&self, isin: &str) -> Vec<Candlestick> {
        self.candlesticks_at(isin, Utc::now())
    }
}
