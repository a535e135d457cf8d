//! Benchmark fixtures for candela.

use candela_lib::{Tick, TickStore};
use chrono::{DateTime, TimeDelta, TimeZone, Utc};

/// Start of every synthetic series.
#[must_use]
pub fn series_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Generates `count` ticks spread evenly over `minutes` minutes.
///
/// Prices follow a deterministic saw-tooth around 100.0 so every bar has a
/// distinct high and low.
#[must_use]
pub fn synthetic_ticks(count: usize, minutes: i64) -> Vec<Tick> {
    let start = series_start();
    let span_ms = minutes.max(1) * 60_000;
    let step_ms = span_ms / i64::try_from(count.max(1)).unwrap_or(i64::MAX).max(1);

    (0..count)
        .map(|i| {
            let i = i64::try_from(i).unwrap_or(i64::MAX);
            let price = 100.0 + ((i % 17) as f64 - 8.0) * 0.25;
            Tick::new(price, start + TimeDelta::milliseconds(i * step_ms))
        })
        .collect()
}

/// Returns a store holding one topic per name, each preloaded with `ticks`.
#[must_use]
pub fn preloaded_store(names: &[&str], ticks: &[Tick]) -> TickStore {
    let store = TickStore::with_defaults();
    for name in names {
        store.create_topic(*name);
        for tick in ticks {
            store.push_tick_at(name, *tick, tick.timestamp);
        }
    }
    store
}

/// End of the series produced by [`synthetic_ticks`], plus one minute.
#[must_use]
pub fn series_end(minutes: i64) -> DateTime<Utc> {
    series_start() + TimeDelta::minutes(minutes + 1)
}
