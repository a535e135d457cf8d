//! Per-instrument tick retention.

use std::collections::{BTreeSet, VecDeque};
use std::sync::Arc;

use candela_types::{Isin, Tick};
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::StoreConfig;

/// Shared handle to one topic's tick window.
type Topic = Arc<RwLock<VecDeque<Tick>>>;

/// Concurrent store of tick windows keyed by instrument.
///
/// The map itself only guards topic handles: its shard lock is held just
/// long enough to clone a handle. Appends, evictions and snapshots lock the
/// individual topic, so operations on different instruments never contend
/// and concurrent writers on the same instrument are serialized.
///
/// Ticks are expected in non-decreasing timestamp order per topic. Eviction
/// scans from the head and stops at the first tick still inside the window;
/// a late tick is kept in arrival order and never reordered.
#[derive(Debug, Default)]
pub struct TickStore {
    topics: DashMap<Isin, Topic>,
    config: StoreConfig,
}

impl TickStore {
    /// Creates an empty store with the given configuration.
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self {
            topics: DashMap::new(),
            config,
        }
    }

    /// Creates an empty store with the default 30 minute retention.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(StoreConfig::default())
    }

    /// Returns the store configuration.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Creates an empty topic for `isin`.
    ///
    /// Re-creating an existing topic resets it to empty; prior ticks are discarded.
    pub fn create_topic(&self, isin: impl Into<Isin>) {
        let isin = isin.into();
        let replaced = self
            .topics
            .insert(isin.clone(), Arc::new(RwLock::new(VecDeque::new())))
            .is_some();
        debug!(%isin, replaced, "Created topic");
    }

    /// Removes a topic and all of its ticks.
    ///
    /// Returns `false` if the topic did not exist.
    pub fn remove_topic(&self, isin: &str) -> bool {
        let removed = self.topics.remove(isin).is_some();
        debug!(isin, removed, "Removed topic");
        removed
    }

    /// Returns a snapshot of the currently known topics.
    #[must_use]
    pub fn topics(&self) -> BTreeSet<Isin> {
        self.topics.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Returns true if a topic exists for `isin`.
    #[must_use]
    pub fn contains_topic(&self, isin: &str) -> bool {
        self.topics.contains_key(isin)
    }

    /// Returns the number of ticks held for `isin`, or `None` if the topic is absent.
    #[must_use]
    pub fn topic_len(&self, isin: &str) -> Option<usize> {
        self.topic(isin).map(|topic| topic.read().len())
    }

    /// Returns the number of topics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    /// Returns true if there are no topics.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Appends a tick to its topic, evicting expired ticks relative to the current time.
    ///
    /// See [`push_tick_at`](Self::push_tick_at).
    pub fn push_tick(&self, isin: &str, tick: Tick) -> bool {
        self.push_tick_at(isin, tick, Utc::now())
    }

    /// Appends a tick to its topic, evicting expired ticks relative to `now`.
    ///
    /// After the append, ticks are removed from the head while their age
    /// (`now - timestamp`, truncated to whole minutes) is at least the
    /// retention window.
    ///
    /// Ticks for unknown topics are dropped. Returns `true` if the tick was appended.
    pub fn push_tick_at(&self, isin: &str, tick: Tick, now: DateTime<Utc>) -> bool {
        let Some(topic) = self.topic(isin) else {
            trace!(isin, price = tick.price, "Dropping tick for unknown topic");
            return false;
        };

        let retention = self.config.retention_minutes();
        let mut ticks = topic.write();
        ticks.push_back(tick);

        let mut evicted = 0usize;
        while ticks
            .front()
            .is_some_and(|front| front.age_minutes(now) >= retention)
        {
            ticks.pop_front();
            evicted += 1;
        }

        if evicted > 0 {
            trace!(isin, evicted, retained = ticks.len(), "Evicted expired ticks");
        }

        true
    }

    /// Returns a point-in-time copy of the ticks held for `isin`.
    ///
    /// Returns an empty vector if the topic is absent or holds no ticks.
    /// Writes made after the snapshot is taken are not visible in it.
    #[must_use]
    pub fn read_window(&self, isin: &str) -> Vec<Tick> {
        self.topic(isin)
            .map(|topic| topic.read().iter().copied().collect())
            .unwrap_or_default()
    }

    /// Clones the handle for a topic, releasing the map's shard lock immediately.
    fn topic(&self, isin: &str) -> Option<Topic> {
        self.topics.get(isin).map(|entry| Arc::clone(entry.value()))
    }
}
