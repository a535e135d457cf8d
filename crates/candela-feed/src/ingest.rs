//! Ingestion adapter: applies upstream feed events to the tick store.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use candela_store::TickStore;
use candela_types::{
    CandelaError, EventType, FeedEvent, InstrumentEvent, QuoteEvent, Result, Tick,
};
use chrono::{DateTime, Utc};
use tracing::{debug, trace, warn};

/// Snapshot of the ingestor's counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    /// `ADD` events applied.
    pub instruments_added: u64,
    /// `DELETE` events applied.
    pub instruments_removed: u64,
    /// Quotes appended to a topic.
    pub quotes_accepted: u64,
    /// Quotes dropped because their topic did not exist.
    pub quotes_dropped: u64,
    /// Quotes rejected for a non-finite price.
    pub quotes_rejected: u64,
}

#[derive(Debug, Default)]
struct Counters {
    instruments_added: AtomicU64,
    instruments_removed: AtomicU64,
    quotes_accepted: AtomicU64,
    quotes_dropped: AtomicU64,
    quotes_rejected: AtomicU64,
}

/// Applies instrument lifecycle and quote events to a [`TickStore`].
///
/// The ingestor is shared by reference between the tasks consuming the
/// instrument and quote streams; all methods take `&self`.
#[derive(Debug)]
pub struct Ingestor {
    store: Arc<TickStore>,
    counters: Counters,
}

impl Ingestor {
    /// Creates an ingestor writing into `store`.
    #[must_use]
    pub fn new(store: Arc<TickStore>) -> Self {
        Self {
            store,
            counters: Counters::default(),
        }
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &Arc<TickStore> {
        &self.store
    }

    /// Applies an instrument lifecycle event.
    ///
    /// `ADD` (re)creates the instrument's topic, `DELETE` removes it.
    pub fn on_instrument(&self, event: &InstrumentEvent) {
        let isin = &event.data.isin;
        match event.kind {
            EventType::Add => {
                self.store.create_topic(isin.clone());
                self.counters.instruments_added.fetch_add(1, Ordering::Relaxed);
            }
            EventType::Delete => {
                self.store.remove_topic(isin.as_str());
                self.counters
                    .instruments_removed
                    .fetch_add(1, Ordering::Relaxed);
            }
        }
        debug!(topics = ?self.store.topics(), "Instrument event applied");
    }

    /// Applies a quote, stamping it with the current time.
    ///
    /// See [`on_quote_at`](Self::on_quote_at).
    ///
    /// # Errors
    ///
    /// Returns [`CandelaError::InvalidPrice`] if the price is not finite.
    pub fn on_quote(&self, event: &QuoteEvent) -> Result<bool> {
        self.on_quote_at(event, Utc::now())
    }

    /// Applies a quote received at `now`.
    ///
    /// The tick is timestamped with `now`, not with any time carried by the
    /// feed. Returns `false` if the instrument has no topic and the quote was
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns [`CandelaError::InvalidPrice`] if the price is not finite.
    pub fn on_quote_at(&self, event: &QuoteEvent, now: DateTime<Utc>) -> Result<bool> {
        let quote = &event.data;
        if !quote.price.is_finite() {
            self.counters.quotes_rejected.fetch_add(1, Ordering::Relaxed);
            warn!(isin = %quote.isin, price = quote.price, "Rejecting quote with non-finite price");
            return Err(CandelaError::InvalidPrice {
                isin: quote.isin.to_string(),
                price: quote.price,
            });
        }

        let accepted = self
            .store
            .push_tick_at(quote.isin.as_str(), Tick::new(quote.price, now), now);

        if accepted {
            self.counters.quotes_accepted.fetch_add(1, Ordering::Relaxed);
        } else {
            self.counters.quotes_dropped.fetch_add(1, Ordering::Relaxed);
            trace!(isin = %quote.isin, "Quote for unknown instrument dropped");
        }

        Ok(accepted)
    }

    /// Applies any feed event, stamping quotes with the current time.
    ///
    /// # Errors
    ///
    /// Returns an error if a quote carries a non-finite price.
    pub fn handle(&self, event: &FeedEvent) -> Result<()> {
        self.handle_at(event, Utc::now())
    }

    /// Applies any feed event, stamping quotes with `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if a quote carries a non-finite price.
    pub fn handle_at(&self, event: &FeedEvent, now: DateTime<Utc>) -> Result<()> {
        match event {
            FeedEvent::Instrument(event) => self.on_instrument(event),
            FeedEvent::Quote(event) => {
                self.on_quote_at(event, now)?;
            }
        }
        Ok(())
    }

    /// Decodes and applies one JSON feed message.
    ///
    /// # Errors
    ///
    /// Returns an error if the message cannot be decoded or carries a
    /// non-finite price.
    pub fn handle_json(&self, message: &str) -> Result<()> {
        let event = FeedEvent::from_json(message)?;
        self.handle(&event)
    }

    /// Returns a snapshot of the counters.
    #[must_use]
    pub fn stats(&self) -> IngestStats {
        let c = &self.counters;
        IngestStats {
            instruments_added: c.instruments_added.load(Ordering::Relaxed),
            instruments_removed: c.instruments_removed.load(Ordering::Relaxed),
            quotes_accepted: c.quotes_accepted.load(Ordering::Relaxed),
            quotes_dropped: c.quotes_dropped.load(Ordering::Relaxed),
            quotes_rejected: c.quotes_rejected.load(Ordering::Relaxed),
        }
    }
}
