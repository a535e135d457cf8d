//! Concurrent tick retention and one-minute candlestick aggregation.
//!
//! This is a facade crate that re-exports functionality from the candela
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use candela_lib::prelude::*;
//!
//! let store = Arc::new(TickStore::with_defaults());
//! let ingestor = Ingestor::new(Arc::clone(&store));
//! let service = CandlestickService::new(store);
//!
//! ingestor.on_instrument(&InstrumentEvent::add("XE0866287E25", "example"));
//! ingestor.on_quote(&QuoteEvent::new("XE0866287E25", 1654.0))?;
//!
//! let bars = service.candlesticks("XE0866287E25");
//! assert_eq!(bars[0].open_price, 1654.0);
//! # Ok::<(), CandelaError>(())
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/candela/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use candela_types::*;

// Re-export the store and aggregation engine
pub use candela_aggregate::{Candlestick, aggregate, minute_bucket};
pub use candela_store::{StoreConfig, TickStore};

// Re-export adapters
#[cfg(feature = "feed")]
pub use candela_feed::{CandlestickManager, CandlestickService, IngestStats, Ingestor};

// Re-export formatters
#[cfg(feature = "format")]
pub use candela_format::{CsvFormatter, FormatError, Formatter, JsonFormatter, OutputFormat};

/// Prelude module for convenient imports.
///
/// ```
/// use candela_lib::prelude::*;
/// ```
pub mod prelude {
    pub use candela_types::{
        CandelaError, EventType, FeedEvent, InstrumentEvent, Isin, QuoteEvent, Result, Tick,
    };

    pub use candela_aggregate::{Candlestick, aggregate};
    pub use candela_store::{StoreConfig, TickStore};

    #[cfg(feature = "feed")]
    pub use candela_feed::{CandlestickManager, CandlestickService, IngestStats, Ingestor};

    #[cfg(feature = "format")]
    pub use candela_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat};
}
