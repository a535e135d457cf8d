//! Ingestion and query adapters connecting a quote feed to candela.
//!
//! - [`Ingestor`] - Applies feed events to a [`TickStore`](candela_store::TickStore)
//! - [`IngestStats`] - Counters kept by the ingestor
//! - [`CandlestickManager`] - Query interface returning candlesticks per instrument
//! - [`CandlestickService`] - Store-backed [`CandlestickManager`]

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/candela/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod ingest;
mod query;

pub use ingest::{IngestStats, Ingestor};
pub use query::{CandlestickManager, CandlestickService};
