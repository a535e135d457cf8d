//! Core types for the candela tick-to-candlestick engine.
//!
//! This crate provides the fundamental data structures used throughout candela:
//!
//! - [`Tick`] - A single price observation stamped with its receipt time
//! - [`Isin`] - Instrument identifier used as the topic key
//! - [`InstrumentEvent`] / [`QuoteEvent`] - Messages delivered by the upstream feed
//! - [`CandelaError`] - Errors raised at the adapter boundary

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/candela/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod event;
mod isin;
mod tick;

pub use error::{CandelaError, Result};
pub use event::{EventType, FeedEvent, Instrument, InstrumentEvent, Quote, QuoteEvent};
pub use isin::Isin;
pub use tick::Tick;
