//! Minute candlestick aggregation for candela.
//!
//! This crate provides tick-to-candlestick aggregation:
//!
//! - [`Candlestick`] - One-minute OHLC bar
//! - [`aggregate`] - Folds an ordered tick window into gap-filled bars
//! - [`minute_bucket`] - Absolute epoch-minute bucket of a timestamp

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/candela/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod aggregator;
mod candlestick;

pub use aggregator::{aggregate, minute_bucket};
pub use candlestick::Candlestick;
