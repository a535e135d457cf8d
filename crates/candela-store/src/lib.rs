//! Concurrent time-bounded tick retention store for candela.
//!
//! This crate provides the write side of the engine:
//!
//! - [`TickStore`] - Per-instrument tick windows with lazy head eviction
//! - [`StoreConfig`] - Retention settings

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/candela/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod store;

pub use config::StoreConfig;
pub use store::TickStore;
