//! Error types for candela.

use thiserror::Error;

/// Result type alias for candela operations.
pub type Result<T> = std::result::Result<T, CandelaError>;

/// Errors raised at the boundary between the upstream feed and the core.
///
/// The tick store and the aggregation engine never fail; everything here
/// concerns decoding or validating inbound messages.
#[derive(Error, Debug)]
pub enum CandelaError {
    /// Feed message could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Quote carried a price that is not a finite number.
    #[error("Invalid price {price} for {isin}")]
    InvalidPrice {
        /// The instrument the quote was for.
        isin: String,
        /// The rejected price.
        price: f64,
    },
}
