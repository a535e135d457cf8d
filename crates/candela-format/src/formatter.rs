//! Output format abstraction.

use candela_aggregate::Candlestick;
use candela_types::Tick;
use std::io::Write;
use thiserror::Error;

use crate::{CsvFormatter, JsonFormatter};

/// Output format identifier.
///
/// Each variant dispatches to a configured [`CsvFormatter`] or [`JsonFormatter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// CSV format.
    #[default]
    Csv,
    /// Tab-separated values.
    Tsv,
    /// JSON array format.
    Json,
    /// Newline-delimited JSON format.
    Ndjson,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            "json" => Ok(Self::Json),
            "ndjson" | "jsonl" => Ok(Self::Ndjson),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

impl Formatter for OutputFormat {
    fn write_ticks<W: Write + Send>(&self, ticks: &[Tick], writer: W) -> Result<(), FormatError> {
        match self {
            Self::Csv => CsvFormatter::new().write_ticks(ticks, writer),
            Self::Tsv => CsvFormatter::tsv().write_ticks(ticks, writer),
            Self::Json => JsonFormatter::new().write_ticks(ticks, writer),
            Self::Ndjson => JsonFormatter::ndjson().write_ticks(ticks, writer),
        }
    }

    fn write_candlesticks<W: Write + Send>(
        &self,
        bars: &[Candlestick],
        writer: W,
    ) -> Result<(), FormatError> {
        match self {
            Self::Csv => CsvFormatter::new().write_candlesticks(bars, writer),
            Self::Tsv => CsvFormatter::tsv().write_candlesticks(bars, writer),
            Self::Json => JsonFormatter::new().write_candlesticks(bars, writer),
            Self::Ndjson => JsonFormatter::ndjson().write_candlesticks(bars, writer),
        }
    }

    fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Tsv => "tsv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
        }
    }
}

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Unknown output format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Trait for output formatters.
pub trait Formatter: Send + Sync {
    /// Writes a tick window to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_ticks<W: Write + Send>(&self, ticks: &[Tick], writer: W) -> Result<(), FormatError>;

    /// Writes candlesticks to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_candlesticks<W: Write + Send>(
        &self,
        bars: &[Candlestick],
        writer: W,
    ) -> Result<(), FormatError>;

    /// Returns the file extension for this format.
    fn extension(&self) -> &str;
}
