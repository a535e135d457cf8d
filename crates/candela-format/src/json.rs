//! JSON output format.

use candela_aggregate::Candlestick;
use candela_types::Tick;
use std::io::Write;

use crate::{FormatError, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum JsonStyle {
    #[default]
    Array,
    Ndjson,
}

/// JSON formatter.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Output style.
    style: JsonStyle,
    /// Whether to pretty-print (only for array style).
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter with default settings (array style).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: JsonStyle::Array,
            pretty: false,
        }
    }

    /// Creates a new NDJSON formatter.
    #[must_use]
    pub const fn ndjson() -> Self {
        Self {
            style: JsonStyle::Ndjson,
            pretty: false,
        }
    }

    /// Sets whether to pretty-print output (array style only).
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn write_all<T, W>(&self, items: &[T], mut writer: W) -> Result<(), FormatError>
    where
        T: serde::Serialize,
        W: Write,
    {
        match self.style {
            JsonStyle::Array => {
                if self.pretty {
                    serde_json::to_writer_pretty(&mut writer, items)?;
                } else {
                    serde_json::to_writer(&mut writer, items)?;
                }
                writeln!(writer)?;
            }
            JsonStyle::Ndjson => {
                for item in items {
                    serde_json::to_writer(&mut writer, item)?;
                    writeln!(writer)?;
                }
            }
        }
        Ok(())
    }
}

impl Formatter for JsonFormatter {
    fn write_ticks<W: Write + Send>(&self, ticks: &[Tick], writer: W) -> Result<(), FormatError> {
        self.write_all(ticks, writer)
    }

    fn write_candlesticks<W: Write + Send>(
        &self,
        bars: &[Candlestick],
        writer: W,
    ) -> Result<(), FormatError> {
        self.write_all(bars, writer)
    }

    fn extension(&self) -> &str {
        match self.style {
            JsonStyle::Array => "json",
            JsonStyle::Ndjson => "ndjson",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::io::Cursor;

    fn create_test_bar() -> Candlestick {
        let open = Utc.with_ymd_and_hms(2024, 1, 15, 12, 30, 5).unwrap();
        Candlestick::new(open, open, 1654.0, 1654.0, 1654.0, 1654.0)
    }

    #[test]
    fn test_json_array() {
        let formatter = JsonFormatter::new();
        let mut output = Cursor::new(Vec::new());

        formatter
            .write_candlesticks(&[create_test_bar()], &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.starts_with('['));
        assert!(result.contains("\"openPrice\":1654.0"));
        assert!(result.contains("\"openTimestamp\":\"2024-01-15T12:30:05Z\""));
    }

    #[test]
    fn test_ndjson() {
        let formatter = JsonFormatter::ndjson();
        let bars = vec![create_test_bar(), create_test_bar()];
        let mut output = Cursor::new(Vec::new());

        formatter.write_candlesticks(&bars, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        let lines: Vec<_> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('{'));
        assert_eq!(formatter.extension(), "ndjson");
    }

    #[test]
    fn test_pretty_json() {
        let formatter = JsonFormatter::new().with_pretty(true);
        let mut output = Cursor::new(Vec::new());

        formatter
            .write_candlesticks(&[create_test_bar()], &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains('\n'));
        assert!(result.contains("  ")); // Indentation
    }

    #[test]
    fn test_tick_window() {
        let formatter = JsonFormatter::new();
        let tick = Tick::new(1.5, Utc.with_ymd_and_hms(2024, 1, 15, 12, 30, 5).unwrap());
        let mut output = Cursor::new(Vec::new());

        formatter.write_ticks(&[tick], &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert_eq!(
            result,
            "[{\"price\":1.5,\"timestamp\":\"2024-01-15T12:30:05Z\"}]\n"
        );
    }
}
