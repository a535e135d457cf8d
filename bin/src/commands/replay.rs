//! Replay command implementation.
//!
//! Feeds a recorded stream of instrument and quote messages through the
//! ingestion adapter, stamping each quote at the moment it is read, then
//! prints the resulting candlesticks.

use crate::display::print_topic_summary;
use anyhow::{Context, Result};
use candela_lib::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{info, warn};

/// Line counts from one replay.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ReplaySummary {
    /// Non-empty lines read.
    pub(crate) messages: u64,
    /// Lines that could not be applied.
    pub(crate) skipped: u64,
}

/// Replay a feed file (or stdin) and print candlesticks.
pub(crate) async fn replay(
    input: &Path,
    isin: Option<&str>,
    format: OutputFormat,
    output: Option<PathBuf>,
    raw: bool,
    retention_minutes: i64,
) -> Result<()> {
    let config = StoreConfig::try_with_retention_minutes(retention_minutes)
        .with_context(|| format!("Retention of {retention_minutes} minutes is out of range"))?;
    let store = Arc::new(TickStore::new(config));
    let ingestor = Ingestor::new(Arc::clone(&store));
    let service = CandlestickService::new(Arc::clone(&store));

    let summary = if input.as_os_str() == "-" {
        ingest_lines(BufReader::new(tokio::io::stdin()), &ingestor).await?
    } else {
        let file = tokio::fs::File::open(input)
            .await
            .with_context(|| format!("Failed to open feed file: {}", input.display()))?;
        ingest_lines(BufReader::new(file), &ingestor).await?
    };

    let stats = ingestor.stats();
    info!(
        messages = summary.messages,
        skipped = summary.skipped,
        instruments_added = stats.instruments_added,
        instruments_removed = stats.instruments_removed,
        quotes_accepted = stats.quotes_accepted,
        quotes_dropped = stats.quotes_dropped,
        topics = store.len(),
        "Replay finished"
    );

    let Some(isin) = isin else {
        print_topic_summary(&store, &service);
        return Ok(());
    };

    if !store.contains_topic(isin) {
        warn!(isin, "Instrument has no topic, output will be empty");
    }

    match output {
        Some(mut path) => {
            if path.extension().is_none() {
                path.set_extension(format.extension());
            }
            let file = File::create(&path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_output(&service, isin, raw, format, &mut writer)?;
            writer.flush()?;
            info!(output = %path.display(), %format, "Wrote output");
        }
        None => {
            let mut writer = BufWriter::new(std::io::stdout());
            write_output(&service, isin, raw, format, &mut writer)?;
            writer.flush()?;
        }
    }

    Ok(())
}

/// Apply every line of a feed to the ingestor, in order.
///
/// Lines that are not UTF-8, malformed messages and rejected quotes are
/// logged and skipped.
pub(crate) async fn ingest_lines<R>(mut reader: R, ingestor: &Ingestor) -> Result<ReplaySummary>
where
    R: AsyncBufRead + Unpin,
{
    let mut summary = ReplaySummary::default();
    let mut buf = Vec::new();
    let mut line_number = 0u64;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .await
            .context("Failed to read feed")?;
        if read == 0 {
            break;
        }
        line_number += 1;

        let message = match std::str::from_utf8(&buf) {
            Ok(text) => text.trim(),
            Err(e) => {
                summary.messages += 1;
                summary.skipped += 1;
                warn!(line = line_number, error = %e, "Skipping feed line that is not UTF-8");
                continue;
            }
        };
        if message.is_empty() {
            continue;
        }

        summary.messages += 1;
        if let Err(e) = ingestor.handle_json(message) {
            summary.skipped += 1;
            warn!(line = line_number, error = %e, "Skipping feed message");
        }
    }

    Ok(summary)
}

fn write_output<W: Write + Send>(
    service: &CandlestickService,
    isin: &str,
    raw: bool,
    format: OutputFormat,
    writer: W,
) -> Result<()> {
    if raw {
        format.write_ticks(&service.window(isin), writer)?;
    } else {
        format.write_candlesticks(&service.candlesticks(isin), writer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"{"type":"ADD","data":{"isin":"XE0866287E25","description":"ac tristique"}}
{"data":{"isin":"XE0866287E25","price":1654.0}}
{"data":{"isin":"UNKNOWN00001","price":10.0}}

not a message
{"data":{"isin":"XE0866287E25","price":1690.0}}
{"type":"ADD","data":{"isin":"IA5E35112712","description":"maiestatis"}}
{"type":"DELETE","data":{"isin":"IA5E35112712","description":"maiestatis"}}
"#;

    fn ingestor() -> Ingestor {
        Ingestor::new(Arc::new(TickStore::with_defaults()))
    }

    #[tokio::test]
    async fn test_ingest_lines_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FEED.as_bytes()).unwrap();

        let ingestor = ingestor();
        let reader = BufReader::new(tokio::fs::File::open(file.path()).await.unwrap());
        let summary = ingest_lines(reader, &ingestor).await.unwrap();

        assert_eq!(
            summary,
            ReplaySummary {
                messages: 7,
                skipped: 1
            }
        );

        let store = ingestor.store();
        assert_eq!(store.topic_len("XE0866287E25"), Some(2));
        assert!(!store.contains_topic("IA5E35112712"));

        let stats = ingestor.stats();
        assert_eq!(stats.quotes_accepted, 2);
        assert_eq!(stats.quotes_dropped, 1);
    }

    #[tokio::test]
    async fn test_replayed_quotes_produce_candlesticks() {
        let ingestor = ingestor();
        ingest_lines(FEED.as_bytes(), &ingestor).await.unwrap();

        let service = CandlestickService::new(Arc::clone(ingestor.store()));
        let mut output = Vec::new();
        write_output(&service, "XE0866287E25", false, OutputFormat::Csv, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("open_timestamp,close_timestamp,open,high,low,close")
        );
        let rows: Vec<_> = lines.collect();
        assert!(!rows.is_empty());
        // Both quotes land in one bar unless the replay straddled a minute.
        let first = rows[0].split(',').nth(2).unwrap();
        let last = rows[rows.len() - 1].rsplit(',').next().unwrap();
        assert_eq!(first, "1654");
        assert_eq!(last, "1690");
    }

    #[tokio::test]
    async fn test_raw_window_output() {
        let ingestor = ingestor();
        ingest_lines(FEED.as_bytes(), &ingestor).await.unwrap();

        let service = CandlestickService::new(Arc::clone(ingestor.store()));
        let mut output = Vec::new();
        write_output(&service, "XE0866287E25", true, OutputFormat::Ndjson, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.lines().all(|l| l.contains("\"price\"")));
    }

    #[tokio::test]
    async fn test_unknown_instrument_output_is_empty() {
        let ingestor = ingestor();
        ingest_lines(FEED.as_bytes(), &ingestor).await.unwrap();

        let service = CandlestickService::new(Arc::clone(ingestor.store()));
        let mut output = Vec::new();
        write_output(&service, "NOPE", false, OutputFormat::Json, &mut output).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "[]\n");
    }

    #[tokio::test]
    async fn test_invalid_utf8_line_is_skipped() {
        let mut feed = Vec::new();
        feed.extend_from_slice(
            br#"{"type":"ADD","data":{"isin":"XE0866287E25","description":"ac tristique"}}"#,
        );
        feed.extend_from_slice(b"\n\xff\xfe garbage\n");
        feed.extend_from_slice(br#"{"data":{"isin":"XE0866287E25","price":1654.0}}"#);

        let ingestor = ingestor();
        let summary = ingest_lines(feed.as_slice(), &ingestor).await.unwrap();

        assert_eq!(
            summary,
            ReplaySummary {
                messages: 3,
                skipped: 1
            }
        );
        assert_eq!(ingestor.store().topic_len("XE0866287E25"), Some(1));
    }

    #[tokio::test]
    async fn test_out_of_range_retention_is_an_error() {
        let result = replay(
            Path::new("does-not-matter.ndjson"),
            None,
            OutputFormat::Csv,
            None,
            false,
            i64::MAX / 1000,
        )
        .await;

        let error = result.unwrap_err().to_string();
        assert!(error.contains("out of range"), "unexpected error {error}");
    }

    #[tokio::test]
    async fn test_output_gets_format_extension() {
        let mut feed = tempfile::NamedTempFile::new().unwrap();
        feed.write_all(FEED.as_bytes()).unwrap();
        let dir = tempfile::tempdir().unwrap();

        replay(
            feed.path(),
            Some("XE0866287E25"),
            OutputFormat::Ndjson,
            Some(dir.path().join("bars")),
            true,
            StoreConfig::DEFAULT_RETENTION_MINUTES,
        )
        .await
        .unwrap();

        let written = std::fs::read_to_string(dir.path().join("bars.ndjson")).unwrap();
        assert_eq!(written.lines().count(), 2);
    }
}
