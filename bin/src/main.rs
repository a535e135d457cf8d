//! candela CLI - Replay quote feeds into one-minute candlesticks.

use anyhow::Result;
use candela_lib::{OutputFormat, StoreConfig};
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;

#[derive(Parser)]
#[command(name = "candela")]
#[command(about = "Replay quote feeds into one-minute candlesticks", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a recorded feed (one JSON message per line) and print candlesticks
    Replay {
        /// Feed file, or "-" to read from stdin
        input: PathBuf,

        /// Instrument to print. Omit for a per-instrument summary.
        #[arg(short, long)]
        isin: Option<String>,

        /// Output format (csv, tsv, json, ndjson)
        #[arg(short, long, default_value = "csv")]
        format: OutputFormat,

        /// Output file path. Defaults to stdout. The format's extension is
        /// added when the path has none.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the raw tick window instead of candlesticks
        #[arg(long)]
        raw: bool,

        /// Minutes of ticks retained per instrument
        #[arg(
            long,
            default_value = "30",
            value_parser = clap::value_parser!(i64).range(1..=StoreConfig::MAX_RETENTION_MINUTES)
        )]
        retention_minutes: i64,
    },
}

/// Installs the stderr log subscriber. `RUST_LOG` takes precedence over the flags.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Replay {
            input,
            isin,
            format,
            output,
            raw,
            retention_minutes,
        } => {
            commands::replay::replay(
                &input,
                isin.as_deref(),
                format,
                output,
                raw,
                retention_minutes,
            )
            .await
        }
    }
}
