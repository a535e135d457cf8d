//! Terminal display helpers for the candela CLI.

use candela_lib::prelude::*;

/// Print a per-instrument summary table.
pub(crate) fn print_topic_summary(store: &TickStore, service: &CandlestickService) {
    let topics = store.topics();
    if topics.is_empty() {
        println!("No instruments.");
        return;
    }

    println!("{:<15} {:>8} {:>8}", "ISIN", "TICKS", "BARS");
    println!("{}", "-".repeat(33));

    for isin in &topics {
        let ticks = store.topic_len(isin.as_str()).unwrap_or(0);
        let bars = service.candlesticks(isin.as_str()).len();
        println!("{:<15} {:>8} {:>8}", isin.as_str(), ticks, bars);
    }

    println!("\nTotal: {} instruments", topics.len());
}
