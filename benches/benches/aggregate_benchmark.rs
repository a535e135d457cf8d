//! Store and aggregation benchmarks.
//!
//! Run with: `cargo bench --package candela-bench`

use candela_bench::{preloaded_store, series_end, synthetic_ticks};
use candela_lib::{Tick, TickStore, aggregate};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

/// (label, ticks, minutes) triples.
const SIZES: &[(&str, usize, i64)] = &[
    ("1k-30m", 1_000, 30),
    ("10k-30m", 10_000, 30),
    ("100k-30m", 100_000, 30),
];

fn aggregate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for &(name, count, minutes) in SIZES {
        let ticks = synthetic_ticks(count, minutes);
        let now = series_end(minutes);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("window", name), &ticks, |b, ticks| {
            b.iter(|| aggregate(black_box(ticks), now));
        });
    }

    // Sparse feed: most of the output is gap fill.
    let sparse = synthetic_ticks(30, 30);
    group.bench_function("sparse-gap-fill", |b| {
        b.iter(|| aggregate(black_box(&sparse), series_end(120)));
    });

    group.finish();
}

fn store_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("store");

    let ticks = synthetic_ticks(10_000, 45);
    group.throughput(Throughput::Elements(ticks.len() as u64));
    group.bench_function("push-with-eviction", |b| {
        b.iter(|| {
            let store = TickStore::with_defaults();
            store.create_topic("XE0866287E25");
            for tick in &ticks {
                store.push_tick_at("XE0866287E25", black_box(*tick), tick.timestamp);
            }
            store
        });
    });

    let names = ["XE0866287E25", "IA5E35112712", "UT3141592653"];
    let store = preloaded_store(&names, &synthetic_ticks(10_000, 30));
    group.throughput(Throughput::Elements(1));
    group.bench_function("read-window", |b| {
        b.iter(|| store.read_window(black_box("IA5E35112712")));
    });

    group.finish();
}

fn end_to_end_benchmark(c: &mut Criterion) {
    let names = ["XE0866287E25"];
    let store = preloaded_store(&names, &synthetic_ticks(10_000, 30));
    let now = series_end(30);

    c.bench_function("window-then-aggregate", |b| {
        b.iter(|| {
            let window: Vec<Tick> = store.read_window(black_box("XE0866287E25"));
            aggregate(&window, now)
        });
    });
}

criterion_group!(benches, aggregate_benchmark, store_benchmark, end_to_end_benchmark);
criterion_main!(benches);
