//! Batch decode throughput benchmarks.
//!
//! Measures decode throughput at various batch sizes using Criterion.
//!
//! # Running
//! ```bash
//! cargo bench --package runecodec-batch
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use runecodec_batch::{BatchEngine, BatchRequest};
use runecodec_core::{Attribute, NullReporter, RawEvent};
use runecodec_events::decode_raw;
use std::sync::Arc;

// ─── Event factory ────────────────────────────────────────────────────────────

fn make_swap_event(i: u64) -> RawEvent {
    // Vary amounts and ids so branch prediction can't cheat.
    RawEvent {
        event_type: "swap".into(),
        attributes: vec![
            Attribute::new("id", format!("{i:064X}")),
            Attribute::new("chain", "BNB"),
            Attribute::new("from", "bnb1gnaghgzcpd73hcxnylcdaygn9tkrzmwxhnodzy"),
            Attribute::new("to", "bnb1mkymvdxkhjlltzkkhyzfvtyyv7e9q84cdmyvnh"),
            Attribute::new("coin", format!("{} BNB.BNB", 1_000_000 + i)),
            Attribute::new("memo", "SWAP:THOR.RUNE"),
            Attribute::new("pool", "BNB.BNB"),
            Attribute::new("price_target", "0"),
            Attribute::new("trade_slip", (i % 100).to_string()),
            Attribute::new("liquidity_fee", "1999"),
            Attribute::new("liquidity_fee_in_rune", "2001"),
        ],
        block_height: 1_000_000 + i,
        tx_index: 0,
    }
}

fn make_batch(n: usize) -> Vec<RawEvent> {
    (0..n).map(|i| make_swap_event(i as u64)).collect()
}

// ─── Benchmarks ───────────────────────────────────────────────────────────────

fn bench_sequential_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential_decode");
    for batch_size in [100, 1_000, 10_000, 100_000] {
        let batch = make_batch(batch_size);
        group.throughput(Throughput::Elements(batch_size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(batch_size),
            &batch,
            |b, batch| {
                b.iter(|| {
                    for event in batch {
                        let _ = decode_raw(event, &NullReporter);
                    }
                });
            },
        );
    }
    group.finish();
}

fn bench_parallel_decode(c: &mut Criterion) {
    let engine = BatchEngine::new(Arc::new(NullReporter));

    let mut group = c.benchmark_group("parallel_decode_rayon");
    for batch_size in [1_000, 10_000, 100_000] {
        let batch = make_batch(batch_size);
        group.throughput(Throughput::Elements(batch_size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(batch_size),
            &batch,
            |b, batch| {
                b.iter(|| {
                    let _ = engine.decode(BatchRequest::new(batch.clone()));
                });
            },
        );
    }
    group.finish();
}

fn bench_single_decode(c: &mut Criterion) {
    let event = make_swap_event(0);

    c.bench_function("decode_single_swap", |b| {
        b.iter(|| decode_raw(&event, &NullReporter));
    });
}

criterion_group!(
    benches,
    bench_sequential_decode,
    bench_parallel_decode,
    bench_single_decode,
);
criterion_main!(benches);
