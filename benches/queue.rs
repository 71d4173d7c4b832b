//! Benchmarks for the priority-queue engine.
//!
//! The engine is an O(n) ordered list by design, so the interesting
//! numbers are how the constant factors behave as the chain grows.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- insert
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};

use eventbook::PriorityQueue;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// A queue of `size` elements with priorities spread over the whole range,
/// so inserts and lookups land at varying chain depths.
fn populated_queue(size: u32) -> PriorityQueue<u32, u32> {
    let mut queue = PriorityQueue::with_capacity(size as usize + 1);
    for element in 0..size {
        // Stride the priorities so the chain is neither fully ascending
        // nor fully descending insertion order.
        let priority = (element * 7919) % size.max(1);
        queue
            .insert(&element, &priority)
            .expect("populate insert cannot fail");
    }
    queue
}

// ============================================================================
// BENCHMARKS
// ============================================================================

/// Insert into queues of growing size.
fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for size in [100u32, 1_000, 10_000] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || populated_queue(size),
                |mut queue| {
                    queue
                        .insert(black_box(&u32::MAX), black_box(&(size / 2)))
                        .expect("insert cannot fail");
                    queue
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

/// Identity lookup at varying chain depths.
fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains");

    for size in [100u32, 1_000, 10_000] {
        let queue = populated_queue(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| queue.contains(black_box(&(size / 2))));
        });
    }
    group.finish();
}

/// Drain a whole queue front to back.
fn bench_pop_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("pop_drain");

    for size in [100u32, 1_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || populated_queue(size),
                |mut queue| {
                    while queue.pop_front().is_some() {}
                    queue
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

/// Remove-then-reinsert via change_priority.
fn bench_change_priority(c: &mut Criterion) {
    let mut group = c.benchmark_group("change_priority");

    for size in [100u32, 1_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let element = size / 2;
            let old_priority = (element * 7919) % size.max(1);
            b.iter_batched(
                || populated_queue(size),
                |mut queue| {
                    queue
                        .change_priority(
                            black_box(&element),
                            black_box(&old_priority),
                            black_box(&(size + 1)),
                        )
                        .expect("target element is present");
                    queue
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

/// Whole-queue deep copy.
fn bench_try_copy(c: &mut Criterion) {
    let mut group = c.benchmark_group("try_copy");

    for size in [100u32, 1_000] {
        let queue = populated_queue(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| queue.try_copy().expect("copy cannot fail"));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_contains,
    bench_pop_drain,
    bench_change_priority,
    bench_try_copy
);
criterion_main!(benches);
