//! Heap and priority queue benchmarks
//!
//! Compares push/pop throughput of both polarities against
//! `std::collections::BinaryHeap`.
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench heap_ops
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use priorityq::{Heap, Polarity, PriorityQueue};
use std::collections::BinaryHeap;

/// Linear congruential generator for reproducible random numbers
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state >> 33
    }
}

fn random_keys(n: usize) -> Vec<u64> {
    let mut rng = Lcg::new(12345);
    (0..n).map(|_| rng.next()).collect()
}

fn push_pop_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop_all");

    for size in [1 << 8, 1 << 12, 1 << 16] {
        let keys = random_keys(size);

        for polarity in [Polarity::Max, Polarity::Min] {
            group.bench_with_input(
                BenchmarkId::new(format!("heap_{}", polarity), size),
                &keys,
                |b, keys| {
                    b.iter(|| {
                        let mut heap = Heap::with_capacity(polarity, keys.len());
                        for &k in keys {
                            heap.push(k);
                        }
                        while let Some(k) = heap.pop() {
                            black_box(k);
                        }
                    });
                },
            );
        }

        group.bench_with_input(BenchmarkId::new("std_binary_heap", size), &keys, |b, keys| {
            b.iter(|| {
                let mut heap = BinaryHeap::with_capacity(keys.len());
                for &k in keys {
                    heap.push(k);
                }
                while let Some(k) = heap.pop() {
                    black_box(k);
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("priority_queue", size), &keys, |b, keys| {
            b.iter(|| {
                let mut queue = PriorityQueue::new();
                for (i, &k) in keys.iter().enumerate() {
                    queue.push(k, i);
                }
                while let Some(v) = queue.pop() {
                    black_box(v);
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, push_pop_all);
criterion_main!(benches);
