//! Criterion benchmarks for the sorting engine.
//!
//! Mirrors the benchmark harness ladder: each algorithm over random integer
//! and text arrays of growing size, with the observer disabled.

use algoviz_common::{ValueGenerator, ValueType};
use algoviz_core::{Array, NoopObserver, SortAlgorithm};
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const SIZES: &[usize] = &[100, 1_000, 5_000];
const SEED: u64 = 0x5EED;

fn random_array(value_type: ValueType, size: usize) -> Array {
    let mut generator = ValueGenerator::seeded(SEED);
    let mut arr = Array::new(value_type, size);
    arr.fill_random(&mut generator);
    arr
}

fn bench_sorts(c: &mut Criterion, value_type: ValueType) {
    let mut group = c.benchmark_group(format!("sort_{}", value_type.name()));
    for &size in SIZES {
        let input = random_array(value_type, size);
        for algo in SortAlgorithm::ALL {
            if algo.is_quadratic() && size > 1_000 {
                continue;
            }
            group.bench_with_input(BenchmarkId::new(algo.name(), size), &input, |b, input| {
                b.iter_batched(
                    || input.clone(),
                    |mut arr| black_box(arr.sort(algo, &mut NoopObserver)),
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

fn bench_integers(c: &mut Criterion) {
    bench_sorts(c, ValueType::Integer);
}

fn bench_text(c: &mut Criterion) {
    bench_sorts(c, ValueType::Text);
}

criterion_group!(benches, bench_integers, bench_text);
criterion_main!(benches);
