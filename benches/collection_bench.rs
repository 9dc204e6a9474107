//! Benchmark for lazy collection pipelines vs native iterator code.
//!
//! Runs the same map/filter/values pipeline over generated words through a
//! catena chain, a native iterator chain, and a hand-written loop.

use catena::{Iterable, Sequence};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn generate(size: usize) -> Vec<String> {
    (0..size)
        .map(|index| {
            let letter = char::from(b'a' + u8::try_from(index % 26).unwrap_or(0));
            letter.to_string()
        })
        .collect()
}

fn is_kept(value: &str) -> bool {
    value != "A" && value != "B"
}

// =============================================================================
// map/filter/values Benchmark
// =============================================================================

fn benchmark_map_filter_values(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_filter_values");

    for size in [100, 1000, 10000] {
        let words: Sequence<String> = generate(size).into_iter().collect();
        let native: Vec<String> = generate(size);

        group.bench_with_input(BenchmarkId::new("Collection", size), &size, |bencher, _| {
            bencher.iter(|| {
                let values = words
                    .map(|value, _| value.to_uppercase())
                    .filter(|value, _| is_kept(value))
                    .values()
                    .to_vec();
                black_box(values)
            });
        });

        group.bench_with_input(BenchmarkId::new("Iterator", size), &size, |bencher, _| {
            bencher.iter(|| {
                let values: Vec<String> = native
                    .iter()
                    .map(|value| value.to_uppercase())
                    .filter(|value| is_kept(value))
                    .collect();
                black_box(values)
            });
        });

        group.bench_with_input(BenchmarkId::new("Loop", size), &size, |bencher, _| {
            bencher.iter(|| {
                let mut values = Vec::new();
                for value in &native {
                    let value = value.to_uppercase();
                    if is_kept(&value) {
                        values.push(value);
                    }
                }
                black_box(values)
            });
        });
    }

    group.finish();
}

// =============================================================================
// reduce Benchmark
// =============================================================================

fn benchmark_reduce(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("reduce");

    for size in [100, 1000, 10000] {
        let numbers: Sequence<i64> = (0..size).collect();
        let native: Vec<i64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("Collection", size), &size, |bencher, _| {
            bencher.iter(|| black_box(numbers.reduce(|carry, value, _, _| carry + value, 0)));
        });

        group.bench_with_input(BenchmarkId::new("Iterator", size), &size, |bencher, _| {
            bencher.iter(|| black_box(native.iter().sum::<i64>()));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_map_filter_values, benchmark_reduce);

criterion_main!(benches);
