//! Vector hash benchmarks
//!
//! Run: `cargo bench -p longvec-core --bench hash`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use longvec_core::{Long2, Long3, Long4, ULong4};

fn sample_long4(count: usize) -> Vec<Long4> {
    (0..count as i64)
        .map(|i| Long4::new(i, -i, i.wrapping_mul(0x9E37_79B9), i ^ 0x5555))
        .collect()
}

fn bench_narrow(c: &mut Criterion) {
    let mut group = c.benchmark_group("narrow_hash");
    let data = sample_long4(1024);
    group.throughput(Throughput::Elements(data.len() as u64));

    group.bench_with_input(BenchmarkId::new("long2", data.len()), &data, |b, data| {
        b.iter(|| data.iter().fold(0u64, |acc, v| acc ^ black_box(v.xy()).hash()))
    });
    group.bench_with_input(BenchmarkId::new("long3", data.len()), &data, |b, data| {
        b.iter(|| data.iter().fold(0u64, |acc, v| acc ^ black_box(v.xyz()).hash()))
    });
    group.bench_with_input(BenchmarkId::new("long4", data.len()), &data, |b, data| {
        b.iter(|| data.iter().fold(0u64, |acc, v| acc ^ black_box(*v).hash()))
    });

    group.finish();
}

fn bench_wide_then_fold(c: &mut Criterion) {
    let mut group = c.benchmark_group("composite");
    let data = sample_long4(1024);
    group.throughput(Throughput::Elements(data.len() as u64));

    // One narrow hash per vector.
    group.bench_with_input(BenchmarkId::new("narrow_each", data.len()), &data, |b, data| {
        b.iter(|| {
            data.iter()
                .fold(0u64, |acc, v| acc.wrapping_mul(31).wrapping_add(black_box(*v).hash()))
        })
    });

    // Accumulate wide hashes and narrow once at the end.
    group.bench_with_input(BenchmarkId::new("wide_then_fold", data.len()), &data, |b, data| {
        b.iter(|| {
            data.iter()
                .fold(ULong4::splat(0), |acc, v| acc * 31 + black_box(*v).hash_wide())
                .wrapping_csum()
        })
    });

    group.finish();
}

fn bench_single(c: &mut Criterion) {
    c.bench_function("long2_hash_single", |b| {
        b.iter(|| black_box(Long2::new(black_box(-7), black_box(11))).hash())
    });
    c.bench_function("long3_hash_wide_single", |b| {
        b.iter(|| black_box(Long3::new(black_box(1), black_box(2), black_box(3))).hash_wide())
    });
}

criterion_group!(benches, bench_narrow, bench_wide_then_fold, bench_single);
criterion_main!(benches);
