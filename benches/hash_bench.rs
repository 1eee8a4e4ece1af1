//! Performance benchmarks for Mnevi Backend.
//!
//! Run with: cargo bench

use std::io::Write;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mnevi_backend::crypto::{sha256_bytes, sha256_file};

/// Benchmark in-memory hashing across payload sizes
fn bench_sha256_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha256_bytes");

    for size in [1024usize, 64 * 1024, 1024 * 1024] {
        let data = vec![0xabu8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| black_box(sha256_bytes(data)));
        });
    }

    group.finish();
}

/// Benchmark the chunked file hasher used for persisted uploads
fn bench_sha256_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha256_file");

    for size in [64 * 1024usize, 1024 * 1024, 8 * 1024 * 1024] {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&vec![0xcdu8; size]).unwrap();
        file.flush().unwrap();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), file.path(), |b, path| {
            b.iter(|| black_box(sha256_file(path).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sha256_bytes, bench_sha256_file);
criterion_main!(benches);
