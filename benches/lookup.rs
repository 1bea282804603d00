//! Benchmarks for code-list membership lookup.
//!
//! Run with: cargo bench
//!
//! Filter benchmarks:
//!   cargo bench -- "membership"

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use gs1_ai_linters::linters::iso3166::{ISO3166, ISO3166_NUM3};

/// Benchmark the default binary-search strategy against a linear scan,
/// across hits and misses.
fn bench_membership(c: &mut Criterion) {
    let mut group = c.benchmark_group("membership");

    let by_scan = ISO3166.with_lookup(|code: &str| ISO3166_NUM3.iter().any(|c| c == code));

    for (name, probe) in [("first", "004"), ("last", "894"), ("miss", "999")] {
        group.bench_with_input(BenchmarkId::new("binary_search", name), probe, |b, input| {
            b.iter(|| ISO3166.lint(std::hint::black_box(input)))
        });
        group.bench_with_input(BenchmarkId::new("linear_scan", name), probe, |b, input| {
            b.iter(|| by_scan.lint(std::hint::black_box(input)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_membership);
criterion_main!(benches);
