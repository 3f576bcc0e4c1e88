// ============================================================================
// Text Decimal Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Validation - Grammar check over growing tokens
// 2. Addition - Same-sign and cross-sign addition by operand length
// 3. Summation - Sequential vs. parallel exact sums
// 4. Lossy Conversion - to_approximate vs. std float parsing
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use text_decimal::prelude::*;

/// Deterministic decimal with `digits` integer and `digits` fraction digits.
fn make_decimal(digits: usize, seed: usize, negative: bool) -> String {
    let body: String = (0..digits * 2)
        .map(|i| char::from(b'0' + ((i * 7 + seed * 13) % 10) as u8))
        .collect();
    let (integer, fraction) = body.split_at(digits);
    let sign = if negative { "-" } else { "" };
    format!("{}1{}.{}", sign, integer, fraction)
}

// ============================================================================
// Validation Benchmarks
// ============================================================================

fn benchmark_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation");

    for digits in [8, 64, 512].iter() {
        let token = make_decimal(*digits, 1, true);
        group.bench_with_input(BenchmarkId::from_parameter(digits), &token, |b, token| {
            b.iter(|| black_box(is_valid(black_box(token))));
        });
    }

    group.finish();
}

// ============================================================================
// Addition Benchmarks
// ============================================================================

fn benchmark_addition(c: &mut Criterion) {
    let mut group = c.benchmark_group("addition");

    for digits in [8, 64, 512, 4096].iter() {
        let a = make_decimal(*digits, 1, false);
        let b = make_decimal(*digits / 2 + 1, 2, false);
        let negative_b = make_decimal(*digits / 2 + 1, 2, true);

        group.bench_with_input(
            BenchmarkId::new("same_sign", digits),
            &(&a, &b),
            |bench, (a, b)| {
                bench.iter(|| black_box(add(a, b)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("cross_sign", digits),
            &(&a, &negative_b),
            |bench, (a, b)| {
                bench.iter(|| black_box(add(a, b)));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Summation Benchmarks
// ============================================================================

fn benchmark_summation(c: &mut Criterion) {
    let mut group = c.benchmark_group("summation");

    for count in [100, 10_000].iter() {
        let values: Vec<DecimalString> = (0..*count)
            .map(|i| make_decimal(24, i, i % 4 == 0).parse().unwrap())
            .collect();

        group.bench_with_input(BenchmarkId::new("sequential", count), &values, |b, values| {
            b.iter(|| black_box(sum(values)));
        });

        group.bench_with_input(BenchmarkId::new("parallel_4", count), &values, |b, values| {
            b.iter(|| black_box(par_sum(values, 4)));
        });
    }

    group.finish();
}

// ============================================================================
// Lossy Conversion Benchmarks
// ============================================================================

fn benchmark_conversion(c: &mut Criterion) {
    let token = "-123456.789012";

    c.bench_function("to_approximate", |b| {
        b.iter(|| black_box(to_approximate(black_box(token))));
    });

    c.bench_function("std_parse_f64", |b| {
        b.iter(|| black_box(black_box(token).parse::<f64>()));
    });
}

criterion_group!(
    benches,
    benchmark_validation,
    benchmark_addition,
    benchmark_summation,
    benchmark_conversion,
);
criterion_main!(benches);
