//! Benchmarks for single-element and multi-digit arithmetic.
//!
//! Single-element operations are O(1) closed forms; multi-digit operations
//! scale with operand length.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hasse::{Algebra, Alphabet, Arithmetic, Cycle, Digit, Numeral, PositionMap};

// ============================================================================
// Fixtures
// ============================================================================

fn reference() -> Algebra {
    let alphabet = Alphabet::new(8).unwrap();
    Algebra::new(PositionMap::parse(&alphabet, "bhgecea{d,f}").unwrap())
}

/// A numeral of `len` digits cycling through every position.
fn numeral(cycle: Cycle, len: usize) -> Numeral {
    let digits = (0..len)
        .map(|i| cycle.digit(u32::try_from(i % 7).unwrap() + 1))
        .collect();
    Numeral::new(false, digits)
}

// ============================================================================
// Benchmark: rule parsing
// ============================================================================

fn bench_rule_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("rule_parse");
    let eight = Alphabet::new(8).unwrap();
    let full = Alphabet::new(26).unwrap();
    let long_rule: String = ('a'..='z').rev().collect();

    group.bench_function("reference", |b| {
        b.iter(|| black_box(PositionMap::parse(&eight, black_box("bhgecea{d,f}"))));
    });

    group.bench_function("26_symbols", |b| {
        b.iter(|| black_box(PositionMap::parse(&full, black_box(&long_rule))));
    });

    group.finish();
}

// ============================================================================
// Benchmark: single-element operations (the O(1) claim)
// ============================================================================

fn bench_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_element");
    group.throughput(Throughput::Elements(1));

    let cycle = Cycle::new(26);
    let (a, b) = (Digit::new(17), Digit::new(23));

    group.bench_function("add", |bench| {
        bench.iter(|| black_box(cycle.add(black_box(a), black_box(b))));
    });

    group.bench_function("mul", |bench| {
        bench.iter(|| black_box(cycle.mul(black_box(a), black_box(b))));
    });

    group.bench_function("div", |bench| {
        bench.iter(|| black_box(cycle.div(black_box(a), black_box(b))));
    });

    let alg = reference();
    group.bench_function("add_single_symbols", |bench| {
        bench.iter(|| black_box(alg.add_single(black_box('a'), black_box('h'))));
    });

    group.finish();
}

// ============================================================================
// Benchmark: multi-digit operations by length
// ============================================================================

fn bench_multi_digit(c: &mut Criterion) {
    let mut group = c.benchmark_group("multi_digit");
    let cycle = Cycle::new(8);
    let arith = Arithmetic::new(cycle);

    for len in [4usize, 16, 64] {
        let x = numeral(cycle, len);
        let y = numeral(cycle, len / 2);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("add", len), &len, |b, _| {
            b.iter(|| black_box(arith.add(black_box(&x), black_box(&y))));
        });

        group.bench_with_input(BenchmarkId::new("mul", len), &len, |b, _| {
            b.iter(|| black_box(arith.mul(black_box(&x), black_box(&y))));
        });

        group.bench_with_input(BenchmarkId::new("divmod", len), &len, |b, _| {
            b.iter(|| black_box(arith.divmod(black_box(&x), black_box(&y))));
        });

        group.bench_with_input(BenchmarkId::new("gcd", len), &len, |b, _| {
            b.iter(|| black_box(arith.gcd(black_box(&x), black_box(&y))));
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: string API end to end
// ============================================================================

fn bench_string_api(c: &mut Criterion) {
    let mut group = c.benchmark_group("string_api");
    let alg = reference();

    group.bench_function("add", |b| {
        b.iter(|| black_box(alg.add(black_box("ahgce"), black_box("dhc"))));
    });

    group.bench_function("power", |b| {
        b.iter(|| black_box(alg.power(black_box("g"), black_box("hbb"))));
    });

    group.bench_function("format", |b| {
        b.iter(|| black_box(alg.format(black_box("dfdfhg"))));
    });

    let bounded = alg.with_bounds(true, 4);
    group.bench_function("bounded_multiply", |b| {
        b.iter(|| black_box(bounded.multiply(black_box("dddd"), black_box("dddd"))));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_rule_parse,
    bench_single,
    bench_multi_digit,
    bench_string_api
);
criterion_main!(benches);
