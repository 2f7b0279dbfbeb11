//! Benchmarks for the calculator folds.
//!
//! Run with: cargo bench -p tender-money

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_decimal::Decimal;
use tender_currencies::Currency;
use tender_math::RoundingPolicy;
use tender_money::{calculator, Money};

fn ledger(len: usize) -> Vec<Money> {
    let eur = Currency::of("EUR").unwrap();
    (0..len)
        .map(|i| Money::of_major(Decimal::new(i as i64 * 1_234 + 5, 3), eur))
        .collect()
}

fn bench_sums(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum");
    let policy = RoundingPolicy::HALF_TO_EVEN;
    for len in [10, 1_000, 100_000] {
        let moneys = ledger(len);
        group.bench_with_input(BenchmarkId::new("exact", len), &moneys, |b, m| {
            b.iter(|| calculator::sum(black_box(m)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("rounded", len), &moneys, |b, m| {
            b.iter(|| calculator::sum_with(black_box(m), &policy).unwrap())
        });
    }
    group.finish();
}

fn bench_average(c: &mut Criterion) {
    let moneys = ledger(10_000);
    let policy = RoundingPolicy::HALF_TO_EVEN;
    c.bench_function("average_with/10000", |b| {
        b.iter(|| calculator::average_with(black_box(&moneys), &policy).unwrap())
    });
}

criterion_group!(benches, bench_sums, bench_average);
criterion_main!(benches);
