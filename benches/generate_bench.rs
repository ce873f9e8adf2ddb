//! Benchmarks for fixture generation and CSV encoding.

use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use media_fixtures::export::to_csv;
use media_fixtures::{CasePlan, FakeProvider, Generator};
use std::hint::black_box;

fn reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

/// Generate datasets of increasing size with the default block proportions
fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for records in [100usize, 1_000] {
        let plan = CasePlan {
            records,
            negative_start: records * 3 / 10,
            edge_start: records * 6 / 10,
            ..Default::default()
        };
        group.throughput(Throughput::Elements(records as u64));
        group.bench_with_input(
            BenchmarkId::new("records", records),
            &plan,
            |b, &plan| {
                b.iter(|| {
                    let mut gen = Generator::new(FakeProvider::seeded(42), plan, reference());
                    black_box(gen.generate().len())
                })
            },
        );
    }

    group.finish();
}

fn bench_to_csv(c: &mut Criterion) {
    let dataset =
        Generator::new(FakeProvider::seeded(42), CasePlan::default(), reference()).generate();

    c.bench_function("to_csv_titles", |b| {
        b.iter(|| black_box(to_csv(&dataset.titles).unwrap().len()))
    });
    c.bench_function("to_csv_credits", |b| {
        b.iter(|| black_box(to_csv(&dataset.credits).unwrap().len()))
    });
}

criterion_group!(benches, bench_generate, bench_to_csv);
criterion_main!(benches);
