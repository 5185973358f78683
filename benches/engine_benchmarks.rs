//! Performance benchmarks for the payslip engine.
//!
//! Covers the two hot paths: bracket resolution in the tax calculator and
//! row aggregation across many employees.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use payslip_engine::aggregation::PayRecordAggregator;
use payslip_engine::models::TimesheetRow;
use payslip_engine::tax::{calculate_tax, calculate_tax_on_base, resident, working_holiday};

fn bench_tax_calculation(c: &mut Criterion) {
    let mut group = c.benchmark_group("tax_calculation");

    group.bench_function("resident_mid_band", |b| {
        b.iter(|| calculate_tax(black_box(dec!(625)), resident()))
    });

    group.bench_function("resident_top_band", |b| {
        b.iter(|| calculate_tax(black_box(dec!(5000)), resident()))
    });

    group.bench_function("working_holiday_split_base", |b| {
        b.iter(|| calculate_tax_on_base(black_box(dec!(39000)), black_box(dec!(3000)), working_holiday()))
    });

    group.finish();
}

/// Builds `count` rows cycling over 100 distinct employee ids, so repeated
/// ids exercise the append path.
fn build_rows(count: usize) -> Vec<TimesheetRow> {
    (0..count)
        .map(|index| TimesheetRow {
            employee_id: (index % 100) as u32 + 1,
            hours: vec![Decimal::from(8), Decimal::from(4)],
            rates: vec![dec!(28.54), dec!(32.10)],
            visa: None,
            year_to_date: None,
        })
        .collect()
}

fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");

    for size in [100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let rows = build_rows(size);
            b.iter(|| {
                let mut aggregator = PayRecordAggregator::new();
                for row in rows.iter().cloned() {
                    aggregator.ingest(row).unwrap();
                }
                black_box(aggregator.len())
            })
        });
    }

    group.finish();
}

fn bench_full_derivation(c: &mut Criterion) {
    let mut aggregator = PayRecordAggregator::new();
    for row in build_rows(1_000) {
        aggregator.ingest(row).unwrap();
    }
    let records = aggregator.into_records();

    c.bench_function("derive_1000_rows_of_records", |b| {
        b.iter(|| {
            records
                .values()
                .map(|record| record.net().unwrap())
                .sum::<Decimal>()
        })
    });
}

criterion_group!(
    benches,
    bench_tax_calculation,
    bench_aggregation,
    bench_full_derivation
);
criterion_main!(benches);
