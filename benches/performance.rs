use std::sync::Arc;

use cafe_books::{
    core::{
        services::{FilterService, RecordFilter, SummaryService},
        FixedClock, SeedOptions,
    },
    storage::JsonFileStore,
    RecordStore,
};
use chrono::{NaiveDate, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use tempfile::tempdir;

fn seed_options(count: usize) -> SeedOptions {
    SeedOptions {
        enabled: true,
        purchases: count,
        sales: count * 2,
        rng_seed: Some(2024),
    }
}

fn clock() -> Arc<FixedClock> {
    Arc::new(FixedClock(Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap()))
}

fn bench_store_io(c: &mut Criterion) {
    let dir = tempdir().expect("tempdir");
    let root = dir.path().join("data");
    {
        let backend = JsonFileStore::new(root.clone()).expect("backend");
        RecordStore::open(Box::new(backend), clock(), &seed_options(5_000)).expect("seed");
    }

    c.bench_function("store_open_5k", |b| {
        b.iter(|| {
            let backend = JsonFileStore::new(root.clone()).expect("backend");
            let store = RecordStore::open(Box::new(backend), clock(), &SeedOptions::disabled())
                .expect("open");
            black_box(store.purchase_count());
        })
    });

    c.bench_function("store_flush_5k", |b| {
        let backend = JsonFileStore::new(root.clone()).expect("backend");
        let store = RecordStore::open(Box::new(backend), clock(), &SeedOptions::disabled())
            .expect("open");
        b.iter(|| store.flush().expect("flush"))
    });
}

fn bench_aggregation(c: &mut Criterion) {
    let dir = tempdir().expect("tempdir");
    let backend = JsonFileStore::new(dir.path().join("data")).expect("backend");
    let store = RecordStore::open(Box::new(backend), clock(), &seed_options(10_000)).expect("seed");
    let purchases = store.list_purchases();
    let sales = store.list_sales();

    c.bench_function("summarize_month", |b| {
        b.iter(|| black_box(SummaryService::summarize(&purchases, &sales, 6, 2024)))
    });

    c.bench_function("monthly_series", |b| {
        b.iter(|| black_box(SummaryService::monthly_series(&purchases, &sales, 2024)))
    });

    c.bench_function("top_items", |b| {
        b.iter(|| black_box(SummaryService::top_items(&purchases, &sales, 5)))
    });

    c.bench_function("filter_combined", |b| {
        b.iter_batched(
            || RecordFilter {
                start: NaiveDate::from_ymd_opt(2024, 5, 1),
                end: NaiveDate::from_ymd_opt(2024, 5, 31),
                item_term: "syrup".into(),
            },
            |filter| black_box(FilterService::apply(&purchases, &filter)),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_store_io, bench_aggregation);
criterion_main!(benches);
