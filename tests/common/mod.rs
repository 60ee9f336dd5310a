#![allow(dead_code)]

use std::sync::Arc;

use cafe_books::{
    core::{FixedClock, SeedOptions},
    storage::{JsonFileStore, MemoryStore},
    RecordStore,
};
use chrono::{NaiveDate, TimeZone, Utc};
use tempfile::TempDir;

pub fn clock() -> Arc<FixedClock> {
    Arc::new(FixedClock(Utc.with_ymd_and_hms(2024, 3, 20, 9, 30, 0).unwrap()))
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Empty store backed by memory.
pub fn memory_store() -> RecordStore {
    RecordStore::open(Box::new(MemoryStore::new()), clock(), &SeedOptions::disabled())
        .expect("open memory store")
}

/// Creates a JSON file backend in a fresh temp dir. Keep the guard alive for the test.
pub fn file_backend() -> (JsonFileStore, TempDir) {
    let temp = TempDir::new().expect("create temp dir");
    let backend = JsonFileStore::new(temp.path().join("data")).expect("create json store");
    (backend, temp)
}
