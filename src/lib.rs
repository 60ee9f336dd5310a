#![doc(test(attr(deny(warnings))))]

//! Cafe Books keeps a cafe's purchases (inventory spend) and sales (menu
//! revenue), persists them to a key-value backend, and derives the summaries,
//! monthly trends, and rankings a bookkeeping dashboard displays.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

use std::{
    path::PathBuf,
    sync::{Arc, Once},
};

pub use crate::core::{RecordStore, StoreEvent};
pub use crate::errors::{BooksError, RecordKind, Result};

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and logs the build that is running.
pub fn init(log_filter: &str) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(log_filter);
        let build = utils::build_info::current();
        tracing::info!(
            version = build.version,
            git = build.git_hash,
            profile = build.profile,
            "Cafe Books tracing initialized."
        );
    });
}

/// Opens the record store described by `config`, backed by JSON files on disk.
///
/// `base` overrides the application directory (`CAFE_BOOKS_HOME` or `~/.cafe_books`).
pub fn open_store(config: &config::Config, base: Option<PathBuf>) -> Result<RecordStore> {
    let base = crate::core::utils::PathResolver::resolve_base(base);
    let backend = storage::JsonFileStore::new(config.resolve_data_dir(&base))?;
    RecordStore::open(
        Box::new(backend),
        Arc::new(crate::core::SystemClock),
        &config.seed,
    )
}
