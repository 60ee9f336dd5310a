//! The record store owns the purchase and sale collections for the lifetime of a
//! session and mirrors every mutation to a [`KeyValueStore`].
//!
//! Each collection is persisted under its own key as a versioned envelope:
//!
//! ```json
//! { "schema_version": 1, "next_id": 51, "records": [ ... ] }
//! ```
//!
//! `next_id` is a monotonic counter, so ids are never reused after deletions.

use std::sync::Arc;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::clock::Clock;
use crate::core::events::{Listener, StoreEvent};
use crate::core::seed::{SeedGenerator, SeedOptions};
use crate::core::validation::{validate_new_purchase, validate_new_sale};
use crate::domain::{
    Dated, Identifiable, NewPurchase, NewSale, Purchase, PurchasePatch, RecordId, Sale,
    SalePatch,
};
use crate::errors::{BooksError, RecordKind, Result};
use crate::storage::{KeyValueStore, PURCHASES_KEY, SALES_KEY};

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Persisted form of one collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Collection<T> {
    pub schema_version: u32,
    pub next_id: RecordId,
    pub records: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            next_id: 1,
            records: Vec::new(),
        }
    }
}

impl<T: Identifiable> Collection<T> {
    /// Builds a collection whose counter continues after the highest existing id.
    pub fn from_records(records: Vec<T>) -> Self {
        let next_id = records.iter().map(|r| r.id()).max().unwrap_or(0) + 1;
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            next_id,
            records,
        }
    }

    fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    fn find(&self, id: RecordId) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    fn allocate_id(&mut self) -> RecordId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Returns a date-descending copy; records sharing a date keep insertion order.
pub fn sorted_by_date_desc<T: Dated + Clone>(records: &[T]) -> Vec<T> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.date().cmp(&a.date()));
    sorted
}

/// Single source of truth for purchases and sales.
pub struct RecordStore {
    backend: Box<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    purchases: Collection<Purchase>,
    sales: Collection<Sale>,
    listeners: Vec<Listener>,
}

impl RecordStore {
    /// Reads both collections once, seeding any that are missing from storage.
    pub fn open(
        backend: Box<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        seed: &SeedOptions,
    ) -> Result<Self> {
        let stored_purchases = load_collection::<Purchase>(backend.as_ref(), PURCHASES_KEY)?;
        let stored_sales = load_collection::<Sale>(backend.as_ref(), SALES_KEY)?;

        let mut generator = (seed.enabled
            && (stored_purchases.is_none() || stored_sales.is_none()))
        .then(|| SeedGenerator::from_options(seed, clock.today()));

        let purchases = match (stored_purchases, generator.as_mut()) {
            (Some(collection), _) => collection,
            (None, Some(generator)) => {
                let collection = Collection::from_records(generator.purchases(seed.purchases));
                save_collection(backend.as_ref(), PURCHASES_KEY, &collection)?;
                info!(count = collection.records.len(), "seeded purchases");
                collection
            }
            (None, None) => Collection::default(),
        };
        let sales = match (stored_sales, generator.as_mut()) {
            (Some(collection), _) => collection,
            (None, Some(generator)) => {
                let collection = Collection::from_records(generator.sales(seed.sales));
                save_collection(backend.as_ref(), SALES_KEY, &collection)?;
                info!(count = collection.records.len(), "seeded sales");
                collection
            }
            (None, None) => Collection::default(),
        };

        info!(
            purchases = purchases.records.len(),
            sales = sales.records.len(),
            "record store opened"
        );
        Ok(Self {
            backend,
            clock,
            purchases,
            sales,
            listeners: Vec::new(),
        })
    }

    /// Registers a callback invoked after every successful mutation.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn(&StoreEvent) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn list_purchases(&self) -> Vec<Purchase> {
        sorted_by_date_desc(&self.purchases.records)
    }

    pub fn list_sales(&self) -> Vec<Sale> {
        sorted_by_date_desc(&self.sales.records)
    }

    pub fn purchase(&self, id: RecordId) -> Option<&Purchase> {
        self.purchases.find(id)
    }

    pub fn sale(&self, id: RecordId) -> Option<&Sale> {
        self.sales.find(id)
    }

    pub fn purchase_count(&self) -> usize {
        self.purchases.records.len()
    }

    pub fn sale_count(&self) -> usize {
        self.sales.records.len()
    }

    pub fn add_purchase(&mut self, input: NewPurchase) -> Result<Purchase> {
        let draft = validate_new_purchase(&input)?;
        let previous = self.purchases.clone();
        let id = self.purchases.allocate_id();
        let purchase = Purchase::from_draft(id, draft, self.clock.now());
        self.purchases.records.push(purchase.clone());
        self.commit_purchases(previous)?;
        debug!(id, item = %purchase.item_name, total = purchase.total, "purchase added");
        self.emit(StoreEvent::PurchaseAdded(purchase.clone()));
        Ok(purchase)
    }

    pub fn edit_purchase(&mut self, id: RecordId, patch: PurchasePatch) -> Result<Purchase> {
        let index = self
            .purchases
            .position(id)
            .ok_or_else(|| not_found(RecordKind::Purchase, id))?;
        let draft = validate_new_purchase(&patch.merge_onto(&self.purchases.records[index]))?;
        let previous = self.purchases.clone();
        self.purchases.records[index].apply_draft(draft);
        let updated = self.purchases.records[index].clone();
        self.commit_purchases(previous)?;
        debug!(id, total = updated.total, "purchase updated");
        self.emit(StoreEvent::PurchaseUpdated(updated.clone()));
        Ok(updated)
    }

    pub fn delete_purchase(&mut self, id: RecordId) -> Result<Purchase> {
        let index = self
            .purchases
            .position(id)
            .ok_or_else(|| not_found(RecordKind::Purchase, id))?;
        let previous = self.purchases.clone();
        let removed = self.purchases.records.remove(index);
        self.commit_purchases(previous)?;
        debug!(id, "purchase deleted");
        self.emit(StoreEvent::PurchaseDeleted(removed.clone()));
        Ok(removed)
    }

    pub fn add_sale(&mut self, input: NewSale) -> Result<Sale> {
        let draft = validate_new_sale(&input)?;
        let previous = self.sales.clone();
        let id = self.sales.allocate_id();
        let sale = Sale::from_draft(id, draft, self.clock.now());
        self.sales.records.push(sale.clone());
        self.commit_sales(previous)?;
        debug!(id, item = %sale.item_name, total_sale = sale.total_sale, "sale added");
        self.emit(StoreEvent::SaleAdded(sale.clone()));
        Ok(sale)
    }

    pub fn edit_sale(&mut self, id: RecordId, patch: SalePatch) -> Result<Sale> {
        let index = self
            .sales
            .position(id)
            .ok_or_else(|| not_found(RecordKind::Sale, id))?;
        let draft = validate_new_sale(&patch.merge_onto(&self.sales.records[index]))?;
        let previous = self.sales.clone();
        self.sales.records[index].apply_draft(draft);
        let updated = self.sales.records[index].clone();
        self.commit_sales(previous)?;
        debug!(id, total_sale = updated.total_sale, "sale updated");
        self.emit(StoreEvent::SaleUpdated(updated.clone()));
        Ok(updated)
    }

    pub fn delete_sale(&mut self, id: RecordId) -> Result<Sale> {
        let index = self
            .sales
            .position(id)
            .ok_or_else(|| not_found(RecordKind::Sale, id))?;
        let previous = self.sales.clone();
        let removed = self.sales.records.remove(index);
        self.commit_sales(previous)?;
        debug!(id, "sale deleted");
        self.emit(StoreEvent::SaleDeleted(removed.clone()));
        Ok(removed)
    }

    /// Re-persists both collections.
    pub fn flush(&self) -> Result<()> {
        save_collection(self.backend.as_ref(), PURCHASES_KEY, &self.purchases)?;
        save_collection(self.backend.as_ref(), SALES_KEY, &self.sales)?;
        Ok(())
    }

    /// Flushes and releases the backend.
    pub fn close(self) -> Result<()> {
        self.flush()?;
        info!("record store closed");
        Ok(())
    }

    // On failure the in-memory collection is rolled back to `previous`.
    fn commit_purchases(&mut self, previous: Collection<Purchase>) -> Result<()> {
        if let Err(err) = save_collection(self.backend.as_ref(), PURCHASES_KEY, &self.purchases) {
            warn!(error = %err, "persisting purchases failed; change rolled back");
            self.purchases = previous;
            return Err(err);
        }
        Ok(())
    }

    fn commit_sales(&mut self, previous: Collection<Sale>) -> Result<()> {
        if let Err(err) = save_collection(self.backend.as_ref(), SALES_KEY, &self.sales) {
            warn!(error = %err, "persisting sales failed; change rolled back");
            self.sales = previous;
            return Err(err);
        }
        Ok(())
    }

    fn emit(&self, event: StoreEvent) {
        for listener in &self.listeners {
            listener(&event);
        }
    }
}

fn not_found(kind: RecordKind, id: RecordId) -> BooksError {
    warn!(%kind, id, "record not found");
    BooksError::NotFound { kind, id }
}

pub fn load_collection<T: DeserializeOwned + Identifiable>(
    backend: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<Collection<T>>> {
    let Some(raw) = backend.get(key)? else {
        return Ok(None);
    };
    let mut collection: Collection<T> = serde_json::from_str(&raw)?;
    if collection.schema_version > CURRENT_SCHEMA_VERSION {
        return Err(BooksError::Storage(format!(
            "`{}` schema v{} is newer than supported v{}",
            key, collection.schema_version, CURRENT_SCHEMA_VERSION
        )));
    }
    let floor = collection.records.iter().map(|r| r.id()).max().unwrap_or(0) + 1;
    if collection.next_id < floor {
        warn!(key, stored = collection.next_id, floor, "id counter behind stored records");
        collection.next_id = floor;
    }
    Ok(Some(collection))
}

pub fn save_collection<T: Serialize>(
    backend: &dyn KeyValueStore,
    key: &str,
    collection: &Collection<T>,
) -> Result<()> {
    let json = serde_json::to_string(collection)?;
    backend.set(key, &json)
}
