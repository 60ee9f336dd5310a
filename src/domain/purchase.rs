use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{round2, Amounted, Dated, Identifiable, NamedEntity, RecordId};

/// Inventory spend recorded against a calendar date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Purchase {
    pub id: RecordId,
    pub item_name: String,
    pub quantity: f64,
    pub price_per_item: f64,
    /// Always `quantity * price_per_item` rounded to cents.
    pub total: f64,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Purchase {
    pub fn from_draft(id: RecordId, draft: PurchaseDraft, created_at: DateTime<Utc>) -> Self {
        let mut purchase = Self {
            id,
            item_name: String::new(),
            quantity: 0.0,
            price_per_item: 0.0,
            total: 0.0,
            date: draft.date,
            created_at,
        };
        purchase.apply_draft(draft);
        purchase
    }

    /// Overwrites the editable fields and recomputes `total`. Keeps `id` and `created_at`.
    pub fn apply_draft(&mut self, draft: PurchaseDraft) {
        self.item_name = draft.item_name;
        self.quantity = draft.quantity;
        self.price_per_item = draft.price_per_item;
        self.date = draft.date;
        self.total = Self::total_for(self.quantity, self.price_per_item);
    }

    pub fn total_for(quantity: f64, price_per_item: f64) -> f64 {
        round2(quantity * price_per_item)
    }
}

impl Identifiable for Purchase {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl NamedEntity for Purchase {
    fn item_name(&self) -> &str {
        &self.item_name
    }
}

impl Dated for Purchase {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Amounted for Purchase {
    fn amount(&self) -> f64 {
        self.total
    }
}

/// Caller-supplied fields for a new purchase. Derived fields are never accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewPurchase {
    pub item_name: String,
    pub quantity: f64,
    pub price_per_item: f64,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl NewPurchase {
    pub fn new(
        item_name: impl Into<String>,
        quantity: f64,
        price_per_item: f64,
        date: NaiveDate,
    ) -> Self {
        Self {
            item_name: item_name.into(),
            quantity,
            price_per_item,
            date: Some(date),
        }
    }
}

/// Partial update for an existing purchase; `None` keeps the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PurchasePatch {
    #[serde(default)]
    pub item_name: Option<String>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub price_per_item: Option<f64>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl PurchasePatch {
    /// Merges the patch over `current`, producing input ready for validation.
    pub fn merge_onto(&self, current: &Purchase) -> NewPurchase {
        NewPurchase {
            item_name: self
                .item_name
                .clone()
                .unwrap_or_else(|| current.item_name.clone()),
            quantity: self.quantity.unwrap_or(current.quantity),
            price_per_item: self.price_per_item.unwrap_or(current.price_per_item),
            date: Some(self.date.unwrap_or(current.date)),
        }
    }
}

/// Validated purchase fields with a trimmed item name and a concrete date.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseDraft {
    pub item_name: String,
    pub quantity: f64,
    pub price_per_item: f64,
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn draft(quantity: f64, price: f64) -> PurchaseDraft {
        PurchaseDraft {
            item_name: "Milk".into(),
            quantity,
            price_per_item: price,
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        }
    }

    #[test]
    fn total_is_derived_from_quantity_and_price() {
        let created = Utc.with_ymd_and_hms(2024, 1, 5, 9, 0, 0).unwrap();
        let purchase = Purchase::from_draft(1, draft(10.0, 2.5), created);
        assert_eq!(purchase.total, 25.0);
        assert_eq!(purchase.created_at, created);
    }

    #[test]
    fn apply_draft_recomputes_total_and_keeps_identity() {
        let created = Utc.with_ymd_and_hms(2024, 1, 5, 9, 0, 0).unwrap();
        let mut purchase = Purchase::from_draft(7, draft(10.0, 2.5), created);
        purchase.apply_draft(draft(3.0, 1.333));
        assert_eq!(purchase.id, 7);
        assert_eq!(purchase.created_at, created);
        assert_eq!(purchase.total, 4.0);
    }

    #[test]
    fn patch_keeps_unspecified_fields() {
        let created = Utc.with_ymd_and_hms(2024, 1, 5, 9, 0, 0).unwrap();
        let purchase = Purchase::from_draft(1, draft(10.0, 2.5), created);
        let patch = PurchasePatch {
            quantity: Some(4.0),
            ..PurchasePatch::default()
        };
        let merged = patch.merge_onto(&purchase);
        assert_eq!(merged.item_name, "Milk");
        assert_eq!(merged.quantity, 4.0);
        assert_eq!(merged.price_per_item, 2.5);
        assert_eq!(merged.date, Some(purchase.date));
    }
}
