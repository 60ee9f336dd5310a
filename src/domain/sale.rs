use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{round2, Amounted, Dated, Identifiable, NamedEntity, RecordId};

/// Menu revenue recorded against a calendar date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sale {
    pub id: RecordId,
    pub item_name: String,
    pub quantity: f64,
    pub sale_price_per_item: f64,
    /// Per-unit cost of goods.
    pub cost_price: f64,
    pub total_sale: f64,
    pub profit: f64,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Sale {
    pub fn from_draft(id: RecordId, draft: SaleDraft, created_at: DateTime<Utc>) -> Self {
        let mut sale = Self {
            id,
            item_name: String::new(),
            quantity: 0.0,
            sale_price_per_item: 0.0,
            cost_price: 0.0,
            total_sale: 0.0,
            profit: 0.0,
            date: draft.date,
            created_at,
        };
        sale.apply_draft(draft);
        sale
    }

    /// Overwrites the editable fields and recomputes `total_sale` and `profit`.
    pub fn apply_draft(&mut self, draft: SaleDraft) {
        self.item_name = draft.item_name;
        self.quantity = draft.quantity;
        self.sale_price_per_item = draft.sale_price_per_item;
        self.cost_price = draft.cost_price;
        self.date = draft.date;
        let (total_sale, profit) =
            Self::totals_for(self.quantity, self.sale_price_per_item, self.cost_price);
        self.total_sale = total_sale;
        self.profit = profit;
    }

    /// Returns `(total_sale, profit)`; profit is taken against the rounded total.
    pub fn totals_for(quantity: f64, sale_price_per_item: f64, cost_price: f64) -> (f64, f64) {
        let total_sale = round2(quantity * sale_price_per_item);
        let profit = round2(total_sale - quantity * cost_price);
        (total_sale, profit)
    }
}

impl Identifiable for Sale {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl NamedEntity for Sale {
    fn item_name(&self) -> &str {
        &self.item_name
    }
}

impl Dated for Sale {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Amounted for Sale {
    fn amount(&self) -> f64 {
        self.total_sale
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewSale {
    pub item_name: String,
    pub quantity: f64,
    pub sale_price_per_item: f64,
    pub cost_price: f64,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl NewSale {
    pub fn new(
        item_name: impl Into<String>,
        quantity: f64,
        sale_price_per_item: f64,
        cost_price: f64,
        date: NaiveDate,
    ) -> Self {
        Self {
            item_name: item_name.into(),
            quantity,
            sale_price_per_item,
            cost_price,
            date: Some(date),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SalePatch {
    #[serde(default)]
    pub item_name: Option<String>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub sale_price_per_item: Option<f64>,
    #[serde(default)]
    pub cost_price: Option<f64>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl SalePatch {
    pub fn merge_onto(&self, current: &Sale) -> NewSale {
        NewSale {
            item_name: self
                .item_name
                .clone()
                .unwrap_or_else(|| current.item_name.clone()),
            quantity: self.quantity.unwrap_or(current.quantity),
            sale_price_per_item: self
                .sale_price_per_item
                .unwrap_or(current.sale_price_per_item),
            cost_price: self.cost_price.unwrap_or(current.cost_price),
            date: Some(self.date.unwrap_or(current.date)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SaleDraft {
    pub item_name: String,
    pub quantity: f64,
    pub sale_price_per_item: f64,
    pub cost_price: f64,
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn totals_follow_rounded_sale_total() {
        let (total, profit) = Sale::totals_for(3.0, 4.5, 1.25);
        assert_eq!(total, 13.5);
        assert_eq!(profit, 9.75);
    }

    #[test]
    fn from_draft_derives_totals() {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let draft = SaleDraft {
            item_name: "Latte".into(),
            quantity: 8.0,
            sale_price_per_item: 5.0,
            cost_price: 1.5,
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        };
        let sale = Sale::from_draft(3, draft, created);
        assert_eq!(sale.total_sale, 40.0);
        assert_eq!(sale.profit, 28.0);
    }
}
