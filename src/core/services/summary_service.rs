//! Aggregation helpers for dashboard totals, monthly trends, and item rankings.

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::domain::{round2, Amounted, Dated, NamedEntity, Purchase, Sale};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Default length of each ranking returned by [`SummaryService::top_items`].
pub const DEFAULT_TOP_ITEMS: usize = 5;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub total_expenses: f64,
    pub total_earnings: f64,
    pub net_profit: f64,
}

/// One chart point of the yearly trend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyPoint {
    pub name: String,
    pub expenses: f64,
    pub earnings: f64,
    pub profit: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemTotal {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TopItems {
    /// Ranked by aggregate spend.
    pub purchased: Vec<ItemTotal>,
    /// Ranked by aggregate revenue.
    pub sold: Vec<ItemTotal>,
}

pub struct SummaryService;

impl SummaryService {
    /// Totals for records dated in `month` (1-12) of `year`.
    pub fn summarize(purchases: &[Purchase], sales: &[Sale], month: u32, year: i32) -> Summary {
        let in_month = |date: chrono::NaiveDate| date.month() == month && date.year() == year;
        let expenses: f64 = purchases
            .iter()
            .filter(|p| in_month(p.date()))
            .map(|record| record.amount())
            .sum();
        let earnings: f64 = sales
            .iter()
            .filter(|s| in_month(s.date()))
            .map(|record| record.amount())
            .sum();
        Summary {
            total_expenses: round2(expenses),
            total_earnings: round2(earnings),
            net_profit: round2(earnings - expenses),
        }
    }

    /// Twelve points, January through December of `year`, bucketed from the records.
    pub fn monthly_series(purchases: &[Purchase], sales: &[Sale], year: i32) -> Vec<MonthlyPoint> {
        let mut expenses = [0.0_f64; 12];
        let mut earnings = [0.0_f64; 12];
        for purchase in purchases.iter().filter(|p| p.date().year() == year) {
            expenses[purchase.date().month0() as usize] += purchase.amount();
        }
        for sale in sales.iter().filter(|s| s.date().year() == year) {
            earnings[sale.date().month0() as usize] += sale.amount();
        }
        MONTH_NAMES
            .into_iter()
            .enumerate()
            .map(|(idx, name)| MonthlyPoint {
                name: name.to_string(),
                expenses: round2(expenses[idx]),
                earnings: round2(earnings[idx]),
                profit: round2(earnings[idx] - expenses[idx]),
            })
            .collect()
    }

    pub fn top_items(purchases: &[Purchase], sales: &[Sale], n: usize) -> TopItems {
        TopItems {
            purchased: rank_by_amount(purchases, n),
            sold: rank_by_amount(sales, n),
        }
    }
}

/// Groups by exact item name, sums amounts, and keeps the `n` largest.
/// Ties are ordered by item name ascending.
pub fn rank_by_amount<T: NamedEntity + Amounted>(records: &[T], n: usize) -> Vec<ItemTotal> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for record in records {
        *totals.entry(record.item_name()).or_insert(0.0) += record.amount();
    }
    let mut ranked: Vec<ItemTotal> = totals
        .into_iter()
        .map(|(name, value)| ItemTotal {
            name: name.to_string(),
            value: round2(value),
        })
        .collect();
    ranked.sort_by(|a, b| b.value.total_cmp(&a.value).then_with(|| a.name.cmp(&b.name)));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PurchaseDraft, SaleDraft};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn purchase(id: u64, name: &str, total: f64, date: NaiveDate) -> Purchase {
        let draft = PurchaseDraft {
            item_name: name.into(),
            quantity: 1.0,
            price_per_item: total,
            date,
        };
        Purchase::from_draft(id, draft, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
    }

    fn sale(id: u64, name: &str, total: f64, date: NaiveDate) -> Sale {
        let draft = SaleDraft {
            item_name: name.into(),
            quantity: 1.0,
            sale_price_per_item: total,
            cost_price: total / 2.0,
            date,
        };
        Sale::from_draft(id, draft, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn summarize_empty_input_is_zero() {
        assert_eq!(SummaryService::summarize(&[], &[], 3, 2024), Summary::default());
    }

    #[test]
    fn summarize_ignores_same_month_of_other_years() {
        let purchases = vec![
            purchase(1, "Milk", 30.0, ymd(2024, 3, 2)),
            purchase(2, "Milk", 99.0, ymd(2023, 3, 2)),
        ];
        let summary = SummaryService::summarize(&purchases, &[], 3, 2024);
        assert_eq!(summary.total_expenses, 30.0);
        assert_eq!(summary.net_profit, -30.0);
    }

    #[test]
    fn monthly_series_buckets_real_records() {
        let purchases = vec![
            purchase(1, "Milk", 10.0, ymd(2024, 1, 9)),
            purchase(2, "Sugar", 5.5, ymd(2024, 1, 20)),
            purchase(3, "Milk", 70.0, ymd(2023, 12, 31)),
        ];
        let sales = vec![sale(1, "Latte", 40.0, ymd(2024, 12, 1))];
        let series = SummaryService::monthly_series(&purchases, &sales, 2024);

        assert_eq!(series.len(), 12);
        assert_eq!(series[0].name, "Jan");
        assert_eq!(series[0].expenses, 15.5);
        assert_eq!(series[0].profit, -15.5);
        assert_eq!(series[11].name, "Dec");
        assert_eq!(series[11].expenses, 0.0);
        assert_eq!(series[11].earnings, 40.0);
        assert!(series[1..11].iter().all(|p| p.expenses == 0.0 && p.earnings == 0.0));
    }

    #[test]
    fn ranking_breaks_ties_by_name() {
        let purchases = vec![
            purchase(1, "Sugar", 50.0, ymd(2024, 1, 1)),
            purchase(2, "Honey", 50.0, ymd(2024, 1, 1)),
            purchase(3, "Lids", 20.0, ymd(2024, 1, 1)),
            purchase(4, "Lids", 40.0, ymd(2024, 1, 2)),
        ];
        let ranked = rank_by_amount(&purchases, 5);
        let names: Vec<_> = ranked.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["Lids", "Honey", "Sugar"]);
        assert_eq!(ranked[0].value, 60.0);
    }
}
