//! Order-preserving narrowing of record lists.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Dated, NamedEntity};

/// Criteria combined with AND semantics: date range first, then item term.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordFilter {
    #[serde(default)]
    pub start: Option<NaiveDate>,
    #[serde(default)]
    pub end: Option<NaiveDate>,
    #[serde(default)]
    pub item_term: String,
}

impl RecordFilter {
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none() && self.item_term.is_empty()
    }
}

pub struct FilterService;

impl FilterService {
    /// Inclusive on both ends; `None` leaves that side unbounded.
    pub fn by_date_range<T: Dated + Clone>(
        records: &[T],
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Vec<T> {
        records
            .iter()
            .filter(|record| {
                let date = record.date();
                start.map_or(true, |s| date >= s) && end.map_or(true, |e| date <= e)
            })
            .cloned()
            .collect()
    }

    /// Case-insensitive substring match on the item name. An empty term keeps everything.
    pub fn by_item_substring<T: NamedEntity + Clone>(records: &[T], term: &str) -> Vec<T> {
        if term.is_empty() {
            return records.to_vec();
        }
        let needle = term.to_lowercase();
        records
            .iter()
            .filter(|record| record.item_name().to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    pub fn apply<T: Dated + NamedEntity + Clone>(records: &[T], filter: &RecordFilter) -> Vec<T> {
        if filter.is_empty() {
            return records.to_vec();
        }
        let in_range = Self::by_date_range(records, filter.start, filter.end);
        Self::by_item_substring(&in_range, &filter.item_term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Purchase, PurchaseDraft};
    use chrono::{TimeZone, Utc};

    fn purchase(id: u64, name: &str, day: u32) -> Purchase {
        let draft = PurchaseDraft {
            item_name: name.into(),
            quantity: 1.0,
            price_per_item: 1.0,
            date: NaiveDate::from_ymd_opt(2024, 2, day).unwrap(),
        };
        Purchase::from_draft(id, draft, Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap())
    }

    fn ids(records: &[Purchase]) -> Vec<u64> {
        records.iter().map(|p| p.id).collect()
    }

    fn sample() -> Vec<Purchase> {
        vec![
            purchase(1, "Vanilla Syrup", 20),
            purchase(2, "Milk", 10),
            purchase(3, "Caramel Syrup", 5),
            purchase(4, "Honey", 10),
        ]
    }

    #[test]
    fn open_range_is_identity() {
        let records = sample();
        assert_eq!(FilterService::by_date_range(&records, None, None), records);
    }

    #[test]
    fn bounds_are_inclusive() {
        let records = sample();
        let d = |day| NaiveDate::from_ymd_opt(2024, 2, day);
        assert_eq!(ids(&FilterService::by_date_range(&records, d(10), d(20))), vec![1, 2, 4]);
        assert_eq!(ids(&FilterService::by_date_range(&records, d(11), None)), vec![1]);
        assert_eq!(ids(&FilterService::by_date_range(&records, None, d(5))), vec![3]);
        assert!(FilterService::by_date_range(&records, d(21), d(1)).is_empty());
    }

    #[test]
    fn item_match_ignores_case() {
        let records = sample();
        assert_eq!(ids(&FilterService::by_item_substring(&records, "SYRUP")), vec![1, 3]);
        assert_eq!(FilterService::by_item_substring(&records, ""), records);
    }

    #[test]
    fn apply_intersects_criteria() {
        let records = sample();
        let filter = RecordFilter {
            start: NaiveDate::from_ymd_opt(2024, 2, 6),
            end: None,
            item_term: "syrup".into(),
        };
        assert_eq!(ids(&FilterService::apply(&records, &filter)), vec![1]);
        assert!(RecordFilter::default().is_empty());
        assert!(!filter.is_empty());
        assert_eq!(FilterService::apply(&records, &RecordFilter::default()), records);
    }
}
