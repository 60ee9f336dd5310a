use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::record_store::RecordStore;
use crate::domain::{Purchase, Sale};

use super::summary_service::{MonthlyPoint, Summary, SummaryService, TopItems, DEFAULT_TOP_ITEMS};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardOptions {
    #[serde(default = "DashboardOptions::default_recent_limit")]
    pub recent_limit: usize,
    #[serde(default = "DashboardOptions::default_top_items")]
    pub top_items: usize,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            recent_limit: Self::default_recent_limit(),
            top_items: Self::default_top_items(),
        }
    }
}

impl DashboardOptions {
    pub fn default_recent_limit() -> usize {
        5
    }

    pub fn default_top_items() -> usize {
        DEFAULT_TOP_ITEMS
    }
}

/// Everything the dashboard page renders, computed from one store snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dashboard {
    pub summary: Summary,
    pub monthly: Vec<MonthlyPoint>,
    pub top_items: TopItems,
    pub recent_purchases: Vec<Purchase>,
    pub recent_sales: Vec<Sale>,
}

pub struct DashboardService;

impl DashboardService {
    /// Builds the dashboard for the month and year containing `today`.
    pub fn build(store: &RecordStore, today: NaiveDate, options: &DashboardOptions) -> Dashboard {
        let mut purchases = store.list_purchases();
        let mut sales = store.list_sales();
        let summary = SummaryService::summarize(&purchases, &sales, today.month(), today.year());
        let monthly = SummaryService::monthly_series(&purchases, &sales, today.year());
        let top_items = SummaryService::top_items(&purchases, &sales, options.top_items);
        purchases.truncate(options.recent_limit);
        sales.truncate(options.recent_limit);
        Dashboard {
            summary,
            monthly,
            top_items,
            recent_purchases: purchases,
            recent_sales: sales,
        }
    }
}
