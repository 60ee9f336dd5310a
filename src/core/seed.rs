//! Synthetic purchases and sales written the first time a collection is missing.

use chrono::{Duration, NaiveDate, NaiveTime};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::domain::{
    inventory_items, menu_items, round2, Purchase, PurchaseDraft, Sale, SaleDraft,
};

const LOOKBACK_DAYS: i64 = 90;

/// Controls whether and how seed data is generated for empty storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeedOptions {
    #[serde(default = "SeedOptions::default_enabled")]
    pub enabled: bool,
    #[serde(default = "SeedOptions::default_purchases")]
    pub purchases: usize,
    #[serde(default = "SeedOptions::default_sales")]
    pub sales: usize,
    /// Fixed RNG seed; `None` draws from entropy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rng_seed: Option<u64>,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            enabled: Self::default_enabled(),
            purchases: Self::default_purchases(),
            sales: Self::default_sales(),
            rng_seed: None,
        }
    }
}

impl SeedOptions {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn default_enabled() -> bool {
        true
    }

    pub fn default_purchases() -> usize {
        50
    }

    pub fn default_sales() -> usize {
        100
    }
}

/// Produces plausible cafe records dated within the 90 days before `today`.
pub struct SeedGenerator<R: Rng> {
    rng: R,
    today: NaiveDate,
}

impl SeedGenerator<StdRng> {
    pub fn from_options(options: &SeedOptions, today: NaiveDate) -> Self {
        let rng = match options.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(rng, today)
    }
}

impl<R: Rng> SeedGenerator<R> {
    pub fn new(rng: R, today: NaiveDate) -> Self {
        Self { rng, today }
    }

    /// Purchases with ids `1..=count`.
    pub fn purchases(&mut self, count: usize) -> Vec<Purchase> {
        (1..=count as u64)
            .map(|id| {
                let draft = PurchaseDraft {
                    item_name: self.pick(inventory_items()),
                    quantity: self.rng.gen_range(10..=100) as f64,
                    price_per_item: self.price(1.0, 20.0),
                    date: self.date(),
                };
                let created_at = draft.date.and_time(NaiveTime::MIN).and_utc();
                Purchase::from_draft(id, draft, created_at)
            })
            .collect()
    }

    /// Sales with ids `1..=count`; sale price is the cost marked up 2x to 3x.
    pub fn sales(&mut self, count: usize) -> Vec<Sale> {
        (1..=count as u64)
            .map(|id| {
                let cost_price = self.price(1.0, 3.0);
                let markup = self.price(2.0, 3.0);
                let draft = SaleDraft {
                    item_name: self.pick(menu_items()),
                    quantity: self.rng.gen_range(1..=50) as f64,
                    sale_price_per_item: round2(cost_price * markup),
                    cost_price,
                    date: self.date(),
                };
                let created_at = draft.date.and_time(NaiveTime::MIN).and_utc();
                Sale::from_draft(id, draft, created_at)
            })
            .collect()
    }

    fn pick(&mut self, items: &[&str]) -> String {
        items
            .choose(&mut self.rng)
            .map(|item| item.to_string())
            .unwrap_or_else(|| "Item".to_string())
    }

    fn price(&mut self, min: f64, max: f64) -> f64 {
        round2(self.rng.gen_range(min..max)).max(min)
    }

    fn date(&mut self) -> NaiveDate {
        let days_ago = self.rng.gen_range(0..LOOKBACK_DAYS);
        self.today - Duration::days(days_ago)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
    }

    fn generator(seed: u64) -> SeedGenerator<StdRng> {
        SeedGenerator::new(StdRng::seed_from_u64(seed), today())
    }

    #[test]
    fn purchases_respect_ranges_and_derivations() {
        let purchases = generator(7).purchases(50);
        assert_eq!(purchases.len(), 50);
        for (idx, purchase) in purchases.iter().enumerate() {
            assert_eq!(purchase.id, idx as u64 + 1);
            assert!((10.0..=100.0).contains(&purchase.quantity));
            assert!((1.0..=20.0).contains(&purchase.price_per_item));
            assert_eq!(
                purchase.total,
                Purchase::total_for(purchase.quantity, purchase.price_per_item)
            );
            assert!(purchase.date <= today());
            assert!(purchase.date > today() - Duration::days(LOOKBACK_DAYS));
            assert!(inventory_items().contains(&purchase.item_name.as_str()));
        }
    }

    #[test]
    fn sales_are_marked_up_and_profitable() {
        let sales = generator(11).sales(100);
        assert_eq!(sales.len(), 100);
        for sale in &sales {
            assert!(sale.sale_price_per_item >= sale.cost_price * 1.9);
            assert!(sale.profit > 0.0);
            assert!(menu_items().contains(&sale.item_name.as_str()));
        }
    }

    #[test]
    fn fixed_seed_is_deterministic() {
        let first = generator(3).purchases(5);
        let second = generator(3).purchases(5);
        assert_eq!(first, second);
    }
}
