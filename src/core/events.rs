//! Notifications emitted after a mutation has been applied and persisted.

use crate::domain::{Purchase, Sale};

#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    PurchaseAdded(Purchase),
    PurchaseUpdated(Purchase),
    PurchaseDeleted(Purchase),
    SaleAdded(Sale),
    SaleUpdated(Sale),
    SaleDeleted(Sale),
}

/// Title/description pair suitable for a toast-style notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub description: String,
}

impl StoreEvent {
    pub fn message(&self) -> Notice {
        match self {
            StoreEvent::PurchaseAdded(p) => Notice {
                title: "Purchase added",
                description: format!(
                    "Added {} units of {}",
                    quantity_label(p.quantity),
                    p.item_name
                ),
            },
            StoreEvent::PurchaseUpdated(p) => Notice {
                title: "Purchase updated",
                description: format!("Updated purchase of {}", p.item_name),
            },
            StoreEvent::PurchaseDeleted(p) => Notice {
                title: "Purchase deleted",
                description: format!("Deleted purchase of {}", p.item_name),
            },
            StoreEvent::SaleAdded(s) => Notice {
                title: "Sale added",
                description: format!(
                    "Added sale of {} {}",
                    quantity_label(s.quantity),
                    s.item_name
                ),
            },
            StoreEvent::SaleUpdated(s) => Notice {
                title: "Sale updated",
                description: format!("Updated sale of {}", s.item_name),
            },
            StoreEvent::SaleDeleted(s) => Notice {
                title: "Sale deleted",
                description: format!("Deleted sale of {}", s.item_name),
            },
        }
    }
}

/// Callback registered with the record store.
pub type Listener = Box<dyn Fn(&StoreEvent) + Send + Sync>;

// Whole quantities print without a trailing `.0`.
fn quantity_label(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{}", quantity as i64)
    } else {
        format!("{}", quantity)
    }
}
