pub mod catalog;
pub mod common;
pub mod purchase;
pub mod sale;

pub use catalog::{inventory_items, menu_items};
pub use common::{round2, Amounted, Dated, Identifiable, NamedEntity, RecordId};
pub use purchase::{NewPurchase, Purchase, PurchaseDraft, PurchasePatch};
pub use sale::{NewSale, Sale, SaleDraft, SalePatch};
