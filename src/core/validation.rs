//! Field-level checks run before any record store mutation.
//!
//! Every failing field is reported, not only the first, so callers can flag
//! all offending inputs at once.

use std::fmt;

use chrono::NaiveDate;
use crate::domain::{NewPurchase, NewSale, Purchase, PurchaseDraft, Sale, SaleDraft};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationCode {
    /// Field is empty or missing.
    Required,
    /// Numeric field is zero or negative.
    NonPositive,
    /// Numeric field, or a value derived from it, is NaN or infinite.
    NotFinite,
}

impl fmt::Display for ValidationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ValidationCode::Required => "is required",
            ValidationCode::NonPositive => "must be greater than zero",
            ValidationCode::NotFinite => "must be a finite number",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub code: ValidationCode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the code reported for `field`, if it failed.
    pub fn code_for(&self, field: &str) -> Option<ValidationCode> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.code)
    }

    fn push(&mut self, field: &'static str, code: ValidationCode) {
        self.errors.push(FieldError { field, code });
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, error) in self.errors.iter().enumerate() {
            if idx > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{} {}", error.field, error.code)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

pub fn validate_new_purchase(input: &NewPurchase) -> Result<PurchaseDraft, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let item_name = check_item_name(&mut errors, &input.item_name);
    check_positive(&mut errors, "quantity", input.quantity);
    check_positive(&mut errors, "price_per_item", input.price_per_item);
    if errors.is_empty() {
        let total = Purchase::total_for(input.quantity, input.price_per_item);
        check_derived(&mut errors, "total", total);
    }
    match (check_date(&mut errors, input.date), errors.is_empty()) {
        (Some(date), true) => Ok(PurchaseDraft {
            item_name,
            quantity: input.quantity,
            price_per_item: input.price_per_item,
            date,
        }),
        _ => Err(errors),
    }
}

pub fn validate_new_sale(input: &NewSale) -> Result<SaleDraft, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let item_name = check_item_name(&mut errors, &input.item_name);
    check_positive(&mut errors, "quantity", input.quantity);
    check_positive(&mut errors, "sale_price_per_item", input.sale_price_per_item);
    check_positive(&mut errors, "cost_price", input.cost_price);
    if errors.is_empty() {
        let (total_sale, profit) =
            Sale::totals_for(input.quantity, input.sale_price_per_item, input.cost_price);
        check_derived(&mut errors, "total_sale", total_sale);
        check_derived(&mut errors, "profit", profit);
    }
    match (check_date(&mut errors, input.date), errors.is_empty()) {
        (Some(date), true) => Ok(SaleDraft {
            item_name,
            quantity: input.quantity,
            sale_price_per_item: input.sale_price_per_item,
            cost_price: input.cost_price,
            date,
        }),
        _ => Err(errors),
    }
}

fn check_item_name(errors: &mut ValidationErrors, raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.push("item_name", ValidationCode::Required);
    }
    trimmed.to_string()
}

fn check_positive(errors: &mut ValidationErrors, field: &'static str, value: f64) {
    if !value.is_finite() {
        errors.push(field, ValidationCode::NotFinite);
    } else if value <= 0.0 {
        errors.push(field, ValidationCode::NonPositive);
    }
}

// Derived amounts must stay finite; JSON has no representation for infinity.
fn check_derived(errors: &mut ValidationErrors, field: &'static str, value: f64) {
    if !value.is_finite() {
        errors.push(field, ValidationCode::NotFinite);
    }
}

fn check_date(errors: &mut ValidationErrors, date: Option<NaiveDate>) -> Option<NaiveDate> {
    if date.is_none() {
        errors.push("date", ValidationCode::Required);
    }
    date
}
