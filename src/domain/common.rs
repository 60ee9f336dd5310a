use chrono::NaiveDate;

/// Identifier assigned to purchases and sales by the record store.
pub type RecordId = u64;

/// Identifies entities that expose a stable unique identifier.
pub trait Identifiable {
    fn id(&self) -> RecordId;
}

/// Provides access to the item name a record refers to.
pub trait NamedEntity {
    fn item_name(&self) -> &str;
}

/// Records anchored to a calendar date.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

/// Monetary value a record contributes to rankings and totals.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Rounds half away from zero to two decimal places.
///
/// Scaling by 100 can lift a value stored just below a half cent onto it, so
/// `1.045` becomes `1.05` where fixed-point string formatting gives `1.04`.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::round2;

    #[test]
    fn round2_keeps_two_decimals() {
        assert_eq!(round2(25.0), 25.0);
        assert_eq!(round2(2.346), 2.35);
        assert_eq!(round2(10.0 * 1.1), 11.0);
        assert_eq!(round2(-4.126), -4.13);
        assert_eq!(round2(1.045), 1.05);
    }
}
