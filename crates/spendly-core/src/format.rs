use chrono::{DateTime, Utc};

/// Formats currency amounts for presentation.
pub trait CurrencyFormatter: Send + Sync {
    fn format_amount(&self, amount: f64) -> String;
}

/// Formats timestamps for presentation.
pub trait DateFormatter: Send + Sync {
    fn format_date(&self, date: DateTime<Utc>) -> String;
}
