use chrono::{DateTime, Utc};
use spendly_config::Config;
use spendly_core::{CurrencyFormatter, DateFormatter};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Formatter implementations bound to the configured currency symbol.
#[derive(Debug, Clone, Copy)]
pub struct CliFormatters {
    symbol: &'static str,
}

impl CliFormatters {
    pub fn new(symbol: &'static str) -> Self {
        Self { symbol }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.currency_symbol())
    }

    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    pub fn percent(&self, ratio: f64) -> String {
        format!("{:.0}%", ratio * 100.0)
    }
}

impl CurrencyFormatter for CliFormatters {
    fn format_amount(&self, amount: f64) -> String {
        if amount < 0.0 {
            format!("-{}{:.2}", self.symbol, amount.abs())
        } else {
            format!("{}{:.2}", self.symbol, amount)
        }
    }
}

impl DateFormatter for CliFormatters {
    fn format_date(&self, date: DateTime<Utc>) -> String {
        date.format(DATE_FORMAT).to_string()
    }
}
