//! Display currencies supported by the preferred-currency setting.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fallback symbol used for unrecognized currency codes.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Mxn,
    Eur,
    Gbp,
    Jpy,
}

impl Currency {
    pub const ALL: [Currency; 5] = [
        Currency::Usd,
        Currency::Mxn,
        Currency::Eur,
        Currency::Gbp,
        Currency::Jpy,
    ];

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "USD" => Some(Currency::Usd),
            "MXN" => Some(Currency::Mxn),
            "EUR" => Some(Currency::Eur),
            "GBP" => Some(Currency::Gbp),
            "JPY" => Some(Currency::Jpy),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Mxn => "MXN",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Usd | Currency::Mxn => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Jpy => "¥",
        }
    }

    /// Resolves a display symbol for an arbitrary code string.
    pub fn symbol_for_code(code: &str) -> &'static str {
        Currency::from_code(code)
            .map(Currency::symbol)
            .unwrap_or(DEFAULT_CURRENCY_SYMBOL)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_match_supported_codes() {
        assert_eq!(Currency::symbol_for_code("USD"), "$");
        assert_eq!(Currency::symbol_for_code("mxn"), "$");
        assert_eq!(Currency::symbol_for_code("EUR"), "€");
        assert_eq!(Currency::symbol_for_code("GBP"), "£");
        assert_eq!(Currency::symbol_for_code("JPY"), "¥");
    }

    #[test]
    fn unknown_code_uses_default_symbol() {
        assert_eq!(Currency::from_code("CHF"), None);
        assert_eq!(Currency::symbol_for_code("CHF"), DEFAULT_CURRENCY_SYMBOL);
    }
}
