use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use spendly_domain::{Currency, UnsetBudgetPolicy};

/// User preferences shared by every ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_locale")]
    pub locale: String,
    /// ISO 4217 code. Unknown codes format with the default `$` symbol.
    #[serde(default = "Config::default_currency")]
    pub currency: String,
    #[serde(default)]
    pub unset_budget_policy: UnsetBudgetPolicy,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_opened_ledger: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for ledgers. Defaults to `<base>/ledgers`.
    pub default_ledger_root: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for backups. Defaults to `<base>/backups`.
    pub default_backup_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Self::default_locale(),
            currency: Self::default_currency(),
            unset_budget_policy: UnsetBudgetPolicy::default(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            last_opened_ledger: None,
            default_ledger_root: None,
            default_backup_root: None,
        }
    }
}

impl Config {
    pub fn default_locale() -> String {
        "en-US".into()
    }

    pub fn default_currency() -> String {
        Currency::default().code().into()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// The configured currency when it is one of the supported codes.
    pub fn preferred_currency(&self) -> Option<Currency> {
        Currency::from_code(&self.currency)
    }

    pub fn currency_symbol(&self) -> &'static str {
        Currency::symbol_for_code(&self.currency)
    }

    /// Stores the upper-cased code, rejecting anything outside the supported set.
    pub fn set_currency(&mut self, code: &str) -> Option<Currency> {
        let currency = Currency::from_code(code)?;
        self.currency = currency.code().into();
        Some(currency)
    }

    pub fn resolve_ledger_root(&self, base: &Path) -> PathBuf {
        self.default_ledger_root
            .clone()
            .unwrap_or_else(|| base.join("ledgers"))
    }

    pub fn resolve_backup_root(&self, base: &Path) -> PathBuf {
        self.default_backup_root
            .clone()
            .unwrap_or_else(|| base.join("backups"))
    }
}
