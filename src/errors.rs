use spendly_config::ConfigError;
use spendly_core::CoreError;
use thiserror::Error;

/// Unified error for ledger management and configuration.
#[derive(Debug, Error)]
pub enum SpendlyError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("No ledger is open")]
    NoLedger,
    #[error("Backup `{0}` not found")]
    BackupNotFound(String),
}

impl SpendlyError {
    pub fn is_validation(&self) -> bool {
        matches!(self, SpendlyError::Core(err) if err.is_validation())
    }
}
