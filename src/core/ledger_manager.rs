use spendly_core::{
    storage::{ledger_warnings, LedgerBackupInfo, LedgerStorage},
    CoreError, LedgerService,
};
use spendly_domain::Ledger;
use tracing::{debug, info};

use crate::errors::SpendlyError;

/// Facade that coordinates the open ledger with its storage backend.
///
/// Mutations run against a copy of the ledger which replaces the current
/// snapshot only once it has been saved. A failed save therefore leaves the
/// in-memory ledger untouched and the same call can simply be retried.
pub struct LedgerManager {
    current: Option<Ledger>,
    current_name: Option<String>,
    storage: Box<dyn LedgerStorage>,
}

impl LedgerManager {
    pub fn new(storage: Box<dyn LedgerStorage>) -> Self {
        Self {
            current: None,
            current_name: None,
            storage,
        }
    }

    pub fn storage(&self) -> &dyn LedgerStorage {
        self.storage.as_ref()
    }

    pub fn current(&self) -> Option<&Ledger> {
        self.current.as_ref()
    }

    pub fn current_name(&self) -> Option<&str> {
        self.current_name.as_deref()
    }

    pub fn ledger(&self) -> Result<&Ledger, SpendlyError> {
        self.current.as_ref().ok_or(SpendlyError::NoLedger)
    }

    /// Creates and immediately persists an empty ledger.
    pub fn create(&mut self, name: &str) -> Result<(), SpendlyError> {
        let ledger = LedgerService::create(name);
        self.storage.save_ledger(name, &ledger)?;
        self.set_current(name, ledger);
        info!(ledger = name, "ledger created");
        Ok(())
    }

    /// Loads a stored ledger, returning any consistency warnings.
    pub fn load(&mut self, name: &str) -> Result<Vec<String>, SpendlyError> {
        let ledger = self.storage.load_ledger(name)?;
        let warnings = ledger_warnings(&ledger);
        self.set_current(name, ledger);
        info!(ledger = name, warnings = warnings.len(), "ledger loaded");
        Ok(warnings)
    }

    /// Loads `name` when it exists, otherwise opens a fresh in-memory ledger
    /// that is written on its first mutation.
    pub fn open_or_create(&mut self, name: &str) -> Result<Vec<String>, SpendlyError> {
        if self.storage.ledger_exists(name) {
            return self.load(name);
        }
        self.set_current(name, LedgerService::create(name));
        debug!(ledger = name, "opened unsaved ledger");
        Ok(Vec::new())
    }

    pub fn save(&self) -> Result<(), SpendlyError> {
        let (name, ledger) = self.named_current()?;
        self.storage.save_ledger(name, ledger)?;
        Ok(())
    }

    /// Applies `change` to a copy of the current ledger and commits it after a successful save.
    pub fn apply<T>(
        &mut self,
        change: impl FnOnce(&mut Ledger) -> Result<T, CoreError>,
    ) -> Result<T, SpendlyError> {
        let (name, ledger) = self.named_current()?;
        let mut draft = ledger.clone();
        let value = change(&mut draft)?;
        self.storage.save_ledger(name, &draft)?;
        self.current = Some(draft);
        Ok(value)
    }

    pub fn backup(&self, note: Option<&str>) -> Result<LedgerBackupInfo, SpendlyError> {
        let (name, ledger) = self.named_current()?;
        Ok(self.storage.backup_ledger(name, ledger, note)?)
    }

    pub fn list_backups(&self) -> Result<Vec<LedgerBackupInfo>, SpendlyError> {
        let name = self.current_name.as_deref().ok_or(SpendlyError::NoLedger)?;
        Ok(self.storage.list_backups(name)?)
    }

    /// Restores the backup whose id starts with `backup_id` and makes it current.
    pub fn restore(&mut self, backup_id: &str) -> Result<Vec<String>, SpendlyError> {
        let needle = backup_id.trim();
        let backup = self
            .list_backups()?
            .into_iter()
            .find(|info| !needle.is_empty() && info.id.starts_with(needle))
            .ok_or_else(|| SpendlyError::BackupNotFound(needle.to_string()))?;
        let ledger = self.storage.restore_backup(&backup)?;
        let warnings = ledger_warnings(&ledger);
        self.current = Some(ledger);
        info!(backup = %backup.id, "ledger restored");
        Ok(warnings)
    }

    fn named_current(&self) -> Result<(&str, &Ledger), SpendlyError> {
        match (self.current_name.as_deref(), self.current.as_ref()) {
            (Some(name), Some(ledger)) => Ok((name, ledger)),
            _ => Err(SpendlyError::NoLedger),
        }
    }

    fn set_current(&mut self, name: &str, ledger: Ledger) {
        self.current = Some(ledger);
        self.current_name = Some(name.to_string());
    }
}
