use std::{collections::HashSet, path::PathBuf};

use spendly_domain::Ledger;

use crate::CoreError;

/// Describes a persisted backup artifact for a ledger.
#[derive(Debug, Clone)]
pub struct LedgerBackupInfo {
    pub ledger: String,
    pub id: String,
    pub created_at: String,
    pub path: PathBuf,
}

/// Abstraction over persistence backends capable of storing ledgers and backups.
pub trait LedgerStorage: Send + Sync {
    fn save_ledger(&self, name: &str, ledger: &Ledger) -> Result<(), CoreError>;
    fn load_ledger(&self, name: &str) -> Result<Ledger, CoreError>;
    fn ledger_exists(&self, name: &str) -> bool;
    fn list_ledgers(&self) -> Result<Vec<String>, CoreError>;
    fn delete_ledger(&self, name: &str) -> Result<(), CoreError>;
    fn backup_ledger(
        &self,
        name: &str,
        ledger: &Ledger,
        note: Option<&str>,
    ) -> Result<LedgerBackupInfo, CoreError>;
    fn list_backups(&self, name: &str) -> Result<Vec<LedgerBackupInfo>, CoreError>;
    fn restore_backup(&self, backup: &LedgerBackupInfo) -> Result<Ledger, CoreError>;
}

/// Detects dangling references and other anomalies within a ledger snapshot.
pub fn ledger_warnings(ledger: &Ledger) -> Vec<String> {
    let category_ids: HashSet<_> = ledger.categories.iter().map(|c| c.id).collect();
    let mut warnings = Vec::new();

    for expense in &ledger.expenses {
        if let Some(category) = expense.category_id {
            if !category_ids.contains(&category) {
                warnings.push(format!(
                    "expense {} references missing category {}",
                    expense.id, category
                ));
            }
        }
        if !expense.amount.is_finite() || expense.amount <= 0.0 {
            warnings.push(format!(
                "expense {} has non-positive amount {}",
                expense.id, expense.amount
            ));
        }
        if expense.description.trim().is_empty() {
            warnings.push(format!("expense {} has an empty description", expense.id));
        }
    }
    warnings
}
