use std::fs;

use chrono::Utc;
use spendly_core::storage::LedgerStorage;
use spendly_core::CoreError;
use spendly_domain::{Budget, Category, ColorTag, Expense, Ledger};
use spendly_storage_json::{JsonLedgerStorage, StoragePaths};
use tempfile::tempdir;

fn sample_ledger(name: &str) -> Ledger {
    let mut ledger = Ledger::new(name);
    let food = Category::new("Food", ColorTag::Orange);
    ledger
        .expenses
        .push(Expense::new(45.5, Utc::now(), "Lunch", Some(food.id)));
    ledger.expenses.push(Expense::new(3.0, Utc::now(), "Gum", None));
    ledger.categories.push(food);
    ledger.budget = Some(Budget::new(1000.0, Utc::now()));
    ledger
}

#[test]
fn json_storage_can_save_and_load_ledger() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonLedgerStorage::new(StoragePaths::under(dir.path())).expect("create storage");

    let ledger = sample_ledger("StorageTest");
    storage
        .save_ledger("test-ledger", &ledger)
        .expect("save ledger");
    let loaded = storage.load_ledger("test-ledger").expect("load ledger");

    assert_eq!(loaded, ledger);
    let path = storage.ledger_path("test-ledger");
    assert_eq!(path.extension().and_then(|ext| ext.to_str()), Some("json"));
    assert!(path.exists());
    assert!(storage.ledger_exists("test-ledger"));
    assert_eq!(storage.list_ledgers().unwrap(), vec!["test-ledger".to_string()]);
}

#[test]
fn loading_unknown_ledger_reports_not_found() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonLedgerStorage::new(StoragePaths::under(dir.path())).expect("create storage");

    let err = storage.load_ledger("nope").expect_err("missing ledger");
    assert!(matches!(err, CoreError::LedgerNotFound(_)));
}

#[test]
fn overwriting_backs_up_previous_file() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonLedgerStorage::new(StoragePaths::under(dir.path())).expect("create storage");

    let mut ledger = sample_ledger("Household");
    storage.save_ledger("household", &ledger).expect("first save");
    assert!(storage.list_backups("household").unwrap().is_empty());

    ledger.expenses.clear();
    storage.save_ledger("household", &ledger).expect("second save");

    let backups = storage.list_backups("household").expect("list backups");
    assert_eq!(backups.len(), 1);
    let restored = storage.restore_backup(&backups[0]).expect("restore");
    assert_eq!(restored.expenses.len(), 2);
    assert_eq!(storage.load_ledger("household").unwrap().expenses.len(), 2);
}

#[test]
fn json_storage_creates_and_restores_noted_backups() {
    let dir = tempdir().expect("tempdir");
    let paths = StoragePaths::under(dir.path());
    let storage = JsonLedgerStorage::new(paths.clone()).expect("create storage");

    let ledger = sample_ledger("BackupTest");
    storage
        .save_ledger("backup-ledger", &ledger)
        .expect("save ledger");
    let info = storage
        .backup_ledger("backup-ledger", &ledger, Some("Before trip"))
        .expect("create backup");

    assert!(info.id.ends_with("_before-trip.json"));
    assert!(!info.created_at.is_empty());
    assert_eq!(
        info.path.parent().map(|parent| parent.to_path_buf()),
        Some(paths.backup_root.join("backup-ledger"))
    );
    let backups = storage.list_backups("backup-ledger").expect("list backups");
    assert!(backups.iter().any(|entry| entry.id == info.id));

    storage.delete_ledger("backup-ledger").expect("delete");
    assert!(!storage.ledger_exists("backup-ledger"));
    let restored = storage.restore_backup(&info).expect("restore backup");
    assert_eq!(restored.name, ledger.name);
    assert!(storage.ledger_exists("backup-ledger"));
}

#[test]
fn retention_prunes_old_automatic_backups() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonLedgerStorage::with_retention(StoragePaths::under(dir.path()), 2)
        .expect("create storage");
    let mut ledger = sample_ledger("Retention");

    for amount in [1.0, 2.0, 3.0, 4.0, 5.0] {
        ledger.expenses.push(Expense::new(amount, Utc::now(), "Coffee", None));
        storage.save_ledger("retention", &ledger).expect("save");
    }

    let backups = storage.list_backups("retention").expect("list backups");
    assert_eq!(backups.len(), 2);
}

#[test]
fn requested_backups_survive_automatic_pruning() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonLedgerStorage::with_retention(StoragePaths::under(dir.path()), 2)
        .expect("create storage");
    let mut ledger = sample_ledger("Trips");
    storage.save_ledger("main", &ledger).expect("first save");

    let named = storage
        .backup_ledger("main", &ledger, Some("before trip"))
        .expect("named backup");
    let unnamed = storage
        .backup_ledger("main", &ledger, None)
        .expect("unnamed backup");
    assert!(unnamed.id.ends_with("_manual.json"));

    for _ in 0..6 {
        ledger.expenses.push(Expense::new(9.0, Utc::now(), "Taxi", None));
        storage.save_ledger("main", &ledger).expect("save");
    }

    let ids: Vec<String> = storage
        .list_backups("main")
        .expect("list backups")
        .into_iter()
        .map(|info| info.id)
        .collect();
    assert!(ids.contains(&named.id));
    assert!(ids.contains(&unnamed.id));
    assert_eq!(ids.len(), 4);
}

#[test]
fn ledgers_with_missing_fields_load_with_defaults() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonLedgerStorage::new(StoragePaths::under(dir.path())).expect("create storage");

    let now = Utc::now().to_rfc3339();
    let raw = format!(
        r#"{{"id":"6f1c2a3e-1b2c-4d5e-8f90-123456789abc","name":"Sparse","created_at":"{now}","updated_at":"{now}"}}"#
    );
    fs::write(storage.ledger_path("sparse"), raw).expect("write ledger");

    let loaded = storage.load_ledger("sparse").expect("load sparse ledger");
    assert_eq!(loaded.name, "Sparse");
    assert!(loaded.expenses.is_empty());
    assert!(loaded.budget.is_none());
    assert_eq!(loaded.schema_version, spendly_domain::CURRENT_SCHEMA_VERSION);
}
