use spendly_config::{Config, ConfigError, ConfigManager};
use spendly_domain::{Currency, UnsetBudgetPolicy};
use tempfile::tempdir;

#[test]
fn default_config_uses_usd_and_legacy_policy() {
    let cfg = Config::default();

    assert_eq!(cfg.currency, "USD");
    assert_eq!(cfg.preferred_currency(), Some(Currency::Usd));
    assert_eq!(cfg.unset_budget_policy, UnsetBudgetPolicy::Legacy);
    assert!(!cfg.locale.is_empty());
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    assert_eq!(manager.load().expect("load"), Config::default());
    assert!(manager.backups_dir().exists());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"), dir.path().join("backups"));

    let mut cfg = Config::default();
    cfg.set_currency("MXN");
    cfg.unset_budget_policy = UnsetBudgetPolicy::ReportUnset;
    cfg.last_opened_ledger = Some("household".into());

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, cfg);
    assert!(!dir.path().join("config.json.tmp").exists());
}

#[test]
fn backups_round_trip_and_list_newest_first() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let mut cfg = Config::default();
    cfg.set_currency("EUR");
    let first = manager.backup(&cfg, Some("Euro trip")).expect("backup");
    assert!(first.starts_with("config_"));
    assert!(first.ends_with("_euro-trip.json"));

    let restored = manager.restore(&first).expect("restore");
    assert_eq!(restored.currency, "EUR");

    let listed = manager.list_backups().expect("list");
    assert_eq!(listed, vec![first]);
}

#[test]
fn restoring_unknown_backup_fails() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let err = manager.restore("config_missing.json").expect_err("missing");
    assert!(matches!(err, ConfigError::BackupNotFound(_)));
}
