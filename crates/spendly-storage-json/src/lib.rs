use std::{
    cmp::Reverse,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use spendly_core::{
    storage::{ledger_warnings, LedgerBackupInfo, LedgerStorage},
    CoreError,
};
use spendly_domain::Ledger;
use tracing::{info, warn};

const LEDGER_EXTENSION: &str = "json";
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S%3f";
const TMP_SUFFIX: &str = "tmp";
const DEFAULT_RETENTION: usize = 5;
const MANUAL_BACKUP_LABEL: &str = "manual";

/// Root directories used by [`JsonLedgerStorage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePaths {
    pub ledger_root: PathBuf,
    pub backup_root: PathBuf,
}

impl StoragePaths {
    pub fn under(base: &Path) -> Self {
        Self {
            ledger_root: base.join("ledgers"),
            backup_root: base.join("backups"),
        }
    }
}

/// Filesystem-backed JSON persistence for ledgers and their backups.
///
/// Each ledger lives in `<ledger_root>/<slug>.json`; backups go to
/// `<backup_root>/<slug>/<slug>_<timestamp>[_note].json`.
///
/// Automatic backups taken on save carry no note and are pruned to the
/// configured retention. Backups requested through
/// [`LedgerStorage::backup_ledger`] always carry a note (`manual` when none is
/// given) and are never pruned.
#[derive(Debug, Clone)]
pub struct JsonLedgerStorage {
    paths: StoragePaths,
    retention: usize,
}

impl JsonLedgerStorage {
    pub fn new(paths: StoragePaths) -> Result<Self, CoreError> {
        Self::with_retention(paths, DEFAULT_RETENTION)
    }

    pub fn with_retention(paths: StoragePaths, retention: usize) -> Result<Self, CoreError> {
        fs::create_dir_all(&paths.ledger_root)?;
        fs::create_dir_all(&paths.backup_root)?;
        Ok(Self {
            paths,
            retention: retention.max(1),
        })
    }

    pub fn paths(&self) -> &StoragePaths {
        &self.paths
    }

    pub fn ledger_path(&self, name: &str) -> PathBuf {
        self.paths
            .ledger_root
            .join(format!("{}.{}", canonical_name(name), LEDGER_EXTENSION))
    }

    fn backup_dir(&self, name: &str) -> PathBuf {
        self.paths.backup_root.join(canonical_name(name))
    }

    fn write_backup(
        &self,
        name: &str,
        label: Option<String>,
        contents: &str,
    ) -> Result<LedgerBackupInfo, CoreError> {
        let slug = canonical_name(name);
        let dir = self.backup_dir(name);
        let mut now = Utc::now();
        // Names carry millisecond stamps; step forward until the name is free.
        let (file_name, path) = loop {
            let mut stem = format!("{}_{}", slug, now.format(BACKUP_TIMESTAMP_FORMAT));
            if let Some(label) = &label {
                stem.push('_');
                stem.push_str(label);
            }
            let file_name = format!("{stem}.{LEDGER_EXTENSION}");
            let path = dir.join(&file_name);
            if !path.exists() {
                break (file_name, path);
            }
            now += Duration::milliseconds(1);
        };
        write_file(&path, contents)?;
        if label.is_none() {
            self.prune_automatic_backups(name)?;
        }
        Ok(LedgerBackupInfo {
            ledger: slug,
            id: file_name,
            created_at: now.to_rfc3339(),
            path,
        })
    }

    fn prune_automatic_backups(&self, name: &str) -> Result<(), CoreError> {
        let entries = self.list_backups(name)?;
        let automatic = entries
            .into_iter()
            .filter(|entry| is_automatic_backup(&entry.id));
        for entry in automatic.skip(self.retention) {
            if let Err(err) = fs::remove_file(&entry.path) {
                warn!(backup = %entry.id, %err, "failed to prune backup");
            }
        }
        Ok(())
    }
}

impl LedgerStorage for JsonLedgerStorage {
    /// Backs up the previous file (if any) before atomically replacing it.
    fn save_ledger(&self, name: &str, ledger: &Ledger) -> Result<(), CoreError> {
        let path = self.ledger_path(name);
        if path.exists() {
            let previous = fs::read_to_string(&path)?;
            self.write_backup(name, None, &previous)?;
        }
        save_ledger_to_path(ledger, &path)?;
        info!(ledger = %canonical_name(name), expenses = ledger.expenses.len(), "ledger saved");
        Ok(())
    }

    fn load_ledger(&self, name: &str) -> Result<Ledger, CoreError> {
        let path = self.ledger_path(name);
        if !path.exists() {
            return Err(CoreError::LedgerNotFound(name.to_string()));
        }
        load_ledger_from_path(&path)
    }

    fn ledger_exists(&self, name: &str) -> bool {
        self.ledger_path(name).exists()
    }

    fn list_ledgers(&self) -> Result<Vec<String>, CoreError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.paths.ledger_root)? {
            let path = entry?.path();
            if !path.is_file()
                || path.extension().and_then(|ext| ext.to_str()) != Some(LEDGER_EXTENSION)
            {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn delete_ledger(&self, name: &str) -> Result<(), CoreError> {
        let path = self.ledger_path(name);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn backup_ledger(
        &self,
        name: &str,
        ledger: &Ledger,
        note: Option<&str>,
    ) -> Result<LedgerBackupInfo, CoreError> {
        let label = sanitize_note(note).unwrap_or_else(|| MANUAL_BACKUP_LABEL.to_string());
        let info = self.write_backup(name, Some(label), &serialize_ledger(ledger)?)?;
        info!(backup = %info.id, "ledger backup created");
        Ok(info)
    }

    /// Backups for `name`, newest first.
    fn list_backups(&self, name: &str) -> Result<Vec<LedgerBackupInfo>, CoreError> {
        let dir = self.backup_dir(name);
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let slug = canonical_name(name);
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(LEDGER_EXTENSION) {
                continue;
            }
            let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            let created_at = parse_backup_timestamp(file_name)
                .map(|ts| ts.to_rfc3339())
                .unwrap_or_default();
            entries.push(LedgerBackupInfo {
                ledger: slug.clone(),
                id: file_name.to_string(),
                created_at,
                path,
            });
        }
        entries.sort_by_key(|info| Reverse((parse_backup_timestamp(&info.id), info.id.clone())));
        Ok(entries)
    }

    fn restore_backup(&self, backup: &LedgerBackupInfo) -> Result<Ledger, CoreError> {
        if !backup.path.exists() {
            return Err(CoreError::Storage(format!(
                "backup `{}` not found",
                backup.id
            )));
        }
        let ledger = load_ledger_from_path(&backup.path)?;
        save_ledger_to_path(&ledger, &self.ledger_path(&backup.ledger))?;
        info!(backup = %backup.id, "ledger restored from backup");
        Ok(ledger)
    }
}

/// Saves a ledger to an arbitrary path on disk through a temp file.
pub fn save_ledger_to_path(ledger: &Ledger, path: &Path) -> Result<(), CoreError> {
    let tmp = tmp_path(path);
    write_file(&tmp, &serialize_ledger(ledger)?)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Loads a ledger from the provided filesystem path, logging snapshot anomalies.
pub fn load_ledger_from_path(path: &Path) -> Result<Ledger, CoreError> {
    let data = fs::read_to_string(path)?;
    let ledger: Ledger =
        serde_json::from_str(&data).map_err(|err| CoreError::Serde(err.to_string()))?;
    for warning in ledger_warnings(&ledger) {
        warn!(path = %path.display(), "{warning}");
    }
    Ok(ledger)
}

fn canonical_name(name: &str) -> String {
    let sanitized: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '-' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "ledger".into()
    } else {
        sanitized
    }
}

fn sanitize_note(note: Option<&str>) -> Option<String> {
    let raw = note?.trim();
    let mut sanitized = String::new();
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            sanitized.push(ch.to_ascii_lowercase());
        } else if !sanitized.is_empty() && !sanitized.ends_with('-') {
            sanitized.push('-');
        }
    }
    let trimmed = sanitized.trim_matches('-');
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// Scans from the right for the `<YYYYmmdd>_<HHMMSSmmm>` pair, skipping an optional note.
fn parse_backup_timestamp(file_name: &str) -> Option<DateTime<Utc>> {
    let stem = file_name.strip_suffix(&format!(".{LEDGER_EXTENSION}"))?;
    let segments: Vec<&str> = stem.split('_').collect();
    segments.windows(2).rev().find_map(|pair| {
        let (date, time) = (pair[0], pair[1]);
        if !is_digits(date, 8) || !is_digits(time, 9) {
            return None;
        }
        let date = NaiveDate::parse_from_str(date, "%Y%m%d").ok()?;
        let number = |range: std::ops::Range<usize>| time.get(range)?.parse::<u32>().ok();
        let hms = NaiveTime::from_hms_milli_opt(
            number(0..2)?,
            number(2..4)?,
            number(4..6)?,
            number(6..9)?,
        )?;
        Some(date.and_time(hms).and_utc())
    })
}

// Automatic backups end right after the timestamp pair.
fn is_automatic_backup(file_name: &str) -> bool {
    let Some(stem) = file_name.strip_suffix(&format!(".{LEDGER_EXTENSION}")) else {
        return false;
    };
    let mut segments = stem.rsplit('_');
    match (segments.next(), segments.next()) {
        (Some(time), Some(date)) => is_digits(date, 8) && is_digits(time, 9),
        _ => false,
    }
}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.chars().all(|c| c.is_ascii_digit())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

fn serialize_ledger(ledger: &Ledger) -> Result<String, CoreError> {
    serde_json::to_string_pretty(ledger).map_err(|err| CoreError::Serde(err.to_string()))
}
