//! The process-wide balance record and its derived status classification.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{de::Deserializer, Deserialize, Serialize};
use uuid::Uuid;

/// User-configured balance ceiling. A ledger holds at most one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub id: Uuid,
    pub total_amount: f64,
    pub last_updated: DateTime<Utc>,
}

impl Budget {
    pub fn new(total_amount: f64, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            total_amount,
            last_updated: now,
        }
    }

    /// Replaces the balance in place and stamps the edit time.
    pub fn update(&mut self, total_amount: f64, now: DateTime<Utc>) {
        self.total_amount = total_amount;
        self.last_updated = now;
    }
}

/// Classification of cumulative spend against the configured balance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BudgetStatus {
    Normal,
    NearLimit,
    OverLimit,
    /// No positive balance configured; only produced under [`UnsetBudgetPolicy::ReportUnset`].
    Unset,
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BudgetStatus::Normal => "Normal",
            BudgetStatus::NearLimit => "Near Limit",
            BudgetStatus::OverLimit => "Over Limit",
            BudgetStatus::Unset => "Unset",
        };
        f.write_str(label)
    }
}

/// Controls how a ledger without a positive balance is classified.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnsetBudgetPolicy {
    /// Treat a missing balance as zero, so any positive spend is over the limit.
    #[default]
    Legacy,
    /// Report [`BudgetStatus::Unset`] instead of evaluating against a zero balance.
    #[serde(rename = "unset")]
    ReportUnset,
}

impl UnsetBudgetPolicy {
    pub fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "unset" | "report-unset" | "report_unset" => UnsetBudgetPolicy::ReportUnset,
            _ => UnsetBudgetPolicy::Legacy,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UnsetBudgetPolicy::Legacy => "legacy",
            UnsetBudgetPolicy::ReportUnset => "unset",
        }
    }
}

impl fmt::Display for UnsetBudgetPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for UnsetBudgetPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value
            .map(|raw| UnsetBudgetPolicy::from_str(&raw))
            .unwrap_or_default())
    }
}
