//! Aggregate value objects handed to the presentation layer.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    budget::BudgetStatus, category::ColorTag, expense::Expense, period::Period,
};

/// Label of the synthetic bucket holding uncategorized expenses.
pub const UNCATEGORIZED_LABEL: &str = "Other";

/// Grouping key for category breakdowns.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BreakdownKey {
    Category(Uuid),
    Uncategorized,
}

impl BreakdownKey {
    pub fn category_id(self) -> Option<Uuid> {
        match self {
            BreakdownKey::Category(id) => Some(id),
            BreakdownKey::Uncategorized => None,
        }
    }
}

impl fmt::Display for BreakdownKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreakdownKey::Category(id) => write!(f, "category:{id}"),
            BreakdownKey::Uncategorized => f.write_str(UNCATEGORIZED_LABEL),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryTotal {
    pub key: BreakdownKey,
    pub name: String,
    pub color: ColorTag,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BucketTotal {
    pub label: String,
    pub total: f64,
}

/// Totals, extremes and breakdowns over a filtered expense set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SpendingSummary {
    pub count: usize,
    pub total: f64,
    pub average: f64,
    pub largest: Option<Expense>,
    pub by_category: Vec<CategoryTotal>,
    pub by_bucket: Vec<BucketTotal>,
}

impl SpendingSummary {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Balance, spend and classification for the whole ledger.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BudgetOverview {
    pub balance: f64,
    pub spent: f64,
    pub remaining: f64,
    /// Spend-to-balance ratio clamped to `[0, 1]`.
    pub spent_percentage: f64,
    pub status: BudgetStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardReport {
    pub period: Period,
    pub generated_at: DateTime<Utc>,
    pub window_start: DateTime<Utc>,
    pub summary: SpendingSummary,
    pub recent: Vec<Expense>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WalletReport {
    pub overview: BudgetOverview,
    pub selected_category: Option<Uuid>,
    pub summary: SpendingSummary,
    pub movements: Vec<Expense>,
}
