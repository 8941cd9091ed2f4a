//! Composable filter stages over resolved ledger entries.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use spendly_domain::{Period, ResolvedExpense};

/// Rolling window selected by a [`Period`] and anchored at a fixed instant.
///
/// The lower bound is inclusive; there is no upper bound, so future-dated
/// expenses stay inside every window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodWindow {
    pub period: Period,
    pub now: DateTime<Utc>,
    pub start: DateTime<Utc>,
}

impl PeriodWindow {
    pub fn new(period: Period, now: DateTime<Utc>) -> Self {
        Self {
            period,
            now,
            start: period.window_start(now),
        }
    }

    pub fn contains(&self, date: DateTime<Utc>) -> bool {
        date >= self.start
    }
}

/// Keeps the entries dated on or after the window start.
pub fn filter_by_period<'a>(
    expenses: &[ResolvedExpense<'a>],
    period: Period,
    now: DateTime<Utc>,
) -> Vec<ResolvedExpense<'a>> {
    let window = PeriodWindow::new(period, now);
    expenses
        .iter()
        .filter(|entry| window.contains(entry.date()))
        .copied()
        .collect()
}

/// Direct category-equality filter; `None` keeps everything.
pub fn filter_by_category<'a>(
    expenses: &[ResolvedExpense<'a>],
    category_id: Option<Uuid>,
) -> Vec<ResolvedExpense<'a>> {
    match category_id {
        None => expenses.to_vec(),
        Some(id) => expenses
            .iter()
            .filter(|entry| entry.category_id() == Some(id))
            .copied()
            .collect(),
    }
}

/// Orders entries newest first. Entries sharing a timestamp keep their input order.
pub fn sort_newest_first(expenses: &mut [ResolvedExpense<'_>]) {
    expenses.sort_by(|a, b| b.date().cmp(&a.date()));
}
