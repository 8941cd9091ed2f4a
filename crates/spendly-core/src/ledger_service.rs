//! Helper functions for high-level ledger orchestration.

use chrono::{DateTime, Utc};

use spendly_domain::{Ledger, Period, ResolvedExpense};

use crate::{
    filter::{filter_by_period, sort_newest_first},
    search::ExpenseQuery,
};

/// Provides constructor and listing helpers for [`Ledger`] instances.
pub struct LedgerService;

impl LedgerService {
    pub fn create(name: impl Into<String>) -> Ledger {
        Ledger::new(name)
    }

    pub fn rename(ledger: &mut Ledger, new_name: impl Into<String>, now: DateTime<Utc>) {
        ledger.name = new_name.into();
        ledger.touch(now);
    }

    /// Ledger list: search predicate over the full ledger, newest first.
    pub fn search<'a>(ledger: &'a Ledger, query: &ExpenseQuery) -> Vec<ResolvedExpense<'a>> {
        let mut rows = query.apply(&ledger.resolved_expenses());
        sort_newest_first(&mut rows);
        rows
    }

    /// Ledger list narrowed further to a rolling period.
    pub fn search_in_period<'a>(
        ledger: &'a Ledger,
        query: &ExpenseQuery,
        period: Period,
        now: DateTime<Utc>,
    ) -> Vec<ResolvedExpense<'a>> {
        filter_by_period(&Self::search(ledger, query), period, now)
    }
}
