//! Period-scoped dashboard composition.

use spendly_domain::{DashboardReport, Ledger, Period};

use crate::{
    filter::{filter_by_period, sort_newest_first, PeriodWindow},
    summary_service::SummaryService,
    Clock,
};

/// Number of entries listed under recent activity.
pub const RECENT_LIMIT: usize = 5;

pub struct DashboardService;

impl DashboardService {
    pub fn report(ledger: &Ledger, period: Period, clock: &dyn Clock) -> DashboardReport {
        let now = clock.now();
        let window = PeriodWindow::new(period, now);
        let mut scoped = filter_by_period(&ledger.resolved_expenses(), period, now);
        sort_newest_first(&mut scoped);
        DashboardReport {
            period,
            generated_at: now,
            window_start: window.start,
            summary: SummaryService::summarize_for_period(&scoped, period),
            recent: scoped
                .iter()
                .take(RECENT_LIMIT)
                .map(|entry| entry.expense.clone())
                .collect(),
        }
    }
}
