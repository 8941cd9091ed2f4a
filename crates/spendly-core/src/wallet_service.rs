//! Balance status plus the category-filtered movement history.

use uuid::Uuid;

use spendly_domain::{Ledger, UnsetBudgetPolicy, WalletReport};

use crate::{
    budget_service::BudgetService,
    filter::{filter_by_category, sort_newest_first},
    summary_service::SummaryService,
    CoreError,
};

pub struct WalletService;

impl WalletService {
    /// Budget status always covers the whole ledger; `selected_category`
    /// narrows only the spend summary and movement list.
    pub fn report(
        ledger: &Ledger,
        selected_category: Option<Uuid>,
        policy: UnsetBudgetPolicy,
    ) -> Result<WalletReport, CoreError> {
        if let Some(id) = selected_category {
            if ledger.category(id).is_none() {
                return Err(CoreError::CategoryNotFound(id.to_string()));
            }
        }
        let mut filtered = filter_by_category(&ledger.resolved_expenses(), selected_category);
        sort_newest_first(&mut filtered);
        Ok(WalletReport {
            overview: BudgetService::overview(ledger, policy),
            selected_category,
            summary: SummaryService::summarize(&filtered),
            movements: filtered.iter().map(|entry| entry.expense.clone()).collect(),
        })
    }
}
