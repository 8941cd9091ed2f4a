//! Balance configuration and budget status evaluation.

use tracing::{debug, warn};

use spendly_domain::{Budget, BudgetOverview, BudgetStatus, Ledger, UnsetBudgetPolicy};

use crate::{
    parse::{parse_amount, validate_amount},
    Clock, CoreError,
};

/// Spend ratio at which the ledger is reported as near its limit.
pub const NEAR_LIMIT_RATIO: f64 = 0.80;

pub struct BudgetService;

impl BudgetService {
    /// Classifies cumulative `spent` against `balance`.
    ///
    /// `spent_percentage` is zero when the balance is not positive and is
    /// otherwise clamped to `[0, 1]` even when overspent.
    pub fn evaluate(balance: f64, spent: f64, policy: UnsetBudgetPolicy) -> BudgetOverview {
        let remaining = balance - spent;
        let spent_percentage = if balance <= 0.0 {
            0.0
        } else {
            (spent / balance).clamp(0.0, 1.0)
        };
        let status = if balance <= 0.0 && policy == UnsetBudgetPolicy::ReportUnset {
            BudgetStatus::Unset
        } else if remaining < 0.0 {
            BudgetStatus::OverLimit
        } else if spent_percentage >= NEAR_LIMIT_RATIO {
            BudgetStatus::NearLimit
        } else {
            BudgetStatus::Normal
        };
        BudgetOverview {
            balance,
            spent,
            remaining,
            spent_percentage,
            status,
        }
    }

    /// Evaluates the configured balance against spend over the entire ledger.
    pub fn overview(ledger: &Ledger, policy: UnsetBudgetPolicy) -> BudgetOverview {
        let spent = ledger.expenses.iter().map(|expense| expense.amount).sum();
        Self::evaluate(ledger.balance(), spent, policy)
    }

    /// Parses `input` and upserts the ledger's single budget record.
    pub fn set_balance(
        ledger: &mut Ledger,
        input: &str,
        clock: &dyn Clock,
    ) -> Result<f64, CoreError> {
        let amount = parse_amount(input).inspect_err(|err| {
            warn!(%err, "rejected balance input");
        })?;
        Self::apply_balance(ledger, amount, clock);
        Ok(amount)
    }

    pub fn set_balance_amount(
        ledger: &mut Ledger,
        amount: f64,
        clock: &dyn Clock,
    ) -> Result<(), CoreError> {
        let amount = validate_amount(amount).inspect_err(|err| {
            warn!(%err, "rejected balance amount");
        })?;
        Self::apply_balance(ledger, amount, clock);
        Ok(())
    }

    fn apply_balance(ledger: &mut Ledger, amount: f64, clock: &dyn Clock) {
        let now = clock.now();
        match ledger.budget.as_mut() {
            Some(budget) => budget.update(amount, now),
            None => ledger.budget = Some(Budget::new(amount, now)),
        }
        ledger.touch(now);
        debug!(amount, "balance updated");
    }
}
