//! Creation, editing and deletion of ledger expenses.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};
use uuid::Uuid;

use spendly_domain::{Expense, Ledger};

use crate::{
    parse::{parse_amount, require_text, validate_amount},
    Clock, CoreError,
};

/// Field values for an expense add or edit action.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub amount: f64,
    pub description: String,
    /// Defaults to the clock's current instant when absent.
    pub date: Option<DateTime<Utc>>,
    pub category_id: Option<Uuid>,
}

impl ExpenseDraft {
    pub fn new(amount: f64, description: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
            date: None,
            category_id: None,
        }
    }

    /// Builds a draft from raw form text, validating the amount.
    pub fn parse(amount: &str, description: impl Into<String>) -> Result<Self, CoreError> {
        Ok(Self::new(parse_amount(amount)?, description))
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_category(mut self, category_id: Option<Uuid>) -> Self {
        self.category_id = category_id;
        self
    }
}

pub struct ExpenseService;

impl ExpenseService {
    pub fn add(
        ledger: &mut Ledger,
        draft: ExpenseDraft,
        clock: &dyn Clock,
    ) -> Result<Uuid, CoreError> {
        let (amount, description) = validate_draft(ledger, &draft)?;
        let now = clock.now();
        let expense = Expense::new(
            amount,
            draft.date.unwrap_or(now),
            description,
            draft.category_id,
        );
        let id = expense.id;
        ledger.expenses.push(expense);
        ledger.touch(now);
        debug!(%id, amount, "expense added");
        Ok(id)
    }

    /// Replaces every editable field of an existing expense in place.
    pub fn update(
        ledger: &mut Ledger,
        id: Uuid,
        draft: ExpenseDraft,
        clock: &dyn Clock,
    ) -> Result<(), CoreError> {
        if ledger.expense(id).is_none() {
            return Err(CoreError::ExpenseNotFound(id));
        }
        let (amount, description) = validate_draft(ledger, &draft)?;
        let now = clock.now();
        let expense = ledger
            .expense_mut(id)
            .ok_or(CoreError::ExpenseNotFound(id))?;
        expense.amount = amount;
        expense.description = description;
        if let Some(date) = draft.date {
            expense.date = date;
        }
        expense.category_id = draft.category_id;
        ledger.touch(now);
        debug!(%id, amount, "expense updated");
        Ok(())
    }

    pub fn remove(ledger: &mut Ledger, id: Uuid, clock: &dyn Clock) -> Result<Expense, CoreError> {
        let position = ledger
            .expenses
            .iter()
            .position(|expense| expense.id == id)
            .ok_or(CoreError::ExpenseNotFound(id))?;
        let removed = ledger.expenses.remove(position);
        ledger.touch(clock.now());
        debug!(%id, "expense removed");
        Ok(removed)
    }

    /// Deletes every listed expense, or none of them if any id is unknown.
    pub fn remove_many(
        ledger: &mut Ledger,
        ids: &[Uuid],
        clock: &dyn Clock,
    ) -> Result<usize, CoreError> {
        if let Some(missing) = ids.iter().find(|id| ledger.expense(**id).is_none()) {
            return Err(CoreError::ExpenseNotFound(*missing));
        }
        let targets: HashSet<Uuid> = ids.iter().copied().collect();
        let before = ledger.expenses.len();
        ledger
            .expenses
            .retain(|expense| !targets.contains(&expense.id));
        let removed = before - ledger.expenses.len();
        ledger.touch(clock.now());
        debug!(removed, "expenses removed");
        Ok(removed)
    }

    /// Resolves a unique expense from a (case-insensitive) id prefix.
    pub fn find_by_prefix(ledger: &Ledger, prefix: &str) -> Result<Uuid, CoreError> {
        let needle = prefix.trim().to_lowercase();
        if needle.is_empty() {
            return Err(CoreError::Validation("expense id is required".into()));
        }
        let matches: Vec<Uuid> = ledger
            .expenses
            .iter()
            .filter(|expense| expense.id.simple().to_string().starts_with(&needle))
            .map(|expense| expense.id)
            .collect();
        match matches.as_slice() {
            [id] => Ok(*id),
            [] => Err(CoreError::Validation(format!(
                "no expense matches `{}`",
                prefix.trim()
            ))),
            _ => Err(CoreError::Validation(format!(
                "`{}` matches {} expenses; use a longer prefix",
                prefix.trim(),
                matches.len()
            ))),
        }
    }
}

fn validate_draft(ledger: &Ledger, draft: &ExpenseDraft) -> Result<(f64, String), CoreError> {
    let result = validate_amount(draft.amount).and_then(|amount| {
        let description = require_text("description", &draft.description)?;
        if let Some(category_id) = draft.category_id {
            if ledger.category(category_id).is_none() {
                return Err(CoreError::CategoryNotFound(category_id.to_string()));
            }
        }
        Ok((amount, description))
    });
    if let Err(err) = &result {
        warn!(%err, "rejected expense draft");
    }
    result
}
