//! The ledger snapshot: every expense, category, and the single budget record.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{budget::Budget, category::Category, expense::Expense};

pub const CURRENT_SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ledger {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<Budget>,
    #[serde(default = "Ledger::default_schema_version")]
    pub schema_version: u8,
}

impl Ledger {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at: now,
            updated_at: now,
            expenses: Vec::new(),
            categories: Vec::new(),
            budget: None,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    pub fn default_schema_version() -> u8 {
        CURRENT_SCHEMA_VERSION
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }

    pub fn expense(&self, id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id == id)
    }

    pub fn expense_mut(&mut self, id: Uuid) -> Option<&mut Expense> {
        self.expenses.iter_mut().find(|expense| expense.id == id)
    }

    pub fn category(&self, id: Uuid) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// Case-insensitive lookup by display name.
    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        let needle = name.trim().to_lowercase();
        self.categories
            .iter()
            .find(|category| category.name.to_lowercase() == needle)
    }

    /// Configured balance, or zero when no budget record exists yet.
    pub fn balance(&self) -> f64 {
        self.budget
            .as_ref()
            .map(|budget| budget.total_amount)
            .unwrap_or(0.0)
    }

    /// Pairs every expense with its resolved category.
    ///
    /// References to categories that no longer exist resolve to `None`.
    pub fn resolved_expenses(&self) -> Vec<ResolvedExpense<'_>> {
        let lookup: HashMap<Uuid, &Category> =
            self.categories.iter().map(|c| (c.id, c)).collect();
        self.expenses
            .iter()
            .map(|expense| ResolvedExpense {
                expense,
                category: expense.category_id.and_then(|id| lookup.get(&id).copied()),
            })
            .collect()
    }
}

/// An expense together with the category it points at, if any.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedExpense<'a> {
    pub expense: &'a Expense,
    pub category: Option<&'a Category>,
}

impl<'a> ResolvedExpense<'a> {
    pub fn new(expense: &'a Expense, category: Option<&'a Category>) -> Self {
        Self { expense, category }
    }

    pub fn amount(&self) -> f64 {
        self.expense.amount
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.expense.date
    }

    pub fn category_id(&self) -> Option<Uuid> {
        self.category.map(|category| category.id)
    }

    pub fn category_name(&self) -> Option<&'a str> {
        self.category.map(|category| category.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::ColorTag;

    #[test]
    fn resolves_categories_and_drops_dangling_references() {
        let mut ledger = Ledger::new("Resolve");
        let food = Category::new("Food", ColorTag::Orange);
        let food_id = food.id;
        ledger.categories.push(food);
        let now = Utc::now();
        ledger
            .expenses
            .push(Expense::new(10.0, now, "Lunch", Some(food_id)));
        ledger
            .expenses
            .push(Expense::new(5.0, now, "Ghost", Some(Uuid::new_v4())));
        ledger.expenses.push(Expense::new(2.0, now, "Gum", None));

        let resolved = ledger.resolved_expenses();
        assert_eq!(resolved.len(), 3);
        assert_eq!(resolved[0].category_name(), Some("Food"));
        assert!(resolved[1].category.is_none());
        assert!(resolved[2].category.is_none());
    }

    #[test]
    fn balance_defaults_to_zero_without_budget() {
        let mut ledger = Ledger::new("Balance");
        assert_eq!(ledger.balance(), 0.0);
        ledger.budget = Some(Budget::new(1000.0, Utc::now()));
        assert_eq!(ledger.balance(), 1000.0);
    }

    #[test]
    fn category_lookup_by_name_ignores_case() {
        let mut ledger = Ledger::new("Lookup");
        ledger
            .categories
            .push(Category::new("Transport", ColorTag::Blue));
        assert!(ledger.category_by_name("transport").is_some());
        assert!(ledger.category_by_name("TRANSPORT ").is_some());
        assert!(ledger.category_by_name("Travel").is_none());
    }
}
