//! Free-text and category search over the ledger list.

use uuid::Uuid;

use spendly_domain::ResolvedExpense;

/// Inclusion predicate combining a text query with an optional category selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseQuery {
    text: String,
    pub category_id: Option<Uuid>,
}

impl ExpenseQuery {
    pub fn new(text: impl Into<String>, category_id: Option<Uuid>) -> Self {
        Self {
            text: text.into().trim().to_lowercase(),
            category_id,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(text, None)
    }

    pub fn category(category_id: Uuid) -> Self {
        Self::new(String::new(), Some(category_id))
    }

    pub fn is_unfiltered(&self) -> bool {
        self.text.is_empty() && self.category_id.is_none()
    }

    pub fn matches(&self, entry: &ResolvedExpense<'_>) -> bool {
        self.matches_text(entry) && self.matches_category(entry)
    }

    fn matches_text(&self, entry: &ResolvedExpense<'_>) -> bool {
        if self.text.is_empty() {
            return true;
        }
        if entry.expense.description.to_lowercase().contains(&self.text) {
            return true;
        }
        entry
            .category_name()
            .map(|name| name.to_lowercase().contains(&self.text))
            .unwrap_or(false)
    }

    fn matches_category(&self, entry: &ResolvedExpense<'_>) -> bool {
        match self.category_id {
            None => true,
            Some(id) => entry.category_id() == Some(id),
        }
    }

    /// Applies the predicate to a slice, preserving input order.
    pub fn apply<'a>(&self, expenses: &[ResolvedExpense<'a>]) -> Vec<ResolvedExpense<'a>> {
        expenses
            .iter()
            .filter(|entry| self.matches(entry))
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use spendly_domain::{Category, ColorTag, Expense};

    use super::*;

    #[test]
    fn text_matches_description_regardless_of_case() {
        let expense = Expense::new(9.5, Utc::now(), "Lunch at Taco Bell", None);
        let entry = ResolvedExpense::new(&expense, None);
        assert!(ExpenseQuery::text("taco").matches(&entry));
        assert!(ExpenseQuery::text("TACO BELL").matches(&entry));
        assert!(!ExpenseQuery::text("burrito").matches(&entry));
    }

    #[test]
    fn text_matches_category_name() {
        let food = Category::new("Food", ColorTag::Orange);
        let expense = Expense::new(4.0, Utc::now(), "Bagel", Some(food.id));
        let entry = ResolvedExpense::new(&expense, Some(&food));
        assert!(ExpenseQuery::text("foo").matches(&entry));

        let bare = Expense::new(4.0, Utc::now(), "Bagel", None);
        let bare_entry = ResolvedExpense::new(&bare, None);
        assert!(!ExpenseQuery::text("foo").matches(&bare_entry));
    }

    #[test]
    fn empty_query_matches_everything() {
        let expense = Expense::new(1.0, Utc::now(), "Anything", None);
        let entry = ResolvedExpense::new(&expense, None);
        let query = ExpenseQuery::default();
        assert!(query.is_unfiltered());
        assert!(query.matches(&entry));
        assert!(ExpenseQuery::text("   ").matches(&entry));
    }

    #[test]
    fn category_selection_requires_equal_id() {
        let food = Category::new("Food", ColorTag::Orange);
        let transport = Category::new("Transport", ColorTag::Blue);
        let lunch = Expense::new(10.0, Utc::now(), "Lunch", Some(food.id));
        let bus = Expense::new(2.0, Utc::now(), "Bus food truck", Some(transport.id));
        let lunch_entry = ResolvedExpense::new(&lunch, Some(&food));
        let bus_entry = ResolvedExpense::new(&bus, Some(&transport));

        let query = ExpenseQuery::new("food", Some(food.id));
        assert!(query.matches(&lunch_entry));
        assert!(!query.matches(&bus_entry));
        assert!(ExpenseQuery::text("food").matches(&bus_entry));
    }
}
