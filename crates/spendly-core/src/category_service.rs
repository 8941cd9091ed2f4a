//! Category management, including the reference-clearing cascade on delete.

use std::collections::HashMap;

use tracing::{debug, info, warn};
use uuid::Uuid;

use spendly_domain::{Category, ColorTag, Ledger};

use crate::{parse::require_text, Clock, CoreError};

/// Categories created on first launch.
pub const DEFAULT_CATEGORIES: [(&str, ColorTag); 7] = [
    ("Food", ColorTag::Orange),
    ("Transport", ColorTag::Blue),
    ("Shopping", ColorTag::Green),
    ("Home", ColorTag::Purple),
    ("Health", ColorTag::Red),
    ("Entertainment", ColorTag::Pink),
    ("Other", ColorTag::Gray),
];

pub struct CategoryService;

impl CategoryService {
    /// Names are unique per ledger, compared case-insensitively.
    pub fn add(
        ledger: &mut Ledger,
        name: &str,
        color: ColorTag,
        clock: &dyn Clock,
    ) -> Result<Uuid, CoreError> {
        let name = require_text("category name", name)?;
        if ledger.category_by_name(&name).is_some() {
            warn!(name = %name, "rejected duplicate category");
            return Err(CoreError::Validation(format!("category `{name}` already exists")));
        }
        let category = Category::new(name, color);
        let id = category.id;
        ledger.categories.push(category);
        ledger.touch(clock.now());
        debug!(%id, "category added");
        Ok(id)
    }

    /// Deletes a category and clears the reference on every expense pointing at it.
    ///
    /// Returns the number of expenses that became uncategorized.
    pub fn remove(ledger: &mut Ledger, id: Uuid, clock: &dyn Clock) -> Result<usize, CoreError> {
        let position = ledger
            .categories
            .iter()
            .position(|category| category.id == id)
            .ok_or_else(|| CoreError::CategoryNotFound(id.to_string()))?;
        ledger.categories.remove(position);

        let mut cleared = 0usize;
        for expense in ledger
            .expenses
            .iter_mut()
            .filter(|expense| expense.category_id == Some(id))
        {
            expense.clear_category();
            cleared += 1;
        }
        ledger.touch(clock.now());
        debug!(%id, cleared, "category removed");
        Ok(cleared)
    }

    /// Seeds the default categories when the ledger has none.
    ///
    /// Returns the number of categories created.
    pub fn seed_defaults(ledger: &mut Ledger, clock: &dyn Clock) -> usize {
        if !ledger.categories.is_empty() {
            return 0;
        }
        ledger.categories.extend(
            DEFAULT_CATEGORIES
                .iter()
                .map(|(name, color)| Category::new(*name, *color)),
        );
        ledger.touch(clock.now());
        info!(count = DEFAULT_CATEGORIES.len(), "default categories seeded");
        DEFAULT_CATEGORIES.len()
    }

    /// Maps each category id to the expenses currently referencing it.
    pub fn category_index(ledger: &Ledger) -> HashMap<Uuid, Vec<Uuid>> {
        let mut index: HashMap<Uuid, Vec<Uuid>> = ledger
            .categories
            .iter()
            .map(|category| (category.id, Vec::new()))
            .collect();
        for expense in &ledger.expenses {
            if let Some(slot) = expense.category_id.and_then(|id| index.get_mut(&id)) {
                slot.push(expense.id);
            }
        }
        index
    }

    pub fn find_by_name(ledger: &Ledger, name: &str) -> Result<Uuid, CoreError> {
        ledger
            .category_by_name(name)
            .map(|category| category.id)
            .ok_or_else(|| CoreError::CategoryNotFound(name.trim().to_string()))
    }
}
