//! A single spending event recorded in the ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub amount: f64,
    pub date: DateTime<Utc>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
}

impl Expense {
    pub fn new(
        amount: f64,
        date: DateTime<Utc>,
        description: impl Into<String>,
        category_id: Option<Uuid>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            date,
            description: description.into(),
            category_id,
        }
    }

    /// Returns `true` when the expense has no category assigned.
    pub fn is_uncategorized(&self) -> bool {
        self.category_id.is_none()
    }

    /// Clears the category reference, leaving the expense uncategorized.
    pub fn clear_category(&mut self) {
        self.category_id = None;
    }
}

impl Identifiable for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for Expense {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl BelongsToCategory for Expense {
    fn category_id(&self) -> Option<Uuid> {
        self.category_id
    }
}

impl Displayable for Expense {
    fn display_label(&self) -> String {
        format!("{} ({:.2})", self.description, self.amount)
    }
}
