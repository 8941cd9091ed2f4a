//! Aggregation over filtered expense sets.
//!
//! Every function is a pure recomputation. Inputs are ordered newest first
//! (stable on equal timestamps) before aggregating so results do not depend on
//! the order the store hands entries over.

use std::{cmp::Ordering, collections::HashMap};

use spendly_domain::{
    BreakdownKey, BucketTotal, CategoryTotal, ColorTag, Expense, Period, ResolvedExpense,
    SpendingSummary, UNCATEGORIZED_LABEL,
};

use crate::filter::sort_newest_first;

/// Stateless aggregation utilities that operate over resolved expense slices.
pub struct SummaryService;

impl SummaryService {
    /// Totals, average, largest and category breakdown. No time buckets.
    pub fn summarize(expenses: &[ResolvedExpense<'_>]) -> SpendingSummary {
        let ordered = ordered(expenses);
        let total = Self::total(&ordered);
        SpendingSummary {
            count: ordered.len(),
            total,
            average: average_of(total, ordered.len()),
            largest: Self::largest(&ordered).cloned(),
            by_category: Self::category_breakdown(&ordered),
            by_bucket: Vec::new(),
        }
    }

    /// Same as [`SummaryService::summarize`] plus chart buckets at `granularity`.
    pub fn summarize_for_period(
        expenses: &[ResolvedExpense<'_>],
        granularity: Period,
    ) -> SpendingSummary {
        let mut summary = Self::summarize(expenses);
        summary.by_bucket = Self::time_buckets(expenses, granularity);
        summary
    }

    pub fn total(expenses: &[ResolvedExpense<'_>]) -> f64 {
        expenses.iter().map(|entry| entry.amount()).sum()
    }

    /// Mean amount, or zero for an empty set.
    pub fn average(expenses: &[ResolvedExpense<'_>]) -> f64 {
        average_of(Self::total(expenses), expenses.len())
    }

    /// The expense with the greatest amount; the first one encountered wins ties.
    pub fn largest<'a>(expenses: &[ResolvedExpense<'a>]) -> Option<&'a Expense> {
        expenses
            .iter()
            .fold(None, |best: Option<&'a Expense>, entry| match best {
                Some(current) if current.amount >= entry.amount() => Some(current),
                _ => Some(entry.expense),
            })
    }

    /// Per-category sums ordered by descending total, ties by name.
    pub fn category_breakdown(expenses: &[ResolvedExpense<'_>]) -> Vec<CategoryTotal> {
        let mut index: HashMap<BreakdownKey, usize> = HashMap::new();
        let mut rows: Vec<CategoryTotal> = Vec::new();

        for entry in expenses {
            // A category literally named "Other" shares the uncategorized row.
            let category = entry.category.filter(|category| {
                !category.name.trim().eq_ignore_ascii_case(UNCATEGORIZED_LABEL)
            });
            let key = match category {
                Some(category) => BreakdownKey::Category(category.id),
                None => BreakdownKey::Uncategorized,
            };
            let slot = *index.entry(key).or_insert_with(|| {
                let (name, color) = match category {
                    Some(category) => (category.name.clone(), category.color),
                    None => (UNCATEGORIZED_LABEL.to_string(), ColorTag::Gray),
                };
                rows.push(CategoryTotal {
                    key,
                    name,
                    color,
                    total: 0.0,
                });
                rows.len() - 1
            });
            rows[slot].total += entry.amount();
        }

        rows.sort_by(|a, b| {
            b.total
                .partial_cmp(&a.total)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.name.cmp(&b.name))
        });
        rows
    }

    /// Chart buckets labelled at `granularity`, in first-seen order over the
    /// newest-first sequence. Labels are never sorted alphabetically.
    pub fn time_buckets(expenses: &[ResolvedExpense<'_>], granularity: Period) -> Vec<BucketTotal> {
        let ordered = ordered(expenses);
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut buckets: Vec<BucketTotal> = Vec::new();

        for entry in &ordered {
            let label = granularity.bucket_label(entry.date());
            let slot = match index.get(&label) {
                Some(slot) => *slot,
                None => {
                    index.insert(label.clone(), buckets.len());
                    buckets.push(BucketTotal { label, total: 0.0 });
                    buckets.len() - 1
                }
            };
            buckets[slot].total += entry.amount();
        }
        buckets
    }
}

fn ordered<'a>(expenses: &[ResolvedExpense<'a>]) -> Vec<ResolvedExpense<'a>> {
    let mut ordered = expenses.to_vec();
    sort_newest_first(&mut ordered);
    ordered
}

fn average_of(total: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}
