use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use spendly_core::{
    filter_by_category, filter_by_period, CategoryService, ExpenseQuery, FixedClock,
    LedgerService, SummaryService,
};
use spendly_domain::{BreakdownKey, Category, ColorTag, Expense, Ledger, Period};

fn at(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw).unwrap().with_timezone(&Utc)
}

struct Sample {
    ledger: Ledger,
    food: Category,
    transport: Category,
}

fn sample_ledger() -> Sample {
    let mut ledger = Ledger::new("Sample");
    let food = Category::new("Food", ColorTag::Orange);
    let transport = Category::new("Transport", ColorTag::Blue);
    ledger.categories.push(food.clone());
    ledger.categories.push(transport.clone());

    ledger.expenses.push(Expense::new(
        45.50,
        at("2026-10-15T12:30:00Z"),
        "Lunch",
        Some(food.id),
    ));
    ledger.expenses.push(Expense::new(
        32.00,
        at("2026-10-16T08:00:00Z"),
        "Coffee",
        Some(food.id),
    ));
    ledger.expenses.push(Expense::new(
        120.00,
        at("2026-10-14T22:10:00Z"),
        "Uber",
        Some(transport.id),
    ));
    Sample {
        ledger,
        food,
        transport,
    }
}

#[test]
fn summarizes_full_ledger() {
    let sample = sample_ledger();
    let summary = SummaryService::summarize(&sample.ledger.resolved_expenses());

    assert_eq!(summary.count, 3);
    assert!((summary.total - 197.50).abs() < 1e-9);
    assert!((summary.average - 65.833_333).abs() < 1e-4);
    let largest = summary.largest.expect("largest expense");
    assert_eq!(largest.description, "Uber");
    assert_eq!(largest.amount, 120.0);

    assert_eq!(summary.by_category.len(), 2);
    assert_eq!(summary.by_category[0].name, "Transport");
    assert_eq!(
        summary.by_category[0].key,
        BreakdownKey::Category(sample.transport.id)
    );
    assert_eq!(summary.by_category[0].total, 120.0);
    assert_eq!(summary.by_category[1].name, "Food");
    assert_eq!(summary.by_category[1].color, ColorTag::Orange);
    assert!((summary.by_category[1].total - 77.50).abs() < 1e-9);
}

#[test]
fn empty_set_yields_zeroes() {
    let ledger = Ledger::new("Empty");
    let summary =
        SummaryService::summarize_for_period(&ledger.resolved_expenses(), Period::Month);

    assert!(summary.is_empty());
    assert_eq!(summary.total, 0.0);
    assert_eq!(summary.average, 0.0);
    assert!(summary.largest.is_none());
    assert!(summary.by_category.is_empty());
    assert!(summary.by_bucket.is_empty());
}

#[test]
fn breakdown_and_buckets_conserve_total() {
    let mut sample = sample_ledger();
    sample.ledger.expenses.push(Expense::new(
        9.99,
        at("2026-09-30T09:00:00Z"),
        "Gum",
        None,
    ));
    let resolved = sample.ledger.resolved_expenses();

    for period in Period::ALL {
        let summary = SummaryService::summarize_for_period(&resolved, period);
        let by_category: f64 = summary.by_category.iter().map(|row| row.total).sum();
        let by_bucket: f64 = summary.by_bucket.iter().map(|row| row.total).sum();
        assert!((by_category - summary.total).abs() < 1e-9);
        assert!((by_bucket - summary.total).abs() < 1e-9);
        assert!((summary.average * summary.count as f64 - summary.total).abs() < 1e-9);
    }
}

#[test]
fn uncategorized_expenses_group_under_other() {
    let mut ledger = Ledger::new("Other");
    let now = at("2026-10-18T12:00:00Z");
    ledger.expenses.push(Expense::new(4.0, now, "Gum", None));
    ledger.expenses.push(Expense::new(
        6.0,
        now,
        "Dangling",
        Some(Uuid::new_v4()),
    ));

    let breakdown = SummaryService::category_breakdown(&ledger.resolved_expenses());
    assert_eq!(breakdown.len(), 1);
    assert_eq!(breakdown[0].key, BreakdownKey::Uncategorized);
    assert_eq!(breakdown[0].name, "Other");
    assert_eq!(breakdown[0].color, ColorTag::Gray);
    assert_eq!(breakdown[0].total, 10.0);
}

#[test]
fn seeded_other_category_shares_the_uncategorized_row() {
    let mut ledger = Ledger::new("Seeded");
    let clock = FixedClock(at("2026-10-18T12:00:00Z"));
    CategoryService::seed_defaults(&mut ledger, &clock);
    let other = CategoryService::find_by_name(&ledger, "Other").unwrap();
    let food = CategoryService::find_by_name(&ledger, "Food").unwrap();
    ledger.expenses.push(Expense::new(10.0, clock.0, "Misc", Some(other)));
    ledger.expenses.push(Expense::new(5.0, clock.0, "Loose change", None));
    ledger.expenses.push(Expense::new(3.0, clock.0, "Snack", Some(food)));

    let breakdown = SummaryService::category_breakdown(&ledger.resolved_expenses());
    let names: Vec<&str> = breakdown.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, ["Other", "Food"]);
    assert_eq!(breakdown[0].key, BreakdownKey::Uncategorized);
    assert_eq!(breakdown[0].color, ColorTag::Gray);
    assert_eq!(breakdown[0].total, 15.0);
}

#[test]
fn equal_totals_are_ordered_by_name() {
    let mut ledger = Ledger::new("Ties");
    let now = at("2026-10-18T12:00:00Z");
    let zoo = Category::new("Zoo", ColorTag::Teal);
    let art = Category::new("Art", ColorTag::Pink);
    for category in [&zoo, &art] {
        ledger
            .expenses
            .push(Expense::new(15.0, now, "Ticket", Some(category.id)));
    }
    ledger.categories.extend([zoo, art]);

    let breakdown = SummaryService::category_breakdown(&ledger.resolved_expenses());
    let names: Vec<&str> = breakdown.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, ["Art", "Zoo"]);
}

#[test]
fn largest_prefers_most_recent_on_ties() {
    let mut ledger = Ledger::new("Largest");
    ledger.expenses.push(Expense::new(
        50.0,
        at("2026-10-01T12:00:00Z"),
        "Older",
        None,
    ));
    ledger.expenses.push(Expense::new(
        50.0,
        at("2026-10-10T12:00:00Z"),
        "Newer",
        None,
    ));

    let summary = SummaryService::summarize(&ledger.resolved_expenses());
    assert_eq!(summary.largest.unwrap().description, "Newer");
}

#[test]
fn time_buckets_keep_first_seen_order() {
    let mut ledger = Ledger::new("Buckets");
    for (raw, amount) in [
        ("2026-10-12T09:00:00Z", 1.0),
        ("2026-10-16T09:00:00Z", 2.0),
        ("2026-10-14T09:00:00Z", 4.0),
        ("2026-10-16T18:00:00Z", 8.0),
    ] {
        ledger
            .expenses
            .push(Expense::new(amount, at(raw), "Entry", None));
    }

    let buckets = SummaryService::time_buckets(&ledger.resolved_expenses(), Period::Week);
    let labels: Vec<&str> = buckets.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, ["Fri", "Wed", "Mon"]);
    assert_eq!(buckets[0].total, 10.0);

    let monthly = SummaryService::time_buckets(&ledger.resolved_expenses(), Period::Month);
    assert_eq!(monthly[0].label, "16 Oct");
    assert_eq!(monthly.len(), 3);
}

#[test]
fn wider_periods_contain_narrower_ones() {
    let mut ledger = Ledger::new("Monotonic");
    let now = at("2026-10-18T12:00:00Z");
    for days_ago in [0, 2, 6, 8, 20, 35, 200, 380] {
        ledger.expenses.push(Expense::new(
            10.0 + days_ago as f64,
            now - Duration::days(days_ago),
            "Entry",
            None,
        ));
    }
    let resolved = ledger.resolved_expenses();

    let windows: Vec<HashSet<Uuid>> = Period::ALL
        .iter()
        .map(|period| {
            filter_by_period(&resolved, *period, now)
                .iter()
                .map(|entry| entry.expense.id)
                .collect()
        })
        .collect();
    let everything: HashSet<Uuid> = resolved.iter().map(|entry| entry.expense.id).collect();
    assert_eq!(windows[0].len(), 3);
    assert_eq!(windows[1].len(), 5);
    assert_eq!(windows[2].len(), 7);
    assert!(windows[0].is_subset(&windows[1]));
    assert!(windows[1].is_subset(&windows[2]));
    assert!(windows[2].is_subset(&everything));
}

#[test]
fn window_lower_bound_is_inclusive_and_future_dates_stay_in() {
    let mut ledger = Ledger::new("Bounds");
    let now = at("2026-10-18T12:00:00Z");
    ledger
        .expenses
        .push(Expense::new(1.0, now - Duration::days(7), "Edge", None));
    ledger.expenses.push(Expense::new(
        2.0,
        now - Duration::days(7) - Duration::seconds(1),
        "Just outside",
        None,
    ));
    ledger
        .expenses
        .push(Expense::new(3.0, now + Duration::days(3), "Future", None));

    let week = filter_by_period(&ledger.resolved_expenses(), Period::Week, now);
    let names: Vec<&str> = week
        .iter()
        .map(|entry| entry.expense.description.as_str())
        .collect();
    assert_eq!(names, ["Edge", "Future"]);
}

#[test]
fn search_is_case_insensitive_and_combines_with_category() {
    let mut sample = sample_ledger();
    sample.ledger.expenses.push(Expense::new(
        8.25,
        at("2026-10-17T13:00:00Z"),
        "Lunch at Taco Bell",
        Some(sample.food.id),
    ));

    let hits = LedgerService::search(&sample.ledger, &ExpenseQuery::text("taco"));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].expense.description, "Lunch at Taco Bell");

    let food_rows = LedgerService::search(&sample.ledger, &ExpenseQuery::category(sample.food.id));
    assert_eq!(food_rows.len(), 3);
    assert_eq!(food_rows[0].expense.description, "Lunch at Taco Bell");

    let transport = filter_by_category(
        &sample.ledger.resolved_expenses(),
        Some(sample.transport.id),
    );
    assert_eq!(transport.len(), 1);
}
