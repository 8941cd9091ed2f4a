use chrono::{DateTime, Utc};

use spendly_core::{BudgetService, FixedClock, NEAR_LIMIT_RATIO};
use spendly_domain::{BudgetStatus, Expense, Ledger, UnsetBudgetPolicy};

fn now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2026-10-18T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

fn ledger_with_spend(amounts: &[f64]) -> Ledger {
    let mut ledger = Ledger::new("Budget");
    for amount in amounts {
        ledger
            .expenses
            .push(Expense::new(*amount, now(), "Spend", None));
    }
    ledger
}

#[test]
fn near_limit_at_eighty_five_percent() {
    let mut ledger = ledger_with_spend(&[500.0, 350.0]);
    BudgetService::set_balance_amount(&mut ledger, 1000.0, &FixedClock(now())).unwrap();

    let overview = BudgetService::overview(&ledger, UnsetBudgetPolicy::Legacy);
    assert!((overview.spent_percentage - 0.85).abs() < 1e-9);
    assert_eq!(overview.status, BudgetStatus::NearLimit);
    assert_eq!(overview.remaining, 150.0);
}

#[test]
fn over_limit_clamps_percentage() {
    let mut ledger = ledger_with_spend(&[1200.0]);
    BudgetService::set_balance(&mut ledger, "1000", &FixedClock(now())).unwrap();

    let overview = BudgetService::overview(&ledger, UnsetBudgetPolicy::Legacy);
    assert_eq!(overview.status, BudgetStatus::OverLimit);
    assert_eq!(overview.remaining, -200.0);
    assert_eq!(overview.spent_percentage, 1.0);
}

#[test]
fn missing_balance_reports_over_limit_under_legacy_policy() {
    let ledger = ledger_with_spend(&[12.0]);

    let overview = BudgetService::overview(&ledger, UnsetBudgetPolicy::default());
    assert_eq!(overview.balance, 0.0);
    assert_eq!(overview.spent_percentage, 0.0);
    assert_eq!(overview.remaining, -12.0);
    assert_eq!(overview.status, BudgetStatus::OverLimit);
}

#[test]
fn missing_balance_reports_unset_when_requested() {
    let ledger = ledger_with_spend(&[12.0]);

    let overview = BudgetService::overview(&ledger, UnsetBudgetPolicy::ReportUnset);
    assert_eq!(overview.status, BudgetStatus::Unset);
    assert_eq!(overview.spent_percentage, 0.0);
    assert_eq!(overview.remaining, -12.0);
}

#[test]
fn missing_balance_without_spend_is_normal_under_legacy_policy() {
    let overview = BudgetService::evaluate(0.0, 0.0, UnsetBudgetPolicy::Legacy);
    assert_eq!(overview.status, BudgetStatus::Normal);
    assert_eq!(overview.remaining, 0.0);
}

#[test]
fn threshold_boundaries() {
    let at_threshold =
        BudgetService::evaluate(100.0, 100.0 * NEAR_LIMIT_RATIO, UnsetBudgetPolicy::Legacy);
    assert_eq!(at_threshold.status, BudgetStatus::NearLimit);

    let below = BudgetService::evaluate(100.0, 79.99, UnsetBudgetPolicy::Legacy);
    assert_eq!(below.status, BudgetStatus::Normal);

    let exact = BudgetService::evaluate(100.0, 100.0, UnsetBudgetPolicy::Legacy);
    assert_eq!(exact.status, BudgetStatus::NearLimit);
    assert_eq!(exact.remaining, 0.0);
}

#[test]
fn status_follows_remaining_and_ratio() {
    for (balance, spent) in [(50.0, 10.0), (50.0, 45.0), (50.0, 60.0), (300.0, 0.0)] {
        let overview = BudgetService::evaluate(balance, spent, UnsetBudgetPolicy::Legacy);
        assert!((0.0..=1.0).contains(&overview.spent_percentage));
        let expected = if overview.remaining < 0.0 {
            BudgetStatus::OverLimit
        } else if overview.spent_percentage >= NEAR_LIMIT_RATIO {
            BudgetStatus::NearLimit
        } else {
            BudgetStatus::Normal
        };
        assert_eq!(overview.status, expected);
    }
}
