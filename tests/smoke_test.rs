use chrono::{DateTime, Utc};
use spendly::init;
use spendly_core::{
    BudgetService, CategoryService, DashboardService, ExpenseDraft, ExpenseService, FixedClock,
};
use spendly_domain::{BudgetStatus, Ledger, Period, UnsetBudgetPolicy};

#[test]
fn ledger_dashboard_smoke() {
    init();

    let clock = FixedClock(
        DateTime::parse_from_rfc3339("2026-10-18T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc),
    );
    let mut ledger = Ledger::new("SmokeTest");
    CategoryService::seed_defaults(&mut ledger, &clock);
    let food = CategoryService::find_by_name(&ledger, "food").unwrap();
    BudgetService::set_balance(&mut ledger, "200", &clock).unwrap();
    ExpenseService::add(
        &mut ledger,
        ExpenseDraft::new(42.0, "Groceries").with_category(Some(food)),
        &clock,
    )
    .unwrap();

    let report = DashboardService::report(&ledger, Period::Month, &clock);
    assert_eq!(report.summary.count, 1);
    assert_eq!(report.summary.by_category[0].name, "Food");

    let overview = BudgetService::overview(&ledger, UnsetBudgetPolicy::Legacy);
    assert_eq!(overview.status, BudgetStatus::Normal);
    assert_eq!(overview.remaining, 158.0);
}
