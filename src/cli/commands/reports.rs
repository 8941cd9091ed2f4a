use spendly_core::{CurrencyFormatter, DashboardService, DateFormatter, WalletService};
use spendly_domain::{Period, SpendingSummary};

use crate::cli::core::{short_id, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;

use super::budget::print_overview;
use super::expense::{parse_period, resolve_category};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "dashboard",
            "Spending summary for a rolling period",
            "dashboard [week|month|year]",
            cmd_dashboard,
        ),
        CommandEntry::new(
            "wallet",
            "Budget status and movement history",
            "wallet [category]",
            cmd_wallet,
        ),
    ]
}

fn cmd_dashboard(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let period = match args.first() {
        Some(raw) => parse_period(raw)?,
        None => Period::default(),
    };
    let report = DashboardService::report(context.ledger()?, period, context.clock.as_ref());
    let fmt = &context.formatters;

    output::section(format!("Dashboard ({})", report.period));
    output::hint(format!(
        "Since {}",
        fmt.format_date(report.window_start)
    ));
    print_summary(context, &report.summary);

    if !report.summary.by_bucket.is_empty() {
        output::section("Chart");
        let rows: Vec<(&str, String)> = report
            .summary
            .by_bucket
            .iter()
            .map(|bucket| (bucket.label.as_str(), fmt.format_amount(bucket.total)))
            .collect();
        output::two_column(&rows);
    }

    if !report.recent.is_empty() {
        output::section("Recent");
        let rows: Vec<Vec<String>> = report
            .recent
            .iter()
            .map(|expense| {
                vec![
                    fmt.format_date(expense.date),
                    short_id(expense.id),
                    expense.description.clone(),
                    fmt.format_amount(expense.amount),
                ]
            })
            .collect();
        output::table(&["Date", "Id", "Description", "Amount"], &rows);
    }
    Ok(())
}

fn cmd_wallet(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let ledger = context.ledger()?;
    let selected = if args.is_empty() {
        None
    } else {
        Some(resolve_category(ledger, &args.join(" "))?)
    };
    let report = WalletService::report(ledger, selected, context.policy())?;

    output::section("Wallet");
    print_overview(context, &report.overview);

    let title = match selected.and_then(|id| ledger.category(id)) {
        Some(category) => format!("Movements: {}", category.name),
        None => "Movements".to_string(),
    };
    output::section(title);
    if report.movements.is_empty() {
        output::info("No movements.");
        return Ok(());
    }
    let fmt = &context.formatters;
    let rows: Vec<Vec<String>> = report
        .movements
        .iter()
        .map(|expense| {
            vec![
                fmt.format_date(expense.date),
                short_id(expense.id),
                expense.description.clone(),
                fmt.format_amount(expense.amount),
            ]
        })
        .collect();
    output::table(&["Date", "Id", "Description", "Amount"], &rows);
    output::info(format!(
        "{} movement(s), total {}",
        report.summary.count,
        fmt.format_amount(report.summary.total)
    ));
    Ok(())
}

fn print_summary(context: &ShellContext, summary: &SpendingSummary) {
    let fmt = &context.formatters;
    let largest = summary
        .largest
        .as_ref()
        .map(|expense| {
            format!(
                "{} ({})",
                expense.description,
                fmt.format_amount(expense.amount)
            )
        })
        .unwrap_or_else(|| "-".to_string());
    output::two_column(&[
        ("Total spent", fmt.format_amount(summary.total)),
        ("Expenses", summary.count.to_string()),
        ("Average", fmt.format_amount(summary.average)),
        ("Largest", largest),
    ]);

    if summary.by_category.is_empty() {
        return;
    }
    output::section("By category");
    let rows: Vec<Vec<String>> = summary
        .by_category
        .iter()
        .map(|row| {
            let share = if summary.total > 0.0 {
                row.total / summary.total
            } else {
                0.0
            };
            vec![
                row.name.clone(),
                row.color.to_string(),
                fmt.percent(share),
                fmt.format_amount(row.total),
            ]
        })
        .collect();
    output::table(&["Category", "Color", "Share", "Amount"], &rows);
}
