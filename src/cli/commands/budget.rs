use spendly_core::{BudgetService, CurrencyFormatter, DateFormatter};
use spendly_domain::{BudgetOverview, BudgetStatus};

use crate::cli::core::{require_arg, CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "balance",
        "Show or set the available balance",
        "balance [set <amount>]",
        cmd_balance,
    )]
}

fn cmd_balance(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().map(|action| action.to_lowercase()) {
        None => show_balance(context),
        Some(action) if action == "set" => {
            let input = require_arg(args, 1, "balance set <amount>")?;
            let amount =
                context.mutate(|ledger, clock| BudgetService::set_balance(ledger, input, clock))?;
            output::success(format!(
                "Balance set to {}.",
                context.formatters.format_amount(amount)
            ));
            Ok(())
        }
        Some(other) => Err(CommandError::InvalidArguments(format!(
            "unknown balance action `{other}` (use `balance` or `balance set <amount>`)"
        ))),
    }
}

fn show_balance(context: &ShellContext) -> CommandResult {
    let ledger = context.ledger()?;
    let overview = BudgetService::overview(ledger, context.policy());
    output::section("Balance");
    print_overview(context, &overview);
    if let Some(budget) = &ledger.budget {
        output::hint(format!(
            "Last updated {}",
            context.formatters.format_date(budget.last_updated)
        ));
    } else {
        output::hint("No balance configured. Use `balance set <amount>`.");
    }
    Ok(())
}

pub(crate) fn print_overview(context: &ShellContext, overview: &BudgetOverview) {
    let money = |amount: f64| context.formatters.format_amount(amount);
    output::two_column(&[
        ("Balance", money(overview.balance)),
        ("Spent", money(overview.spent)),
        ("Remaining", money(overview.remaining)),
        ("Used", context.formatters.percent(overview.spent_percentage)),
        ("Status", status_label(overview.status)),
    ]);
}

fn status_label(status: BudgetStatus) -> String {
    use colored::Colorize;

    let label = status.to_string();
    match status {
        BudgetStatus::Normal => label.green().to_string(),
        BudgetStatus::NearLimit => label.yellow().to_string(),
        BudgetStatus::OverLimit => label.red().bold().to_string(),
        BudgetStatus::Unset => label.dimmed().to_string(),
    }
}
