use spendly_core::{
    CategoryService, CurrencyFormatter, DateFormatter, ExpenseDraft, ExpenseQuery,
    ExpenseService, LedgerService, SummaryService,
};
use spendly_domain::{Ledger, Period, ResolvedExpense, UNCATEGORIZED_LABEL};
use uuid::Uuid;

use crate::cli::core::{
    parse_date, require_arg, short_id, CommandError, CommandResult, ParsedArgs,
};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;

const ADD_USAGE: &str =
    "expense add <amount> <description> [--category <name>] [--date YYYY-MM-DD]";
const EDIT_USAGE: &str = "expense edit <id> [--amount <value>] [--description <text>] [--category <name>|none] [--date YYYY-MM-DD]";
const REMOVE_USAGE: &str = "expense rm <id>...";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "expense",
            "Add, edit or remove expenses",
            "expense <add|edit|rm> ...",
            cmd_expense,
        ),
        CommandEntry::new(
            "expenses",
            "List expenses, newest first",
            "expenses [query] [--category <name>] [--period week|month|year]",
            cmd_expenses,
        ),
    ]
}

fn cmd_expense(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let action = require_arg(args, 0, "expense <add|edit|rm> ...")?;
    let rest = &args[1..];
    match action.to_lowercase().as_str() {
        "add" | "new" => add_expense(context, rest),
        "edit" => edit_expense(context, rest),
        "rm" | "remove" | "delete" => remove_expenses(context, rest),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown expense action `{other}` (use add, edit or rm)"
        ))),
    }
}

fn add_expense(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let parsed = ParsedArgs::parse(args, &["category", "date"])?;
    let amount = require_arg(&parsed.positional, 0, ADD_USAGE)?;
    let description = parsed.joined_positional(1);

    let mut draft = ExpenseDraft::parse(amount, description)?;
    if let Some(name) = parsed.option("category") {
        draft = draft.with_category(Some(resolve_category(context.ledger()?, name)?));
    }
    if let Some(raw) = parsed.option("date") {
        draft = draft.with_date(parse_date(raw, context.clock.now())?);
    }

    let label = draft.description.trim().to_string();
    let amount = context.formatters.format_amount(draft.amount);
    let id = context.mutate(|ledger, clock| ExpenseService::add(ledger, draft, clock))?;
    output::success(format!("Expense added: {label} {amount} [{}]", short_id(id)));
    Ok(())
}

fn edit_expense(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let parsed = ParsedArgs::parse(args, &["amount", "description", "category", "date"])?;
    let prefix = require_arg(&parsed.positional, 0, EDIT_USAGE)?;
    let ledger = context.ledger()?;
    let id = ExpenseService::find_by_prefix(ledger, prefix)?;
    let existing = ledger
        .expense(id)
        .cloned()
        .ok_or(spendly_core::CoreError::ExpenseNotFound(id))?;

    let mut draft = match parsed.option("amount") {
        Some(raw) => ExpenseDraft::parse(raw, existing.description.clone())?,
        None => ExpenseDraft::new(existing.amount, existing.description.clone()),
    }
    .with_date(existing.date)
    .with_category(existing.category_id);
    if let Some(text) = parsed.option("description") {
        draft.description = text.to_string();
    }
    match parsed.option("category") {
        Some(name) if name.eq_ignore_ascii_case("none") => draft.category_id = None,
        Some(name) => draft.category_id = Some(resolve_category(ledger, name)?),
        None => {}
    }
    if let Some(raw) = parsed.option("date") {
        draft = draft.with_date(parse_date(raw, context.clock.now())?);
    }

    context.mutate(|ledger, clock| ExpenseService::update(ledger, id, draft, clock))?;
    output::success(format!("Expense [{}] updated.", short_id(id)));
    Ok(())
}

fn remove_expenses(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    require_arg(args, 0, REMOVE_USAGE)?;
    let ledger = context.ledger()?;
    let ids = args
        .iter()
        .map(|prefix| ExpenseService::find_by_prefix(ledger, prefix))
        .collect::<Result<Vec<Uuid>, _>>()?;

    if ids.len() > 1 && !context.confirm(&format!("Delete {} expenses?", ids.len()))? {
        output::info("Nothing deleted.");
        return Ok(());
    }

    let removed = context.mutate(|ledger, clock| ExpenseService::remove_many(ledger, &ids, clock))?;
    output::success(format!("Deleted {removed} expense(s)."));
    Ok(())
}

fn cmd_expenses(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let parsed = ParsedArgs::parse(args, &["category", "period"])?;
    let ledger = context.ledger()?;
    let category = parsed
        .option("category")
        .map(|name| resolve_category(ledger, name))
        .transpose()?;
    let query = ExpenseQuery::new(parsed.joined_positional(0), category);

    let rows = match parsed.option("period") {
        Some(raw) => {
            let period = parse_period(raw)?;
            LedgerService::search_in_period(ledger, &query, period, context.clock.now())
        }
        None => LedgerService::search(ledger, &query),
    };

    if rows.is_empty() {
        output::info("No expenses found.");
        return Ok(());
    }
    print_expense_rows(context, &rows);
    output::info(format!(
        "{} expense(s), total {}",
        rows.len(),
        context.formatters.format_amount(SummaryService::total(&rows))
    ));
    Ok(())
}

pub(crate) fn print_expense_rows(context: &ShellContext, rows: &[ResolvedExpense<'_>]) {
    let table: Vec<Vec<String>> = rows
        .iter()
        .map(|entry| {
            vec![
                context.formatters.format_date(entry.date()),
                short_id(entry.expense.id),
                entry.expense.description.clone(),
                entry
                    .category_name()
                    .unwrap_or(UNCATEGORIZED_LABEL)
                    .to_string(),
                context.formatters.format_amount(entry.amount()),
            ]
        })
        .collect();
    output::table(&["Date", "Id", "Description", "Category", "Amount"], &table);
}

pub(crate) fn resolve_category(ledger: &Ledger, name: &str) -> Result<Uuid, CommandError> {
    Ok(CategoryService::find_by_name(ledger, name)?)
}

pub(crate) fn parse_period(raw: &str) -> Result<Period, CommandError> {
    Period::from_str(raw).ok_or_else(|| {
        CommandError::InvalidArguments(format!("unknown period `{raw}` (use week, month or year)"))
    })
}
