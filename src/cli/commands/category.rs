use spendly_core::{CategoryService, CurrencyFormatter};
use spendly_domain::{ColorTag, NamedEntity};

use crate::cli::core::{require_arg, CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;

use super::expense::resolve_category;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "category",
            "Add or remove categories",
            "category <add <name> [color]|rm <name>>",
            cmd_category,
        ),
        CommandEntry::new(
            "categories",
            "List categories with their expense totals",
            "categories",
            cmd_categories,
        ),
    ]
}

fn cmd_category(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let action = require_arg(args, 0, "category <add|rm> <name>")?;
    match action.to_lowercase().as_str() {
        "add" | "new" => {
            let name = require_arg(args, 1, "category add <name> [color]")?;
            let color = args
                .get(2)
                .map(|raw| ColorTag::from_name(raw))
                .unwrap_or(ColorTag::Gray);
            context.mutate(|ledger, clock| CategoryService::add(ledger, name, color, clock))?;
            output::success(format!("Category `{}` added ({color}).", name.trim()));
            Ok(())
        }
        "rm" | "remove" | "delete" => {
            let name = require_arg(args, 1, "category rm <name>")?;
            let id = resolve_category(context.ledger()?, name)?;
            let cleared =
                context.mutate(|ledger, clock| CategoryService::remove(ledger, id, clock))?;
            output::success(format!("Category `{name}` removed."));
            if cleared > 0 {
                output::info(format!("{cleared} expense(s) are now uncategorized."));
            }
            Ok(())
        }
        other => Err(CommandError::InvalidArguments(format!(
            "unknown category action `{other}` (use add or rm)"
        ))),
    }
}

fn cmd_categories(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let ledger = context.ledger()?;
    if ledger.categories.is_empty() {
        output::info("No categories yet. Run `onboard` or `category add <name>`.");
        return Ok(());
    }
    let index = CategoryService::category_index(ledger);
    let rows: Vec<Vec<String>> = ledger
        .categories
        .iter()
        .map(|category| {
            let ids = index.get(&category.id).map(Vec::as_slice).unwrap_or(&[]);
            let total: f64 = ids
                .iter()
                .filter_map(|id| ledger.expense(*id))
                .map(|expense| expense.amount)
                .sum();
            vec![
                category.name().to_string(),
                category.color.to_string(),
                category.icon().symbol().to_string(),
                ids.len().to_string(),
                context.formatters.format_amount(total),
            ]
        })
        .collect();
    output::table(&["Name", "Color", "Icon", "Expenses", "Spent"], &rows);
    Ok(())
}
