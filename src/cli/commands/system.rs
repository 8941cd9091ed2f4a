use spendly_config::Config;
use spendly_core::CategoryService;
use spendly_domain::{Currency, UnsetBudgetPolicy, CURRENT_SCHEMA_VERSION};

use crate::cli::core::{require_arg, CommandError, CommandResult};
use crate::cli::help;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::utils::build_info;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "onboard",
            "Create the default categories and pick a currency",
            "onboard [currency]",
            cmd_onboard,
        ),
        CommandEntry::new(
            "currency",
            "Show or change the display currency",
            "currency [USD|MXN|EUR|GBP|JPY]",
            cmd_currency,
        ),
        CommandEntry::new(
            "config",
            "Show or change preferences",
            "config [policy <legacy|unset>|color <on|off>]",
            cmd_config,
        ),
        CommandEntry::new(
            "backup",
            "Back up the open ledger",
            "backup [note]",
            cmd_backup,
        ),
        CommandEntry::new(
            "backups",
            "List backups of the open ledger",
            "backups",
            cmd_backups,
        ),
        CommandEntry::new(
            "restore",
            "Restore the open ledger from a backup",
            "restore <backup>",
            cmd_restore,
        ),
        CommandEntry::new("version", "Show build metadata", "version", cmd_version),
        CommandEntry::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_onboard(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(code) = args.first() {
        apply_currency(context, code)?;
    }
    let seeded = context.mutate(|ledger, clock| Ok(CategoryService::seed_defaults(ledger, clock)))?;
    if seeded == 0 {
        output::info("Categories already set up.");
    } else {
        output::success(format!("Created {seeded} default categories."));
    }
    output::hint("Next: `balance set <amount>` and `expense add <amount> <description>`.");
    Ok(())
}

fn cmd_currency(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first() {
        Some(code) => apply_currency(context, code),
        None => {
            let current = &context.config.currency;
            output::info(format!(
                "Currency: {current} ({})",
                context.formatters.symbol()
            ));
            let supported: Vec<&str> = Currency::ALL.iter().map(|c| c.code()).collect();
            output::hint(format!("Supported: {}", supported.join(", ")));
            Ok(())
        }
    }
}

fn apply_currency(context: &mut ShellContext, code: &str) -> CommandResult {
    let currency = context.config.set_currency(code).ok_or_else(|| {
        CommandError::InvalidArguments(format!("unsupported currency `{code}`"))
    })?;
    context.config_changed()?;
    output::success(format!(
        "Currency set to {} ({}).",
        currency.code(),
        currency.symbol()
    ));
    Ok(())
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(key) = args.first() else {
        print_config(context);
        return Ok(());
    };
    let value = require_arg(args, 1, "config <policy|color> <value>")?;
    match key.to_lowercase().as_str() {
        "policy" => {
            let policy = match value.to_lowercase().as_str() {
                "legacy" => UnsetBudgetPolicy::Legacy,
                "unset" => UnsetBudgetPolicy::ReportUnset,
                other => {
                    return Err(CommandError::InvalidArguments(format!(
                        "unknown policy `{other}` (use legacy or unset)"
                    )))
                }
            };
            context.config.unset_budget_policy = policy;
        }
        "color" => {
            context.config.ui_color_enabled = match value.to_lowercase().as_str() {
                "on" | "true" | "yes" => true,
                "off" | "false" | "no" => false,
                other => {
                    return Err(CommandError::InvalidArguments(format!(
                        "unknown color setting `{other}` (use on or off)"
                    )))
                }
            };
        }
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown config key `{other}` (use policy or color)"
            )))
        }
    }
    context.config_changed()?;
    output::success("Configuration saved.");
    Ok(())
}

fn print_config(context: &ShellContext) {
    let config: &Config = &context.config;
    output::section("Configuration");
    output::two_column(&[
        ("Locale", config.locale.clone()),
        ("Currency", config.currency.clone()),
        ("Unset balance", config.unset_budget_policy.to_string()),
        ("Colors", on_off(config.ui_color_enabled).to_string()),
        (
            "Ledger",
            config.last_opened_ledger.clone().unwrap_or_default(),
        ),
        (
            "Ledger root",
            config
                .resolve_ledger_root(&context.base_dir)
                .display()
                .to_string(),
        ),
        (
            "Backup root",
            config
                .resolve_backup_root(&context.base_dir)
                .display()
                .to_string(),
        ),
        (
            "Config file",
            context.config_manager.config_path().display().to_string(),
        ),
    ]);
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

fn cmd_backup(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let note = (!args.is_empty()).then(|| args.join(" "));
    let info = context.ledger_manager.backup(note.as_deref())?;
    let config_backup = context.config_manager.backup(&context.config, note.as_deref())?;
    output::success(format!("Backup created: {}", info.id));
    output::hint(format!("Config saved as {config_backup}"));
    Ok(())
}

fn cmd_backups(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let backups = context.ledger_manager.list_backups()?;
    if backups.is_empty() {
        output::info("No backups yet. Use `backup [note]`.");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = backups
        .iter()
        .enumerate()
        .map(|(idx, info)| {
            vec![
                (idx + 1).to_string(),
                info.id.clone(),
                info.created_at.clone(),
            ]
        })
        .collect();
    output::table(&["#", "Backup", "Created"], &rows);
    Ok(())
}

fn cmd_restore(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let reference = require_arg(args, 0, "restore <backup>")?;
    // A bare number refers to the position shown by `backups`.
    let backup_id = match reference.parse::<usize>() {
        Ok(position) if position > 0 => context
            .ledger_manager
            .list_backups()?
            .get(position - 1)
            .map(|info| info.id.clone())
            .ok_or_else(|| CommandError::InvalidArguments(format!("no backup #{position}")))?,
        _ => reference.to_string(),
    };
    if !context.confirm(&format!("Replace the open ledger with `{backup_id}`?"))? {
        output::info("Restore cancelled.");
        return Ok(());
    }
    for warning in context.ledger_manager.restore(&backup_id)? {
        output::warning(warning);
    }
    output::success(format!("Ledger restored from {backup_id}."));
    Ok(())
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output::section(format!("Spendly {}", meta.version));
    output::two_column(&[
        ("Schema", format!("v{CURRENT_SCHEMA_VERSION}")),
        ("Build hash", format!("{} ({})", meta.git_hash, meta.git_status)),
        ("Built at", meta.timestamp.to_string()),
        ("Target", meta.target.to_string()),
        ("Profile", meta.profile.to_string()),
        ("Rustc", meta.rustc.to_string()),
    ]);
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first() {
        Some(name) => match context.command(&name.to_lowercase()) {
            Some(entry) => help::print_command(entry),
            None => context.suggest_command(name),
        },
        None => help::print_overview(&context.registry),
    }
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
