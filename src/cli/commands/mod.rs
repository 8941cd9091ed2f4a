pub mod budget;
pub mod category;
pub mod expense;
pub mod reports;
pub mod system;

use crate::cli::registry::{CommandEntry, CommandRegistry};

const ROOT_COMMAND_ORDER: &[&str] = &[
    "onboard",
    "expense",
    "expenses",
    "category",
    "categories",
    "balance",
    "dashboard",
    "wallet",
    "currency",
    "config",
    "backup",
    "backups",
    "restore",
    "help",
    "version",
    "exit",
];

pub(crate) fn all_entries() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(expense::definitions());
    commands.extend(category::definitions());
    commands.extend(budget::definitions());
    commands.extend(reports::definitions());
    commands.extend(system::definitions());
    commands
}

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    let mut entries = all_entries();
    entries.sort_by_key(|entry| {
        ROOT_COMMAND_ORDER
            .iter()
            .position(|name| entry.name == *name)
            .unwrap_or(ROOT_COMMAND_ORDER.len())
    });
    for entry in entries {
        registry.register(entry);
    }
}
