//! Shared runtime state for CLI interactions and command execution.

use std::{path::PathBuf, sync::Arc};

use dialoguer::{theme::ColorfulTheme, Confirm};
use spendly_config::{default_base_dir, Config, ConfigManager};
use spendly_core::{Clock, CoreError};
use spendly_domain::{Ledger, UnsetBudgetPolicy};
use spendly_storage_json::{JsonLedgerStorage, StoragePaths};

use super::{
    commands,
    core::{CliError, CommandError, CommandResult, LoopControl},
    formatters::CliFormatters,
    output,
    registry::{CommandEntry, CommandRegistry},
    system_clock::clock_from_env,
};
use crate::core::LedgerManager;

/// Ledger opened when the config does not name one.
pub const DEFAULT_LEDGER_NAME: &str = "main";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub ledger_manager: LedgerManager,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub clock: Arc<dyn Clock>,
    pub formatters: CliFormatters,
    pub theme: ColorfulTheme,
    pub base_dir: PathBuf,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        Self::with_base_dir(mode, default_base_dir(), clock_from_env()?)
    }

    /// Builds a shell rooted at `base_dir`, opening the last used ledger.
    pub fn with_base_dir(
        mode: CliMode,
        base_dir: PathBuf,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let config_manager = ConfigManager::with_base_dir(base_dir.clone())?;
        let config = config_manager.load()?;
        output::configure_colors(config.ui_color_enabled && mode == CliMode::Interactive);

        let storage = JsonLedgerStorage::new(StoragePaths {
            ledger_root: config.resolve_ledger_root(&base_dir),
            backup_root: config.resolve_backup_root(&base_dir),
        })?;
        let mut ledger_manager = LedgerManager::new(Box::new(storage));
        let name = config
            .last_opened_ledger
            .clone()
            .unwrap_or_else(|| DEFAULT_LEDGER_NAME.to_string());
        for warning in ledger_manager.open_or_create(&name)? {
            output::warning(warning);
        }

        let mut context = ShellContext {
            mode,
            registry,
            ledger_manager,
            formatters: CliFormatters::from_config(&config),
            config_manager,
            config,
            clock,
            theme: ColorfulTheme::default(),
            base_dir,
            running: true,
        };
        if context.config.last_opened_ledger.is_none() {
            context.config.last_opened_ledger = Some(name);
            context.persist_config()?;
        }
        Ok(context)
    }

    pub fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn prompt(&self) -> String {
        let name = self.ledger_manager.current_name().unwrap_or("spendly");
        format!("{name}> ")
    }

    pub fn policy(&self) -> UnsetBudgetPolicy {
        self.config.unset_budget_policy
    }

    pub fn ledger(&self) -> Result<&Ledger, CommandError> {
        Ok(self.ledger_manager.ledger()?)
    }

    /// Runs a ledger mutation with the shell clock; nothing changes unless it saves.
    pub fn mutate<T>(
        &mut self,
        change: impl FnOnce(&mut Ledger, &dyn Clock) -> Result<T, CoreError>,
    ) -> Result<T, CommandError> {
        let clock = Arc::clone(&self.clock);
        Ok(self
            .ledger_manager
            .apply(|ledger| change(ledger, clock.as_ref()))?)
    }

    pub fn persist_config(&self) -> CommandResult {
        self.config_manager.save(&self.config)?;
        Ok(())
    }

    /// Re-derives presentation state after a config change and saves it.
    pub fn config_changed(&mut self) -> CommandResult {
        self.formatters = CliFormatters::from_config(&self.config);
        output::configure_colors(self.config.ui_color_enabled && self.mode == CliMode::Interactive);
        self.persist_config()
    }

    /// Asks for confirmation in interactive mode; scripts always proceed.
    pub fn confirm(&self, prompt: &str) -> Result<bool, CommandError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()?)
    }

    pub fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.handler(command) else {
            self.suggest_command(raw);
            return Ok(LoopControl::Continue);
        };
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{input}`. Type `help` to see available commands."
        ));
        if let Some(best) = self.registry.suggest(input) {
            output::hint(format!("Did you mean `{best}`?"));
        }
    }

    pub fn confirm_exit(&self) -> Result<bool, CliError> {
        self.confirm("Exit Spendly?")
            .map_err(|err| CliError::Command(err.to_string()))
    }

    pub fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
            }
            other => output::error(other),
        }
    }
}
