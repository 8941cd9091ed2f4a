//! Command results, CLI error types, and argument helpers shared by handlers.

use std::io;

use chrono::{DateTime, NaiveDate, Utc};
use rustyline::error::ReadlineError;
use spendly_config::ConfigError;
use spendly_core::CoreError;
use uuid::Uuid;

use crate::errors::SpendlyError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Spendly(#[from] SpendlyError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<CoreError> for CommandError {
    fn from(err: CoreError) -> Self {
        CommandError::Spendly(err.into())
    }
}

impl From<ConfigError> for CommandError {
    fn from(err: ConfigError) -> Self {
        CommandError::Spendly(err.into())
    }
}

/// Failures that stop the shell itself.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Spendly(#[from] SpendlyError),
    #[error("Readline error: {0}")]
    Readline(#[from] ReadlineError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Input(String),
    #[error("{0}")]
    Command(String),
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        CliError::Spendly(err.into())
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::Spendly(err.into())
    }
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        CliError::Command(err.to_string())
    }
}

/// Positional arguments plus `--flag value` options.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParsedArgs<'a> {
    pub positional: Vec<&'a str>,
    pub options: Vec<(&'a str, &'a str)>,
}

impl<'a> ParsedArgs<'a> {
    /// Splits `args`, accepting only the listed `--flag` names.
    pub fn parse(args: &[&'a str], allowed: &[&str]) -> Result<Self, CommandError> {
        let mut parsed = ParsedArgs::default();
        let mut iter = args.iter().copied();
        while let Some(arg) = iter.next() {
            let Some(flag) = arg.strip_prefix("--") else {
                parsed.positional.push(arg);
                continue;
            };
            if !allowed.contains(&flag) {
                return Err(CommandError::InvalidArguments(format!(
                    "unknown option `--{flag}`"
                )));
            }
            let value = iter.next().ok_or_else(|| {
                CommandError::InvalidArguments(format!("option `--{flag}` needs a value"))
            })?;
            parsed.options.push((flag, value));
        }
        Ok(parsed)
    }

    /// Last value given for `flag`.
    pub fn option(&self, flag: &str) -> Option<&'a str> {
        self.options
            .iter()
            .rev()
            .find(|(name, _)| *name == flag)
            .map(|(_, value)| *value)
    }

    pub fn joined_positional(&self, skip: usize) -> String {
        self.positional
            .iter()
            .skip(skip)
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub fn require_arg<'a>(
    args: &[&'a str],
    index: usize,
    usage: &str,
) -> Result<&'a str, CommandError> {
    args.get(index)
        .copied()
        .ok_or_else(|| CommandError::InvalidArguments(format!("usage: {usage}")))
}

/// Parses `YYYY-MM-DD`, keeping the time of day of `now`.
pub fn parse_date(input: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>, CommandError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map(|date| date.and_time(now.time()).and_utc())
        .map_err(|_| {
            CommandError::InvalidArguments(format!("invalid date `{input}` (use YYYY-MM-DD)"))
        })
}

pub fn short_id(id: Uuid) -> String {
    let mut short = id.simple().to_string();
    short.truncate(8);
    short
}
