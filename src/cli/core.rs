//! Shared CLI result types and argument helpers.

use std::io;

use rustyline::error::ReadlineError;
use tally_core::CoreError;
use tally_domain::TransactionId;
use thiserror::Error;

use crate::errors::LedgerError;

pub use crate::cli::shell_context::{CliMode, ShellContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// Failure of a single command. Reported to the user; the shell keeps running.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<CoreError> for CommandError {
    fn from(err: CoreError) -> Self {
        CommandError::Ledger(LedgerError::Core(err))
    }
}

/// Failure that stops the shell itself.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Line editor error: {0}")]
    Readline(#[from] ReadlineError),
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        CliError::Ledger(LedgerError::Core(err))
    }
}

impl From<tally_config::ConfigError> for CliError {
    fn from(err: tally_config::ConfigError) -> Self {
        CliError::Ledger(LedgerError::Config(err))
    }
}

pub(crate) fn parse_id(raw: &str) -> Result<TransactionId, CommandError> {
    raw.trim().parse::<TransactionId>().map_err(|_| {
        CommandError::InvalidArguments(format!("`{raw}` is not a transaction id"))
    })
}

/// Splits `--yes`/`-y` off the positional arguments.
pub(crate) fn take_yes_flag<'a>(args: &[&'a str]) -> (bool, Vec<&'a str>) {
    let mut yes = false;
    let mut rest = Vec::with_capacity(args.len());
    for arg in args {
        match *arg {
            "--yes" | "-y" => yes = true,
            other => rest.push(other),
        }
    }
    (yes, rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_must_be_unsigned_integers() {
        assert_eq!(parse_id(" 42 ").unwrap(), 42);
        assert!(matches!(
            parse_id("-1"),
            Err(CommandError::InvalidArguments(_))
        ));
    }

    #[test]
    fn yes_flag_is_removed_from_positionals() {
        let (yes, rest) = take_yes_flag(&["Food", "--yes"]);
        assert!(yes);
        assert_eq!(rest, vec!["Food"]);
    }
}
