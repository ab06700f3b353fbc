use std::path::PathBuf;

use dialoguer::theme::ColorfulTheme;
use tally_config::{app_data_dir, Config, ConfigManager};
use tally_core::{storage::LedgerStore, SymbolFormatter};
use tally_storage_json::JsonFileStore;
use tracing::{debug, info};

use crate::cli::commands;
use crate::cli::core::{CliError, CommandError, LoopControl};
use crate::cli::io as cli_io;
use crate::cli::output::{self, OutputPreferences};
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::cli::shell::parse_command_line;
use crate::core::ledger_manager::LedgerManager;

const NO_COLOR_ENV: &str = "NO_COLOR";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Everything a command handler can reach: the ledger, preferences and prompts.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub manager: LedgerManager,
    pub config: Config,
    pub report_dir: PathBuf,
    pub theme: ColorfulTheme,
    pub running: bool,
}

impl ShellContext {
    /// Opens the ledger under the data directory (`TALLY_HOME` or `~/.tally`).
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let data_dir = app_data_dir();
        let config_manager = ConfigManager::with_base_dir(&data_dir)?;
        if !config_manager.config_path().exists() {
            config_manager.save(&Config::default())?;
            info!(path = %config_manager.config_path().display(), "default config written");
        }
        let config = config_manager.load()?;
        let store_dir = config.resolve_store_dir(&data_dir);
        let report_dir = config.resolve_report_dir(&data_dir);
        debug!(store = %store_dir.display(), "opening ledger store");

        let backend = JsonFileStore::new(store_dir)?;
        let manager = LedgerManager::open(
            LedgerStore::new(Box::new(backend)),
            SymbolFormatter::new(config.currency_symbol.clone()),
        )?;

        output::set_preferences(OutputPreferences {
            color_enabled: config.ui_color_enabled && std::env::var_os(NO_COLOR_ENV).is_none(),
        });

        let mut context = Self::with_manager(mode, manager, config, report_dir);
        context.flush_warnings();
        info!(mode = ?mode, "shell ready");
        Ok(context)
    }

    /// Builds a context around an already opened manager.
    pub fn with_manager(
        mode: CliMode,
        manager: LedgerManager,
        config: Config,
        report_dir: PathBuf,
    ) -> Self {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);
        Self {
            mode,
            registry,
            manager,
            config,
            report_dir,
            theme: ColorfulTheme::default(),
            running: true,
        }
    }

    pub fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn prompt(&self) -> String {
        format!("tally [{}]> ", self.manager.ledger().transaction_count())
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.handler(command) else {
            self.suggest_command(raw);
            return Ok(LoopControl::Continue);
        };
        let outcome = handler(self, args);
        self.flush_warnings();
        match outcome {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    /// Tokenizes and runs one input line.
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                output::warning(err);
                return Ok(LoopControl::Continue);
            }
        };
        let Some(raw) = tokens.first() else {
            return Ok(LoopControl::Continue);
        };

        let command = raw.to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();
        let control = self.dispatch(&command, raw, &args)?;
        if control == LoopControl::Exit {
            self.running = false;
        }
        Ok(control)
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{input}`. Type `help` to see available commands."
        ));
        if let Some(best) = self.registry.suggest(input) {
            output::info(format!("Suggestion: `{best}`?"));
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
            }
            other => output::error(other),
        }
    }

    /// Asks before a destructive change. Script mode and disabled
    /// confirmations always answer yes.
    pub(crate) fn confirm(&self, prompt: &str) -> Result<bool, CommandError> {
        if self.mode == CliMode::Script || !self.config.confirm_deletions {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, prompt, false)
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, "Exit shell?", true).or(Ok(true))
    }

    /// Prints persistence warnings gathered since the last call.
    pub(crate) fn flush_warnings(&mut self) {
        for warning in self.manager.take_warnings() {
            output::warning(warning);
        }
    }
}

#[cfg(test)]
pub(crate) fn script_context() -> ShellContext {
    let dir = std::env::temp_dir().join("tally-unused-reports");
    ShellContext::with_manager(
        CliMode::Script,
        LedgerManager::in_memory(),
        Config::default(),
        dir,
    )
}
