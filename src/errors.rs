use tally_config::ConfigError;
use tally_core::CoreError;
use thiserror::Error;

/// Error type that captures failures of the ledger controller.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
