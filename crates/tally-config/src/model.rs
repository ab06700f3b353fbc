use serde::{Deserialize, Serialize};
use std::{
    env,
    path::{Path, PathBuf},
};

/// Environment variable overriding the application data directory.
pub const HOME_ENV: &str = "TALLY_HOME";
const DEFAULT_DIR_NAME: &str = ".tally";
const STORE_DIR: &str = "store";
const REPORT_DIR: &str = "reports";

/// Stores user-configurable CLI preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "Config::default_true")]
    pub ui_color_enabled: bool,
    #[serde(default = "Config::default_true")]
    pub confirm_deletions: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional directory for the ledger records. Defaults to `<data dir>/store`.
    pub store_dir: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional directory for generated reports. Defaults to `<data dir>/reports`.
    pub report_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: Self::default_currency_symbol(),
            ui_color_enabled: true,
            confirm_deletions: true,
            store_dir: None,
            report_dir: None,
        }
    }
}

impl Config {
    pub fn default_currency_symbol() -> String {
        "Rs".into()
    }

    fn default_true() -> bool {
        true
    }

    pub fn resolve_store_dir(&self, data_dir: &Path) -> PathBuf {
        self.store_dir
            .clone()
            .unwrap_or_else(|| data_dir.join(STORE_DIR))
    }

    pub fn resolve_report_dir(&self, data_dir: &Path) -> PathBuf {
        self.report_dir
            .clone()
            .unwrap_or_else(|| data_dir.join(REPORT_DIR))
    }
}

/// Returns the application data directory, defaulting to `~/.tally`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}
