#![doc(test(attr(deny(warnings))))]

//! tally records income and expense entries, keeps running totals and
//! describes a per-category expense chart. The library hosts the
//! [`core::ledger_manager::LedgerManager`] controller and the interactive shell.

pub mod cli;
pub mod core;
pub mod errors;
pub mod utils;

pub use tally_config as config;
pub use tally_core as services;
pub use tally_domain as domain;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!(version = utils::build_info::CLI_VERSION, "tally tracing initialized");
    });
}
