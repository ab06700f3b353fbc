//! tally-domain
//!
//! Pure domain models (Ledger, Transaction, CategorySet, summary and chart descriptors).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod category;
pub mod common;
pub mod ledger;
pub mod summary;
pub mod transaction;

pub use category::*;
pub use common::*;
pub use ledger::*;
pub use summary::*;
pub use transaction::*;
