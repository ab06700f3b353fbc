//! tally-core
//!
//! Business logic and services for tally.
//! Depends on tally-domain. No CLI, no terminal I/O; persistence goes through
//! the [`storage::KeyValueStore`] seam.

pub mod category_service;
pub mod chart_service;
pub mod error;
pub mod format;
pub mod report_service;
pub mod storage;
pub mod summary_service;
pub mod transaction_service;

pub use category_service::*;
pub use chart_service::*;
pub use error::CoreError;
pub use format::*;
pub use report_service::*;
pub use summary_service::*;
pub use transaction_service::*;

#[cfg(test)]
mod tests;
