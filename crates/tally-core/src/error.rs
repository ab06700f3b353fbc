use std::io;

use tally_domain::TransactionId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Category `{0}` already exists")]
    DuplicateCategory(String),
    #[error("Category `{0}` cannot be deleted")]
    ProtectedCategory(String),
    #[error("At least one category must remain")]
    LastCategory,
    #[error("Category not found: {0}")]
    CategoryNotFound(String),
    #[error("Transaction not found: {0}")]
    TransactionNotFound(TransactionId),
    #[error("Stored `{key}` record is unreadable: {message}")]
    CorruptState { key: String, message: String },
    #[error("Report generation failed: {0}")]
    Report(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}
