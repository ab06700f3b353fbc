//! Shared identifiers and traits for ledger primitives.

/// Identifier assigned to a transaction when it enters the ledger.
pub type TransactionId = u64;

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}
