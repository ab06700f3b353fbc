//! The in-memory ledger aggregate.

use crate::{category::CategorySet, common::TransactionId, transaction::Transaction};

/// Ordered transactions plus the category set they are filed under.
///
/// Transactions keep entry order, which is independent of their `date`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    pub transactions: Vec<Transaction>,
    pub categories: CategorySet,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(transactions: Vec<Transaction>, categories: CategorySet) -> Self {
        Self {
            transactions,
            categories,
        }
    }

    /// Next free identifier: one past the largest id in use.
    pub fn next_transaction_id(&self) -> TransactionId {
        self.transactions
            .iter()
            .map(|txn| txn.id)
            .max()
            .map_or(1, |max| max.saturating_add(1))
    }

    pub fn add_transaction(&mut self, transaction: Transaction) -> TransactionId {
        let id = transaction.id;
        self.transactions.push(transaction);
        id
    }

    /// Drops every transaction carrying `id` and returns how many were removed.
    pub fn remove_transaction(&mut self, id: TransactionId) -> usize {
        let before = self.transactions.len();
        self.transactions.retain(|txn| txn.id != id);
        before - self.transactions.len()
    }

    pub fn transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn has_transactions(&self) -> bool {
        !self.transactions.is_empty()
    }

    /// Transactions in display order, most recently entered first.
    pub fn recent_first(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use super::*;

    fn txn(id: TransactionId) -> Transaction {
        Transaction::new(
            id,
            format!("entry {id}"),
            Decimal::from(-10),
            "Food",
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        )
    }

    #[test]
    fn next_id_is_one_past_max() {
        let mut ledger = Ledger::new();
        assert_eq!(ledger.next_transaction_id(), 1);
        ledger.add_transaction(txn(41));
        ledger.add_transaction(txn(3));
        assert_eq!(ledger.next_transaction_id(), 42);
    }

    #[test]
    fn remove_missing_id_is_a_no_op() {
        let mut ledger = Ledger::new();
        ledger.add_transaction(txn(1));
        assert_eq!(ledger.remove_transaction(99), 0);
        assert_eq!(ledger.transaction_count(), 1);
    }

    #[test]
    fn recent_first_reverses_entry_order() {
        let mut ledger = Ledger::new();
        ledger.add_transaction(txn(1));
        ledger.add_transaction(txn(2));
        let ids: Vec<_> = ledger.recent_first().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
