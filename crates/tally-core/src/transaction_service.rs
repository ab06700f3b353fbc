//! Validated operations on ledger transactions.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::{
    prelude::{FromPrimitive, ToPrimitive},
    Decimal,
};
use tally_domain::{Ledger, Transaction, TransactionId};
use tracing::{debug, info};

use crate::CoreError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Largest accepted magnitude. Amounts up to this bound are stored as JSON
/// numbers and read back without loss.
// 1_000_000_000_000_000 (10^15) as raw 96-bit parts: hi=0, mid=0x00038D7E, lo=0xA4C68000.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

/// A new entry exactly as the user typed it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionInput {
    pub description: String,
    pub amount: String,
    pub category: String,
    pub date: String,
}

impl TransactionInput {
    pub fn new(
        description: impl Into<String>,
        amount: impl Into<String>,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            amount: amount.into(),
            category: category.into(),
            date: date.into(),
        }
    }
}

/// Provides validated operations for [`Transaction`] entries.
///
/// See also: [`crate::CategoryService`], which reassigns transactions when a
/// category is deleted.
pub struct TransactionService;

impl TransactionService {
    /// Validates `input`, assigns the next id and appends the entry.
    ///
    /// Nothing is mutated when validation fails.
    pub fn add(ledger: &mut Ledger, input: &TransactionInput) -> Result<Transaction, CoreError> {
        let description = input.description.trim();
        if description.is_empty() {
            return Err(CoreError::Validation("Please enter a description".into()));
        }
        let amount = Self::parse_amount(&input.amount)?;
        let category = input.category.trim();
        if category.is_empty() {
            return Err(CoreError::Validation("Please select a category".into()));
        }
        if !ledger.categories.contains(category) {
            return Err(CoreError::Validation(format!(
                "Unknown category `{category}`"
            )));
        }
        let date = Self::parse_date(&input.date)?;

        let transaction = Transaction::new(
            ledger.next_transaction_id(),
            description,
            amount,
            category,
            date,
        );
        ledger.add_transaction(transaction.clone());
        info!(id = transaction.id, category, "transaction added");
        Ok(transaction)
    }

    /// Removes the entry with `id`. Returns `false` when nothing matched.
    pub fn remove(ledger: &mut Ledger, id: TransactionId) -> bool {
        let removed = ledger.remove_transaction(id);
        if removed > 0 {
            info!(id, "transaction removed");
        } else {
            debug!(id, "remove ignored: no such transaction");
        }
        removed > 0
    }

    /// Files every transaction in `old` under `new`; returns how many moved.
    pub fn reassign_category(ledger: &mut Ledger, old: &str, new: &str) -> usize {
        let mut moved = 0;
        for txn in ledger
            .transactions
            .iter_mut()
            .filter(|txn| txn.category == old)
        {
            txn.category = new.to_string();
            moved += 1;
        }
        if moved > 0 {
            info!(from = old, to = new, moved, "transactions reassigned");
        }
        moved
    }

    pub fn find(ledger: &Ledger, id: TransactionId) -> Result<&Transaction, CoreError> {
        ledger
            .transaction(id)
            .ok_or(CoreError::TransactionNotFound(id))
    }

    /// Transactions for the list view, most recently entered first.
    pub fn list(ledger: &Ledger) -> Vec<&Transaction> {
        ledger.recent_first().collect()
    }

    /// Parses a signed, non-zero decimal amount no larger than [`MAX_AMOUNT`].
    ///
    /// Only digits, a sign, a decimal point and an exponent are accepted.
    pub fn parse_amount(raw: &str) -> Result<Decimal, CoreError> {
        let trimmed = raw.trim();
        let invalid = || CoreError::Validation("Please enter a valid amount".into());
        let well_formed = !trimmed.is_empty()
            && trimmed
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
        if !well_formed {
            return Err(invalid());
        }
        let amount = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| invalid())?;
        if amount.is_zero() {
            return Err(CoreError::Validation("Amount cannot be zero".into()));
        }
        if amount.abs() > MAX_AMOUNT {
            return Err(CoreError::Validation(format!(
                "Amount cannot exceed {MAX_AMOUNT}"
            )));
        }
        // The stored record keeps amounts as floating-point numbers.
        let stored = amount.to_f64().and_then(Decimal::from_f64);
        if stored.map_or(true, |value| value.is_zero()) {
            return Err(invalid());
        }
        Ok(amount)
    }

    pub fn parse_date(raw: &str) -> Result<NaiveDate, CoreError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CoreError::Validation("Please select a date".into()));
        }
        NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| {
            CoreError::Validation(format!("Invalid date `{trimmed}` (use YYYY-MM-DD)"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(amount: &str) -> TransactionInput {
        TransactionInput::new("Lunch", amount, "Food", "2024-04-10")
    }

    fn validation_message(err: CoreError) -> String {
        match err {
            CoreError::Validation(message) => message,
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn add_assigns_sequential_ids_and_appends() {
        let mut ledger = Ledger::new();
        let first = TransactionService::add(&mut ledger, &input("-12.50")).unwrap();
        let second = TransactionService::add(&mut ledger, &input("+3")).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(second.amount, Decimal::from(3));
        assert_eq!(ledger.transactions.last(), Some(&second));
    }

    #[test]
    fn add_trims_description() {
        let mut ledger = Ledger::new();
        let mut raw = input("5");
        raw.description = "  Coffee  ".into();
        let txn = TransactionService::add(&mut ledger, &raw).unwrap();
        assert_eq!(txn.description, "Coffee");
    }

    #[test]
    fn add_rejects_bad_amounts_without_mutating() {
        let mut ledger = Ledger::new();
        for (raw, expected) in [
            ("", "Please enter a valid amount"),
            ("abc", "Please enter a valid amount"),
            ("0", "Amount cannot be zero"),
            ("-0.00", "Amount cannot be zero"),
        ] {
            let err = TransactionService::add(&mut ledger, &input(raw)).unwrap_err();
            assert_eq!(validation_message(err), expected, "input {raw:?}");
        }
        assert!(ledger.transactions.is_empty());
    }

    #[test]
    fn add_rejects_blank_fields_and_unknown_categories() {
        let mut ledger = Ledger::new();

        let mut raw = input("5");
        raw.description = "   ".into();
        assert_eq!(
            validation_message(TransactionService::add(&mut ledger, &raw).unwrap_err()),
            "Please enter a description"
        );

        let mut raw = input("5");
        raw.category = String::new();
        assert_eq!(
            validation_message(TransactionService::add(&mut ledger, &raw).unwrap_err()),
            "Please select a category"
        );

        let mut raw = input("5");
        raw.category = "Travel".into();
        assert!(validation_message(TransactionService::add(&mut ledger, &raw).unwrap_err())
            .contains("Travel"));

        let mut raw = input("5");
        raw.date = String::new();
        assert_eq!(
            validation_message(TransactionService::add(&mut ledger, &raw).unwrap_err()),
            "Please select a date"
        );

        assert!(ledger.transactions.is_empty());
    }

    #[test]
    fn reassign_only_touches_matching_category() {
        let mut ledger = Ledger::new();
        TransactionService::add(&mut ledger, &input("-5")).unwrap();
        let mut rent = input("-500");
        rent.category = "Housing".into();
        TransactionService::add(&mut ledger, &rent).unwrap();

        let moved = TransactionService::reassign_category(&mut ledger, "Food", "Other");
        assert_eq!(moved, 1);
        assert_eq!(ledger.transactions[0].category, "Other");
        assert_eq!(ledger.transactions[1].category, "Housing");
    }

    #[test]
    fn find_reports_missing_ids() {
        let mut ledger = Ledger::new();
        let added = TransactionService::add(&mut ledger, &input("-5")).unwrap();

        assert_eq!(TransactionService::find(&ledger, added.id).unwrap(), &added);
        assert!(matches!(
            TransactionService::find(&ledger, 99),
            Err(CoreError::TransactionNotFound(99))
        ));
        assert!(!TransactionService::remove(&mut ledger, 99));
        assert_eq!(ledger.transaction_count(), 1);
    }

    #[test]
    fn parse_amount_rejects_oversized_and_separated_input() {
        let ceiling = TransactionService::parse_amount("1000000000000000").unwrap();
        assert_eq!(ceiling, MAX_AMOUNT);
        assert_eq!(TransactionService::parse_amount("-1e15").unwrap(), -MAX_AMOUNT);

        for raw in [
            "1000000000000000.01",
            "79228162514264337593543950335",
            "-20000000000000000000000000000",
        ] {
            let err = TransactionService::parse_amount(raw).unwrap_err();
            assert!(validation_message(err).contains("cannot exceed"), "input {raw:?}");
        }
        for raw in ["1_000", "1,000", "Rs 5", "0x10"] {
            assert_eq!(
                validation_message(TransactionService::parse_amount(raw).unwrap_err()),
                "Please enter a valid amount",
                "input {raw:?}"
            );
        }
    }
}
