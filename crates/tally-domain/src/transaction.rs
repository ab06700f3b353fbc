//! Domain types representing ledger entries.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::*;

/// One income or expense entry.
///
/// Positive amounts are income, negative amounts are expenses. The amount is
/// stored as a JSON number so records written by earlier versions load as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    pub id: TransactionId,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub category: String,
    pub date: NaiveDate,
}

impl Transaction {
    pub fn new(
        id: TransactionId,
        description: impl Into<String>,
        amount: Decimal,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            category: category.into(),
            date,
        }
    }

    pub fn kind(&self) -> EntryKind {
        if self.is_expense() {
            EntryKind::Expense
        } else {
            EntryKind::Income
        }
    }

    pub fn is_income(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    pub fn is_expense(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// Absolute value of the amount.
    pub fn magnitude(&self) -> Decimal {
        self.amount.abs()
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("{} ({}, {})", self.description, self.category, self.date)
    }
}

/// Direction of money flow for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    pub fn sign(self) -> &'static str {
        match self {
            EntryKind::Income => "+",
            EntryKind::Expense => "-",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(amount: Decimal) -> Transaction {
        Transaction::new(
            7,
            "Groceries",
            amount,
            "Food",
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
        )
    }

    #[test]
    fn serializes_to_the_stored_record_shape() {
        let txn = sample(Decimal::new(-4050, 2));
        let json = serde_json::to_value(&txn).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["description"], "Groceries");
        assert_eq!(json["amount"].as_f64(), Some(-40.5));
        assert_eq!(json["category"], "Food");
        assert_eq!(json["date"], "2024-03-09");
    }

    #[test]
    fn deserializes_integer_and_float_amounts() {
        let raw = r#"[
            {"id": 1, "description": "Salary", "amount": 100, "category": "Income", "date": "2024-01-01"},
            {"id": 2, "description": "Bus", "amount": -2.75, "category": "Transportation", "date": "2024-01-02"}
        ]"#;
        let parsed: Vec<Transaction> = serde_json::from_str(raw).unwrap();

        assert_eq!(parsed[0].amount, Decimal::from(100));
        assert_eq!(parsed[1].amount, Decimal::new(-275, 2));
        assert_eq!(parsed[1].kind(), EntryKind::Expense);
    }

    #[test]
    fn kind_follows_amount_sign() {
        assert_eq!(sample(Decimal::from(5)).kind(), EntryKind::Income);
        assert!(sample(Decimal::from(5)).is_income());
        assert!(sample(Decimal::from(-5)).is_expense());
        assert_eq!(sample(Decimal::from(-5)).magnitude(), Decimal::from(5));
    }

    #[test]
    fn display_label_names_category_and_date() {
        let txn = sample(Decimal::new(-4050, 2));
        assert_eq!(txn.display_label(), "Groceries (Food, 2024-03-09)");
    }
}
