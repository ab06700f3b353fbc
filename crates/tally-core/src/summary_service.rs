//! Running totals and the per-category expense summary.

use rust_decimal::Decimal;
use tally_domain::{CategorySummary, Ledger, Totals};

use crate::format::format_money;

/// Totals rendered with two decimals, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedTotals {
    pub balance: String,
    pub income: String,
    pub expense: String,
}

/// Aggregates ledger data for the totals panel and the expense chart.
///
/// See also: [`crate::ChartService`], which consumes [`CategorySummary`].
pub struct SummaryService;

impl SummaryService {
    /// Balance, income and expense magnitude over every transaction.
    pub fn totals(ledger: &Ledger) -> Totals {
        let (income, spent) = ledger.transactions.iter().fold(
            (Decimal::ZERO, Decimal::ZERO),
            |(income, spent), txn| {
                if txn.is_income() {
                    (income.saturating_add(txn.amount), spent)
                } else if txn.is_expense() {
                    (income, spent.saturating_add(txn.amount))
                } else {
                    (income, spent)
                }
            },
        );
        Totals {
            balance: income.saturating_add(spent),
            income,
            expense: spent.abs(),
        }
    }

    pub fn formatted_totals(ledger: &Ledger) -> FormattedTotals {
        let totals = Self::totals(ledger);
        FormattedTotals {
            balance: format_money(totals.balance),
            income: format_money(totals.income),
            expense: format_money(totals.expense),
        }
    }

    /// Expense magnitude per category; categories without expenses are absent.
    pub fn category_summary(ledger: &Ledger) -> CategorySummary {
        let mut summary = CategorySummary::new();
        for txn in ledger.transactions.iter().filter(|txn| txn.is_expense()) {
            summary.accumulate(&txn.category, txn.magnitude());
        }
        summary.prune_zero();
        summary
    }
}
