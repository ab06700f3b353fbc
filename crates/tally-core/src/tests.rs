use std::str::FromStr;

use rust_decimal::Decimal;
use tally_domain::{
    CategorySet, ChartData, Ledger, NoDataReason, Transaction, FALLBACK_CATEGORY,
};

use crate::{
    format::{format_money, round_money},
    CategoryService, ChartService, CoreError, CurrencyFormatter, SummaryService, SymbolFormatter,
    TransactionInput, TransactionService,
};

fn add(ledger: &mut Ledger, description: &str, amount: &str, category: &str) -> u64 {
    TransactionService::add(
        ledger,
        &TransactionInput::new(description, amount, category, "2024-01-15"),
    )
    .expect("valid transaction")
    .id
}

fn sample_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    add(&mut ledger, "Salary", "100", "Income");
    add(&mut ledger, "Groceries", "-40", "Food");
    add(&mut ledger, "Snacks", "-10", "Food");
    ledger
}

#[test]
fn sample_scenario_totals_summary_and_chart() {
    let ledger = sample_ledger();

    let totals = SummaryService::formatted_totals(&ledger);
    assert_eq!(totals.balance, "50.00");
    assert_eq!(totals.income, "100.00");
    assert_eq!(totals.expense, "50.00");

    let summary = SummaryService::category_summary(&ledger);
    assert_eq!(summary.len(), 1);
    assert_eq!(summary.get("Food"), Some(Decimal::from(50)));

    let ChartData::Bars(chart) = ChartService::build(&ledger) else {
        panic!("expected a chart");
    };
    let formatter = SymbolFormatter::default();
    assert_eq!(formatter.format_whole(chart.ticks[0].value), "Rs 50");
    assert_eq!(chart.bars.len(), 1);
    assert_eq!(formatter.format_amount(chart.bars[0].amount), "Rs 50.00");
}

#[test]
fn empty_ledger_reports_zeroes_and_no_chart() {
    let ledger = Ledger::new();
    let totals = SummaryService::formatted_totals(&ledger);
    assert_eq!(totals.balance, "0.00");
    assert_eq!(totals.income, "0.00");
    assert_eq!(totals.expense, "0.00");
    assert_eq!(
        ChartService::build(&ledger),
        ChartData::NoData(NoDataReason::NoTransactions)
    );
}

#[test]
fn income_only_ledger_has_no_expense_chart() {
    let mut ledger = Ledger::new();
    add(&mut ledger, "Salary", "2500", "Income");
    assert_eq!(
        ChartService::build(&ledger),
        ChartData::NoData(NoDataReason::NoExpenses)
    );
}

#[test]
fn add_then_remove_restores_prior_state() {
    let mut ledger = sample_ledger();
    let before = ledger.clone();

    let id = add(&mut ledger, "Cinema", "-12.75", "Entertainment");
    assert!(TransactionService::remove(&mut ledger, id));

    assert_eq!(ledger, before);
}

#[test]
fn zero_amount_is_rejected_and_ledger_unchanged() {
    let mut ledger = sample_ledger();
    let before = ledger.clone();
    let err = TransactionService::add(
        &mut ledger,
        &TransactionInput::new("Nothing", "0", "Food", "2024-01-15"),
    )
    .unwrap_err();
    assert!(matches!(err, CoreError::Validation(_)), "unexpected error: {err:?}");
    assert_eq!(ledger, before);
}

#[test]
fn balance_equals_income_minus_expense() {
    let mut ledger = Ledger::new();
    for amount in ["0.1", "0.2", "-0.3", "1999.999", "-0.005", "-100", "42.42"] {
        add(&mut ledger, "entry", amount, "Other");
    }
    let totals = SummaryService::totals(&ledger);
    assert_eq!(
        round_money(totals.balance),
        round_money(totals.income - totals.expense)
    );
    assert_eq!(format_money(totals.expense), "100.31");
}

#[test]
fn category_summary_never_contains_zero() {
    let mut ledger = sample_ledger();
    add(&mut ledger, "Refund", "40", "Food");
    add(&mut ledger, "Bus", "-0.01", "Transportation");
    let summary = SummaryService::category_summary(&ledger);
    assert!(summary.iter().all(|entry| !entry.amount.is_zero()));
    assert_eq!(summary.get("Transportation"), Decimal::from_str("0.01").ok());
}

#[test]
fn deleting_category_reassigns_without_losing_transactions() {
    let mut ledger = sample_ledger();
    add(&mut ledger, "Rent", "-700", "Housing");
    let count = ledger.transaction_count();

    let moved = CategoryService::remove(&mut ledger, "Food").unwrap();

    assert_eq!(moved, 2);
    assert_eq!(ledger.transaction_count(), count);
    assert!(!ledger.categories.contains("Food"));
    assert!(ledger
        .transactions
        .iter()
        .filter(|txn| txn.description != "Salary" && txn.description != "Rent")
        .all(|txn| txn.category == FALLBACK_CATEGORY));
}

#[test]
fn protected_and_last_categories_cannot_be_deleted() {
    let mut ledger = Ledger::new();
    let err = CategoryService::remove(&mut ledger, FALLBACK_CATEGORY).unwrap_err();
    assert!(matches!(err, CoreError::ProtectedCategory(_)), "unexpected error: {err:?}");
    assert_eq!(ledger.categories, CategorySet::defaults());

    ledger.categories = CategorySet::from_names([FALLBACK_CATEGORY]);
    let err = CategoryService::remove(&mut ledger, FALLBACK_CATEGORY).unwrap_err();
    assert!(matches!(err, CoreError::LastCategory), "unexpected error: {err:?}");
    assert_eq!(ledger.categories.len(), 1);
}

#[test]
fn equal_expense_totals_both_get_bars() {
    let mut ledger = Ledger::new();
    add(&mut ledger, "Power", "-30", "Utilities");
    add(&mut ledger, "Concert", "-30", "Entertainment");
    add(&mut ledger, "Salary", "90", "Income");

    let data = ChartService::build(&ledger);
    let order: Vec<_> = data.bars().iter().map(|bar| bar.category.as_str()).collect();
    assert_eq!(order, vec!["Utilities", "Entertainment"]);
    assert_eq!(data.bars().len(), SummaryService::category_summary(&ledger).len());
}

#[test]
fn aggregation_saturates_instead_of_overflowing() {
    let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    let mut ledger = Ledger::new();
    ledger.add_transaction(Transaction::new(1, "a", Decimal::MAX, "Income", date));
    ledger.add_transaction(Transaction::new(2, "b", Decimal::MAX, "Income", date));
    ledger.add_transaction(Transaction::new(3, "c", Decimal::MIN, "Food", date));
    ledger.add_transaction(Transaction::new(4, "d", Decimal::MIN, "Food", date));

    let totals = SummaryService::totals(&ledger);
    assert_eq!(totals.income, Decimal::MAX);
    assert_eq!(totals.expense, Decimal::MAX);
    assert_eq!(SummaryService::category_summary(&ledger).get("Food"), Some(Decimal::MAX));
    assert_eq!(ChartService::build(&ledger).bars().len(), 1);
}

#[test]
fn amounts_beyond_the_limit_never_enter_the_ledger() {
    let mut ledger = sample_ledger();
    let before = ledger.clone();
    for amount in ["79228162514264337593543950335", "-20000000000000000000000000000"] {
        let err = TransactionService::add(
            &mut ledger,
            &TransactionInput::new("Jackpot", amount, "Income", "2024-01-15"),
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)), "unexpected error: {err:?}");
    }
    assert_eq!(ledger, before);

    add(&mut ledger, "Windfall", "1000000000000000", "Income");
    add(&mut ledger, "Mansion", "-1000000000000000", "Housing");
    assert_eq!(SummaryService::formatted_totals(&ledger).balance, "50.00");
}

