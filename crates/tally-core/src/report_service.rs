//! Plain-text financial report.

use chrono::NaiveDate;
use tally_domain::{ChartData, EntryKind, Ledger};

use crate::{ChartService, CurrencyFormatter, DateFormatter, IsoDateFormatter, SummaryService};

const RULE: &str = "----------------------------------------";

pub struct ReportService;

impl ReportService {
    /// File name used when a report generated on `date` is written to disk.
    pub fn file_name(date: NaiveDate) -> String {
        format!("tally-report-{}.txt", IsoDateFormatter.format_date(date))
    }

    /// Renders totals, the expense breakdown and every transaction.
    pub fn render(
        ledger: &Ledger,
        currency: &dyn CurrencyFormatter,
        generated_on: NaiveDate,
    ) -> String {
        let dates = IsoDateFormatter;
        let totals = SummaryService::totals(ledger);
        let mut lines = vec![
            "Financial Report".to_string(),
            format!("Generated: {}", dates.format_date(generated_on)),
            String::new(),
            "Summary".to_string(),
            RULE.to_string(),
            format!("Balance:  {}", currency.format_amount(totals.balance)),
            format!(
                "Income:   {}",
                currency.format_entry(EntryKind::Income, totals.income)
            ),
            format!(
                "Expenses: {}",
                currency.format_entry(EntryKind::Expense, totals.expense)
            ),
            String::new(),
            "Expenses by Category".to_string(),
            RULE.to_string(),
        ];

        match ChartService::build(ledger) {
            ChartData::NoData(reason) => lines.push(reason.message().to_string()),
            ChartData::Bars(chart) => {
                let width = chart
                    .bars
                    .iter()
                    .map(|bar| bar.category.chars().count())
                    .max()
                    .unwrap_or(0);
                for bar in &chart.bars {
                    lines.push(format!(
                        "{:<width$}  {:>14}  {:>5.1}%",
                        bar.category,
                        currency.format_amount(bar.amount),
                        bar.height_percent,
                    ));
                }
            }
        }

        lines.push(String::new());
        lines.push(format!("Transactions ({})", ledger.transaction_count()));
        lines.push(RULE.to_string());
        if ledger.has_transactions() {
            for txn in &ledger.transactions {
                lines.push(format!(
                    "{}  {:<24}  {:<16}  {:>14}",
                    dates.format_date(txn.date),
                    txn.description,
                    txn.category,
                    currency.format_entry(txn.kind(), txn.magnitude()),
                ));
            }
        } else {
            lines.push("No transactions recorded".to_string());
        }

        let mut report = lines.join("\n");
        report.push('\n');
        report
    }
}
