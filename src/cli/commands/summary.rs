use tally_core::CurrencyFormatter;
use tally_domain::{EntryKind, NoDataReason};

use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::ui::chart::render_chart;
use crate::cli::ui::table::{Table, TableColumn};

const CHART_WIDTH: usize = 40;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("totals", "Show balance, income and expenses", "totals", cmd_totals),
        CommandEntry::new(
            "summary",
            "Show expenses per category",
            "summary",
            cmd_summary,
        ),
        CommandEntry::new("chart", "Draw the category expense chart", "chart", cmd_chart),
    ]
}

fn cmd_totals(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let totals = context.manager.totals();
    let currency = context.manager.currency();
    output::section("Totals");
    output::info(format!("  Balance : {}", currency.format_amount(totals.balance)));
    output::info(format!(
        "  Income  : {}",
        currency.format_entry(EntryKind::Income, totals.income)
    ));
    output::info(format!(
        "  Expenses: {}",
        currency.format_entry(EntryKind::Expense, totals.expense)
    ));
    Ok(())
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let summary = context.manager.category_summary();
    if summary.is_empty() {
        let reason = if context.manager.ledger().has_transactions() {
            NoDataReason::NoExpenses
        } else {
            NoDataReason::NoTransactions
        };
        output::info(reason.message());
        return Ok(());
    }

    let currency = context.manager.currency();
    let mut table = Table::new(vec![TableColumn::left("Category"), TableColumn::right("Spent")]);
    for entry in summary.iter() {
        table.push_row(vec![entry.category.clone(), currency.format_amount(entry.amount)]);
    }
    output::section("Expenses by category");
    output::info(table.render());
    Ok(())
}

fn cmd_chart(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let chart = context.manager.chart();
    output::section("Expense chart");
    for line in render_chart(&chart, context.manager.currency(), CHART_WIDTH) {
        output::info(line);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::cli::shell_context::script_context;

    #[test]
    fn summary_commands_run_on_empty_and_filled_ledgers() {
        let mut context = script_context();
        for command in ["totals", "summary", "chart"] {
            context.process_line(command).unwrap();
        }
        context.process_line("add Salary 100 Income 2024-01-01").unwrap();
        context.process_line("add Lunch -40 Food 2024-01-02").unwrap();
        for command in ["totals", "summary", "chart"] {
            context.process_line(command).unwrap();
        }
        assert_eq!(context.manager.formatted_totals().balance, "60.00");
    }
}
