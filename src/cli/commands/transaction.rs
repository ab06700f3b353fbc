use chrono::Local;
use tally_core::{CoreError, CurrencyFormatter, TransactionInput, DATE_FORMAT};
use tally_domain::Displayable;

use crate::cli::core::{parse_id, CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::ui::table::{Table, TableColumn};
use crate::errors::LedgerError;

const ADD_USAGE: &str = "add <description> <amount> <category> [YYYY-MM-DD]";
const DESCRIPTION_WIDTH: usize = 32;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add",
            "Record income (positive) or an expense (negative)",
            ADD_USAGE,
            cmd_add,
        ),
        CommandEntry::new("remove", "Delete a transaction by id", "remove <id>", cmd_remove),
        CommandEntry::new("list", "Show transactions, newest first", "list", cmd_list),
    ]
}

fn today() -> String {
    Local::now().date_naive().format(DATE_FORMAT).to_string()
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let input = match args {
        [] if context.mode == CliMode::Interactive => prompt_transaction(context)?,
        [description, amount, category] => {
            TransactionInput::new(*description, *amount, *category, today())
        }
        [description, amount, category, date] => {
            TransactionInput::new(*description, *amount, *category, *date)
        }
        _ => return Err(CommandError::InvalidArguments(format!("usage: {ADD_USAGE}"))),
    };

    let transaction = context.manager.add_transaction(&input)?;
    let amount = context
        .manager
        .currency()
        .format_entry(transaction.kind(), transaction.magnitude());
    output::success(format!(
        "Added #{} {} ({amount}, {})",
        transaction.id, transaction.description, transaction.category
    ));
    Ok(())
}

fn prompt_transaction(context: &ShellContext) -> Result<TransactionInput, CommandError> {
    let description = io::prompt_text(&context.theme, "Description", None)?;
    let amount = io::prompt_text(&context.theme, "Amount (negative for expenses)", None)?;
    let categories = context.manager.categories().to_vec();
    let index = io::select_index(&context.theme, "Category", &categories)?;
    let date = io::prompt_text(&context.theme, "Date (YYYY-MM-DD)", Some(&today()))?;
    let category = categories.get(index).cloned().unwrap_or_default();
    Ok(TransactionInput::new(description, amount, category, date))
}

fn cmd_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [raw] = args else {
        return Err(CommandError::InvalidArguments("usage: remove <id>".into()));
    };
    let id = parse_id(raw)?;
    let label = match context.manager.find_transaction(id) {
        Ok(transaction) => transaction.display_label(),
        Err(LedgerError::Core(CoreError::TransactionNotFound(_))) => {
            output::warning(format!("No transaction with id {id}."));
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };
    context.manager.remove_transaction(id);
    output::success(format!("Removed #{id} {label}."));
    Ok(())
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let transactions = context.manager.transactions();
    if transactions.is_empty() {
        output::info("No transactions yet. Use `add` to record one.");
        return Ok(());
    }

    let currency = context.manager.currency();
    let mut table = Table::new(vec![
        TableColumn::right("ID"),
        TableColumn::left("Date"),
        TableColumn::left("Description").truncate_at(DESCRIPTION_WIDTH),
        TableColumn::left("Category"),
        TableColumn::right("Amount"),
    ]);
    for transaction in transactions {
        table.push_row(vec![
            transaction.id.to_string(),
            transaction.date.format(DATE_FORMAT).to_string(),
            transaction.description.clone(),
            transaction.category.clone(),
            currency.format_entry(transaction.kind(), transaction.magnitude()),
        ]);
    }
    output::section("Transactions");
    output::info(table.render());
    Ok(())
}
