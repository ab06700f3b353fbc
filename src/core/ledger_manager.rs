use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use tally_core::{
    storage::LedgerStore, CategoryService, ChartService, CoreError, FormattedTotals,
    ReportService, SummaryService, SymbolFormatter, TransactionInput, TransactionService,
};
use tally_domain::{CategorySummary, ChartData, Ledger, Totals, Transaction, TransactionId};
use tracing::{info, warn};

use crate::errors::LedgerError;

/// Facade that owns the ledger state and writes it back after every change.
///
/// A failed write does not undo the in-memory change; it is logged and kept
/// as a warning until [`LedgerManager::take_warnings`] is called.
pub struct LedgerManager {
    ledger: Ledger,
    store: LedgerStore,
    currency: SymbolFormatter,
    warnings: Vec<String>,
}

impl LedgerManager {
    /// Loads state from `store`. Unreadable records are replaced by defaults
    /// and reported through [`LedgerManager::take_warnings`].
    pub fn open(store: LedgerStore, currency: SymbolFormatter) -> Result<Self, LedgerError> {
        let report = store.load_ledger()?;
        info!(
            transactions = report.ledger.transaction_count(),
            categories = report.ledger.categories.len(),
            "ledger opened"
        );
        Ok(Self {
            ledger: report.ledger,
            store,
            currency,
            warnings: report.warnings,
        })
    }

    pub fn in_memory() -> Self {
        Self {
            ledger: Ledger::new(),
            store: LedgerStore::in_memory(),
            currency: SymbolFormatter::default(),
            warnings: Vec::new(),
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    pub fn currency(&self) -> &SymbolFormatter {
        &self.currency
    }

    /// Drains warnings collected while loading or persisting.
    pub fn take_warnings(&mut self) -> Vec<String> {
        std::mem::take(&mut self.warnings)
    }

    pub fn add_transaction(&mut self, input: &TransactionInput) -> Result<Transaction, LedgerError> {
        let transaction = TransactionService::add(&mut self.ledger, input)?;
        self.persist_transactions();
        Ok(transaction)
    }

    /// Returns `false` when no transaction had `id`; that is not an error.
    pub fn remove_transaction(&mut self, id: TransactionId) -> bool {
        let removed = TransactionService::remove(&mut self.ledger, id);
        if removed {
            self.persist_transactions();
        }
        removed
    }

    pub fn add_category(&mut self, name: &str) -> Result<String, LedgerError> {
        let added = CategoryService::add(&mut self.ledger, name)?;
        self.persist_categories();
        Ok(added)
    }

    /// Deletes a category, returning how many transactions moved to the fallback.
    pub fn delete_category(&mut self, name: &str) -> Result<usize, LedgerError> {
        let moved = CategoryService::remove(&mut self.ledger, name)?;
        self.persist_categories();
        self.persist_transactions();
        Ok(moved)
    }

    /// Fails with the same refusal `delete_category` would give.
    pub fn check_category_removable(&self, name: &str) -> Result<(), LedgerError> {
        Ok(CategoryService::check_removable(&self.ledger, name)?)
    }

    pub fn find_transaction(&self, id: TransactionId) -> Result<&Transaction, LedgerError> {
        Ok(TransactionService::find(&self.ledger, id)?)
    }

    pub fn transactions(&self) -> Vec<&Transaction> {
        TransactionService::list(&self.ledger)
    }

    pub fn categories(&self) -> &[String] {
        CategoryService::list(&self.ledger)
    }

    pub fn totals(&self) -> Totals {
        SummaryService::totals(&self.ledger)
    }

    pub fn formatted_totals(&self) -> FormattedTotals {
        SummaryService::formatted_totals(&self.ledger)
    }

    pub fn category_summary(&self) -> CategorySummary {
        SummaryService::category_summary(&self.ledger)
    }

    pub fn chart(&self) -> ChartData {
        ChartService::build(&self.ledger)
    }

    /// Writes a text report for `generated_on` into `dir` and returns its path.
    pub fn generate_report(&self, dir: &Path, generated_on: NaiveDate) -> Result<PathBuf, LedgerError> {
        let body = ReportService::render(&self.ledger, &self.currency, generated_on);
        let path = dir.join(ReportService::file_name(generated_on));
        fs::create_dir_all(dir)
            .and_then(|_| fs::write(&path, body))
            .map_err(|err| {
                warn!(path = %path.display(), error = %err, "report generation failed");
                CoreError::Report(format!("could not write {}: {err}", path.display()))
            })?;
        info!(path = %path.display(), "report written");
        Ok(path)
    }

    fn persist_transactions(&mut self) {
        if let Err(err) = self.store.save_transactions(&self.ledger.transactions) {
            self.record_failed_write("transactions", err);
        }
    }

    fn persist_categories(&mut self) {
        if let Err(err) = self.store.save_categories(&self.ledger.categories) {
            self.record_failed_write("categories", err);
        }
    }

    fn record_failed_write(&mut self, record: &str, err: CoreError) {
        warn!(record, error = %err, "failed to persist ledger state");
        self.warnings
            .push(format!("Changes to {record} were not saved: {err}"));
    }
}
