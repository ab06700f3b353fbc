//! Persistence adapter: two JSON records in a string-keyed store.

use std::{collections::HashMap, sync::RwLock};

use serde::{de::DeserializeOwned, Serialize};
use tally_domain::{CategorySet, Ledger, Transaction};
use tracing::{debug, warn};

use crate::CoreError;

pub const TRANSACTIONS_KEY: &str = "transactions";
pub const CATEGORIES_KEY: &str = "categories";

/// Abstraction over string-keyed stores holding serialized records.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), CoreError>;
    fn remove(&self, key: &str) -> Result<(), CoreError>;
}

/// Volatile store kept entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self {
            entries: RwLock::new(map),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        let entries = self.entries.read().map_err(|_| poisoned())?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CoreError> {
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        entries.remove(key);
        Ok(())
    }
}

fn poisoned() -> CoreError {
    CoreError::Storage("memory store lock poisoned".into())
}

/// Ledger state loaded from a store, plus any recoveries performed on the way.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub ledger: Ledger,
    pub warnings: Vec<String>,
}

/// Reads and writes the `transactions` and `categories` records.
pub struct LedgerStore {
    backend: Box<dyn KeyValueStore>,
}

impl LedgerStore {
    pub fn new(backend: Box<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }

    pub fn backend(&self) -> &dyn KeyValueStore {
        self.backend.as_ref()
    }

    /// Absent or `null` yields an empty list.
    pub fn load_transactions(&self) -> Result<Vec<Transaction>, CoreError> {
        let stored: Option<Vec<Transaction>> = self.read(TRANSACTIONS_KEY)?;
        Ok(stored.unwrap_or_default())
    }

    /// Absent, `null` or empty yields the default categories.
    pub fn load_categories(&self) -> Result<CategorySet, CoreError> {
        let stored: Option<CategorySet> = self.read(CATEGORIES_KEY)?;
        Ok(stored
            .filter(|set| !set.is_empty())
            .unwrap_or_else(CategorySet::defaults))
    }

    pub fn save_transactions(&self, transactions: &[Transaction]) -> Result<(), CoreError> {
        self.write(TRANSACTIONS_KEY, &transactions)
    }

    pub fn save_categories(&self, categories: &CategorySet) -> Result<(), CoreError> {
        self.write(CATEGORIES_KEY, categories)
    }

    pub fn save_ledger(&self, ledger: &Ledger) -> Result<(), CoreError> {
        self.save_transactions(&ledger.transactions)?;
        self.save_categories(&ledger.categories)
    }

    /// Loads both records. An unreadable record falls back to its empty or
    /// default value and is reported as a warning; backend failures propagate.
    pub fn load_ledger(&self) -> Result<LoadReport, CoreError> {
        let mut warnings = Vec::new();

        let transactions = match self.load_transactions() {
            Ok(transactions) => transactions,
            Err(err @ CoreError::CorruptState { .. }) => {
                warn!(error = %err, "falling back to an empty transaction list");
                warnings.push(format!("{err}; starting with no transactions"));
                Vec::new()
            }
            Err(err) => return Err(err),
        };

        let categories = match self.load_categories() {
            Ok(categories) => categories,
            Err(err @ CoreError::CorruptState { .. }) => {
                warn!(error = %err, "falling back to default categories");
                warnings.push(format!("{err}; restoring default categories"));
                CategorySet::defaults()
            }
            Err(err) => return Err(err),
        };

        debug!(
            transactions = transactions.len(),
            categories = categories.len(),
            "ledger state loaded"
        );

        Ok(LoadReport {
            ledger: Ledger::from_parts(transactions, categories),
            warnings,
        })
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CoreError> {
        let Some(raw) = self.backend.get(key)? else {
            return Ok(None);
        };
        serde_json::from_str::<Option<T>>(&raw).map_err(|err| CoreError::CorruptState {
            key: key.to_string(),
            message: err.to_string(),
        })
    }

    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), CoreError> {
        let json = serde_json::to_string(value).map_err(|err| CoreError::Serde(err.to_string()))?;
        self.backend.set(key, &json)?;
        debug!(key, bytes = json.len(), "record written");
        Ok(())
    }
}
