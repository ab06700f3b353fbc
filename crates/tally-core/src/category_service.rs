//! Business logic helpers for category management.

use tally_domain::{CategorySet, Ledger, FALLBACK_CATEGORY};
use tracing::info;

use crate::{CoreError, TransactionService};

/// Provides validated operations on the ledger's category set.
pub struct CategoryService;

impl CategoryService {
    /// Adds a category and returns the stored (trimmed) name.
    ///
    /// Duplicate detection is exact and case-sensitive.
    pub fn add(ledger: &mut Ledger, name: &str) -> Result<String, CoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::Validation("Please enter a category name".into()));
        }
        if !ledger.categories.push(name) {
            return Err(CoreError::DuplicateCategory(name.to_string()));
        }
        info!(category = name, "category added");
        Ok(name.to_string())
    }

    /// Deletes a category and moves its transactions to the fallback category.
    ///
    /// Returns the number of reassigned transactions. Refusals leave the
    /// ledger untouched.
    pub fn remove(ledger: &mut Ledger, name: &str) -> Result<usize, CoreError> {
        Self::check_removable(ledger, name)?;
        if !ledger.categories.remove(name) {
            return Err(CoreError::CategoryNotFound(name.to_string()));
        }
        // Records loaded from older stores may lack the fallback entry.
        ledger.categories.push(FALLBACK_CATEGORY);

        let moved = TransactionService::reassign_category(ledger, name, FALLBACK_CATEGORY);
        info!(category = name, reassigned = moved, "category deleted");
        Ok(moved)
    }

    /// Applies the deletion refusals without changing anything.
    pub fn check_removable(ledger: &Ledger, name: &str) -> Result<(), CoreError> {
        if ledger.categories.len() <= 1 {
            return Err(CoreError::LastCategory);
        }
        if CategorySet::is_protected(name) {
            return Err(CoreError::ProtectedCategory(name.to_string()));
        }
        if !ledger.categories.contains(name) {
            return Err(CoreError::CategoryNotFound(name.to_string()));
        }
        Ok(())
    }

    pub fn list(ledger: &Ledger) -> &[String] {
        ledger.categories.names()
    }
}
