//! Domain types representing the category set.

use serde::{Deserialize, Serialize};

/// Category every orphaned transaction falls back to. It can never be removed.
pub const FALLBACK_CATEGORY: &str = "Other";

/// Categories seeded on first run.
pub const DEFAULT_CATEGORIES: [&str; 7] = [
    "Food",
    "Transportation",
    "Housing",
    "Utilities",
    "Entertainment",
    "Income",
    FALLBACK_CATEGORY,
];

/// Ordered set of unique category labels.
///
/// Persisted as a plain JSON array of strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct CategorySet {
    names: Vec<String>,
}

impl Default for CategorySet {
    fn default() -> Self {
        Self::defaults()
    }
}

impl CategorySet {
    pub fn defaults() -> Self {
        Self::from_names(DEFAULT_CATEGORIES)
    }

    /// Builds a set from labels, keeping the first occurrence of any duplicate.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self { names: Vec::new() };
        for name in names {
            set.push(name);
        }
        set
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|existing| existing == name)
    }

    /// Appends a label. Returns `false` when it is already present.
    pub fn push(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    /// Removes a label. Returns `false` when it was not present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|existing| existing != name);
        self.names.len() != before
    }

    pub fn is_protected(name: &str) -> bool {
        name == FALLBACK_CATEGORY
    }
}
