//! Derived summary and chart descriptor types.

use rust_decimal::Decimal;

/// Running totals across the whole ledger.
///
/// `expense` is a non-negative magnitude; `balance == income - expense`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub balance: Decimal,
    pub income: Decimal,
    pub expense: Decimal,
}

/// Expense total accumulated for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Decimal,
}

/// Per-category expense magnitudes, iterated in first-encountered order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategorySummary {
    entries: Vec<CategoryTotal>,
}

impl CategorySummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to the running total for `category`.
    pub fn accumulate(&mut self, category: &str, amount: Decimal) {
        match self.entries.iter_mut().find(|e| e.category == category) {
            Some(entry) => entry.amount = entry.amount.saturating_add(amount),
            None => self.entries.push(CategoryTotal {
                category: category.to_string(),
                amount,
            }),
        }
    }

    /// Drops categories whose total is zero.
    pub fn prune_zero(&mut self) {
        self.entries.retain(|entry| !entry.amount.is_zero());
    }

    pub fn get(&self, category: &str) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| entry.amount)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_amount(&self) -> Option<Decimal> {
        self.entries.iter().map(|entry| entry.amount).max()
    }
}

/// Why a chart could not be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoDataReason {
    NoTransactions,
    NoExpenses,
}

impl NoDataReason {
    pub fn message(self) -> &'static str {
        match self {
            NoDataReason::NoTransactions => "No data to display",
            NoDataReason::NoExpenses => "No expense data to display",
        }
    }
}

/// Description of the category-expense chart, or the reason there is none.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartData {
    NoData(NoDataReason),
    Bars(BarChart),
}

impl ChartData {
    pub fn bars(&self) -> &[Bar] {
        match self {
            ChartData::NoData(_) => &[],
            ChartData::Bars(chart) => &chart.bars,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub max_amount: Decimal,
    /// Axis ticks from the top (100%) down to zero.
    pub ticks: Vec<AxisTick>,
    /// Bars sorted by amount, largest first.
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisTick {
    /// Share of `max_amount`, in percent.
    pub percent: u8,
    /// Tick value rounded to whole units.
    pub value: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub category: String,
    pub amount: Decimal,
    pub height_percent: f64,
    /// Staggered reveal offset in seconds; presentation only.
    pub reveal_delay: f64,
}
