use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use tally_domain::EntryKind;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "Rs";

/// Rounds to cents, half away from zero. A result of zero is always positive zero.
pub fn round_money(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    rounded.rescale(2);
    rounded
}

/// Renders exactly two decimals; `-0.00` is shown as `0.00`.
pub fn format_money(amount: Decimal) -> String {
    round_money(amount).to_string()
}

/// Renders whole units, used for chart axis labels.
pub fn format_whole(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    rounded.rescale(0);
    rounded.to_string()
}

/// Formats currency amounts for presentation.
pub trait CurrencyFormatter: Send + Sync {
    /// `Rs 50.00`, keeping the sign of negative values.
    fn format_amount(&self, amount: Decimal) -> String;
    /// `+Rs 100.00` / `-Rs 40.00`, the sign taken from `kind`.
    fn format_entry(&self, kind: EntryKind, magnitude: Decimal) -> String;
    /// `Rs 50`.
    fn format_whole(&self, amount: Decimal) -> String;
}

/// Formats dates for presentation.
pub trait DateFormatter: Send + Sync {
    fn format_date(&self, date: NaiveDate) -> String;
}

/// Prefixes amounts with a fixed currency symbol.
#[derive(Debug, Clone)]
pub struct SymbolFormatter {
    symbol: String,
}

impl SymbolFormatter {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }
}

impl Default for SymbolFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY_SYMBOL)
    }
}

impl CurrencyFormatter for SymbolFormatter {
    fn format_amount(&self, amount: Decimal) -> String {
        format!("{} {}", self.symbol, format_money(amount))
    }

    fn format_entry(&self, kind: EntryKind, magnitude: Decimal) -> String {
        format!("{}{} {}", kind.sign(), self.symbol, format_money(magnitude.abs()))
    }

    fn format_whole(&self, amount: Decimal) -> String {
        format!("{} {}", self.symbol, format_whole(amount))
    }
}

/// `YYYY-MM-DD`, the stored representation.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsoDateFormatter;

impl DateFormatter for IsoDateFormatter {
    fn format_date(&self, date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }
}
