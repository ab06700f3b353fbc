//! Builds the category-expense bar chart description.

use rust_decimal::{prelude::ToPrimitive, Decimal, RoundingStrategy};
use tally_domain::{
    AxisTick, Bar, BarChart, CategorySummary, CategoryTotal, ChartData, Ledger, NoDataReason,
};

use crate::SummaryService;

/// Number of intervals on the value axis; there is one more tick than this.
pub const TICK_INTERVALS: u32 = 5;
/// Reveal offset added per bar, in seconds.
pub const REVEAL_STEP_SECONDS: f64 = 0.1;

pub struct ChartService;

impl ChartService {
    pub fn build(ledger: &Ledger) -> ChartData {
        if !ledger.has_transactions() {
            return ChartData::NoData(NoDataReason::NoTransactions);
        }
        Self::from_summary(&SummaryService::category_summary(ledger))
    }

    /// Bars sorted by amount, largest first; equal amounts keep summary order.
    pub fn from_summary(summary: &CategorySummary) -> ChartData {
        let Some(max_amount) = summary.max_amount().filter(|max| *max > Decimal::ZERO) else {
            return ChartData::NoData(NoDataReason::NoExpenses);
        };

        let mut sorted: Vec<&CategoryTotal> = summary.iter().collect();
        sorted.sort_by(|a, b| b.amount.cmp(&a.amount));

        let ticks = (0..=TICK_INTERVALS)
            .rev()
            .map(|step| AxisTick {
                percent: (step * 100 / TICK_INTERVALS) as u8,
                value: (max_amount * (Decimal::from(step) / Decimal::from(TICK_INTERVALS)))
                    .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
            })
            .collect();

        let bars = sorted
            .into_iter()
            .enumerate()
            .map(|(index, entry)| Bar {
                category: entry.category.clone(),
                amount: entry.amount,
                height_percent: (entry.amount / max_amount * Decimal::ONE_HUNDRED)
                    .to_f64()
                    .unwrap_or(0.0),
                reveal_delay: index as f64 * REVEAL_STEP_SECONDS,
            })
            .collect();

        ChartData::Bars(BarChart {
            max_amount,
            ticks,
            bars,
        })
    }
}
