//! Text rendering of [`ChartData`] as horizontal bars.

use tally_core::CurrencyFormatter;
use tally_domain::{BarChart, ChartData};

use super::table::visible_width;

const BAR_GLYPH: char = '█';
const MIN_BAR_WIDTH: usize = 10;

/// Draws one line per bar, followed by the axis scale.
///
/// `width` is the number of columns available to the longest bar.
pub fn render_chart(chart: &ChartData, currency: &dyn CurrencyFormatter, width: usize) -> Vec<String> {
    match chart {
        ChartData::NoData(reason) => vec![reason.message().to_string()],
        ChartData::Bars(chart) => render_bars(chart, currency, width.max(MIN_BAR_WIDTH)),
    }
}

fn render_bars(chart: &BarChart, currency: &dyn CurrencyFormatter, width: usize) -> Vec<String> {
    let label_width = chart
        .bars
        .iter()
        .map(|bar| visible_width(&bar.category))
        .max()
        .unwrap_or(0);

    let mut lines: Vec<String> = chart
        .bars
        .iter()
        .map(|bar| {
            let filled = bar_length(bar.height_percent, width);
            format!(
                "{:<label_width$} |{}{} {}",
                bar.category,
                BAR_GLYPH.to_string().repeat(filled),
                " ".repeat(width - filled),
                currency.format_amount(bar.amount),
            )
        })
        .collect();

    let scale = chart
        .ticks
        .iter()
        .rev()
        .map(|tick| format!("{}%={}", tick.percent, currency.format_whole(tick.value)))
        .collect::<Vec<_>>()
        .join("  ");
    lines.push(format!("{:<label_width$} +{}", "", "-".repeat(width)));
    lines.push(format!("{:<label_width$}  {scale}", ""));
    lines
}

/// Scales a percentage onto `width` columns; any non-zero bar gets at least one.
fn bar_length(percent: f64, width: usize) -> usize {
    let clamped = percent.clamp(0.0, 100.0);
    let length = (clamped / 100.0 * width as f64).round() as usize;
    if clamped > 0.0 {
        length.clamp(1, width)
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use tally_core::{ChartService, SymbolFormatter};
    use tally_domain::{CategorySummary, NoDataReason};

    use super::*;

    #[test]
    fn no_data_renders_the_reason() {
        let lines = render_chart(
            &ChartData::NoData(NoDataReason::NoExpenses),
            &SymbolFormatter::default(),
            20,
        );
        assert_eq!(lines, vec!["No expense data to display".to_string()]);
    }

    #[test]
    fn largest_bar_fills_the_width() {
        let mut summary = CategorySummary::new();
        summary.accumulate("Food", Decimal::from(50));
        summary.accumulate("Housing", Decimal::from(25));
        let chart = ChartService::from_summary(&summary);

        let lines = render_chart(&chart, &SymbolFormatter::default(), 20);

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Food    |████████████████████ Rs 50.00"));
        assert!(lines[1].starts_with("Housing |██████████          "));
        assert!(lines[3].contains("100%=Rs 50"));
        assert!(lines[3].trim_start().starts_with("0%=Rs 0"));
    }

    #[test]
    fn tiny_bars_remain_visible() {
        assert_eq!(bar_length(0.4, 20), 1);
        assert_eq!(bar_length(0.0, 20), 0);
        assert_eq!(bar_length(150.0, 20), 20);
    }
}
