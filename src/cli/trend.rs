use super::ui;
use crate::core::trend::TrendSummary;
use crate::core::{AppState, ConversionInputs, CurrencyCode, History, RateProvider, TrendPoint};
use anyhow::Result;
use comfy_table::Cell;

const BAR_WIDTH: usize = 24;

fn bar(rate: f64, low: f64, high: f64) -> String {
    let span = high - low;
    let filled = if span > 0.0 {
        1 + ((rate - low) / span * (BAR_WIDTH - 1) as f64).round() as usize
    } else {
        BAR_WIDTH / 2
    };
    "█".repeat(filled.min(BAR_WIDTH))
}

/// Renders the 7-day trend as a table with one bar per day.
pub fn display_trend(points: &[TrendPoint], from: CurrencyCode, to: CurrencyCode) -> String {
    let mut output = format!(
        "{}\n",
        ui::style_text(&format!("7 Day Trend ({from} to {to})"), ui::StyleType::Title)
    );

    let Some(summary) = TrendSummary::from_points(points) else {
        output.push_str(&ui::style_text("No trend data", ui::StyleType::Subtle));
        return output;
    };

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Day"),
        ui::header_cell("Rate"),
        ui::header_cell(""),
    ]);
    for point in points {
        table.add_row(vec![
            Cell::new(&point.day),
            ui::number_cell(format!("{:.4}", point.rate)),
            Cell::new(bar(point.rate, summary.low, summary.high)),
        ]);
    }
    output.push_str(&table.to_string());

    let mut footer = ui::new_styled_table();
    footer.set_header(vec![
        ui::header_cell("Low"),
        ui::header_cell("High"),
        ui::header_cell("Change"),
    ]);
    footer.add_row(vec![
        ui::number_cell(format!("{:.4}", summary.low)),
        ui::number_cell(format!("{:.4}", summary.high)),
        ui::change_cell(summary.change, summary.change_pct),
    ]);
    output.push('\n');
    output.push_str(&footer.to_string());

    output
}

pub async fn run(inputs: ConversionInputs, provider: &dyn RateProvider, swap: bool) -> Result<()> {
    let mut state = AppState::new(inputs, History::default());
    if swap {
        state.swap_currencies();
    }
    super::refresh_with_spinner(&mut state, provider).await;

    let view = state.view();
    for advisory in view.advisories() {
        println!("{}", ui::style_text(&advisory.to_string(), ui::StyleType::Error));
    }
    if view.trend.is_empty() {
        return Ok(());
    }
    println!(
        "{}",
        display_trend(&view.trend, state.inputs.from, state.inputs.to)
    );
    Ok(())
}
