use super::ui;
use crate::core::{AppState, ConversionInputs, ExchangeRateTable, History, RateProvider};
use anyhow::Result;
use comfy_table::Cell;

impl ExchangeRateTable {
    pub fn display_as_table(&self, live: bool) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Currency"),
            ui::header_cell("Name"),
            ui::header_cell(&format!("Rate (per 1 {})", self.base)),
        ]);

        for (code, rate) in &self.rates {
            table.add_row(vec![
                Cell::new(format!("{} {}", code.flag(), code)),
                Cell::new(code.name()),
                ui::number_cell(format!("{rate:.4}")),
            ]);
        }

        let mut output = format!(
            "Exchange Rates {}\n\n",
            ui::mode_label(live)
        );
        output.push_str(&table.to_string());
        output.push_str(&format!(
            "\n\n{}",
            ui::style_text(
                &format!("Rates as of {}", self.timestamp.format("%Y-%m-%d %H:%M:%S UTC")),
                ui::StyleType::Subtle
            )
        ));
        output
    }
}

pub async fn run(live: bool, provider: &dyn RateProvider) -> Result<()> {
    let inputs = ConversionInputs {
        live,
        ..Default::default()
    };
    let mut state = AppState::new(inputs, History::default());
    super::refresh_with_spinner(&mut state, provider).await;

    println!("{}", state.rates.display_as_table(live));
    Ok(())
}
