use super::ui;
use crate::core::{History, HistoryStore};
use anyhow::Result;
use comfy_table::Cell;

impl History {
    pub fn display_as_table(&self) -> String {
        let mut output = format!("{}\n\n", ui::style_text("History", ui::StyleType::Title));

        if self.is_empty() {
            output.push_str("No recent conversions\n");
            output.push_str(&ui::style_text(
                "Calculations you save will appear here.",
                ui::StyleType::Subtle,
            ));
            return output;
        }

        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Date"),
            ui::header_cell("Amount"),
            ui::header_cell("Converted"),
            ui::header_cell("Rate"),
        ]);

        for record in self.records() {
            table.add_row(vec![
                Cell::new(record.date.format("%Y-%m-%d %H:%M").to_string()),
                ui::number_cell(ui::format_money(record.amount, record.from)),
                ui::number_cell(ui::format_money(record.result, record.to)),
                ui::number_cell(format!("{:.4}", record.rate)),
            ]);
        }

        output.push_str(&table.to_string());
        output
    }
}

pub async fn run(store: &dyn HistoryStore, clear: bool) -> Result<()> {
    let history = History::from_records(store.load().await.unwrap_or_default());

    if clear {
        store.clear().await?;
        tracing::info!(removed = history.len(), "Cleared history");
        println!("Cleared {} saved conversion(s).", history.len());
        return Ok(());
    }

    println!("{}", history.display_as_table());
    Ok(())
}
