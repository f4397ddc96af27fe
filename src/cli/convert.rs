use super::{trend, ui};
use crate::core::{AppState, ConversionInputs, ConversionView, History, HistoryStore, RateProvider};
use anyhow::Result;
use chrono::{DateTime, Utc};
use tracing::info;

impl ConversionView {
    pub fn display(&self, inputs: &ConversionInputs, last_updated: DateTime<Utc>) -> String {
        let (from, to) = (inputs.from, inputs.to);
        let mut output = format!(
            "{} {}\n\n",
            ui::style_text("Zenith Converter", ui::StyleType::Title),
            ui::mode_label(inputs.live)
        );

        for advisory in self.advisories() {
            output.push_str(&ui::style_text(&advisory.to_string(), ui::StyleType::Error));
            output.push('\n');
        }

        let Some(outcome) = self.outcome else {
            output.push_str(&format!(
                "{} {}  →  {} ---\n",
                from.flag(),
                from,
                to.flag()
            ));
            return output;
        };

        let amount = self.amount.unwrap_or_default();
        output.push_str(&format!(
            "{} {}  →  {} {}\n",
            from.flag(),
            ui::style_text(&ui::format_money(amount, from), ui::StyleType::TotalLabel),
            to.flag(),
            ui::style_text(&ui::format_money(outcome.result, to), ui::StyleType::TotalValue),
        ));
        output.push_str(&format!("1 {from} = {:.4} {to}\n", outcome.rate));
        output.push_str(&ui::style_text(
            &format!(
                "Last updated: {}",
                last_updated.format("%Y-%m-%d %H:%M:%S UTC")
            ),
            ui::StyleType::Subtle,
        ));

        if !self.trend.is_empty() {
            output.push_str("\n\n");
            output.push_str(&trend::display_trend(&self.trend, from, to));
        }
        output
    }
}

pub async fn run(
    inputs: ConversionInputs,
    provider: &dyn RateProvider,
    store: &dyn HistoryStore,
    swap: bool,
    save: bool,
) -> Result<()> {
    let history = History::from_records(store.load().await.unwrap_or_default());
    let mut state = AppState::new(inputs, history);
    if swap {
        state.swap_currencies();
    }
    super::refresh_with_spinner(&mut state, provider).await;

    let view = state.view();
    println!("{}", view.display(&state.inputs, state.last_updated));

    if !save {
        return Ok(());
    }

    match state.save_conversion(&view) {
        Some(record) => {
            store.save(state.history.records()).await?;
            info!(id = %record.id, count = state.history.len(), "History updated");
            println!(
                "\n{}",
                ui::style_text("Saved to history.", ui::StyleType::TotalValue)
            );
        }
        None => {
            println!(
                "\n{}",
                ui::style_text(
                    "Nothing saved: fix the input above first.",
                    ui::StyleType::Error
                )
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CurrencyCode, KeyValueHistoryStore, STATIC_RATES, derive_view};
    use crate::providers::SimulatedRateProvider;
    use crate::store::MemoryStore;
    use std::time::Duration;

    fn inputs(amount: &str, from: CurrencyCode, to: CurrencyCode) -> ConversionInputs {
        ConversionInputs {
            amount: amount.to_string(),
            from,
            to,
            live: false,
        }
    }

    fn instant_provider() -> SimulatedRateProvider {
        SimulatedRateProvider::new(Duration::ZERO, 0.005)
    }

    #[test]
    fn test_display_conversion() {
        let inputs = inputs("100", CurrencyCode::USD, CurrencyCode::EUR);
        let view = derive_view(&inputs, &STATIC_RATES);
        let output = view.display(&inputs, Utc::now());
        assert!(output.contains("$100.00"));
        assert!(output.contains("€92.00"));
        assert!(output.contains("1 USD = 0.9200 EUR"));
        assert!(output.contains("7 Day Trend (USD to EUR)"));
    }

    #[test]
    fn test_display_shows_advisory() {
        let inputs = inputs("-5", CurrencyCode::USD, CurrencyCode::EUR);
        let view = derive_view(&inputs, &STATIC_RATES);
        let output = view.display(&inputs, Utc::now());
        assert!(output.contains("Amount cannot be negative"));
        assert!(output.contains("---"));
    }

    #[tokio::test]
    async fn test_run_with_save_persists_record() {
        let store = KeyValueHistoryStore::new(MemoryStore::new());
        run(
            inputs("100", CurrencyCode::USD, CurrencyCode::EUR),
            &instant_provider(),
            &store,
            false,
            true,
        )
        .await
        .unwrap();

        let saved = store.load().await.unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].amount, 100.0);
        assert_eq!(saved[0].rate, 0.92);
    }

    #[tokio::test]
    async fn test_run_prepends_to_existing_history() {
        let store = KeyValueHistoryStore::new(MemoryStore::new());
        for amount in ["10", "20"] {
            run(
                inputs(amount, CurrencyCode::GBP, CurrencyCode::INR),
                &instant_provider(),
                &store,
                false,
                true,
            )
            .await
            .unwrap();
        }

        let saved = store.load().await.unwrap();
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0].amount, 20.0);
        assert_eq!(saved[1].amount, 10.0);
    }

    #[tokio::test]
    async fn test_overflowing_amount_leaves_history_readable() {
        let store = KeyValueHistoryStore::new(MemoryStore::new());
        for (amount, to) in [("100", CurrencyCode::EUR), ("1e308", CurrencyCode::KRW)] {
            run(
                inputs(amount, CurrencyCode::USD, to),
                &instant_provider(),
                &store,
                false,
                true,
            )
            .await
            .unwrap();
        }

        let saved = store.load().await.unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].amount, 100.0);
        assert_eq!(saved[0].to, CurrencyCode::EUR);
    }

    #[tokio::test]
    async fn test_run_with_swap_saves_reversed_pair() {
        let store = KeyValueHistoryStore::new(MemoryStore::new());
        run(
            inputs("92", CurrencyCode::USD, CurrencyCode::EUR),
            &instant_provider(),
            &store,
            true,
            true,
        )
        .await
        .unwrap();

        let saved = store.load().await.unwrap();
        assert_eq!(saved[0].from, CurrencyCode::EUR);
        assert_eq!(saved[0].to, CurrencyCode::USD);
        assert!((saved[0].result - 100.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_run_does_not_save_same_currency() {
        let store = KeyValueHistoryStore::new(MemoryStore::new());
        run(
            inputs("100", CurrencyCode::USD, CurrencyCode::USD),
            &instant_provider(),
            &store,
            false,
            true,
        )
        .await
        .unwrap();

        assert!(store.load().await.is_none());
    }
}
