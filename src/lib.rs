pub mod cli;
pub mod core;
pub mod providers;
pub mod store;

use crate::core::config::AppConfig;
use crate::core::{ConversionInputs, CurrencyCode, KeyValueHistoryStore};
use anyhow::Result;
use std::time::Duration;
use store::DiskStore;
use tracing::{debug, info};

pub use crate::core::convert::convert_currency;
pub use crate::core::rates::STATIC_RATES;
pub use crate::core::trend::get_historical_trend;
pub use crate::providers::fetch_rates;

/// `live: None` defers to the config file; `Some(_)` overrides it.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    Rates {
        live: Option<bool>,
    },
    Convert {
        amount: String,
        from: Option<CurrencyCode>,
        to: Option<CurrencyCode>,
        live: Option<bool>,
        swap: bool,
        save: bool,
    },
    Trend {
        from: Option<CurrencyCode>,
        to: Option<CurrencyCode>,
        live: Option<bool>,
        swap: bool,
    },
    History {
        clear: bool,
    },
}

fn open_history_store(config: &AppConfig) -> Result<KeyValueHistoryStore<DiskStore>> {
    let path = config.default_data_path()?.join("store");
    Ok(KeyValueHistoryStore::new(DiskStore::open(&path)?))
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Zenith starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let provider = providers::SimulatedRateProvider::new(
        Duration::from_millis(config.fetch_delay_ms),
        config.volatility,
    );

    match command {
        AppCommand::Rates { live } => {
            cli::rates::run(live.unwrap_or(config.live), &provider).await
        }
        AppCommand::Convert {
            amount,
            from,
            to,
            live,
            swap,
            save,
        } => {
            let inputs = ConversionInputs {
                amount,
                from: from.unwrap_or(config.from),
                to: to.unwrap_or(config.to),
                live: live.unwrap_or(config.live),
            };
            let store = open_history_store(&config)?;
            cli::convert::run(inputs, &provider, &store, swap, save).await
        }
        AppCommand::Trend {
            from,
            to,
            live,
            swap,
        } => {
            let inputs = ConversionInputs {
                from: from.unwrap_or(config.from),
                to: to.unwrap_or(config.to),
                live: live.unwrap_or(config.live),
                ..Default::default()
            };
            cli::trend::run(inputs, &provider, swap).await
        }
        AppCommand::History { clear } => {
            let store = open_history_store(&config)?;
            cli::history::run(&store, clear).await
        }
    }
}
