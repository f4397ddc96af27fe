use tracing::info;
use zenith::core::{
    ConversionInputs, CurrencyCode, HistoryStore, KeyValueHistoryStore, STATIC_RATES, derive_view,
};
use zenith::store::DiskStore;
use zenith::{AppCommand, convert_currency, fetch_rates, get_historical_trend};

mod test_utils {
    use std::fs;
    use tempfile::{NamedTempFile, TempDir};

    /// Writes a config with no fetch delay and a private data directory.
    pub fn write_config(data_dir: &TempDir, extra: &str) -> NamedTempFile {
        let config_file = NamedTempFile::new().expect("Failed to create temp file");
        let config_content = format!(
            r#"
fetch_delay_ms: 0
data_path: "{}"
{extra}
"#,
            data_dir.path().display()
        );
        fs::write(config_file.path(), config_content).expect("Failed to write config file");
        config_file
    }
}

#[test_log::test(tokio::test)]
async fn test_default_fetch_and_convert_pipeline() {
    let rates = fetch_rates(false).await;
    assert_eq!(rates.rates, STATIC_RATES.rates);

    let outcome = convert_currency(100.0, CurrencyCode::USD, CurrencyCode::EUR, &rates);
    info!(?outcome, "Converted");
    assert_eq!(outcome.rate, 0.92);
    assert_eq!(format!("{:.2}", outcome.result), "92.00");

    let trend = get_historical_trend(CurrencyCode::USD, CurrencyCode::EUR, outcome.rate);
    assert_eq!(trend.len(), 7);
    assert_eq!(trend[0].day, "Mon");
    assert_eq!(trend[6].day, "Sun");
    assert_eq!(trend[6].rate, outcome.rate);
}

#[test_log::test(tokio::test)]
async fn test_live_rates_stay_close_to_static() {
    let rates = fetch_rates(true).await;
    assert!(rates.is_valid());
    for code in CurrencyCode::ALL {
        let base = STATIC_RATES.rate(code);
        assert!((rates.rate(code) - base).abs() <= base * 0.005 + 0.0001);
    }
}

#[test_log::test]
fn test_negative_amount_is_rejected_before_conversion() {
    let inputs = ConversionInputs {
        amount: "-5".to_string(),
        ..Default::default()
    };
    let view = derive_view(&inputs, &STATIC_RATES);
    assert_eq!(
        view.amount_error.map(|e| e.to_string()).as_deref(),
        Some("Amount cannot be negative")
    );
    assert!(view.outcome.is_none());
    assert!(!view.can_save());
}

#[test_log::test(tokio::test)]
async fn test_convert_with_save() {
    let data_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_file = test_utils::write_config(&data_dir, "");

    let result = zenith::run_command(
        AppCommand::Convert {
            amount: "100".to_string(),
            from: Some(CurrencyCode::USD),
            to: Some(CurrencyCode::EUR),
            live: None,
            swap: false,
            save: true,
        },
        Some(config_file.path().to_str().unwrap()),
    )
    .await;
    assert!(result.is_ok(), "Convert failed with: {:?}", result.err());

    let store = KeyValueHistoryStore::new(
        DiskStore::open(&data_dir.path().join("store")).expect("Failed to reopen store"),
    );
    let saved = store.load().await.expect("History was not persisted");
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].amount, 100.0);
    assert_eq!(saved[0].from, CurrencyCode::USD);
    assert_eq!(saved[0].to, CurrencyCode::EUR);
    assert_eq!(saved[0].rate, 0.92);
}

#[test_log::test(tokio::test)]
async fn test_convert_uses_config_currencies() {
    let data_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_file = test_utils::write_config(&data_dir, "from: GBP\nto: JPY\nlive: true");

    let result = zenith::run_command(
        AppCommand::Convert {
            amount: "250".to_string(),
            from: None,
            to: None,
            live: None,
            swap: false,
            save: false,
        },
        Some(config_file.path().to_str().unwrap()),
    )
    .await;
    assert!(result.is_ok(), "Convert failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_static_flag_overrides_live_config() {
    let data_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_file = test_utils::write_config(&data_dir, "live: true");

    let result = zenith::run_command(
        AppCommand::Convert {
            amount: "100".to_string(),
            from: Some(CurrencyCode::USD),
            to: Some(CurrencyCode::EUR),
            live: Some(false),
            swap: false,
            save: true,
        },
        Some(config_file.path().to_str().unwrap()),
    )
    .await;
    assert!(result.is_ok(), "Convert failed with: {:?}", result.err());

    let store = KeyValueHistoryStore::new(
        DiskStore::open(&data_dir.path().join("store")).expect("Failed to reopen store"),
    );
    let saved = store.load().await.expect("History was not persisted");
    // Rate from the static table
    assert_eq!(saved[0].rate, 0.92);
}

#[test_log::test(tokio::test)]
async fn test_bad_volatility_in_config_fails() {
    let data_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_file = test_utils::write_config(&data_dir, "volatility: 2.0");

    let result = zenith::run_command(
        AppCommand::Rates { live: Some(true) },
        Some(config_file.path().to_str().unwrap()),
    )
    .await;
    assert!(result.is_err());
}

#[test_log::test(tokio::test)]
async fn test_invalid_amount_is_not_an_error() {
    let data_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_file = test_utils::write_config(&data_dir, "");

    let result = zenith::run_command(
        AppCommand::Convert {
            amount: "abc".to_string(),
            from: Some(CurrencyCode::USD),
            to: Some(CurrencyCode::USD),
            live: None,
            swap: false,
            save: true,
        },
        Some(config_file.path().to_str().unwrap()),
    )
    .await;
    assert!(result.is_ok(), "Convert failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_rates_and_trend_commands() {
    let data_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_file = test_utils::write_config(&data_dir, "");
    let config_path = config_file.path().to_str().unwrap();

    let result = zenith::run_command(AppCommand::Rates { live: Some(true) }, Some(config_path)).await;
    assert!(result.is_ok(), "Rates failed with: {:?}", result.err());

    let result = zenith::run_command(
        AppCommand::Trend {
            from: Some(CurrencyCode::EUR),
            to: Some(CurrencyCode::INR),
            live: None,
            swap: true,
        },
        Some(config_path),
    )
    .await;
    assert!(result.is_ok(), "Trend failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_history_on_fresh_store() {
    let data_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_file = test_utils::write_config(&data_dir, "");

    let result = zenith::run_command(
        AppCommand::History { clear: false },
        Some(config_file.path().to_str().unwrap()),
    )
    .await;
    assert!(result.is_ok(), "History failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_history_clear() {
    let data_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_file = test_utils::write_config(&data_dir, "");

    let result = zenith::run_command(
        AppCommand::History { clear: true },
        Some(config_file.path().to_str().unwrap()),
    )
    .await;
    assert!(result.is_ok(), "History clear failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_missing_config_file_fails() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let missing = dir.path().join("missing.yaml");

    let result = zenith::run_command(
        AppCommand::Rates { live: None },
        Some(missing.to_str().unwrap()),
    )
    .await;
    assert!(result.is_err());
}
