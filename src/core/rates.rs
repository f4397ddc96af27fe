//! Exchange rate tables and the provider abstraction

use crate::core::currency::CurrencyCode;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Rates of every supported currency against a single base currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRateTable {
    pub base: CurrencyCode,
    pub rates: BTreeMap<CurrencyCode, f64>,
    pub timestamp: DateTime<Utc>,
}

impl ExchangeRateTable {
    /// Rate of `code` against the base. NaN for a currency missing from the table.
    pub fn rate(&self, code: CurrencyCode) -> f64 {
        self.rates.get(&code).copied().unwrap_or(f64::NAN)
    }

    /// Base maps to exactly 1.0, every currency present and strictly positive.
    pub fn is_valid(&self) -> bool {
        self.rates.get(&self.base) == Some(&1.0)
            && CurrencyCode::ALL
                .iter()
                .all(|c| self.rates.get(c).is_some_and(|r| r.is_finite() && *r > 0.0))
    }
}

/// Fallback rates relative to USD.
pub static STATIC_RATES: LazyLock<ExchangeRateTable> = LazyLock::new(|| ExchangeRateTable {
    base: CurrencyCode::USD,
    rates: BTreeMap::from([
        (CurrencyCode::USD, 1.0),
        (CurrencyCode::EUR, 0.92),
        (CurrencyCode::GBP, 0.79),
        (CurrencyCode::INR, 83.25),
        (CurrencyCode::JPY, 151.42),
        (CurrencyCode::CAD, 1.36),
        (CurrencyCode::AUD, 1.52),
        (CurrencyCode::CHF, 0.91),
        (CurrencyCode::CNY, 7.23),
        (CurrencyCode::NZD, 1.65),
        (CurrencyCode::SGD, 1.35),
        (CurrencyCode::HKD, 7.82),
        (CurrencyCode::KRW, 1345.50),
    ]),
    timestamp: Utc::now(),
});

/// Rounds to a fixed number of decimal places.
pub fn round_decimals(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Source of exchange rate tables.
///
/// Fetching never fails: a provider resolves with some valid table, even if
/// that is the static fallback.
#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn fetch_rates(&self, live: bool) -> ExchangeRateTable;
}
