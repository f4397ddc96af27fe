//! Rate provider that emulates a remote market-data service.
//!
//! Every fetch waits out an artificial network delay. Static fetches return
//! the fallback table as is; live fetches jitter each rate by up to the
//! configured volatility.

use crate::core::rates::{ExchangeRateTable, RateProvider, STATIC_RATES, round_decimals};
use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use std::time::Duration;
use tracing::{debug, instrument};

pub const DEFAULT_DELAY: Duration = Duration::from_millis(600);

/// Maximum relative change applied to a rate in live mode (0.5%).
pub const DEFAULT_VOLATILITY: f64 = 0.005;

#[derive(Debug, Clone)]
pub struct SimulatedRateProvider {
    delay: Duration,
    volatility: f64,
}

impl SimulatedRateProvider {
    pub fn new(delay: Duration, volatility: f64) -> Self {
        Self {
            delay,
            volatility: volatility.abs(),
        }
    }
}

impl Default for SimulatedRateProvider {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY, DEFAULT_VOLATILITY)
    }
}

/// Multiplies every rate by an independent factor from `[1 - volatility, 1 + volatility]`.
///
/// Rates are rounded to 4 decimals and the base stays at exactly 1.0.
pub fn perturb_rates<R: Rng>(
    table: &ExchangeRateTable,
    volatility: f64,
    rng: &mut R,
) -> ExchangeRateTable {
    let rates = table
        .rates
        .iter()
        .map(|(code, rate)| {
            if *code == table.base {
                return (*code, 1.0);
            }
            let change = 1.0 + (rng.random::<f64>() * volatility * 2.0 - volatility);
            (*code, round_decimals(rate * change, 4))
        })
        .collect();

    ExchangeRateTable {
        base: table.base,
        rates,
        timestamp: Utc::now(),
    }
}

#[async_trait]
impl RateProvider for SimulatedRateProvider {
    #[instrument(name = "SimulatedRateFetch", skip(self))]
    async fn fetch_rates(&self, live: bool) -> ExchangeRateTable {
        debug!(delay_ms = self.delay.as_millis() as u64, "Simulating network delay");
        tokio::time::sleep(self.delay).await;

        if !live {
            debug!("Returning static rates");
            return STATIC_RATES.clone();
        }

        let table = perturb_rates(&STATIC_RATES, self.volatility, &mut rand::rng());
        debug!(timestamp = %table.timestamp, "Generated live rates");
        table
    }
}

/// Fetches with the default delay and volatility.
pub async fn fetch_rates(live: bool) -> ExchangeRateTable {
    SimulatedRateProvider::default().fetch_rates(live).await
}
