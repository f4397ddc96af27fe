//! Application state and the view derived from it
//!
//! Everything the front end shows is recomputed from [`ConversionInputs`] and
//! the current rate table by [`derive_view`]; nothing is patched incrementally.

use crate::core::convert::{ConversionOutcome, convert_currency};
use crate::core::currency::CurrencyCode;
use crate::core::history::{ConversionRecord, History};
use crate::core::rates::{ExchangeRateTable, RateProvider, STATIC_RATES};
use crate::core::trend::{TrendPoint, historical_trend_with_rng};
use crate::core::validation::{InputError, check_currencies, parse_amount};
use chrono::{DateTime, Utc};
use rand::Rng;
use std::sync::Arc;
use tracing::{debug, info};

/// What the user has entered.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionInputs {
    /// Raw amount text, validated during derivation.
    pub amount: String,
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub live: bool,
}

impl Default for ConversionInputs {
    fn default() -> Self {
        Self {
            amount: "100".to_string(),
            from: CurrencyCode::USD,
            to: CurrencyCode::EUR,
            live: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionView {
    pub amount: Option<f64>,
    pub amount_error: Option<InputError>,
    pub currency_warning: Option<InputError>,
    pub outcome: Option<ConversionOutcome>,
    pub trend: Vec<TrendPoint>,
}

impl ConversionView {
    /// A conversion can be saved once it has a finite, non-zero result and no advisories.
    ///
    /// JSON has no representation for infinities, so an overflowing result
    /// would make the whole stored history unreadable.
    pub fn can_save(&self) -> bool {
        self.outcome.is_some_and(|o| {
            o.result.is_finite() && o.rate.is_finite() && o.result != 0.0 && o.rate != 0.0
        })
            && self.amount_error.is_none()
            && self.currency_warning.is_none()
    }

    pub fn advisories(&self) -> impl Iterator<Item = InputError> + '_ {
        self.amount_error.iter().chain(&self.currency_warning).copied()
    }
}

/// validate → convert → trend
pub fn derive_view(inputs: &ConversionInputs, rates: &ExchangeRateTable) -> ConversionView {
    derive_view_with_rng(inputs, rates, &mut rand::rng())
}

pub fn derive_view_with_rng<R: Rng>(
    inputs: &ConversionInputs,
    rates: &ExchangeRateTable,
    rng: &mut R,
) -> ConversionView {
    let mut view = ConversionView {
        currency_warning: check_currencies(inputs.from, inputs.to).err(),
        ..Default::default()
    };

    match parse_amount(&inputs.amount) {
        Err(e) => {
            debug!(amount = %inputs.amount, error = %e, "Amount rejected");
            view.amount_error = Some(e);
        }
        Ok(None) => {}
        Ok(Some(amount)) => {
            let outcome = convert_currency(amount, inputs.from, inputs.to, rates);
            view.amount = Some(amount);
            view.outcome = Some(outcome);
            view.trend = historical_trend_with_rng(inputs.from, inputs.to, outcome.rate, rng);
        }
    }

    view
}

/// The single owner of rates, history and inputs.
#[derive(Debug, Clone)]
pub struct AppState {
    pub inputs: ConversionInputs,
    pub rates: Arc<ExchangeRateTable>,
    pub last_updated: DateTime<Utc>,
    pub loading: bool,
    pub history: History,
}

impl AppState {
    pub fn new(inputs: ConversionInputs, history: History) -> Self {
        Self {
            inputs,
            rates: Arc::new(STATIC_RATES.clone()),
            last_updated: Utc::now(),
            loading: false,
            history,
        }
    }

    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    /// Replaces the rate table with a freshly resolved one.
    ///
    /// Fetches are not sequenced: when several are in flight, whichever
    /// resolves last wins, even if it was started first.
    pub fn apply_rates(&mut self, table: ExchangeRateTable) {
        debug!(timestamp = %table.timestamp, "Applying rates");
        self.rates = Arc::new(table);
        self.last_updated = Utc::now();
        self.loading = false;
    }

    pub async fn refresh_rates(&mut self, provider: &dyn RateProvider) {
        self.begin_fetch();
        let table = provider.fetch_rates(self.inputs.live).await;
        self.apply_rates(table);
    }

    pub fn swap_currencies(&mut self) {
        std::mem::swap(&mut self.inputs.from, &mut self.inputs.to);
    }

    pub fn view(&self) -> ConversionView {
        derive_view(&self.inputs, &self.rates)
    }

    /// Adds the conversion shown in `view` to the history, if it may be saved.
    pub fn save_conversion(&mut self, view: &ConversionView) -> Option<ConversionRecord> {
        if !view.can_save() {
            debug!("Conversion not saveable");
            return None;
        }
        let (amount, outcome) = (view.amount?, view.outcome?);

        let record = ConversionRecord::new(amount, self.inputs.from, self.inputs.to, outcome);
        self.history = self.history.with_record(record.clone());
        info!(id = %record.id, "Saved conversion");
        Some(record)
    }

    pub fn clear_history(&mut self) {
        self.history = self.history.cleared();
    }
}
