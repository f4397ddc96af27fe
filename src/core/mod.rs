//! Core business logic abstractions

pub mod config;
pub mod convert;
pub mod currency;
pub mod history;
pub mod log;
pub mod rates;
pub mod state;
pub mod storage;
pub mod trend;
pub mod validation;

// Re-export main types for cleaner imports
pub use convert::{ConversionOutcome, convert_currency};
pub use currency::CurrencyCode;
pub use history::{ConversionRecord, History, HistoryStore, KeyValueHistoryStore};
pub use rates::{ExchangeRateTable, RateProvider, STATIC_RATES};
pub use state::{AppState, ConversionInputs, ConversionView, derive_view};
pub use storage::KeyValueStore;
pub use trend::{TrendPoint, get_historical_trend};
pub use validation::InputError;
