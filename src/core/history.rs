//! Saved conversions and their persistence

use crate::core::convert::ConversionOutcome;
use crate::core::currency::CurrencyCode;
use crate::core::storage::KeyValueStore;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

/// Storage key the history list is kept under.
pub const HISTORY_KEY: &str = "conversion_history";

pub const MAX_HISTORY: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub id: String,
    pub amount: f64,
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub result: f64,
    pub rate: f64,
    pub date: DateTime<Utc>,
}

impl ConversionRecord {
    pub fn new(
        amount: f64,
        from: CurrencyCode,
        to: CurrencyCode,
        outcome: ConversionOutcome,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            amount,
            from,
            to,
            result: outcome.result,
            rate: outcome.rate,
            date: Utc::now(),
        }
    }
}

/// Most-recent-first list of at most [`MAX_HISTORY`] records.
///
/// Updates return a new list instead of editing in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    records: Vec<ConversionRecord>,
}

impl History {
    pub fn from_records(mut records: Vec<ConversionRecord>) -> Self {
        records.truncate(MAX_HISTORY);
        Self { records }
    }

    pub fn records(&self) -> &[ConversionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn with_record(&self, record: ConversionRecord) -> Self {
        let records = std::iter::once(record)
            .chain(self.records.iter().cloned())
            .take(MAX_HISTORY)
            .collect();
        Self { records }
    }

    pub fn cleared(&self) -> Self {
        Self::default()
    }
}

/// Where the history list lives between runs.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// `None` when nothing usable is stored, including unreadable data.
    async fn load(&self) -> Option<Vec<ConversionRecord>>;
    async fn save(&self, records: &[ConversionRecord]) -> Result<()>;
    /// Drops the stored list entirely.
    async fn clear(&self) -> Result<()>;
}

/// Keeps the history as a JSON array under [`HISTORY_KEY`].
pub struct KeyValueHistoryStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> KeyValueHistoryStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: KeyValueStore> HistoryStore for KeyValueHistoryStore<S> {
    async fn load(&self) -> Option<Vec<ConversionRecord>> {
        let raw = match self.store.get(HISTORY_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No saved history");
                return None;
            }
            Err(e) => {
                warn!(error = %e, "Failed to read history");
                return None;
            }
        };

        match serde_json::from_str::<Vec<ConversionRecord>>(&raw) {
            Ok(records) => {
                debug!(count = records.len(), "Loaded history");
                Some(records)
            }
            Err(e) => {
                warn!(error = %e, "Failed to parse history, starting empty");
                None
            }
        }
    }

    async fn save(&self, records: &[ConversionRecord]) -> Result<()> {
        let raw = serde_json::to_string(records).context("Failed to serialize history")?;
        self.store
            .set(HISTORY_KEY, raw)
            .await
            .context("Failed to write history")?;
        debug!(count = records.len(), "Saved history");
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.store
            .remove(HISTORY_KEY)
            .await
            .context("Failed to clear history")?;
        debug!("Cleared history");
        Ok(())
    }
}
