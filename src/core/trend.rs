//! Synthetic 7-day rate trend
//!
//! There is no historical data source; the trend is a random walk backwards
//! from the current rate, regenerated on every call.

use crate::core::currency::CurrencyCode;
use crate::core::rates::round_decimals;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::debug;

pub const TREND_DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Maximum daily step as a fraction of the current rate (±1%).
const DAILY_NOISE: f64 = 0.02;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub day: String,
    pub rate: f64,
}

/// Builds 7 points, oldest first, whose last rate is exactly `current_rate`.
pub fn get_historical_trend(
    from: CurrencyCode,
    to: CurrencyCode,
    current_rate: f64,
) -> Vec<TrendPoint> {
    historical_trend_with_rng(from, to, current_rate, &mut rand::rng())
}

pub fn historical_trend_with_rng<R: Rng>(
    from: CurrencyCode,
    to: CurrencyCode,
    current_rate: f64,
    rng: &mut R,
) -> Vec<TrendPoint> {
    debug!(%from, %to, current_rate, "Generating trend");

    let mut points = VecDeque::with_capacity(TREND_DAYS.len());
    let mut previous_rate = current_rate;

    for i in 0..TREND_DAYS.len() {
        let noise = (rng.random::<f64>() - 0.5) * (current_rate * DAILY_NOISE);
        let daily_rate = previous_rate + noise;
        previous_rate = daily_rate;

        points.push_front(TrendPoint {
            day: TREND_DAYS[TREND_DAYS.len() - 1 - i].to_string(),
            rate: round_decimals(daily_rate, 4),
        });
    }

    let mut points = Vec::from(points);
    if let Some(today) = points.last_mut() {
        today.rate = current_rate;
    }
    points
}

/// Range and net movement of a trend, oldest to newest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendSummary {
    pub low: f64,
    pub high: f64,
    pub change: f64,
    pub change_pct: f64,
}

impl TrendSummary {
    pub fn from_points(points: &[TrendPoint]) -> Option<Self> {
        let first = points.first()?.rate;
        let last = points.last()?.rate;
        let (low, high) = points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.rate), hi.max(p.rate))
            });
        let change = last - first;
        let change_pct = if first != 0.0 {
            change / first * 100.0
        } else {
            0.0
        };
        Some(Self {
            low,
            high,
            change,
            change_pct,
        })
    }
}
