//! User input checks
//!
//! Failures here are advisories shown next to the input. They disable saving
//! but never stop the rest of the view from rendering.

use crate::core::currency::CurrencyCode;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter a valid number")]
    InvalidNumber,
    #[error("Amount cannot be negative")]
    NegativeAmount,
    #[error("Source and target currencies cannot be the same")]
    SameCurrency,
}

/// Parses raw amount text. Blank input is `Ok(None)`: nothing to convert, nothing to report.
pub fn parse_amount(raw: &str) -> Result<Option<f64>, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let amount: f64 = trimmed.parse().map_err(|_| InputError::InvalidNumber)?;
    if !amount.is_finite() {
        return Err(InputError::InvalidNumber);
    }
    if amount < 0.0 {
        return Err(InputError::NegativeAmount);
    }
    Ok(Some(amount))
}

pub fn check_currencies(from: CurrencyCode, to: CurrencyCode) -> Result<(), InputError> {
    if from == to {
        return Err(InputError::SameCurrency);
    }
    Ok(())
}
