//! Currency conversion against a rate table

use crate::core::currency::CurrencyCode;
use crate::core::rates::ExchangeRateTable;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionOutcome {
    pub result: f64,
    /// Units of the target currency bought by one unit of the source.
    pub rate: f64,
}

/// Converts `amount` of `from` into `to` by going through the table's base currency.
///
/// The caller validates `amount` (finite, non-negative). A currency missing from
/// the table yields NaN in both fields.
pub fn convert_currency(
    amount: f64,
    from: CurrencyCode,
    to: CurrencyCode,
    table: &ExchangeRateTable,
) -> ConversionOutcome {
    if from == to {
        return ConversionOutcome {
            result: amount,
            rate: 1.0,
        };
    }

    let from_rate = table.rate(from);
    let to_rate = table.rate(to);

    let amount_in_base = amount / from_rate;
    let result = amount_in_base * to_rate;

    // Computed on its own so a zero amount still has a displayable rate
    let rate = to_rate / from_rate;

    ConversionOutcome { result, rate }
}
