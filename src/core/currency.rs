//! Supported currencies

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum CurrencyCode {
    USD,
    EUR,
    GBP,
    INR,
    JPY,
    CAD,
    AUD,
    CHF,
    CNY,
    NZD,
    SGD,
    HKD,
    KRW,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown currency code: {0}")]
pub struct UnknownCurrency(pub String);

impl CurrencyCode {
    /// Every supported currency, in display order.
    pub const ALL: [CurrencyCode; 13] = [
        CurrencyCode::USD,
        CurrencyCode::EUR,
        CurrencyCode::GBP,
        CurrencyCode::INR,
        CurrencyCode::JPY,
        CurrencyCode::CAD,
        CurrencyCode::AUD,
        CurrencyCode::CHF,
        CurrencyCode::CNY,
        CurrencyCode::NZD,
        CurrencyCode::SGD,
        CurrencyCode::HKD,
        CurrencyCode::KRW,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            CurrencyCode::USD => "USD",
            CurrencyCode::EUR => "EUR",
            CurrencyCode::GBP => "GBP",
            CurrencyCode::INR => "INR",
            CurrencyCode::JPY => "JPY",
            CurrencyCode::CAD => "CAD",
            CurrencyCode::AUD => "AUD",
            CurrencyCode::CHF => "CHF",
            CurrencyCode::CNY => "CNY",
            CurrencyCode::NZD => "NZD",
            CurrencyCode::SGD => "SGD",
            CurrencyCode::HKD => "HKD",
            CurrencyCode::KRW => "KRW",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CurrencyCode::USD => "US Dollar",
            CurrencyCode::EUR => "Euro",
            CurrencyCode::GBP => "British Pound",
            CurrencyCode::INR => "Indian Rupee",
            CurrencyCode::JPY => "Japanese Yen",
            CurrencyCode::CAD => "Canadian Dollar",
            CurrencyCode::AUD => "Australian Dollar",
            CurrencyCode::CHF => "Swiss Franc",
            CurrencyCode::CNY => "Chinese Yuan",
            CurrencyCode::NZD => "New Zealand Dollar",
            CurrencyCode::SGD => "Singapore Dollar",
            CurrencyCode::HKD => "Hong Kong Dollar",
            CurrencyCode::KRW => "South Korean Won",
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            CurrencyCode::USD => "🇺🇸",
            CurrencyCode::EUR => "🇪🇺",
            CurrencyCode::GBP => "🇬🇧",
            CurrencyCode::INR => "🇮🇳",
            CurrencyCode::JPY => "🇯🇵",
            CurrencyCode::CAD => "🇨🇦",
            CurrencyCode::AUD => "🇦🇺",
            CurrencyCode::CHF => "🇨🇭",
            CurrencyCode::CNY => "🇨🇳",
            CurrencyCode::NZD => "🇳🇿",
            CurrencyCode::SGD => "🇸🇬",
            CurrencyCode::HKD => "🇭🇰",
            CurrencyCode::KRW => "🇰🇷",
        }
    }

    /// Symbol used when formatting money amounts.
    pub fn symbol(&self) -> &'static str {
        match self {
            CurrencyCode::USD => "$",
            CurrencyCode::EUR => "€",
            CurrencyCode::GBP => "£",
            CurrencyCode::INR => "₹",
            CurrencyCode::JPY => "¥",
            CurrencyCode::CAD => "CA$",
            CurrencyCode::AUD => "A$",
            CurrencyCode::CHF => "CHF ",
            CurrencyCode::CNY => "CN¥",
            CurrencyCode::NZD => "NZ$",
            CurrencyCode::SGD => "SGD ",
            CurrencyCode::HKD => "HK$",
            CurrencyCode::KRW => "₩",
        }
    }
}

impl Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for CurrencyCode {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        CurrencyCode::ALL
            .into_iter()
            .find(|c| c.code() == wanted)
            .ok_or_else(|| UnknownCurrency(s.to_string()))
    }
}
