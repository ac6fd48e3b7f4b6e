//! Currency type with ISO 4217 codes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// ISO 4217 currency codes known to minirisk.
///
/// Variants are declared G5 first (EUR, GBP, USD, CAD, JPY), then the rest
/// of the G10, then emerging markets. The derived ordering follows that
/// declaration order, so `EUR < GBP < USD < CAD < JPY`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Currency {
    /// Euro
    EUR,
    /// British Pound Sterling
    GBP,
    /// United States Dollar
    #[default]
    USD,
    /// Canadian Dollar
    CAD,
    /// Japanese Yen
    JPY,
    /// Swiss Franc
    CHF,
    /// Australian Dollar
    AUD,
    /// New Zealand Dollar
    NZD,
    /// Swedish Krona
    SEK,
    /// Norwegian Krone
    NOK,
    /// Chinese Yuan Renminbi
    CNY,
    /// Indian Rupee
    INR,
    /// Brazilian Real
    BRL,
    /// Mexican Peso
    MXN,
    /// South African Rand
    ZAR,
}

impl Currency {
    /// Every known currency, in declaration order.
    pub const ALL: [Currency; 15] = [
        Currency::EUR,
        Currency::GBP,
        Currency::USD,
        Currency::CAD,
        Currency::JPY,
        Currency::CHF,
        Currency::AUD,
        Currency::NZD,
        Currency::SEK,
        Currency::NOK,
        Currency::CNY,
        Currency::INR,
        Currency::BRL,
        Currency::MXN,
        Currency::ZAR,
    ];

    /// Returns the ISO 4217 3-letter code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::USD => "USD",
            Currency::CAD => "CAD",
            Currency::JPY => "JPY",
            Currency::CHF => "CHF",
            Currency::AUD => "AUD",
            Currency::NZD => "NZD",
            Currency::SEK => "SEK",
            Currency::NOK => "NOK",
            Currency::CNY => "CNY",
            Currency::INR => "INR",
            Currency::BRL => "BRL",
            Currency::MXN => "MXN",
            Currency::ZAR => "ZAR",
        }
    }

    /// Returns the full currency name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Currency::EUR => "Euro",
            Currency::GBP => "British Pound Sterling",
            Currency::USD => "United States Dollar",
            Currency::CAD => "Canadian Dollar",
            Currency::JPY => "Japanese Yen",
            Currency::CHF => "Swiss Franc",
            Currency::AUD => "Australian Dollar",
            Currency::NZD => "New Zealand Dollar",
            Currency::SEK => "Swedish Krona",
            Currency::NOK => "Norwegian Krone",
            Currency::CNY => "Chinese Yuan Renminbi",
            Currency::INR => "Indian Rupee",
            Currency::BRL => "Brazilian Real",
            Currency::MXN => "Mexican Peso",
            Currency::ZAR => "South African Rand",
        }
    }

    /// Returns true for the G5 currencies.
    #[must_use]
    pub fn is_g5(&self) -> bool {
        matches!(
            self,
            Currency::EUR | Currency::GBP | Currency::USD | Currency::CAD | Currency::JPY
        )
    }

    /// Returns true if this is a major reserve currency (G10).
    #[must_use]
    pub fn is_g10(&self) -> bool {
        !self.is_emerging()
    }

    /// Returns true if this is an emerging market currency.
    #[must_use]
    pub fn is_emerging(&self) -> bool {
        matches!(
            self,
            Currency::CNY | Currency::INR | Currency::BRL | Currency::MXN | Currency::ZAR
        )
    }

    /// Parses a currency from its exact upper-case ISO code.
    ///
    /// Feed codes are matched case-sensitively: `"eur"` is not a currency.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ccy| ccy.code() == code)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| CoreError::unknown_currency(s))
    }
}
