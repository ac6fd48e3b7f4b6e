//! Parsed feed records.

use minirisk_core::{Currency, Days};

/// Currency every `FX.SPOT` line is quoted against.
pub const SPOT_QUOTE_CURRENCY: Currency = Currency::USD;

/// One rate point: `tenor` days at annualised `rate`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateQuote {
    /// Curve currency.
    pub currency: Currency,
    /// Tenor in days.
    pub tenor: Days,
    /// Annualised spot rate; may be negative.
    pub rate: f64,
}

impl RateQuote {
    /// Creates a rate quote.
    pub fn new(currency: Currency, tenor: Days, rate: f64) -> Self {
        Self {
            currency,
            tenor,
            rate,
        }
    }
}

/// Units of [`SPOT_QUOTE_CURRENCY`] per unit of `currency`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotQuote {
    /// Quoted currency.
    pub currency: Currency,
    /// Spot rate, strictly positive.
    pub spot: f64,
}

impl SpotQuote {
    /// Creates a spot quote.
    pub fn new(currency: Currency, spot: f64) -> Self {
        Self { currency, spot }
    }
}

/// A single cash flow of `notional` in `currency` on serial day `maturity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trade {
    /// Trade identifier from the feed.
    pub id: u64,
    /// Signed notional.
    pub notional: i64,
    /// Settlement currency.
    pub currency: Currency,
    /// Maturity as days since 1900-01-01.
    pub maturity: Days,
}

impl Trade {
    /// Creates a trade.
    pub fn new(id: u64, notional: i64, currency: Currency, maturity: Days) -> Self {
        Self {
            id,
            notional,
            currency,
            maturity,
        }
    }
}

/// Anything a feed line can carry.
///
/// New trade types (FX forwards and the like) are added as variants, so
/// consumers must keep a catch-all arm.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Observation {
    /// An interest rate point.
    Rate(RateQuote),
    /// An FX spot.
    Spot(SpotQuote),
    /// A cash-flow trade.
    Trade(Trade),
}

impl Observation {
    /// The currency the observation belongs to.
    pub fn currency(&self) -> Currency {
        match self {
            Self::Rate(q) => q.currency,
            Self::Spot(q) => q.currency,
            Self::Trade(t) => t.currency,
        }
    }
}
