//! Engine error types.

use minirisk_core::{CoreError, Currency, Days};
use minirisk_ext_file::FeedError;
use minirisk_portfolio::PortfolioError;
use thiserror::Error;

/// Result alias for engine operations.
pub type RiskResult<T> = Result<T, RiskError>;

/// Engine error type.
///
/// Query failures name the missing piece of market data, so callers can
/// tell an absent curve from an absent spot or tenor.
#[derive(Debug, Error)]
pub enum RiskError {
    /// No rate has been loaded for the currency.
    #[error("no interest rate curve for {0}")]
    NoCurve(Currency),

    /// No FX spot has been loaded for the currency.
    #[error("no FX spot for {0}")]
    NoSpot(Currency),

    /// The curve has no point at exactly this tenor.
    #[error("no {currency} rate point at tenor {tenor} days")]
    TenorNotFound {
        /// Curve currency.
        currency: Currency,
        /// Requested tenor.
        tenor: Days,
    },

    /// Tenors are measured forward from the valuation date.
    #[error("negative tenor: {0} days")]
    NegativeTenor(Days),

    /// The currency is outside the configured universe.
    #[error("{0} is not in the currency universe")]
    UnsupportedCurrency(Currency),

    /// A spot must be positive and finite.
    #[error("invalid FX spot for {currency}: {spot}")]
    InvalidSpot {
        /// Quoted currency.
        currency: Currency,
        /// Rejected value.
        spot: f64,
    },

    /// An observation type the engine does not model.
    #[error("unsupported observation: {0}")]
    UnsupportedObservation(String),

    /// A feed could not be opened or read.
    #[error("feed error: {0}")]
    Feed(#[from] FeedError),

    /// A trade could not be added to its ledger.
    #[error("trade rejected: {0}")]
    Portfolio(#[from] PortfolioError),

    /// Invalid or unreadable configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl RiskError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// True if the error ends engine construction.
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::Feed(err) => err.is_fatal(),
            Self::Config(_) => true,
            _ => false,
        }
    }
}

impl From<CoreError> for RiskError {
    fn from(err: CoreError) -> Self {
        Self::Config(err.to_string())
    }
}
