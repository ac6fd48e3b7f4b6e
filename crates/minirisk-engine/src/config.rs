//! Engine configuration.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use minirisk_core::daycounts::days_since_epoch;
use minirisk_core::{Currency, CurrencyUniverse, Days};

use crate::error::{RiskError, RiskResult};

/// Serial day of 2017-07-26, the valuation date the sample portfolios are dated against.
pub const DEFAULT_VALUATION_DELTA: Days = 42_940;

/// Rate bump used for central differences.
pub const DEFAULT_BUMP_SIZE: f64 = 1e-4;

/// Engine configuration.
///
/// ```toml
/// currencies = ["EUR", "GBP", "USD", "CAD", "JPY"]
/// reference_currency = "USD"
/// valuation_date = "2017-07-26"
/// bump_size = 0.0001
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Accepted currencies, in reporting order
    #[serde(default)]
    pub currencies: CurrencyUniverse,

    /// Currency that DV01s are reported in
    #[serde(default)]
    pub reference_currency: Currency,

    /// Valuation date as a serial day; wins over `valuation_date`
    #[serde(default)]
    pub valuation_delta: Option<Days>,

    /// Valuation date
    #[serde(default)]
    pub valuation_date: Option<NaiveDate>,

    /// Central-difference rate bump
    #[serde(default = "default_bump_size")]
    pub bump_size: f64,
}

fn default_bump_size() -> f64 {
    DEFAULT_BUMP_SIZE
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            currencies: CurrencyUniverse::default(),
            reference_currency: Currency::USD,
            valuation_delta: None,
            valuation_date: None,
            bump_size: default_bump_size(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> RiskResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| RiskError::config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> RiskResult<Self> {
        toml::from_str(content).map_err(|e| RiskError::config(e.to_string()))
    }

    /// Sets the currency universe.
    #[must_use]
    pub fn with_currencies(mut self, currencies: CurrencyUniverse) -> Self {
        self.currencies = currencies;
        self
    }

    /// Sets the reporting currency.
    #[must_use]
    pub fn with_reference_currency(mut self, ccy: Currency) -> Self {
        self.reference_currency = ccy;
        self
    }

    /// Sets the valuation date as a serial day.
    #[must_use]
    pub fn with_valuation_delta(mut self, delta: Days) -> Self {
        self.valuation_delta = Some(delta);
        self
    }

    /// Sets the valuation date.
    #[must_use]
    pub fn with_valuation_date(mut self, date: NaiveDate) -> Self {
        self.valuation_date = Some(date);
        self
    }

    /// Sets the bump size.
    #[must_use]
    pub fn with_bump_size(mut self, bump_size: f64) -> Self {
        self.bump_size = bump_size;
        self
    }

    /// Resolved valuation delta: explicit delta, else the date's serial day,
    /// else [`DEFAULT_VALUATION_DELTA`].
    pub fn effective_delta(&self) -> RiskResult<Days> {
        match (self.valuation_delta, self.valuation_date) {
            (Some(delta), _) => Ok(delta),
            (None, Some(date)) => Ok(days_since_epoch(date)?),
            (None, None) => Ok(DEFAULT_VALUATION_DELTA),
        }
    }

    /// Checks the configuration is usable.
    pub fn validate(&self) -> RiskResult<()> {
        if self.currencies.is_empty() {
            return Err(RiskError::config("currency universe is empty"));
        }
        if !self.currencies.contains(self.reference_currency) {
            return Err(RiskError::config(format!(
                "reference currency {} is not in the universe",
                self.reference_currency
            )));
        }
        if !(self.bump_size.is_finite() && self.bump_size > 0.0) {
            return Err(RiskError::config(format!(
                "bump size must be positive, got {}",
                self.bump_size
            )));
        }
        self.effective_delta().map(|_| ())
    }
}
