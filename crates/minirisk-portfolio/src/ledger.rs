//! Maturity-bucketed notionals for one currency.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use minirisk_core::Days;

use crate::error::{PortfolioError, PortfolioResult};

/// Aggregated notionals by maturity date, plus the valuation delta.
///
/// Maturities are absolute serial days. The delta is the valuation date's
/// serial day, so `date - delta` is the tenor each cash flow is discounted at.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioLedger {
    notionals: HashMap<Days, i64>,
    delta: Days,
}

impl PortfolioLedger {
    /// Creates an empty ledger with a zero delta.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty ledger valued at `delta`.
    #[must_use]
    pub fn with_delta(delta: Days) -> Self {
        Self {
            notionals: HashMap::new(),
            delta,
        }
    }

    /// Adds `notional` to the bucket for `date`.
    ///
    /// Trades on the same date accumulate.
    ///
    /// # Errors
    ///
    /// [`PortfolioError::NotionalOverflow`] if the aggregated notional would
    /// leave the `i64` range; the bucket is left unchanged.
    pub fn add_trade(&mut self, date: Days, notional: i64) -> PortfolioResult<()> {
        let bucket = self.notionals.entry(date).or_insert(0);
        let current = *bucket;
        *bucket = current
            .checked_add(notional)
            .ok_or(PortfolioError::NotionalOverflow {
                date,
                bucket: current,
                notional,
            })?;
        Ok(())
    }

    /// Sets the valuation delta. Set it once, before the first valuation.
    pub fn set_delta(&mut self, delta: Days) {
        self.delta = delta;
    }

    /// The valuation delta.
    pub fn delta(&self) -> Days {
        self.delta
    }

    /// Tenor in days of a maturity date at the current delta.
    pub fn effective_tenor(&self, date: Days) -> Days {
        date.saturating_sub(self.delta)
    }

    /// Iterates the maturity dates, in no particular order.
    pub fn maturities(&self) -> impl Iterator<Item = Days> + '_ {
        self.notionals.keys().copied()
    }

    /// Iterates (maturity date, aggregated notional) pairs, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = (Days, i64)> + '_ {
        self.notionals.iter().map(|(&d, &n)| (d, n))
    }

    /// Aggregated notional maturing on `date`.
    pub fn notional(&self, date: Days) -> Option<i64> {
        self.notionals.get(&date).copied()
    }

    /// Number of distinct maturity dates.
    pub fn len(&self) -> usize {
        self.notionals.len()
    }

    /// True if no trades have been added.
    pub fn is_empty(&self) -> bool {
        self.notionals.is_empty()
    }

    /// Present value: `Σ notional · discount(date - delta)`.
    ///
    /// The summation order is unspecified; results agree to floating-point
    /// associativity only. The first discount error aborts the valuation.
    pub fn book_value<F, E>(&self, mut discount: F) -> Result<f64, E>
    where
        F: FnMut(Days) -> Result<f64, E>,
    {
        let mut total = 0.0;
        for (&date, &notional) in &self.notionals {
            let tenor = self.effective_tenor(date);
            let df = discount(tenor)?;
            trace!(tenor, notional, df, "discounted notional");
            total += notional as f64 * df;
        }
        debug!(total, maturities = self.notionals.len(), "book value");
        Ok(total)
    }
}
