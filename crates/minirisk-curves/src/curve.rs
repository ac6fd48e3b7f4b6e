//! Interest rate curve with piecewise-linear spot-rate interpolation.
//!
//! A curve stores annualised spot rates at integer day tenors. Discount
//! factors between pillars use the linearly interpolated spot rate:
//!
//! ```text
//! r(t) = (r_i (T_i+1 - t) + r_i+1 (t - T_i)) / (T_i+1 - T_i)
//! DF(t) = exp(-r(t) t / 360)
//! ```
//!
//! Before the first pillar the curve is pinned to a zero rate at day 0;
//! after the last pillar the last rate is held flat.

use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};

use serde::{Deserialize, Serialize};

use minirisk_core::daycounts::year_fraction;
use minirisk_core::Days;

use crate::bumping::{BumpTarget, CurveBump};
use crate::error::{CurveError, CurveResult};

/// Rate points for one currency, keyed by tenor in days.
///
/// # Example
///
/// ```rust
/// use minirisk_curves::InterestRateCurve;
///
/// let mut curve = InterestRateCurve::new();
/// curve.add_rate(30, 0.02);
/// curve.add_rate(60, 0.025);
///
/// let df = curve.discount_factor(30).unwrap();
/// assert!((df - (-0.02_f64 * 30.0 / 360.0).exp()).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterestRateCurve {
    rates: BTreeMap<Days, f64>,
}

impl InterestRateCurve {
    /// Creates an empty curve.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rate at `tenor`, replacing any existing rate there.
    ///
    /// Negative rates are valid.
    pub fn add_rate(&mut self, tenor: Days, rate: f64) {
        self.rates.insert(tenor, rate);
    }

    /// Returns true if a rate point exists exactly at `tenor`.
    #[must_use]
    pub fn has_tenor(&self, tenor: Days) -> bool {
        self.rates.contains_key(&tenor)
    }

    /// The stored rate at exactly `tenor`.
    #[must_use]
    pub fn rate(&self, tenor: Days) -> Option<f64> {
        self.rates.get(&tenor).copied()
    }

    /// Iterates the stored tenors. Call again to restart.
    pub fn tenors(&self) -> impl Iterator<Item = Days> + '_ {
        self.rates.keys().copied()
    }

    /// Iterates the stored (tenor, rate) points.
    pub fn points(&self) -> impl Iterator<Item = (Days, f64)> + '_ {
        self.rates.iter().map(|(&t, &r)| (t, r))
    }

    /// Number of rate points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// True if the curve has no rate points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Interpolated spot rate at `t` days.
    pub fn spot_rate(&self, t: Days) -> CurveResult<f64> {
        let ((t_left, r_left), (t_right, r_right)) = self.bracket(t)?;
        let t = f64::from(t);
        Ok((r_left * (t_right - t) + r_right * (t - t_left)) / (t_right - t_left))
    }

    /// Discount factor at `t` days: `exp(-r(t) · t / 360)`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::EmptyCurve`] if no rates have been added.
    pub fn discount_factor(&self, t: Days) -> CurveResult<f64> {
        let r_eff = self.spot_rate(t)?;
        Ok((-r_eff * year_fraction(t)).exp())
    }

    /// Finds the interpolation segment `[t_left, t_right]` around `t`.
    fn bracket(&self, t: Days) -> CurveResult<((f64, f64), (f64, f64))> {
        let right = self.rates.range((Excluded(t), Unbounded)).next();
        let left = self.rates.range(..=t).next_back();

        match (left, right) {
            (None, None) => Err(CurveError::EmptyCurve),
            // Pinned to a zero rate at day 0.
            (None, Some((&tr, &rr))) => Ok(((0.0, 0.0), (f64::from(tr), rr))),
            // Flat beyond the last pillar; any t_right > t_left will do.
            (Some((&tl, &rl)), None) => {
                let tl = f64::from(tl);
                Ok(((tl, rl), (tl + 1.0, rl)))
            }
            (Some((&tl, &rl)), Some((&tr, &rr))) => {
                Ok(((f64::from(tl), rl), (f64::from(tr), rr)))
            }
        }
    }

    /// Adds `amount` to the rate at `tenor` until the returned guard drops.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::TenorNotFound`] if there is no point at `tenor`;
    /// no point is ever created by a bump.
    pub fn bump_tenor(&mut self, tenor: Days, amount: f64) -> CurveResult<CurveBump<'_>> {
        if !self.has_tenor(tenor) {
            return Err(CurveError::TenorNotFound { tenor });
        }
        Ok(CurveBump::apply(self, BumpTarget::Tenor(tenor), amount))
    }

    /// Adds `amount` to every rate until the returned guard drops.
    pub fn bump_curve(&mut self, amount: f64) -> CurveBump<'_> {
        CurveBump::apply(self, BumpTarget::Parallel, amount)
    }

    pub(crate) fn rates_mut(&mut self) -> &mut BTreeMap<Days, f64> {
        &mut self.rates
    }
}
