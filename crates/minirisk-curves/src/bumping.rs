//! Scoped curve bumping for sensitivity analysis.
//!
//! A bump adds a fixed amount to one rate point or to every rate point of
//! an [`InterestRateCurve`] and hands back a [`CurveBump`] guard. The guard
//! holds the curve's exclusive borrow, reads through to the bumped curve,
//! and restores the pre-bump rates when it drops, on every exit path.
//!
//! # Example: central difference
//!
//! ```rust
//! use minirisk_curves::InterestRateCurve;
//!
//! let mut curve = InterestRateCurve::new();
//! curve.add_rate(360, 0.03);
//!
//! let mut value = |bump: f64| {
//!     let bumped = curve.bump_tenor(360, bump).unwrap();
//!     bumped.discount_factor(360).unwrap()
//! };
//! let up = value(1e-4);
//! let down = value(-1e-4);
//! assert!(up < down);
//! ```
//!
//! Nested bumps are taken through the outer guard, so the borrow checker
//! forces the inner one to be released first.

use std::ops::Deref;

use tracing::trace;

use minirisk_core::Days;

use crate::curve::InterestRateCurve;
use crate::error::CurveResult;

/// Which rate points a bump moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpTarget {
    /// A single existing tenor.
    Tenor(Days),
    /// Every tenor on the curve.
    Parallel,
}

/// A live bump on a curve. Dropping it restores the curve.
///
/// The guard captures the bumped tenors and their pre-bump rates by value
/// and writes them back on drop, so the restored curve is bit-for-bit the
/// curve that was bumped.
#[derive(Debug)]
#[must_use = "the bump is undone as soon as the guard is dropped"]
pub struct CurveBump<'a> {
    curve: &'a mut InterestRateCurve,
    target: BumpTarget,
    amount: f64,
    saved: Vec<(Days, f64)>,
}

impl<'a> CurveBump<'a> {
    pub(crate) fn apply(
        curve: &'a mut InterestRateCurve,
        target: BumpTarget,
        amount: f64,
    ) -> Self {
        let rates = curve.rates_mut();
        let saved: Vec<(Days, f64)> = match target {
            BumpTarget::Tenor(tenor) => rates
                .get(&tenor)
                .map(|&rate| vec![(tenor, rate)])
                .unwrap_or_default(),
            BumpTarget::Parallel => rates.iter().map(|(&t, &r)| (t, r)).collect(),
        };
        for (tenor, _) in &saved {
            if let Some(rate) = rates.get_mut(tenor) {
                *rate += amount;
            }
        }
        trace!(bump = ?target, amount, points = saved.len(), "bumped curve");

        Self {
            curve,
            target,
            amount,
            saved,
        }
    }

    /// The tenor(s) this bump moved.
    pub fn target(&self) -> BumpTarget {
        self.target
    }

    /// The amount added to each bumped rate.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Bumps one tenor of the already-bumped curve.
    ///
    /// The returned guard borrows this one, so it is released first.
    pub fn bump_tenor(&mut self, tenor: Days, amount: f64) -> CurveResult<CurveBump<'_>> {
        self.curve.bump_tenor(tenor, amount)
    }

    /// Bumps every tenor of the already-bumped curve.
    pub fn bump_curve(&mut self, amount: f64) -> CurveBump<'_> {
        self.curve.bump_curve(amount)
    }
}

impl Deref for CurveBump<'_> {
    type Target = InterestRateCurve;

    fn deref(&self) -> &Self::Target {
        self.curve
    }
}

impl Drop for CurveBump<'_> {
    fn drop(&mut self) {
        let rates = self.curve.rates_mut();
        for (tenor, rate) in self.saved.drain(..) {
            rates.insert(tenor, rate);
        }
        trace!(bump = ?self.target, amount = self.amount, "restored curve");
    }
}
