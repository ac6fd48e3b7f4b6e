//! FX spot rates against a single quote currency.
//!
//! Every spot is quoted as units of the quote currency (USD in the market
//! feed) per one unit of the currency itself (`EURUSD = 1.12`). Crosses
//! divide two such spots.

use serde::{Deserialize, Serialize};

/// Spot rate of one currency against the quote currency.
///
/// Defaults to 1.0, the quote currency's rate against itself.
///
/// # Example
///
/// ```rust
/// use minirisk_curves::FxSpot;
///
/// let mut eur = FxSpot::default();
/// eur.set_spot(1.12);
/// let mut jpy = FxSpot::default();
/// jpy.set_spot(0.0091);
///
/// // EURJPY
/// assert!((eur.cross(&jpy) - 1.12 / 0.0091).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FxSpot {
    spot: f64,
}

impl FxSpot {
    /// Creates a spot with the given rate.
    #[must_use]
    pub fn new(spot: f64) -> Self {
        Self { spot }
    }

    /// Overwrites the spot rate.
    pub fn set_spot(&mut self, spot: f64) {
        self.spot = spot;
    }

    /// The current spot rate.
    #[must_use]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Cross rate with `self` as base and `term` as term currency.
    #[must_use]
    pub fn cross(&self, term: &FxSpot) -> f64 {
        self.spot / term.spot
    }
}

impl Default for FxSpot {
    fn default() -> Self {
        Self { spot: 1.0 }
    }
}
