//! # Minirisk Curves
//!
//! Per-currency market models for the minirisk engine:
//!
//! - [`InterestRateCurve`]: tenor → rate points with linear spot-rate
//!   interpolation and `exp(-r·t/360)` discount factors
//! - [`CurveBump`]: a scoped, self-restoring perturbation of a curve
//! - [`FxSpot`]: one spot rate against the quote currency
//!
//! ## Quick Start
//!
//! ```rust
//! use minirisk_curves::InterestRateCurve;
//!
//! let mut curve = InterestRateCurve::new();
//! curve.add_rate(30, 0.02);
//! curve.add_rate(60, 0.025);
//!
//! let before = curve.discount_factor(45).unwrap();
//! {
//!     let bumped = curve.bump_curve(0.0001);
//!     assert!(bumped.discount_factor(45).unwrap() < before);
//! } // restored here
//! assert_eq!(curve.discount_factor(45).unwrap(), before);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod bumping;
pub mod curve;
pub mod error;
pub mod fx;

pub use bumping::{BumpTarget, CurveBump};
pub use curve::InterestRateCurve;
pub use error::{CurveError, CurveResult};
pub use fx::FxSpot;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bumping::{BumpTarget, CurveBump};
    pub use crate::curve::InterestRateCurve;
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::fx::FxSpot;
}
