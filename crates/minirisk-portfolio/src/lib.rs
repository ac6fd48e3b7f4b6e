//! # Minirisk Portfolio
//!
//! Trade ledger for one currency.
//!
//! A [`PortfolioLedger`] buckets notionals by absolute maturity date (serial
//! days since 1900-01-01) and values them with any discount function of the
//! effective tenor `date - delta`.
//!
//! ## Design Philosophy
//!
//! Pure data plus one fold: the ledger never sees a curve. Callers pass the
//! discount function, so sensitivity code can revalue under a bumped curve
//! without the ledger knowing.
//!
//! ## Quick Start
//!
//! ```rust
//! use minirisk_portfolio::PortfolioLedger;
//!
//! let mut ledger = PortfolioLedger::with_delta(42_940);
//! ledger.add_trade(43_300, 1_000_000).unwrap();
//! ledger.add_trade(43_300, 500_000).unwrap();
//!
//! // Flat 2% continuously compounded on a 360-day year
//! let pv = ledger
//!     .book_value(|t| Ok::<_, std::convert::Infallible>((-0.02 * f64::from(t) / 360.0).exp()))
//!     .unwrap();
//! assert!(pv < 1_500_000.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]

mod error;
mod ledger;

pub use error::{PortfolioError, PortfolioResult};
pub use ledger::PortfolioLedger;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{PortfolioError, PortfolioResult};
    pub use crate::ledger::PortfolioLedger;
}
