//! # Minirisk Engine
//!
//! Discount factors, FX crosses and DV01 for a multi-currency cash-flow
//! portfolio.
//!
//! The [`RiskEngine`] reads a rate/FX feed and a trade feed, builds one
//! [`InterestRateCurve`](minirisk_curves::InterestRateCurve), one
//! [`FxSpot`](minirisk_curves::FxSpot) and one
//! [`PortfolioLedger`](minirisk_portfolio::PortfolioLedger) per currency,
//! and answers queries against them. DV01 is a central difference over a
//! scoped curve bump, converted to the reference currency.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::io::Cursor;
//! use minirisk_core::Currency;
//! use minirisk_engine::{EngineConfig, RiskEngine};
//!
//! let rates = "# rates\nIR.1Y.USD 0.02\n";
//! let trades = "# trades\n1;000f4240;USD;43300;\n";
//! let mut engine =
//!     RiskEngine::from_readers(EngineConfig::default(), Cursor::new(rates), Cursor::new(trades))
//!         .unwrap();
//!
//! let df = engine.discount_factor(Currency::USD, 360).unwrap();
//! assert!((df - (-0.02_f64).exp()).abs() < 1e-12);
//! assert!(engine.dv01(Currency::USD).unwrap() > 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod engine;
pub mod error;
pub mod summary;

pub use config::{EngineConfig, DEFAULT_BUMP_SIZE, DEFAULT_VALUATION_DELTA};
pub use engine::RiskEngine;
pub use error::{RiskError, RiskResult};
pub use summary::{FeedCounts, IngestSummary};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::EngineConfig;
    pub use crate::engine::RiskEngine;
    pub use crate::error::{RiskError, RiskResult};
    pub use crate::summary::IngestSummary;
    pub use minirisk_core::{Currency, CurrencyUniverse, Days};
}
