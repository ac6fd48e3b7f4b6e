//! # Minirisk Core
//!
//! Core types shared by every minirisk crate.
//!
//! - **Types**: [`Currency`], [`CurrencyUniverse`], [`TenorUnit`]
//! - **Day Counts**: the 360-day year used by curves, and the serial-day
//!   epoch used by trade maturities
//! - **Errors**: [`CoreError`]
//!
//! ## Example
//!
//! ```rust
//! use minirisk_core::prelude::*;
//!
//! let universe = CurrencyUniverse::g5();
//! let eur = universe.resolve("EUR").unwrap();
//! assert_eq!(eur, Currency::EUR);
//! assert!(universe.resolve("CHF").is_none());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]

pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{days_since_epoch, year_fraction, DAYS_PER_YEAR};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{Currency, CurrencyUniverse, Days, TenorUnit};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{Currency, CurrencyUniverse, Days, TenorUnit};
