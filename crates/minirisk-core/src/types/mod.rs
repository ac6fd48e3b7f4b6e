//! Domain types for rate risk.
//!
//! - [`Currency`]: ISO currency codes
//! - [`CurrencyUniverse`]: the ordered set of currencies an engine accepts
//! - [`TenorUnit`] and [`Days`]: day-count tenors

mod currency;
mod tenor;
mod universe;

pub use currency::Currency;
pub use tenor::{Days, TenorUnit};
pub use universe::CurrencyUniverse;
