//! # Minirisk Ext File
//!
//! Text feeds for the minirisk engine.
//!
//! Two line-oriented formats are supported:
//! - Market data: `IR.<N><U>.<CCY> <rate>` rate points and
//!   `FX.SPOT.<CCY> <spot>` spots against USD ([`SPOT_QUOTE_CURRENCY`])
//! - Trades: `<id>;<hex notional>;<CCY>;<serial date>;`
//!
//! Lines starting with `#` and blank lines are skipped. Every other line
//! parses to an [`Observation`] or to a [`FeedError`] the caller can log and
//! skip; only failing to open a feed is fatal.
//!
//! ```rust
//! use minirisk_core::{Currency, CurrencyUniverse};
//! use minirisk_ext_file::{parse_market_line, Observation, RateQuote};
//!
//! let universe = CurrencyUniverse::g5();
//! let obs = parse_market_line("IR.2W.EUR 0.025", &universe).unwrap();
//! assert_eq!(
//!     obs,
//!     Some(Observation::Rate(RateQuote::new(Currency::EUR, 14, 0.025)))
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod observation;
mod parse;
mod reader;

pub use error::{FeedError, FeedResult};
pub use observation::{Observation, RateQuote, SpotQuote, Trade, SPOT_QUOTE_CURRENCY};
pub use parse::{parse_market_line, parse_trade_line};
pub use reader::{read_market_feed, read_trade_feed, FeedKind, FeedReader};
