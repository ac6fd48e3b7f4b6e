//! Line parsers for the market-data and trade feeds.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use minirisk_core::{CurrencyUniverse, Days, TenorUnit};

use crate::error::{FeedError, FeedResult};
use crate::observation::{Observation, RateQuote, SpotQuote, Trade};

// e.g. IR.2W.EUR 0.025
static RATE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^IR\.(\d+)([A-Za-z])\.([A-Z]{3})[ \t]+([-+]?(?:\d+\.?\d*|\.\d+))$")
        .expect("rate line pattern")
});

// e.g. FX.SPOT.EUR 1.1213
static SPOT_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^FX\.SPOT\.([A-Z]{3})[ \t]+(\+?(?:\d+\.?\d*|\.\d+))$").expect("spot line pattern")
});

// e.g. 1;000f4240;EUR;43300;
static TRADE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+);([0-9A-Fa-f]+);([A-Z]{3});(\d+);$").expect("trade line pattern")
});

/// True for lines every feed ignores: blank lines and `#` headers.
pub(crate) fn is_skippable(line: &str) -> bool {
    line.is_empty() || line.starts_with('#')
}

/// Parses one market-data line.
///
/// Returns `Ok(None)` for blank and `#` lines.
///
/// # Errors
///
/// [`FeedError::UnrecognizedLine`] if the line is neither a rate nor a spot,
/// [`FeedError::UnknownCurrency`] for codes outside `universe`,
/// [`FeedError::UnknownTenorUnit`] and [`FeedError::InvalidNumber`] for bad fields.
pub fn parse_market_line(line: &str, universe: &CurrencyUniverse) -> FeedResult<Option<Observation>> {
    let line = line.trim();
    if is_skippable(line) {
        return Ok(None);
    }
    if let Some(caps) = RATE_LINE.captures(line) {
        return parse_rate(&caps, universe).map(Some);
    }
    if let Some(caps) = SPOT_LINE.captures(line) {
        return parse_spot(&caps, universe).map(Some);
    }
    Err(FeedError::unrecognized(line))
}

/// Parses one trade line.
///
/// Returns `Ok(None)` for blank and `#` lines. The notional is hexadecimal.
pub fn parse_trade_line(line: &str, universe: &CurrencyUniverse) -> FeedResult<Option<Observation>> {
    let line = line.trim();
    if is_skippable(line) {
        return Ok(None);
    }
    let caps = TRADE_LINE
        .captures(line)
        .ok_or_else(|| FeedError::unrecognized(line))?;

    let id = caps[1]
        .parse::<u64>()
        .map_err(|_| FeedError::invalid_number("trade id", &caps[1]))?;
    let notional = i64::from_str_radix(&caps[2], 16)
        .map_err(|_| FeedError::invalid_number("notional", &caps[2]))?;
    let currency = universe.parse(&caps[3])?;
    let maturity = caps[4]
        .parse::<Days>()
        .map_err(|_| FeedError::invalid_number("maturity", &caps[4]))?;

    Ok(Some(Observation::Trade(Trade::new(
        id, notional, currency, maturity,
    ))))
}

fn parse_rate(caps: &Captures<'_>, universe: &CurrencyUniverse) -> FeedResult<Observation> {
    let count = caps[1]
        .parse::<Days>()
        .map_err(|_| FeedError::invalid_number("tenor", &caps[1]))?;
    let unit = caps[2]
        .chars()
        .next()
        .ok_or_else(|| FeedError::invalid_number("tenor unit", &caps[2]))?;
    let unit = TenorUnit::from_char(unit)?;
    let tenor = unit
        .to_days(count)
        .ok_or_else(|| FeedError::invalid_number("tenor", &caps[1]))?;
    let currency = universe.parse(&caps[3])?;
    let rate = parse_finite("rate", &caps[4])?;

    Ok(Observation::Rate(RateQuote::new(currency, tenor, rate)))
}

fn parse_spot(caps: &Captures<'_>, universe: &CurrencyUniverse) -> FeedResult<Observation> {
    let currency = universe.parse(&caps[1])?;
    let spot = parse_finite("spot", &caps[2])?;
    if spot <= 0.0 {
        return Err(FeedError::invalid_number("spot", &caps[2]));
    }
    Ok(Observation::Spot(SpotQuote::new(currency, spot)))
}

fn parse_finite(field: &'static str, raw: &str) -> FeedResult<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| FeedError::invalid_number(field, raw))
}
