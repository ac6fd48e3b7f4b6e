//! Day count conventions.
//!
//! Curves quote annualised rates on a 360-day year. Trade maturities are
//! serial day numbers counted from 1 January 1900; subtracting the
//! valuation date's serial number gives a tenor in days.

use chrono::{Duration, NaiveDate};

use crate::error::{CoreError, CoreResult};
use crate::types::Days;

/// Year basis for converting day tenors to year fractions.
pub const DAYS_PER_YEAR: f64 = 360.0;

/// Year fraction of a day tenor on a 360-day year.
#[must_use]
pub fn year_fraction(days: Days) -> f64 {
    f64::from(days) / DAYS_PER_YEAR
}

/// Day zero of the serial day count.
#[must_use]
pub fn serial_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Serial day number of `date`: days elapsed since 1900-01-01.
pub fn days_since_epoch(date: NaiveDate) -> CoreResult<Days> {
    let days = (date - serial_epoch()).num_days();
    Days::try_from(days)
        .map_err(|_| CoreError::invalid_date(format!("{date} is out of serial day range")))
}

/// Calendar date of a serial day number.
#[must_use]
pub fn date_from_serial(days: Days) -> Option<NaiveDate> {
    serial_epoch().checked_add_signed(Duration::days(i64::from(days)))
}
