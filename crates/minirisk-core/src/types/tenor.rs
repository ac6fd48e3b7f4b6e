//! Tenor units and the integer day counts they expand to.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// A signed number of days.
///
/// Curve tenors and effective trade tenors are days from the valuation
/// date and are never negative once accepted; trade maturities are serial
/// days from the 1900 epoch.
pub type Days = i32;

/// Unit suffix of a quoted tenor such as `2W` or `10Y`.
///
/// Months and years follow the 30/360 convention used by the rate feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenorUnit {
    /// `D`: one day.
    Day,
    /// `W`: seven days.
    Week,
    /// `M`: thirty days.
    Month,
    /// `Y`: three hundred and sixty days.
    Year,
}

impl TenorUnit {
    /// Parses the unit letter.
    pub fn from_char(unit: char) -> CoreResult<Self> {
        match unit {
            'D' => Ok(Self::Day),
            'W' => Ok(Self::Week),
            'M' => Ok(Self::Month),
            'Y' => Ok(Self::Year),
            _ => Err(CoreError::UnknownTenorUnit { unit }),
        }
    }

    /// Number of days in one unit.
    #[must_use]
    pub fn days(self) -> Days {
        match self {
            Self::Day => 1,
            Self::Week => 7,
            Self::Month => 30,
            Self::Year => 360,
        }
    }

    /// Expands `count` units to days, or `None` on overflow.
    #[must_use]
    pub fn to_days(self, count: Days) -> Option<Days> {
        count.checked_mul(self.days())
    }

    /// The unit letter.
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Day => 'D',
            Self::Week => 'W',
            Self::Month => 'M',
            Self::Year => 'Y',
        }
    }
}

impl fmt::Display for TenorUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
