//! The ordered set of currencies a risk engine accepts.

use serde::{Deserialize, Serialize};

use super::Currency;
use crate::error::{CoreError, CoreResult};

/// An ordered, duplicate-free list of supported currencies.
///
/// Feeds are resolved against the universe rather than against every ISO
/// code, so a G5 engine reports `CHF` lines as unknown. Order is the order
/// in which currencies were supplied and drives reporting order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Currency>", into = "Vec<Currency>")]
pub struct CurrencyUniverse {
    members: Vec<Currency>,
}

impl CurrencyUniverse {
    /// Creates a universe from an ordered list of currencies.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidUniverse`] if the list is empty or repeats a currency.
    pub fn new(members: Vec<Currency>) -> CoreResult<Self> {
        if members.is_empty() {
            return Err(CoreError::invalid_universe("no currencies"));
        }
        for (i, ccy) in members.iter().enumerate() {
            if members[..i].contains(ccy) {
                return Err(CoreError::invalid_universe(format!("{ccy} listed twice")));
            }
        }
        Ok(Self { members })
    }

    /// Creates a universe from ISO codes.
    pub fn from_codes<S: AsRef<str>>(codes: &[S]) -> CoreResult<Self> {
        let members = codes
            .iter()
            .map(|code| code.as_ref().parse())
            .collect::<CoreResult<Vec<Currency>>>()?;
        Self::new(members)
    }

    /// EUR, GBP, USD, CAD, JPY.
    #[must_use]
    pub fn g5() -> Self {
        Self {
            members: Currency::ALL.into_iter().filter(Currency::is_g5).collect(),
        }
    }

    /// The G5 followed by CHF, AUD, NZD, SEK, NOK.
    #[must_use]
    pub fn g10() -> Self {
        Self {
            members: Currency::ALL.into_iter().filter(Currency::is_g10).collect(),
        }
    }

    /// The G5 followed by the emerging-market currencies.
    #[must_use]
    pub fn emerging() -> Self {
        Self {
            members: Currency::ALL
                .into_iter()
                .filter(|c| c.is_g5() || c.is_emerging())
                .collect(),
        }
    }

    /// Resolves a code to a member currency.
    #[must_use]
    pub fn resolve(&self, code: &str) -> Option<Currency> {
        Currency::from_code(code).filter(|ccy| self.contains(*ccy))
    }

    /// Resolves a code, reporting unknown codes as errors.
    pub fn parse(&self, code: &str) -> CoreResult<Currency> {
        self.resolve(code)
            .ok_or_else(|| CoreError::unknown_currency(code))
    }

    /// Returns true if the currency belongs to this universe.
    #[must_use]
    pub fn contains(&self, ccy: Currency) -> bool {
        self.members.contains(&ccy)
    }

    /// Position of the currency in the universe.
    #[must_use]
    pub fn ordinal(&self, ccy: Currency) -> Option<usize> {
        self.members.iter().position(|&c| c == ccy)
    }

    /// Iterates members in universe order.
    pub fn iter(&self) -> impl Iterator<Item = Currency> + '_ {
        self.members.iter().copied()
    }

    /// Number of member currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false for a validated universe.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Default for CurrencyUniverse {
    fn default() -> Self {
        Self::g5()
    }
}

impl TryFrom<Vec<Currency>> for CurrencyUniverse {
    type Error = CoreError;

    fn try_from(members: Vec<Currency>) -> Result<Self, Self::Error> {
        Self::new(members)
    }
}

impl From<CurrencyUniverse> for Vec<Currency> {
    fn from(universe: CurrencyUniverse) -> Self {
        universe.members
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_g5_order() {
        let codes: Vec<_> = CurrencyUniverse::g5().iter().map(|c| c.code()).collect();
        assert_eq!(codes, ["EUR", "GBP", "USD", "CAD", "JPY"]);
    }

    #[test]
    fn test_g10_extends_g5() {
        let g10 = CurrencyUniverse::g10();
        assert_eq!(g10.len(), 10);
        assert_eq!(g10.ordinal(Currency::JPY), Some(4));
        assert!(g10.contains(Currency::NOK));
        assert!(!g10.contains(Currency::ZAR));
    }

    #[test]
    fn test_emerging_extends_g5() {
        let em = CurrencyUniverse::emerging();
        assert!(em.contains(Currency::USD));
        assert!(em.contains(Currency::MXN));
        assert!(!em.contains(Currency::CHF));
    }

    #[test]
    fn test_resolve_outside_universe() {
        let g5 = CurrencyUniverse::g5();
        assert_eq!(g5.resolve("JPY"), Some(Currency::JPY));
        assert_eq!(g5.resolve("CHF"), None);
        assert!(matches!(
            g5.parse("CHF"),
            Err(CoreError::UnknownCurrency { .. })
        ));
    }

    #[test]
    fn test_custom_order_is_kept() {
        let u = CurrencyUniverse::from_codes(&["JPY", "USD"]).unwrap();
        assert_eq!(u.ordinal(Currency::JPY), Some(0));
        assert_eq!(u.ordinal(Currency::USD), Some(1));
        assert_eq!(u.ordinal(Currency::EUR), None);
    }

    #[test]
    fn test_rejects_empty_and_duplicates() {
        assert!(CurrencyUniverse::new(vec![]).is_err());
        assert!(CurrencyUniverse::new(vec![Currency::USD, Currency::USD]).is_err());
        assert!(CurrencyUniverse::from_codes(&["USD", "XXX"]).is_err());
    }

    #[test]
    fn test_serde_as_code_list() {
        let json = serde_json::to_string(&CurrencyUniverse::g5()).unwrap();
        assert_eq!(json, r#"["EUR","GBP","USD","CAD","JPY"]"#);
        let back: CurrencyUniverse = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CurrencyUniverse::g5());
        assert!(serde_json::from_str::<CurrencyUniverse>("[]").is_err());
    }
}
