//! Error types for core minirisk types.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building core types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The code is not a supported ISO currency, or is outside the active universe.
    #[error("Unknown currency: {code}")]
    UnknownCurrency {
        /// The offending code as it appeared in the input.
        code: String,
    },

    /// The tenor unit character is not one of D, W, M, Y.
    #[error("Unknown tenor unit: {unit}")]
    UnknownTenorUnit {
        /// The offending unit character.
        unit: char,
    },

    /// A currency universe must contain at least one currency and no duplicates.
    #[error("Invalid currency universe: {reason}")]
    InvalidUniverse {
        /// Description of the problem.
        reason: String,
    },

    /// A calendar date cannot be represented as a serial day count.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },
}

impl CoreError {
    /// Creates an unknown currency error.
    #[must_use]
    pub fn unknown_currency(code: impl Into<String>) -> Self {
        Self::UnknownCurrency { code: code.into() }
    }

    /// Creates an invalid universe error.
    #[must_use]
    pub fn invalid_universe(reason: impl Into<String>) -> Self {
        Self::InvalidUniverse {
            reason: reason.into(),
        }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::unknown_currency("XYZ");
        assert_eq!(err.to_string(), "Unknown currency: XYZ");
    }

    #[test]
    fn test_tenor_unit_display() {
        let err = CoreError::UnknownTenorUnit { unit: 'Q' };
        assert!(err.to_string().contains('Q'));
    }
}
