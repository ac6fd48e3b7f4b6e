//! Feed errors.

use std::io;
use std::path::PathBuf;

use minirisk_core::CoreError;
use thiserror::Error;

/// Result alias for feed parsing.
pub type FeedResult<T> = Result<T, FeedError>;

/// Why a feed line, or a whole feed, was rejected.
#[derive(Error, Debug)]
pub enum FeedError {
    /// The line matches none of the feed's line shapes.
    #[error("Unrecognized line: {line:?}")]
    UnrecognizedLine {
        /// The offending line, trimmed.
        line: String,
    },

    /// The currency code is not in the engine's universe.
    #[error("Unknown currency: {code}")]
    UnknownCurrency {
        /// The code as it appeared in the feed.
        code: String,
    },

    /// The tenor suffix is not D, W, M or Y.
    #[error("Unknown tenor unit: {unit}")]
    UnknownTenorUnit {
        /// The suffix character.
        unit: char,
    },

    /// A numeric field does not fit its type.
    #[error("Invalid {field}: {value:?}")]
    InvalidNumber {
        /// Which field failed.
        field: &'static str,
        /// The raw text.
        value: String,
    },

    /// The feed could not be opened or read.
    #[error("Cannot read {}: {source}", path.display())]
    Io {
        /// Path (or source name) of the feed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl FeedError {
    pub(crate) fn unrecognized(line: &str) -> Self {
        Self::UnrecognizedLine {
            line: line.to_string(),
        }
    }

    pub(crate) fn invalid_number(field: &'static str, value: &str) -> Self {
        Self::InvalidNumber {
            field,
            value: value.to_string(),
        }
    }

    /// True for errors that end the feed rather than a single line.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

impl From<CoreError> for FeedError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnknownCurrency { code } => Self::UnknownCurrency { code },
            CoreError::UnknownTenorUnit { unit } => Self::UnknownTenorUnit { unit },
            other => Self::UnrecognizedLine {
                line: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_feed_errors() {
        let err: FeedError = CoreError::unknown_currency("CHF").into();
        assert!(matches!(err, FeedError::UnknownCurrency { ref code } if code == "CHF"));

        let err: FeedError = CoreError::UnknownTenorUnit { unit: 'Q' }.into();
        assert!(matches!(err, FeedError::UnknownTenorUnit { unit: 'Q' }));
    }

    #[test]
    fn test_only_io_is_fatal() {
        let io = FeedError::Io {
            path: PathBuf::from("rates.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert!(io.is_fatal());
        assert!(io.to_string().contains("rates.txt"));
        assert!(!FeedError::unrecognized("junk").is_fatal());
    }
}
