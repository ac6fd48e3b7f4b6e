//! Error types for the trade ledger.

use thiserror::Error;

use minirisk_core::Days;

/// Result type for ledger operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur while building a ledger.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortfolioError {
    /// Adding the notional would overflow the maturity bucket.
    #[error("notional {notional} overflows the bucket for day {date} (holding {bucket})")]
    NotionalOverflow {
        /// Maturity date of the bucket.
        date: Days,
        /// Aggregated notional already in the bucket.
        bucket: i64,
        /// Rejected notional.
        notional: i64,
    },
}
