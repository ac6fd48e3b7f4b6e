//! Error types for curve operations.

use minirisk_core::Days;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// The curve holds no rate points, so nothing can be interpolated.
    #[error("Curve has no rate points")]
    EmptyCurve,

    /// A single-tenor bump targeted a tenor with no rate point.
    #[error("No rate point at tenor {tenor} days")]
    TenorNotFound {
        /// The requested tenor in days.
        tenor: Days,
    },
}
