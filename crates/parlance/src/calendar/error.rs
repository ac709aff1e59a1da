//! Error type for the calendar ordinal engine.

use thiserror::Error;

use super::resolution::{ContainingPeriod, Resolution, TimeUnit};

/// An error from ordinal or range computation.
///
/// These are the hard failures of the calendar engine; "no result" never
/// occurs here, since every well-formed request has exactly one answer or
/// one of these errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OrdinalError {
    /// Ordinal indices are 1-based; only `-1` is accepted as a sentinel.
    #[error("ordinal must be positive or -1, got {n}")]
    InvalidOrdinal { n: i64 },

    /// `-1` asks for the last period of a regime that has no end.
    #[error("no last period exists for unbounded resolution {resolution:?}")]
    UnboundedLast { resolution: Resolution },

    /// The unit cannot subdivide the requested containing period.
    #[error("{unit:?} does not subdivide {period:?}")]
    InvalidResolution {
        unit: TimeUnit,
        period: ContainingPeriod,
    },

    /// Date arithmetic left the representable calendar range.
    #[error("date arithmetic overflowed the supported calendar range")]
    Overflow,
}
