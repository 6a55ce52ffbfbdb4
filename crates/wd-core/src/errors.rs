//! Error types for workdays-rs.
//!
//! Every public operation either returns a fully valid result or fails fast
//! with one of the variants below.  Caller mistakes (reversed ranges, missing
//! dates, runaway end years) are never retried internally.

use thiserror::Error;

/// The top-level error type used throughout workdays-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The end of a range precedes its start.
    #[error("invalid range: end date {end} is before start date {start}")]
    InvalidRange {
        /// Start of the requested range.
        start: String,
        /// End of the requested range.
        end: String,
    },

    /// A required date was not supplied.
    #[error("invalid date: {0} date must have a value")]
    InvalidDate(&'static str),

    /// The end of a range lies too far in the future.
    #[error("range too far: end year {year} exceeds the limit of {limit}")]
    RangeTooFar {
        /// Year of the requested end date.
        year: i32,
        /// Latest accepted year (current year + 10).
        limit: i32,
    },

    /// A calendar date could not be constructed or parsed.
    #[error("date error: {0}")]
    Date(String),
}

/// Shorthand `Result` type used throughout workdays-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;
