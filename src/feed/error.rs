//! Feed parse error types.

use thiserror::Error;

/// Errors raised while parsing a feed line.
#[derive(Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum FeedError {
    /// The line contained no fields.
    #[error("empty input line")]
    EmptyLine,

    /// The line was too short to carry a record type.
    #[error("record too short: {0:?}")]
    Truncated(String),

    /// The record type field was neither `A` nor `R`.
    #[error("unknown record type: {0:?}")]
    UnknownRecordType(String),

    /// The line carried the wrong number of space-delimited fields for
    /// its record type.
    #[error("{kind} record expects {expected} fields, got {found}")]
    FieldCount {
        /// Record type name (`add` or `reduce`).
        kind: &'static str,
        /// Number of fields the record type requires.
        expected: usize,
        /// Number of fields found on the line.
        found: usize,
    },

    /// A field failed to parse as its expected type.
    #[error("invalid {field}: {value:?}")]
    InvalidField {
        /// Name of the offending field.
        field: &'static str,
        /// The field text as received.
        value: String,
    },

    /// A numeric field that must be strictly positive was not.
    #[error("{field} must be positive: {value:?}")]
    NonPositiveField {
        /// Name of the offending field.
        field: &'static str,
        /// The field text as received.
        value: String,
    },
}
