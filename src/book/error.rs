//! Book error types.

use super::order::OrderId;
use thiserror::Error;

/// Errors that can occur while mutating the book.
///
/// All variants are deterministic and surfaced synchronously to the
/// caller; a failed operation leaves the book exactly as it was.
#[derive(Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum BookError {
    /// An add referenced an identifier already resting in the book.
    #[error("duplicate order id: {0}")]
    DuplicateOrder(OrderId),

    /// A reduce/cancel referenced an identifier not currently resting.
    #[error("unknown order id: {0}")]
    UnknownOrder(OrderId),

    /// The book was constructed with a non-positive target size.
    #[error("invalid target size: {0} (must be positive)")]
    InvalidTargetSize(u64),
}
