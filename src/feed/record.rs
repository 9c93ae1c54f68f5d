//! Validated feed records.

use crate::book::{OrderId, Side};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single validated market data event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FeedRecord {
    /// A new limit order starts resting in the book.
    Add {
        /// Event timestamp (milliseconds since midnight in the original
        /// feed; opaque to the book).
        timestamp: u64,
        /// Unique order identifier.
        id: OrderId,
        /// Side of the book.
        side: Side,
        /// Limit price, strictly positive.
        price: Decimal,
        /// Order size, strictly positive.
        size: u64,
    },
    /// An existing order is reduced to a new remaining size, or cancelled
    /// outright when the size is 0.
    Reduce {
        /// Event timestamp.
        timestamp: u64,
        /// Identifier of the resting order.
        id: OrderId,
        /// New remaining size; 0 removes the order.
        size: u64,
    },
}

impl FeedRecord {
    /// The event timestamp, regardless of record type.
    pub fn timestamp(&self) -> u64 {
        match self {
            FeedRecord::Add { timestamp, .. } | FeedRecord::Reduce { timestamp, .. } => *timestamp,
        }
    }

    /// The order identifier, regardless of record type.
    pub fn id(&self) -> &OrderId {
        match self {
            FeedRecord::Add { id, .. } | FeedRecord::Reduce { id, .. } => id,
        }
    }
}
