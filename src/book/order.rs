//! Order identity, side and resting order records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Which side of the book an order rests on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Bid side (resting buy orders), traversed highest price first.
    Buy,
    /// Ask side (resting sell orders), traversed lowest price first.
    Sell,
}

impl Side {
    /// Parse the single-letter side code used by the feed (`B` or `S`,
    /// case-insensitive).
    pub fn from_letter(letter: &str) -> Option<Self> {
        if letter.eq_ignore_ascii_case("B") {
            Some(Side::Buy)
        } else if letter.eq_ignore_ascii_case("S") {
            Some(Side::Sell)
        } else {
            None
        }
    }

    /// The opposite side of the book.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "B"),
            Side::Sell => write!(f, "S"),
        }
    }
}

/// A unique order identifier.
///
/// Equality and hashing ignore ASCII case, so `ord1` and `ORD1` refer to
/// the same resting order. The identifier displays exactly as received.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct OrderId(String);

impl OrderId {
    /// Create an identifier from its textual form.
    pub fn new(id: impl Into<String>) -> Self {
        OrderId(id.into())
    }

    /// The identifier text as received.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for OrderId {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Hash for OrderId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for byte in self.0.as_bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
        // Terminator keeps the hash prefix-free, matching str's impl.
        state.write_u8(0xff);
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        OrderId::new(id)
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        OrderId(id)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An order currently resting in the book.
///
/// Side and price are fixed at creation; only `size` changes over the
/// order's lifetime. An order whose remaining size reaches 0 is removed
/// from the store and from every price level.
#[derive(Debug, Clone, PartialEq)]
pub struct RestingOrder {
    /// Unique identifier (case-insensitive).
    pub id: OrderId,
    /// Side of the book the order rests on.
    pub side: Side,
    /// Limit price, strictly positive.
    pub price: Decimal,
    /// Remaining size.
    pub size: u64,
    /// Timestamp of the add event, for ordering and logging only.
    pub timestamp: u64,
}

impl RestingOrder {
    /// Create a new resting order.
    pub fn new(id: OrderId, side: Side, price: Decimal, size: u64, timestamp: u64) -> Self {
        Self {
            id,
            side,
            price,
            size,
            timestamp,
        }
    }
}
